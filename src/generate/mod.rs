//! Contact batch generation
//!
//! This module holds the row generator: given a [`GenerateSpec`], it produces
//! an ordered batch of `valid + invalid` contact records with 1-based
//! continuous numbering. The first `valid` rows carry well-formed
//! identifiers; the remainder carry deliberately malformed ones for
//! negative-path import testing.
//!
//! # Numbering
//!
//! Row numbers run across both groups: with `valid = 2` and `invalid = 1`
//! the batch is rows 1 and 2 (valid) followed by row 3 (invalid). The row
//! number is appended to both the identifier prefix and the first name.
//!
//! # Randomness
//!
//! Phone generation and random tag assignment draw from a caller-supplied
//! [`rand::Rng`], so tests can seed a deterministic generator while the CLI
//! passes `thread_rng`.

pub mod tags;

use clap::ValueEnum;
use rand::Rng;

use crate::Contact;

/// Kind of identifier generated for each contact
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactType {
    /// Email contacts (`prefix<N>@domain`)
    Email,
    /// SMS contacts (random phone-like identifiers)
    Sms,
}

/// Policy for assigning tags to valid rows
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMode {
    /// Every valid row receives the full deduplicated tag set
    All,
    /// Each valid row has a 50% chance of receiving a thinned tag subset
    Random,
}

/// Everything the row generator needs to build a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSpec {
    pub contact_type: ContactType,
    pub valid_count: u32,
    pub invalid_count: u32,
    pub first_name: String,
    pub last_name: String,
    pub email_prefix: String,
    pub email_domain: String,
    pub tag_expression: String,
    pub tag_mode: TagMode,
}

impl GenerateSpec {
    /// Total number of rows this spec will produce
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.valid_count + self.invalid_count
    }
}

/// Build the full batch of contact rows for a spec
///
/// Produces exactly `valid_count + invalid_count` rows, valid rows first,
/// numbered 1-based across the whole batch.
pub fn build_rows<R: Rng>(spec: &GenerateSpec, rng: &mut R) -> Vec<Contact> {
    let mut rows = Vec::with_capacity(spec.total() as usize);

    for i in 1..=spec.valid_count {
        rows.push(valid_row(spec, i, rng));
    }
    for i in spec.valid_count + 1..=spec.total() {
        rows.push(invalid_row(spec, i, rng));
    }

    rows
}

fn valid_row<R: Rng>(spec: &GenerateSpec, number: u32, rng: &mut R) -> Contact {
    let identifier = match spec.contact_type {
        ContactType::Email => {
            format!("{}{}@{}", spec.email_prefix, number, spec.email_domain)
        }
        ContactType::Sms => valid_phone(rng),
    };

    let tag = if spec.tag_expression.is_empty() {
        String::new()
    } else {
        match spec.tag_mode {
            TagMode::All => tags::canonical(&spec.tag_expression),
            // Per-row gate first, then per-segment thinning
            TagMode::Random if rng.gen_bool(0.5) => tags::thin(&spec.tag_expression, rng),
            TagMode::Random => String::new(),
        }
    };

    Contact::new(
        identifier,
        format!("{}{}", spec.first_name, number),
        spec.last_name.clone(),
        tag,
    )
}

fn invalid_row<R: Rng>(spec: &GenerateSpec, number: u32, rng: &mut R) -> Contact {
    let identifier = match spec.contact_type {
        // Email without a domain suffix
        ContactType::Email => format!("{}{}", spec.email_prefix, number),
        ContactType::Sms => invalid_phone(rng),
    };

    // Invalid rows carry the raw expression, no canonicalization
    Contact::new(
        identifier,
        format!("{}{}", spec.first_name, number),
        spec.last_name.clone(),
        spec.tag_expression.clone(),
    )
}

/// A well-formed phone-like identifier: `+` followed by 11 digits
fn valid_phone<R: Rng>(rng: &mut R) -> String {
    let mut phone = String::with_capacity(12);
    phone.push('+');
    for _ in 0..11 {
        phone.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    phone
}

/// A too-short phone-like identifier (3 digits, invalid length)
fn invalid_phone<R: Rng>(rng: &mut R) -> String {
    let mut phone = String::with_capacity(3);
    for _ in 0..3 {
        phone.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    phone
}
