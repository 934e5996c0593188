//! Contactr - a synthetic contact record generator
//!
//! This library builds batches of well-formed and deliberately malformed
//! contact records (email or SMS) and exports them as CSV, for exercising
//! contact-import pipelines.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cli;
pub mod config;
pub mod export;
pub mod generate;
pub mod output;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ContactrError {
    /// Export error
    #[error("Export error: {0}")]
    ExportError(#[from] export::ExportError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A single generated contact record
///
/// `identifier` is either an email address or a phone-like string depending
/// on the contact type the batch was generated with; the CSV header names
/// the column accordingly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub identifier: String,
    pub firstname: String,
    pub lastname: String,
    pub tag: String,
}

impl Contact {
    /// Create a new Contact
    #[must_use]
    pub const fn new(identifier: String, firstname: String, lastname: String, tag: String) -> Self {
        Self { identifier, firstname, lastname, tag }
    }
}
