//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for contactr using the `clap` crate.
//! It provides command parsing, argument validation, and helper methods for
//! extracting command-specific data.
//!
//! # Commands
//!
//! - **generate**: Build a batch of contact records and export them as CSV
//! - **config**: Manage configuration settings (set, get)
//!
//! # Design Features
//!
//! - Counts are parsed as `u32`, so non-numeric or negative input is
//!   rejected before generation runs
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `g` for `generate`)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::generate::{ContactType, TagMode};

/// Parameters for the generate command
#[derive(Debug, Clone)]
pub struct GenerateParams {
    /// Kind of identifier to generate
    pub contact_type: ContactType,
    /// Number of well-formed rows
    pub valid: u32,
    /// Number of deliberately malformed rows
    pub invalid: u32,
    /// First name template base (row number is appended)
    pub first_name: String,
    /// Last name, copied to every row unchanged
    pub last_name: String,
    /// Email local-part prefix (row number is appended)
    pub email_prefix: Option<String>,
    /// Semicolon-delimited tag expression
    pub tags: String,
    /// Tag assignment policy for valid rows
    pub tag_mode: TagMode,
    /// Email domain override
    pub domain: Option<String>,
    /// Output path override
    pub output: Option<PathBuf>,
    /// Preview rows without writing a file
    pub dry_run: bool,
    /// Skip the overwrite confirmation
    pub yes: bool,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "contactr")]
#[command(about = "A synthetic contact record generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate contact records and export them as CSV
    #[command(visible_alias = "g")]
    Generate {
        /// Kind of identifier to generate (email or sms)
        #[arg(short = 't', long = "type", value_enum, default_value = "email")]
        contact_type: ContactType,

        /// Number of well-formed rows to generate
        #[arg(short = 'v', long = "valid", value_name = "COUNT")]
        valid: u32,

        /// Number of deliberately malformed rows to generate
        #[arg(short = 'i', long = "invalid", value_name = "COUNT", default_value_t = 0)]
        invalid: u32,

        /// First name base; the row number is appended (John -> John1)
        #[arg(short = 'f', long = "first-name", value_name = "NAME")]
        first_name: String,

        /// Last name, copied to every row unchanged
        #[arg(short = 'l', long = "last-name", value_name = "NAME")]
        last_name: String,

        /// Email local-part prefix; required when --type is email
        #[arg(short = 'p', long = "email-prefix", value_name = "PREFIX")]
        email_prefix: Option<String>,

        /// Semicolon-delimited tag expression (e.g., "vip;beta;vip")
        #[arg(long = "tags", value_name = "EXPR", default_value = "")]
        tags: String,

        /// Tag assignment policy for valid rows
        #[arg(short = 'm', long = "tag-mode", value_enum, default_value = "all")]
        tag_mode: TagMode,

        /// Email domain for valid identifiers (overrides config)
        #[arg(long = "domain", value_name = "DOMAIN")]
        domain: Option<String>,

        /// Output CSV path (overrides config)
        #[arg(short = 'o', long = "output", value_name = "PATH")]
        output: Option<PathBuf>,

        /// Preview the batch without writing a file
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Overwrite the output file without prompting
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// Helper method to get generation parameters from the generate command
    #[must_use]
    pub fn get_generate_params(&self) -> Option<GenerateParams> {
        match self {
            Self::Generate {
                contact_type,
                valid,
                invalid,
                first_name,
                last_name,
                email_prefix,
                tags,
                tag_mode,
                domain,
                output,
                dry_run,
                yes,
            } => Some(GenerateParams {
                contact_type: *contact_type,
                valid: *valid,
                invalid: *invalid,
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                email_prefix: email_prefix.clone(),
                tags: tags.clone(),
                tag_mode: *tag_mode,
                domain: domain.clone(),
                output: output.clone(),
                dry_run: *dry_run,
                yes: *yes,
            }),
            Self::Config { .. } => None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
