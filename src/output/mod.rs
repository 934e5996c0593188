//! Output formatting for CLI display
//!
//! This module provides utilities for formatting the generation summary and
//! dry-run previews in the CLI.

use std::path::Path;

use colored::Colorize;

use crate::Contact;
use crate::export::identifier_column;
use crate::generate::ContactType;

/// Maximum rows shown in a dry-run preview
pub const PREVIEW_LIMIT: usize = 15;

/// Format a single contact row for preview display
#[must_use]
pub fn preview_row(row: &Contact, contact_type: ContactType) -> String {
    let tag_part = if row.tag.is_empty() {
        "(no tag)".dimmed().to_string()
    } else {
        format!("[{}]", row.tag.cyan())
    };
    format!(
        "  {}={} {} {} {}",
        identifier_column(contact_type),
        row.identifier,
        row.firstname,
        row.lastname,
        tag_part
    )
}

/// Format the generation summary line
#[must_use]
pub fn summary(valid: u32, invalid: u32, path: &Path) -> String {
    format!(
        "Wrote {} valid and {} invalid row(s) to {}",
        valid.to_string().green(),
        invalid.to_string().red(),
        path.display()
    )
}
