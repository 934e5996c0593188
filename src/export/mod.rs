//! CSV export for generated contact batches
//!
//! Encoding is delegated to the `csv` crate; this module only decides the
//! header row (`email` or `phone` for the identifier column, depending on
//! the contact type the batch was generated with) and streams the records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::Contact;
use crate::generate::ContactType;

/// Export-specific errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Represents a CSV serialization error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Represents an I/O error while creating or writing the output file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Column name for the identifier field of a contact type
#[must_use]
pub const fn identifier_column(contact_type: ContactType) -> &'static str {
    match contact_type {
        ContactType::Email => "email",
        ContactType::Sms => "phone",
    }
}

/// Write a batch of contacts as CSV to any writer
///
/// Emits a header row followed by one record per contact, using the csv
/// crate's standard quoting and escaping.
///
/// # Errors
/// Returns `ExportError` if serialization or the underlying write fails.
pub fn write_rows<W: Write>(
    rows: &[Contact],
    contact_type: ContactType,
    writer: W,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([identifier_column(contact_type), "firstname", "lastname", "tag"])?;
    for row in rows {
        wtr.write_record([&row.identifier, &row.firstname, &row.lastname, &row.tag])?;
    }
    wtr.flush()?;

    Ok(())
}

/// Write a batch of contacts as CSV to a file
///
/// # Errors
/// Returns `ExportError` if the file cannot be created or written.
pub fn export_to_path(
    rows: &[Contact],
    contact_type: ContactType,
    path: &Path,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_rows(rows, contact_type, file)
}
