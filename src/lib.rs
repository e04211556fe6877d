//! # vcard3
//!
//! An encoder for the vCard 3.0 directory profile (RFC 2426).
//!
//! ## What does it do?
//!
//! It turns a typed [`ContactRecord`] into vCard text: escaped values,
//! positional structured fields, folded 75-character lines and CRLF line
//! endings. It only writes vCards; it does not parse them.
//!
//! ## Key Features
//!
//! - **Exact escaping**: backslash, semicolon, comma and all newline variants
//! - **Line folding**: invertible folding at 75 characters (UTF-8 safe)
//! - **Grouped URLs**: `itemN.URL` with `X-ABLabel` labels, as read by Apple
//!   Contacts and most CardDAV clients
//! - **Charset declarations**: optional `CHARSET` parameters and a
//!   `Content-Type: text/directory` header
//! - **Serde Compatible**: every model type derives `Serialize`/`Deserialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use vcard3::{to_string, ContactRecord, EmailAddress, StructuredName};
//!
//! let mut record = ContactRecord::new("John Doe", StructuredName::new("Doe", "John"));
//! record.emails.push(EmailAddress {
//!     value: "john@example.com".to_string(),
//!     kinds: vec!["internet".to_string()],
//! });
//!
//! let vcard = to_string(&record);
//! assert!(vcard.contains("\r\nEMAIL;TYPE=internet:john@example.com\r\n"));
//! ```
//!
//! ### Declaring a Character Set
//!
//! ```rust
//! use vcard3::{to_string, ContactRecord, StructuredName};
//!
//! let mut record = ContactRecord::new("José García", StructuredName::new("García", "José"));
//! record.charset = Some("UTF-8".to_string());
//!
//! let vcard = to_string(&record);
//! assert!(vcard.starts_with("Content-Type: text/directory;profile=vcard;charset=UTF-8\r\n\r\nBEGIN:VCARD"));
//! assert!(vcard.contains("FN;CHARSET=UTF-8:José García"));
//! ```
//!
//! ## Thread Safety
//!
//! Serialization is a pure function of the record and options. Nothing is
//! cached between calls, so records can be rendered from any number of
//! threads concurrently.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the exact output produced per property.

pub mod datetime;
pub mod encode;
pub mod error;
pub mod escape;
pub mod format;
pub mod map;
pub mod model;
pub mod options;
pub mod ser;

pub use error::{Error, Result};
pub use map::ParamMap;
pub use model::{
    Address, Agent, Classification, ContactRecord, CustomProperty, EmailAddress, GeoCoordinate,
    Label, MediaReference, Organization, PhoneNumber, StructuredName, UrlEntry, Version,
};
pub use options::VCardOptions;
pub use ser::Serializer;

use std::io;

/// Serialize a record to a vCard string with default options.
///
/// # Examples
///
/// ```rust
/// use vcard3::{to_string, ContactRecord, StructuredName};
///
/// let record = ContactRecord::new("John Doe", StructuredName::new("Doe", "John"));
/// let vcard = to_string(&record);
/// assert!(vcard.contains("N:Doe;John;;;"));
/// ```
#[must_use]
pub fn to_string(record: &ContactRecord) -> String {
    to_string_with_options(record, VCardOptions::default())
}

/// Serialize a record to a vCard string with custom options.
///
/// # Examples
///
/// ```rust
/// use vcard3::{to_string_with_options, ContactRecord, StructuredName, VCardOptions};
///
/// let record = ContactRecord::new("John Doe", StructuredName::new("Doe", "John"));
/// let options = VCardOptions::new().with_content_type(true);
/// let vcard = to_string_with_options(&record, options);
/// assert!(vcard.starts_with("Content-Type: text/directory;profile=vcard;charset=UTF-8"));
/// ```
#[must_use]
pub fn to_string_with_options(record: &ContactRecord, options: VCardOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize(record);
    serializer.into_inner()
}

/// Serialize several records into one stream.
///
/// The header, if any, is decided by the first record and written once.
/// Records are joined with CRLF.
///
/// # Examples
///
/// ```rust
/// use vcard3::{to_string_many, ContactRecord, StructuredName, VCardOptions};
///
/// let records = vec![
///     ContactRecord::new("A", StructuredName::default()),
///     ContactRecord::new("B", StructuredName::default()),
/// ];
/// let out = to_string_many(&records, VCardOptions::new());
/// assert!(out.contains("END:VCARD\r\nBEGIN:VCARD"));
/// ```
#[must_use]
pub fn to_string_many<'a, I>(records: I, options: VCardOptions) -> String
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    let mut serializer = Serializer::new(options);
    for record in records {
        serializer.serialize(record);
    }
    serializer.into_inner()
}

/// Serialize a record to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use vcard3::{to_writer, ContactRecord, StructuredName};
///
/// let record = ContactRecord::new("John Doe", StructuredName::new("Doe", "John"));
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &record).unwrap();
/// assert!(buffer.starts_with(b"BEGIN:VCARD\r\n"));
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, record: &ContactRecord) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, record, VCardOptions::default())
}

/// Serialize a record to a writer with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    record: &ContactRecord,
    options: VCardOptions,
) -> Result<()>
where
    W: io::Write,
{
    let vcard = to_string_with_options(record, options);
    writer.write_all(vcard.as_bytes())?;
    Ok(())
}
