//! vCard serialization.
//!
//! This module provides the [`Serializer`], which assembles a complete vCard
//! from a [`ContactRecord`]:
//!
//! 1. Optional `Content-Type` header and blank separator line
//! 2. `BEGIN:VCARD` and `VERSION:3.0`
//! 3. One line per present property, in canonical order
//! 4. `END:VCARD`
//!
//! Every logical line is folded independently, then all lines are joined
//! with CRLF.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use vcard3::{to_string, ContactRecord, StructuredName};
//!
//! let record = ContactRecord::new("John Doe", StructuredName::new("Doe", "John"));
//! let vcard = to_string(&record);
//! assert_eq!(vcard, "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Doe\r\nN:Doe;John;;;\r\nEND:VCARD");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! Several records can share one output stream and header:
//!
//! ```rust
//! use vcard3::{ContactRecord, Serializer, StructuredName, VCardOptions};
//!
//! let mut serializer = Serializer::new(VCardOptions::new());
//! serializer.serialize(&ContactRecord::new("A", StructuredName::default()));
//! serializer.serialize(&ContactRecord::new("B", StructuredName::default()));
//!
//! let out = serializer.into_inner();
//! assert_eq!(out.matches("BEGIN:VCARD").count(), 2);
//! ```

use crate::encode::FieldEncoder;
use crate::escape::{fold_line, CRLF, MAX_LINE_LENGTH};
use crate::{ContactRecord, VCardOptions};
use tracing::{debug, trace};

/// Builds the MIME header line for `charset`.
#[must_use]
pub fn content_type_header(charset: &str) -> String {
    format!("Content-Type: text/directory;profile=vcard;charset={charset}")
}

/// Returns the unfolded body lines of `record`, `BEGIN` through `END`.
///
/// # Examples
///
/// ```rust
/// use vcard3::{ContactRecord, StructuredName};
/// use vcard3::ser::logical_lines;
///
/// let mut record = ContactRecord::new("Jo", StructuredName::default());
/// record.note = Some("hi".to_string());
///
/// assert_eq!(
///     logical_lines(&record),
///     vec!["BEGIN:VCARD", "VERSION:3.0", "FN:Jo", "N:;;;;", "NOTE:hi", "END:VCARD"]
/// );
/// ```
#[must_use]
pub fn logical_lines(record: &ContactRecord) -> Vec<String> {
    let enc = FieldEncoder::new(record.declared_charset());
    let mut out = Vec::with_capacity(16);

    out.push("BEGIN:VCARD".to_string());
    out.push(format!("VERSION:{}", record.version.as_str()));

    enc.text("FN", Some(record.formatted_name.as_str()), &mut out);
    enc.structured_name(&record.name, &mut out);
    enc.text_list("NICKNAME", &record.nickname, &mut out);
    enc.text_list("CATEGORIES", &record.categories, &mut out);
    enc.media("PHOTO", record.photo.as_ref(), &mut out);
    enc.media("LOGO", record.logo.as_ref(), &mut out);
    enc.media("SOUND", record.sound.as_ref(), &mut out);
    enc.key(record.key.as_ref(), &mut out);
    enc.birthday(record.birthday.as_ref(), &mut out);
    for address in &record.addresses {
        enc.address(address, &mut out);
    }
    for label in &record.labels {
        enc.label(label, &mut out);
    }
    for phone in &record.phones {
        enc.phone(phone, &mut out);
    }
    for email in &record.emails {
        enc.email(email, &mut out);
    }
    enc.text("MAILER", record.mailer.as_deref(), &mut out);
    enc.timezone(record.timezone.as_deref(), &mut out);
    enc.geo(record.geo.as_ref(), &mut out);
    enc.text("TITLE", record.title.as_deref(), &mut out);
    enc.text("ROLE", record.role.as_deref(), &mut out);
    enc.organization(record.organization.as_ref(), &mut out);
    enc.agent(record.agent.as_ref(), &mut out);
    enc.text("NOTE", record.note.as_deref(), &mut out);
    enc.plain("PRODID", record.product_id.as_deref(), &mut out);
    enc.revision(record.revision.as_ref(), &mut out);
    enc.text("SORT-STRING", record.sort_string.as_deref(), &mut out);
    enc.plain("UID", record.uid.as_deref(), &mut out);
    enc.uri("SOURCE", record.source.as_deref(), &mut out);
    enc.text("NAME", record.directory_name.as_deref(), &mut out);
    enc.urls(&record.urls, record.url.as_deref(), &mut out);
    enc.classification(record.classification, &mut out);
    for prop in &record.custom {
        enc.custom(prop, &mut out);
    }

    out.push("END:VCARD".to_string());
    out
}

/// The vCard serializer.
///
/// Accumulates one or more records into a single CRLF-joined string. The
/// `Content-Type` header, when it applies, is decided by the first record
/// and written once.
pub struct Serializer {
    output: String,
    options: VCardOptions,
    records: usize,
}

impl Serializer {
    /// Creates an empty serializer.
    #[must_use]
    pub fn new(options: VCardOptions) -> Self {
        Serializer {
            output: String::with_capacity(512),
            options,
            records: 0,
        }
    }

    /// Consumes the serializer and returns everything written so far.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `record` to the output.
    pub fn serialize(&mut self, record: &ContactRecord) {
        let mut lines = Vec::new();

        let header = if self.records == 0 {
            self.header_charset(record)
        } else {
            None
        };
        if let Some(charset) = header {
            lines.push(content_type_header(charset));
            lines.push(String::new());
        }

        lines.extend(logical_lines(record));

        let folded: Vec<String> = lines.iter().map(|line| self.fold(line)).collect();

        debug!(
            formatted_name = %record.formatted_name,
            lines = folded.len(),
            header = header.is_some(),
            "serialized vcard"
        );

        if self.records > 0 {
            self.output.push_str(CRLF);
        }
        self.output.push_str(&folded.join(CRLF));
        self.records += 1;
    }

    /// The charset to name in the header, if one should be written.
    fn header_charset<'r>(&'r self, record: &'r ContactRecord) -> Option<&'r str> {
        match record.declared_charset() {
            Some(cs) => Some(cs),
            None if self.options.include_content_type => {
                Some(self.options.default_charset.as_str())
            }
            None => None,
        }
    }

    fn fold(&self, line: &str) -> String {
        let folded = fold_line(line);
        if folded.len() != line.len() {
            trace!(
                chars = line.chars().count(),
                max = MAX_LINE_LENGTH,
                "folded long line"
            );
        }
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CustomProperty, StructuredName, UrlEntry};

    fn john() -> ContactRecord {
        ContactRecord::new("John Doe", StructuredName::new("Doe", "John"))
    }

    fn render(record: &ContactRecord, options: VCardOptions) -> String {
        let mut ser = Serializer::new(options);
        ser.serialize(record);
        ser.into_inner()
    }

    #[test]
    fn test_minimal_record() {
        let out = render(&john(), VCardOptions::new());
        assert_eq!(
            out,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Doe\r\nN:Doe;John;;;\r\nEND:VCARD"
        );
    }

    #[test]
    fn test_declared_charset_adds_header_and_params() {
        let mut record =
            ContactRecord::new("José García", StructuredName::new("García", "José"));
        record.charset = Some("UTF-8".to_string());
        let out = render(&record, VCardOptions::new());

        assert!(out.starts_with(
            "Content-Type: text/directory;profile=vcard;charset=UTF-8\r\n\r\nBEGIN:VCARD\r\n"
        ));
        assert!(out.contains("\r\nFN;CHARSET=UTF-8:José García\r\n"));
        assert!(out.contains("\r\nN;CHARSET=UTF-8:García;José;;;\r\n"));
    }

    #[test]
    fn test_forced_header_uses_default_charset() {
        let out = render(&john(), VCardOptions::new().with_content_type(true));
        assert!(out.starts_with(
            "Content-Type: text/directory;profile=vcard;charset=UTF-8\r\n\r\n"
        ));
        // No CHARSET parameters without a declared charset.
        assert!(!out.contains("CHARSET="));
    }

    #[test]
    fn test_declared_charset_wins_over_default() {
        let mut record = john();
        record.charset = Some("ISO-8859-1".to_string());
        let out = render(&record, VCardOptions::new().with_content_type(true));
        assert!(
            out.starts_with("Content-Type: text/directory;profile=vcard;charset=ISO-8859-1")
        );
    }

    #[test]
    fn test_canonical_order() {
        let mut record = john();
        record.custom.push(CustomProperty::new("X-A", "1"));
        record.url = Some("https://legacy".to_string());
        record.urls.push(UrlEntry::new("https://a"));
        record.note = Some("n".to_string());
        record.timezone = Some("+01:00".to_string());
        record.nickname = vec!["J".to_string()];
        record.categories = vec!["friends".to_string()];
        record.photo = Some(crate::MediaReference::uri("http://p"));
        record.sound = Some(crate::MediaReference::uri("http://s"));
        record.agent = Some(crate::Agent::Text("a".to_string()));
        record.classification = Some(crate::Classification::Private);

        let names: Vec<String> = logical_lines(&record)
            .into_iter()
            .map(|l| l.split([':', ';']).next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "BEGIN",
                "VERSION",
                "FN",
                "N",
                "NICKNAME",
                "CATEGORIES",
                "PHOTO",
                "SOUND",
                "TZ",
                "AGENT",
                "NOTE",
                "item1.URL",
                "URL",
                "CLASS",
                "X-A",
                "END"
            ]
        );
    }

    #[test]
    fn test_blank_charset_treated_as_absent() {
        let mut record = ContactRecord::new("J", StructuredName::default());
        record.charset = Some(String::new());
        assert_eq!(
            render(&record, VCardOptions::new()),
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:J\r\nN:;;;;\r\nEND:VCARD"
        );

        record.charset = Some("  ".to_string());
        let out = render(&record, VCardOptions::new().with_content_type(true));
        assert!(out.starts_with(
            "Content-Type: text/directory;profile=vcard;charset=UTF-8\r\n\r\n"
        ));
        assert!(!out.contains("CHARSET="));
    }

    #[test]
    fn test_long_lines_folded() {
        let mut record = john();
        record.note = Some("a".repeat(200));
        let out = render(&record, VCardOptions::new());

        for line in out.split(CRLF) {
            assert!(line.chars().count() <= MAX_LINE_LENGTH, "too long: {line}");
        }
        assert!(out.replace("\r\n ", "").contains(&format!("NOTE:{}", "a".repeat(200))));
    }

    #[test]
    fn test_multiple_records_share_header() {
        let mut first = john();
        first.charset = Some("UTF-8".to_string());
        let mut ser = Serializer::new(VCardOptions::new());
        ser.serialize(&first);
        ser.serialize(&john());
        let out = ser.into_inner();

        assert_eq!(out.matches("Content-Type:").count(), 1);
        assert!(out.contains("END:VCARD\r\nBEGIN:VCARD"));
    }
}
