//! Configuration options for vCard serialization.
//!
//! [`VCardOptions`] is passed alongside a record and never mutated during a
//! call. The only per-call knob is whether to force the
//! `Content-Type: text/directory` header; the character set itself lives on
//! the record (see [`ContactRecord::charset`](crate::ContactRecord::charset)).
//!
//! ## Examples
//!
//! ```rust
//! use vcard3::{ContactRecord, StructuredName, VCardOptions, to_string_with_options};
//!
//! let record = ContactRecord::new("Jane Doe", StructuredName::new("Doe", "Jane"));
//! let options = VCardOptions::new().with_content_type(true);
//! let vcard = to_string_with_options(&record, options);
//! assert!(vcard.starts_with("Content-Type: text/directory;profile=vcard;charset=UTF-8\r\n\r\n"));
//! ```

/// Character set named in the MIME header when none is declared on the record.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Configuration options for vCard serialization.
///
/// # Examples
///
/// ```rust
/// use vcard3::VCardOptions;
///
/// let options = VCardOptions::new();
/// assert!(!options.include_content_type);
/// assert_eq!(options.default_charset, "UTF-8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VCardOptions {
    /// Emit the MIME header even when the record declares no character set.
    pub include_content_type: bool,
    /// Character set named in a header forced by `include_content_type`.
    pub default_charset: String,
}

impl Default for VCardOptions {
    fn default() -> Self {
        VCardOptions {
            include_content_type: false,
            default_charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

impl VCardOptions {
    /// Creates default options (no forced header, `UTF-8` fallback charset).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces emission of the `Content-Type` header.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vcard3::VCardOptions;
    ///
    /// let options = VCardOptions::new().with_content_type(true);
    /// assert!(options.include_content_type);
    /// ```
    #[must_use]
    pub fn with_content_type(mut self, include: bool) -> Self {
        self.include_content_type = include;
        self
    }

    /// Sets the character set named in a forced header.
    ///
    /// Has no effect on per-property `CHARSET` parameters, which only appear
    /// when the record itself declares a character set.
    #[must_use]
    pub fn with_default_charset(mut self, charset: impl Into<String>) -> Self {
        self.default_charset = charset.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let options = VCardOptions::new()
            .with_content_type(true)
            .with_default_charset("ISO-8859-1");
        assert!(options.include_content_type);
        assert_eq!(options.default_charset, "ISO-8859-1");
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(VCardOptions::default(), VCardOptions::new());
    }
}
