//! Contact record data model.
//!
//! These types are plain data: the encoder reads them and never mutates them.
//! Every optional field is either absent (`None` / empty `Vec`) or present,
//! and absence always means the corresponding line is left out of the output.
//!
//! All types derive serde traits, so records can be loaded from JSON or any
//! other serde format:
//!
//! ```rust
//! use vcard3::ContactRecord;
//!
//! let record: ContactRecord = serde_json::from_str(r#"{
//!     "formatted_name": "John Doe",
//!     "name": { "family": "Doe", "given": "John" },
//!     "emails": [{ "value": "john@example.com", "kinds": ["internet", "work"] }]
//! }"#).unwrap();
//!
//! assert_eq!(record.emails.len(), 1);
//! ```

use crate::map::ParamMap;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The profile version. Only 3.0 is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    #[default]
    #[serde(rename = "3.0")]
    V3_0,
}

impl Version {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Version::V3_0 => "3.0",
        }
    }
}

/// The `N` property: family; given; additional; prefixes; suffixes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a name with family and given components set.
    #[must_use]
    pub fn new(family: impl Into<String>, given: impl Into<String>) -> Self {
        StructuredName {
            family: Some(family.into()),
            given: Some(given.into()),
            ..Default::default()
        }
    }
}

/// A postal address (`ADR`).
///
/// Components are positional; any of them may be missing and render empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Address kinds such as `home` or `work`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<String>,
}

/// A formatted delivery label (`LABEL`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<String>,
}

/// Binary media attached to a record: either a link or inline content.
///
/// The two forms are distinct variants, so a reference can never carry both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaReference {
    /// A resource locator, emitted with `VALUE=uri`.
    Uri {
        uri: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
    /// Pre-encoded (base64) content, emitted with `ENCODING=b`.
    Inline {
        data: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
}

impl MediaReference {
    #[must_use]
    pub fn uri(uri: impl Into<String>) -> Self {
        MediaReference::Uri {
            uri: uri.into(),
            media_type: None,
        }
    }

    #[must_use]
    pub fn inline(data: impl Into<String>, media_type: impl Into<String>) -> Self {
        MediaReference::Inline {
            data: data.into(),
            media_type: Some(media_type.into()),
        }
    }
}

/// A telephone number (`TEL`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<String>,
}

/// An email address (`EMAIL`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<String>,
}

/// Latitude and longitude (`GEO`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Organization name and units (`ORG`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<String>,
}

/// Someone acting on behalf of the contact (`AGENT`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agent {
    Uri(String),
    Text(String),
}

/// Access classification (`CLASS`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Public,
    Private,
    Confidential,
}

impl Classification {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Classification::Public => "PUBLIC",
            Classification::Private => "PRIVATE",
            Classification::Confidential => "CONFIDENTIAL",
        }
    }
}

/// An extension property such as `X-SKYPE`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "ParamMap::is_empty")]
    pub params: ParamMap,
}

impl CustomProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        CustomProperty {
            name: name.into(),
            value: value.into(),
            params: ParamMap::new(),
        }
    }

    /// Adds a parameter, replacing any earlier value for the same key.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }
}

/// One entry of the grouped URL list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub value: String,
    /// Display label, emitted as `X-ABLabel` in the same group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl UrlEntry {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        UrlEntry {
            value: value.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn labeled(value: impl Into<String>, label: impl Into<String>) -> Self {
        UrlEntry {
            value: value.into(),
            label: Some(label.into()),
        }
    }
}

/// A contact record.
///
/// `formatted_name` and `name` are required; everything else is optional.
///
/// # Examples
///
/// ```rust
/// use vcard3::{ContactRecord, StructuredName, PhoneNumber};
///
/// let mut record = ContactRecord::new("John Doe", StructuredName::new("Doe", "John"));
/// record.phones.push(PhoneNumber {
///     value: "+1-555-0100".to_string(),
///     kinds: vec!["cell".to_string()],
/// });
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default)]
    pub version: Version,
    pub formatted_name: String,
    pub name: StructuredName,
    /// Declared character set. Drives the MIME header and every `CHARSET`
    /// parameter on free-text properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nickname: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<MediaReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<MediaReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<MediaReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<MediaReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<EmailAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailer: Option<String>,
    /// A UTC offset like `-05:00`, or free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Directory name (`NAME`), distinct from the person's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<UrlEntry>,
    /// Single legacy URL, emitted bare unless it duplicates an entry in `urls`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<CustomProperty>,
}

impl ContactRecord {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(formatted_name: impl Into<String>, name: StructuredName) -> Self {
        ContactRecord {
            formatted_name: formatted_name.into(),
            name,
            ..Default::default()
        }
    }

    /// The declared character set, ignoring an empty or blank value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vcard3::{ContactRecord, StructuredName};
    ///
    /// let mut record = ContactRecord::new("J", StructuredName::default());
    /// record.charset = Some("  ".to_string());
    /// assert_eq!(record.declared_charset(), None);
    ///
    /// record.charset = Some("UTF-8".to_string());
    /// assert_eq!(record.declared_charset(), Some("UTF-8"));
    /// ```
    #[must_use]
    pub fn declared_charset(&self) -> Option<&str> {
        self.charset
            .as_deref()
            .filter(|cs| !cs.trim().is_empty())
    }
}
