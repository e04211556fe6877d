//! Per-property encoding rules.
//!
//! Each method renders one property of a [`ContactRecord`] into unfolded
//! logical lines and appends them to an output buffer. Absent fields and
//! empty lists append nothing.
//!
//! [`ContactRecord`]: crate::ContactRecord

use crate::datetime::{format_date, format_date_time};
use crate::escape::{escape_param_value, escape_text};
use crate::map::ParamMap;
use crate::model::{
    Address, Agent, Classification, CustomProperty, EmailAddress, GeoCoordinate, Label,
    MediaReference, Organization, PhoneNumber, StructuredName, UrlEntry,
};
use chrono::{DateTime, TimeZone};

/// Apple's label property for grouped URLs.
pub const LABEL_PROPERTY: &str = "X-ABLabel";

/// Encodes individual properties.
///
/// Holds the declared character set so every free-text property can carry a
/// matching `CHARSET` parameter.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldEncoder<'a> {
    charset: Option<&'a str>,
}

impl<'a> FieldEncoder<'a> {
    /// Creates an encoder. `charset` is the record's declared character set,
    /// already filtered for blank values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vcard3::encode::FieldEncoder;
    ///
    /// let enc = FieldEncoder::new(Some("UTF-8"));
    /// let mut out = Vec::new();
    /// enc.text("TITLE", Some("Engineer"), &mut out);
    /// assert_eq!(out, vec!["TITLE;CHARSET=UTF-8:Engineer"]);
    /// ```
    #[must_use]
    pub fn new(charset: Option<&'a str>) -> Self {
        FieldEncoder { charset }
    }

    /// The `;CHARSET=...` suffix, or an empty string.
    #[must_use]
    pub fn charset_param(&self) -> String {
        match self.charset {
            Some(cs) => format!(";CHARSET={cs}"),
            None => String::new(),
        }
    }

    /// A free-text property: escaped value with the charset suffix.
    pub fn text(&self, name: &str, value: Option<&str>, out: &mut Vec<String>) {
        if let Some(value) = value {
            out.push(format!(
                "{name}{}:{}",
                self.charset_param(),
                escape_text(value)
            ));
        }
    }

    /// An escaped identifier-like property without the charset suffix.
    pub fn plain(&self, name: &str, value: Option<&str>, out: &mut Vec<String>) {
        if let Some(value) = value {
            out.push(format!("{name}:{}", escape_text(value)));
        }
    }

    /// A URI property, value passed through as is.
    pub fn uri(&self, name: &str, value: Option<&str>, out: &mut Vec<String>) {
        if let Some(value) = value {
            out.push(format!("{name}:{value}"));
        }
    }

    /// A comma-separated text list (`NICKNAME`, `CATEGORIES`).
    pub fn text_list(&self, name: &str, values: &[String], out: &mut Vec<String>) {
        if values.is_empty() {
            return;
        }
        out.push(format!(
            "{name}{}:{}",
            self.charset_param(),
            join_escaped(values, ",")
        ));
    }

    /// `N`. Always five components, so always four `;` separators; list
    /// components are comma-joined.
    pub fn structured_name(&self, name: &StructuredName, out: &mut Vec<String>) {
        let components = [
            escape_opt(name.family.as_deref()),
            escape_opt(name.given.as_deref()),
            join_escaped(&name.additional, ","),
            join_escaped(&name.prefixes, ","),
            join_escaped(&name.suffixes, ","),
        ];
        out.push(format!("N{}:{}", self.charset_param(), components.join(";")));
    }

    /// `PHOTO`, `LOGO` and `SOUND`.
    pub fn media(&self, name: &str, media: Option<&MediaReference>, out: &mut Vec<String>) {
        let Some(media) = media else { return };
        match media {
            MediaReference::Uri { uri, media_type } => {
                out.push(format!("{name};VALUE=uri{}:{uri}", type_param(media_type)));
            }
            MediaReference::Inline { data, media_type } => {
                out.push(format!("{name};ENCODING=b{}:{data}", type_param(media_type)));
            }
        }
    }

    /// `KEY`. A non-inline key is key text, not a link.
    pub fn key(&self, key: Option<&MediaReference>, out: &mut Vec<String>) {
        match key {
            Some(MediaReference::Uri { uri, media_type }) => {
                out.push(format!(
                    "KEY{}{}:{}",
                    type_param(media_type),
                    self.charset_param(),
                    escape_text(uri)
                ));
            }
            other => self.media("KEY", other, out),
        }
    }

    /// `BDAY` as a calendar date in the value's own offset.
    pub fn birthday<Tz: TimeZone>(&self, birthday: Option<&DateTime<Tz>>, out: &mut Vec<String>) {
        if let Some(birthday) = birthday {
            out.push(format!("BDAY:{}", format_date(birthday)));
        }
    }

    /// `REV` as a UTC timestamp.
    pub fn revision<Tz: TimeZone>(&self, revision: Option<&DateTime<Tz>>, out: &mut Vec<String>) {
        if let Some(revision) = revision {
            out.push(format!("REV:{}", format_date_time(revision)));
        }
    }

    /// `ADR` with its seven components in RFC 2426 order.
    pub fn address(&self, address: &Address, out: &mut Vec<String>) {
        let components = [
            &address.po_box,
            &address.extended,
            &address.street,
            &address.locality,
            &address.region,
            &address.postal_code,
            &address.country,
        ]
        .map(|c| escape_opt(c.as_deref()));
        out.push(format!(
            "ADR{}{}:{}",
            kinds_param(&address.kinds),
            self.charset_param(),
            components.join(";")
        ));
    }

    /// `LABEL`, the delivery label text.
    pub fn label(&self, label: &Label, out: &mut Vec<String>) {
        out.push(format!(
            "LABEL{}{}:{}",
            kinds_param(&label.kinds),
            self.charset_param(),
            escape_text(&label.value)
        ));
    }

    /// `TEL`. The number is written verbatim and never carries a charset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vcard3::encode::FieldEncoder;
    /// use vcard3::PhoneNumber;
    ///
    /// let phone = PhoneNumber {
    ///     value: "+1-555-0100".to_string(),
    ///     kinds: vec!["work".to_string(), "voice".to_string()],
    /// };
    /// let mut out = Vec::new();
    /// FieldEncoder::new(Some("UTF-8")).phone(&phone, &mut out);
    /// assert_eq!(out, vec!["TEL;TYPE=work,voice:+1-555-0100"]);
    /// ```
    pub fn phone(&self, phone: &PhoneNumber, out: &mut Vec<String>) {
        out.push(format!("TEL{}:{}", kinds_param(&phone.kinds), phone.value));
    }

    /// `EMAIL`.
    pub fn email(&self, email: &EmailAddress, out: &mut Vec<String>) {
        out.push(format!(
            "EMAIL{}{}:{}",
            kinds_param(&email.kinds),
            self.charset_param(),
            escape_text(&email.value)
        ));
    }

    /// `TZ`. UTC offsets are emitted bare, anything else as `VALUE=text`.
    pub fn timezone(&self, timezone: Option<&str>, out: &mut Vec<String>) {
        let Some(tz) = timezone else { return };
        if is_utc_offset(tz) {
            out.push(format!("TZ:{tz}"));
        } else {
            out.push(format!(
                "TZ;VALUE=text{}:{}",
                self.charset_param(),
                escape_text(tz)
            ));
        }
    }

    /// `GEO` as `latitude;longitude`.
    pub fn geo(&self, geo: Option<&GeoCoordinate>, out: &mut Vec<String>) {
        if let Some(geo) = geo {
            out.push(format!("GEO:{};{}", geo.latitude, geo.longitude));
        }
    }

    /// `ORG`: the name followed by the units. Nothing is written when both
    /// are absent.
    pub fn organization(&self, org: Option<&Organization>, out: &mut Vec<String>) {
        let Some(org) = org else { return };
        let parts: Vec<String> = org
            .name
            .iter()
            .chain(org.units.iter())
            .map(|part| escape_text(part))
            .collect();
        if parts.is_empty() {
            return;
        }
        out.push(format!("ORG{}:{}", self.charset_param(), parts.join(";")));
    }

    /// `AGENT`, either a `VALUE=uri` reference or free text.
    pub fn agent(&self, agent: Option<&Agent>, out: &mut Vec<String>) {
        match agent {
            Some(Agent::Uri(uri)) => out.push(format!("AGENT;VALUE=uri:{uri}")),
            Some(Agent::Text(text)) => self.text("AGENT", Some(text.as_str()), out),
            None => {}
        }
    }

    /// `CLASS`.
    pub fn classification(&self, class: Option<Classification>, out: &mut Vec<String>) {
        if let Some(class) = class {
            out.push(format!("CLASS:{}", class.as_str()));
        }
    }

    /// Grouped URLs with optional `X-ABLabel` lines, then the legacy URL
    /// unless it repeats one of the grouped values.
    pub fn urls(&self, urls: &[UrlEntry], legacy: Option<&str>, out: &mut Vec<String>) {
        for (i, entry) in urls.iter().enumerate() {
            let group = format!("item{}", i + 1);
            out.push(format!("{group}.URL:{}", entry.value));

            if let Some(label) = entry.label.as_deref() {
                if !label.trim().is_empty() {
                    out.push(format!("{group}.{LABEL_PROPERTY}:{}", escape_text(label)));
                }
            }
        }

        if let Some(legacy) = legacy {
            if !urls.iter().any(|entry| entry.value == legacy) {
                out.push(format!("URL:{legacy}"));
            }
        }
    }

    /// An extension property. The record charset is the first parameter;
    /// the property's own parameters override it on a key collision.
    pub fn custom(&self, prop: &CustomProperty, out: &mut Vec<String>) {
        let mut params = ParamMap::with_capacity(prop.params.len() + 1);
        if let Some(cs) = self.charset {
            params.insert("CHARSET", cs);
        }
        for (key, value) in &prop.params {
            params.insert(key.to_uppercase(), value.as_str());
        }

        let mut line = prop.name.to_uppercase();
        for (key, value) in &params {
            line.push(';');
            line.push_str(key);
            line.push('=');
            line.push_str(&escape_param_value(value));
        }
        line.push(':');
        line.push_str(&escape_text(&prop.value));
        out.push(line);
    }
}

/// Matches `[+-]HH:MM`.
fn is_utc_offset(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 6
        && matches!(b[0], b'+' | b'-')
        && b[1].is_ascii_digit()
        && b[2].is_ascii_digit()
        && b[3] == b':'
        && b[4].is_ascii_digit()
        && b[5].is_ascii_digit()
}

fn escape_opt(value: Option<&str>) -> String {
    value.map(escape_text).unwrap_or_default()
}

fn join_escaped(values: &[String], sep: &str) -> String {
    values
        .iter()
        .map(|v| escape_text(v))
        .collect::<Vec<_>>()
        .join(sep)
}

fn kinds_param(kinds: &[String]) -> String {
    if kinds.is_empty() {
        String::new()
    } else {
        format!(";TYPE={}", kinds.join(","))
    }
}

fn type_param(media_type: &Option<String>) -> String {
    match media_type {
        Some(t) => format!(";TYPE={t}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(f: impl FnOnce(&mut Vec<String>)) -> Vec<String> {
        let mut out = Vec::new();
        f(&mut out);
        out
    }

    const PLAIN: FieldEncoder<'static> = FieldEncoder { charset: None };
    const UTF8: FieldEncoder<'static> = FieldEncoder {
        charset: Some("UTF-8"),
    };

    #[test]
    fn test_structured_name_always_four_separators() {
        let empty = lines(|o| PLAIN.structured_name(&StructuredName::default(), o));
        assert_eq!(empty, vec!["N:;;;;"]);

        let full = StructuredName {
            family: Some("Stevenson".into()),
            given: Some("John".into()),
            additional: vec!["Philip".into(), "Paul".into()],
            prefixes: vec!["Dr.".into()],
            suffixes: vec!["Jr.".into(), "M.D.".into()],
        };
        let out = lines(|o| PLAIN.structured_name(&full, o));
        assert_eq!(out, vec!["N:Stevenson;John;Philip,Paul;Dr.;Jr.,M.D."]);
        assert_eq!(out[0].matches(';').count(), 4);
    }

    #[test]
    fn test_structured_name_escapes_components() {
        let name = StructuredName {
            family: Some("O;Brien".into()),
            additional: vec!["a,b".into()],
            ..Default::default()
        };
        let out = lines(|o| PLAIN.structured_name(&name, o));
        assert_eq!(out, vec!["N:O\\;Brien;;a\\,b;;"]);
    }

    #[test]
    fn test_text_list_empty_emits_nothing() {
        assert!(lines(|o| PLAIN.text_list("NICKNAME", &[], o)).is_empty());
        let categories = vec!["a,b".to_string(), "c".to_string()];
        let out = lines(|o| UTF8.text_list("CATEGORIES", &categories, o));
        assert_eq!(out, vec!["CATEGORIES;CHARSET=UTF-8:a\\,b,c"]);
    }

    #[test]
    fn test_media_variants() {
        let uri = MediaReference::Uri {
            uri: "http://x/a;b.jpg".into(),
            media_type: Some("JPEG".into()),
        };
        assert_eq!(
            lines(|o| PLAIN.media("PHOTO", Some(&uri), o)),
            vec!["PHOTO;VALUE=uri;TYPE=JPEG:http://x/a;b.jpg"]
        );

        let inline = MediaReference::Inline {
            data: "AAEC".into(),
            media_type: None,
        };
        assert_eq!(
            lines(|o| UTF8.media("LOGO", Some(&inline), o)),
            vec!["LOGO;ENCODING=b:AAEC"]
        );
    }

    #[test]
    fn test_key_uri_is_text() {
        let key = MediaReference::uri("pgp;key");
        assert_eq!(lines(|o| PLAIN.key(Some(&key), o)), vec!["KEY:pgp\\;key"]);

        let typed = MediaReference::Uri {
            uri: "ABC".into(),
            media_type: Some("PGP".into()),
        };
        assert_eq!(lines(|o| PLAIN.key(Some(&typed), o)), vec!["KEY;TYPE=PGP:ABC"]);
        assert_eq!(
            lines(|o| UTF8.key(Some(&typed), o)),
            vec!["KEY;TYPE=PGP;CHARSET=UTF-8:ABC"]
        );

        let inline = MediaReference::inline("MIIC", "X509");
        assert_eq!(
            lines(|o| PLAIN.key(Some(&inline), o)),
            vec!["KEY;ENCODING=b;TYPE=X509:MIIC"]
        );
    }

    #[test]
    fn test_address_layout() {
        let address = Address {
            street: Some("123 Main St".into()),
            locality: Some("Springfield".into()),
            region: Some("IL".into()),
            postal_code: Some("62701".into()),
            country: Some("USA".into()),
            kinds: vec!["home".into(), "postal".into()],
            ..Default::default()
        };
        assert_eq!(
            lines(|o| UTF8.address(&address, o)),
            vec!["ADR;TYPE=home,postal;CHARSET=UTF-8:;;123 Main St;Springfield;IL;62701;USA"]
        );
    }

    #[test]
    fn test_phone_is_not_escaped() {
        let phone = PhoneNumber {
            value: "+1,555;0100".into(),
            kinds: vec!["cell".into()],
        };
        assert_eq!(
            lines(|o| UTF8.phone(&phone, o)),
            vec!["TEL;TYPE=cell:+1,555;0100"]
        );
    }

    #[test]
    fn test_email_with_kinds_and_charset() {
        let email = EmailAddress {
            value: "a@b.c".into(),
            kinds: vec!["internet".into()],
        };
        assert_eq!(
            lines(|o| UTF8.email(&email, o)),
            vec!["EMAIL;TYPE=internet;CHARSET=UTF-8:a@b.c"]
        );
    }

    #[test]
    fn test_timezone_offset_and_text() {
        assert_eq!(lines(|o| PLAIN.timezone(Some("-05:00"), o)), vec!["TZ:-05:00"]);
        assert_eq!(lines(|o| PLAIN.timezone(Some("+14:00"), o)), vec!["TZ:+14:00"]);
        assert_eq!(
            lines(|o| PLAIN.timezone(Some("-0500; EST"), o)),
            vec!["TZ;VALUE=text:-0500\\; EST"]
        );
        assert_eq!(
            lines(|o| PLAIN.timezone(Some("05:00"), o)),
            vec!["TZ;VALUE=text:05:00"]
        );
    }

    #[test]
    fn test_geo() {
        let geo = GeoCoordinate {
            latitude: 37.386013,
            longitude: -122.082932,
        };
        assert_eq!(
            lines(|o| PLAIN.geo(Some(&geo), o)),
            vec!["GEO:37.386013;-122.082932"]
        );
    }

    #[test]
    fn test_organization_variants() {
        let none = Organization::default();
        assert!(lines(|o| PLAIN.organization(Some(&none), o)).is_empty());

        let full = Organization {
            name: Some("ABC, Inc.".into()),
            units: vec!["North American Division".into(), "Marketing".into()],
        };
        assert_eq!(
            lines(|o| PLAIN.organization(Some(&full), o)),
            vec!["ORG:ABC\\, Inc.;North American Division;Marketing"]
        );

        let units_only = Organization {
            name: None,
            units: vec!["R&D".into()],
        };
        assert_eq!(
            lines(|o| PLAIN.organization(Some(&units_only), o)),
            vec!["ORG:R&D"]
        );
    }

    #[test]
    fn test_agent_variants() {
        assert_eq!(
            lines(|o| UTF8.agent(Some(&Agent::Uri("CID:JQPUBLIC".into())), o)),
            vec!["AGENT;VALUE=uri:CID:JQPUBLIC"]
        );
        assert_eq!(
            lines(|o| UTF8.agent(Some(&Agent::Text("Jane, Assistant".into())), o)),
            vec!["AGENT;CHARSET=UTF-8:Jane\\, Assistant"]
        );
    }

    #[test]
    fn test_urls_grouped_with_labels() {
        let urls = vec![
            UrlEntry::labeled("https://a", "LinkedIn"),
            UrlEntry::labeled("https://b", "  "),
            UrlEntry::new("https://c"),
        ];
        assert_eq!(
            lines(|o| PLAIN.urls(&urls, Some("https://a"), o)),
            vec![
                "item1.URL:https://a",
                "item1.X-ABLabel:LinkedIn",
                "item2.URL:https://b",
                "item3.URL:https://c",
            ]
        );
    }

    #[test]
    fn test_url_label_keeps_surrounding_whitespace() {
        let urls = vec![UrlEntry::labeled("https://a", "  Work ")];
        assert_eq!(
            lines(|o| PLAIN.urls(&urls, None, o)),
            vec!["item1.URL:https://a", "item1.X-ABLabel:  Work "]
        );
    }

    #[test]
    fn test_legacy_url_emitted_when_distinct() {
        let urls = vec![UrlEntry::new("https://a")];
        assert_eq!(
            lines(|o| PLAIN.urls(&urls, Some("https://z"), o)),
            vec!["item1.URL:https://a", "URL:https://z"]
        );
        assert_eq!(
            lines(|o| PLAIN.urls(&[], Some("https://z"), o)),
            vec!["URL:https://z"]
        );
    }

    #[test]
    fn test_custom_property_params() {
        let prop = CustomProperty::new("x-skype", "live:jdoe")
            .with_param("type", "work")
            .with_param("x-note", "a:b");
        assert_eq!(
            lines(|o| UTF8.custom(&prop, o)),
            vec!["X-SKYPE;CHARSET=UTF-8;TYPE=work;X-NOTE=\"a:b\":live:jdoe"]
        );
    }

    #[test]
    fn test_custom_property_overrides_charset() {
        let prop = CustomProperty::new("X-LEGACY", "v").with_param("charset", "ISO-8859-1");
        assert_eq!(
            lines(|o| UTF8.custom(&prop, o)),
            vec!["X-LEGACY;CHARSET=ISO-8859-1:v"]
        );
        assert_eq!(
            lines(|o| PLAIN.custom(&CustomProperty::new("x-a", "b;c"), o)),
            vec!["X-A:b\\;c"]
        );
    }

    #[test]
    fn test_utc_offset_pattern() {
        assert!(is_utc_offset("+00:00"));
        assert!(!is_utc_offset("+0:00"));
        assert!(!is_utc_offset("+00:000"));
        assert!(!is_utc_offset("America/New_York"));
    }
}
