//! vCard 3.0 Output Format
//!
//! This module documents the exact text this crate produces. It follows
//! RFC 2426 plus one widely honored vendor extension for labeled URLs.
//!
//! # Record Layout
//!
//! ```text
//! Content-Type: text/directory;profile=vcard;charset=UTF-8    (optional)
//!                                                              (blank, with header)
//! BEGIN:VCARD
//! VERSION:3.0
//! FN:...
//! N:...
//! ...one line per present property...
//! END:VCARD
//! ```
//!
//! Lines are joined with CRLF. No terminator follows `END:VCARD`.
//!
//! The header appears when the record declares a character set, or when
//! [`VCardOptions::include_content_type`](crate::VCardOptions) is set, in
//! which case it names the default charset (`UTF-8`).
//!
//! # Property Order
//!
//! | # | Property | Repeats |
//! |---|----------|---------|
//! | 1 | `FN` | no |
//! | 2 | `N` | no |
//! | 3 | `NICKNAME` | no |
//! | 4 | `CATEGORIES` | no |
//! | 5 | `PHOTO`, `LOGO`, `SOUND` | no |
//! | 6 | `KEY` | no |
//! | 7 | `BDAY` | no |
//! | 8 | `ADR` | per address |
//! | 9 | `LABEL` | per label |
//! | 10 | `TEL` | per number |
//! | 11 | `EMAIL` | per address |
//! | 12 | `MAILER` | no |
//! | 13 | `TZ` | no |
//! | 14 | `GEO` | no |
//! | 15 | `TITLE`, `ROLE` | no |
//! | 16 | `ORG` | no |
//! | 17 | `AGENT` | no |
//! | 18 | `NOTE` | no |
//! | 19 | `PRODID`, `REV`, `SORT-STRING`, `UID`, `SOURCE`, `NAME` | no |
//! | 20 | `itemN.URL`, `itemN.X-ABLabel` | per URL |
//! | 21 | `URL` (legacy) | no |
//! | 22 | `CLASS` | no |
//! | 23 | extension properties | per property |
//!
//! # Escaping
//!
//! ## Text values
//!
//! | Input | Output |
//! |-------|--------|
//! | `\` | `\\` |
//! | `;` | `\;` |
//! | `,` | `\,` |
//! | CRLF, CR or LF | `\n` |
//!
//! A `KEY` given by reference is key text, not a locator: it is escaped and
//! keeps its `TYPE` ahead of `CHARSET`, as in `KEY;TYPE=PGP;CHARSET=UTF-8:...`.
//!
//! Locator values (`PHOTO;VALUE=uri`, `SOUND`, `LOGO`, `AGENT;VALUE=uri`,
//! `URL`, `SOURCE`), inline binary content and `TEL` numbers are written
//! verbatim.
//!
//! ## Parameter values
//!
//! Newlines become spaces. A value containing `"`, `;`, `:` or `,` is
//! double-quoted, and any `"` inside it becomes `'`:
//!
//! ```text
//! X-SERVICE;LABEL="Team: Ops":ops@example.com
//! ```
//!
//! # Structured Values
//!
//! `N` always has five components and four separators:
//!
//! ```text
//! N:Doe;John;;;
//! N:Stevenson;John;Philip,Paul;Dr.;Jr.,M.D.
//! ```
//!
//! `ADR` always has seven:
//!
//! ```text
//! ADR;TYPE=work:;;100 Waters Edge;Baytown;LA;30314;United States of America
//! ```
//!
//! # Dates
//!
//! | Property | Format | Zone |
//! |----------|--------|------|
//! | `BDAY` | `YYYY-MM-DD` | the value's own offset |
//! | `REV` | `YYYY-MM-DDTHH:MM:SSZ` | converted to UTC |
//!
//! # Time Zones
//!
//! ```text
//! TZ:-05:00
//! TZ;VALUE=text:-05:00\; EST\; Raleigh/North America
//! ```
//!
//! # Labeled URLs
//!
//! ```text
//! item1.URL:https://linkedin.com/in/jdoe
//! item1.X-ABLabel:LinkedIn
//! item2.URL:https://example.com
//! ```
//!
//! A label that is empty after trimming is skipped; any other label is
//! written as given, surrounding whitespace included. The legacy single `URL`
//! field is written bare only when no grouped entry has the same value.
//!
//! # Line Folding
//!
//! A line longer than 75 characters keeps its first 75, then continues on
//! lines that start with one space and carry up to 74 more. Characters are
//! counted as Unicode scalar values, so multi-byte text is never split.
//!
//! ```text
//! NOTE:aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa
//!  aaaaaaa
//! ```
//!
//! Deleting every CRLF + space sequence restores the logical line.
//!
//! # Limitations
//!
//! - Output only; there is no parser
//! - vCard 4.0 is not produced
//! - Locators and phone numbers are not escaped
