//! Text escaping and line folding.
//!
//! - [`escape_text`] escapes property values (RFC 2426 section 4, `text`).
//! - [`escape_param_value`] renders a parameter value as `ptext` or a
//!   `quoted-string`.
//! - [`fold_line`] splits a logical line into 75-character physical lines.

/// Line terminator used between physical lines and inside folds.
pub const CRLF: &str = "\r\n";

/// Maximum characters on a physical line, excluding the terminator.
pub const MAX_LINE_LENGTH: usize = 75;

/// Escapes a text value.
///
/// CRLF, bare CR and bare LF each become one `\n` escape. Backslash,
/// semicolon and comma are backslash-escaped.
///
/// # Examples
///
/// ```rust
/// use vcard3::escape::escape_text;
///
/// assert_eq!(escape_text("a;b,c\\d"), "a\\;b\\,c\\\\d");
/// assert_eq!(escape_text("Line 1\r\nLine 2"), "Line 1\\nLine 2");
/// ```
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str("\\n");
            }
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a parameter value.
///
/// Line breaks collapse to a single space. Values containing `"`, `;`, `:`
/// or `,` are wrapped in double quotes, with inner double quotes replaced by
/// apostrophes since a quoted-string cannot contain them.
///
/// # Examples
///
/// ```rust
/// use vcard3::escape::escape_param_value;
///
/// assert_eq!(escape_param_value("work"), "work");
/// assert_eq!(escape_param_value("a:b"), "\"a:b\"");
/// assert_eq!(escape_param_value("say \"hi\";"), "\"say 'hi';\"");
/// ```
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    let normalized = normalize_newlines(s, " ");

    if normalized.contains(['"', ';', ':', ',']) {
        format!("\"{}\"", normalized.replace('"', "'"))
    } else {
        normalized
    }
}

/// Folds a logical line.
///
/// Lines of at most 75 characters are returned unchanged. Longer lines keep
/// their first 75 characters, then continue on lines of a single space plus
/// up to 74 characters. Removing every `"\r\n "` restores the input.
///
/// # Examples
///
/// ```rust
/// use vcard3::escape::fold_line;
///
/// let line = "x".repeat(80);
/// let folded = fold_line(&line);
/// assert_eq!(folded, format!("{}\r\n {}", "x".repeat(75), "x".repeat(5)));
/// ```
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_LENGTH {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_LENGTH * 3);
    let mut limit = MAX_LINE_LENGTH;
    let mut taken = 0;

    for c in line.chars() {
        if taken == limit {
            result.push_str(CRLF);
            result.push(' ');
            taken = 0;
            limit = MAX_LINE_LENGTH - 1;
        }
        result.push(c);
        taken += 1;
    }

    result
}

fn normalize_newlines(s: &str, replacement: &str) -> String {
    s.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', replacement)
}
