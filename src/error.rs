//! Error types for vCard output.
//!
//! Rendering a [`ContactRecord`](crate::ContactRecord) to a `String` cannot
//! fail. Errors only arise when the rendered text is handed to an
//! [`io::Write`](std::io::Write) sink.
//!
//! ## Examples
//!
//! ```rust
//! use vcard3::Error;
//!
//! let err = Error::io("broken pipe");
//! assert!(err.to_string().contains("broken pipe"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while emitting vCard output.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vcard3::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
