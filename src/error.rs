// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures the interaction core can encounter.
///
/// None of these are fatal: gesture-path failures degrade to returning the
/// overlay to rest so the feed stays usable, and are surfaced through the
/// log rather than the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Geometry lookup failed — the row was recycled or scrolled out of
    /// the realized set mid-gesture.
    RowNotFound(usize),
    /// A gesture sample carried a non-finite or degenerate payload
    /// (NaN/zero scale, NaN translation, no pointers).
    MalformedGesture,
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RowNotFound(row) => write!(f, "Row {} not found in the realized set", row),
            Error::MalformedGesture => write!(f, "Malformed gesture sample"),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
