//! Strongly-typed identifier types for the exam statistics domain.
//!
//! Student identifiers are external registration codes (e.g. "S001") issued
//! by the exam administration, so they are string-backed rather than
//! generated. The newtype prevents accidental mixing with display names or
//! other free-form strings.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Unique identifier for a student (registration code, e.g. "S001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Create an identifier from a registration code
    #[inline]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the registration code as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying registration code
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StudentId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for StudentId {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl std::str::FromStr for StudentId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
