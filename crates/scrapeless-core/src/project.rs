//! Project name validation
//!
//! The destination folder name doubles as the generated actor's canonical
//! name, so it is validated at the boundary before it is ever used as a
//! filesystem path component.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A validated actor project name.
///
/// Rules: non-empty, lowercase ASCII letters only, with hyphens and
/// underscores permitted as separators. No uppercase letters, digits, spaces
/// or non-ASCII characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a candidate string satisfies the project-name rule.
    pub fn is_valid(s: &str) -> bool {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c == '-' || c == '_')
    }
}

impl FromStr for ProjectName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(ProjectName(s.to_string()))
        } else {
            Err(Error::InvalidName(s.to_string()))
        }
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
