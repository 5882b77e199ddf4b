//! Site identifier value object

use std::fmt;

/// Short name of a suggested site, e.g. `mozilla`.
///
/// Names a property namespace and a drawable, so it must be non-empty and
/// free of path separators and glob metacharacters. Dots are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteIdError {
    #[error("site identifier is empty")]
    Empty,

    #[error("site identifier '{id}' contains invalid character '{ch}'")]
    InvalidChar { id: String, ch: char },
}

impl SiteId {
    pub fn new(raw: &str) -> Result<Self, SiteIdError> {
        let id = raw.trim();
        if id.is_empty() {
            return Err(SiteIdError::Empty);
        }
        if let Some(ch) = id
            .chars()
            .find(|c| matches!(c, '/' | '\\' | '*' | '?' | '[' | ']' | '{' | '}' | '!'))
        {
            return Err(SiteIdError::InvalidChar {
                id: id.to_string(),
                ch,
            });
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
