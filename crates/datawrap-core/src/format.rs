//! Data format identifiers
//!
//! A [`DataFormat`] names a representation a wrapper may read or write.
//! Formats are hierarchical: `text.json` is a child of `text`, so a wrapper
//! asked for `text` may answer with JSON text. The constants below are
//! shared vocabulary only; each wrapper decides which formats it supports.
//!
//! ```rust,ignore
//! use datawrap_core::DataFormat;
//!
//! let custom: DataFormat = "text.csv".parse()?;
//! assert!(custom.is_child_of(&DataFormat::TEXT));
//! assert_eq!(custom.parent(), Some(DataFormat::TEXT));
//! ```

use crate::error::FormatParseError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Hierarchical, dot-separated format identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataFormat {
    name: Cow<'static, str>,
}

impl DataFormat {
    /// A native Rust value
    pub const OBJECT: DataFormat = DataFormat::from_static("object");
    /// A `serde_json::Value`
    pub const JSON_VALUE: DataFormat = DataFormat::from_static("object.json");
    /// A `String`
    pub const TEXT: DataFormat = DataFormat::from_static("text");
    /// JSON document text
    pub const JSON: DataFormat = DataFormat::from_static("text.json");
    /// TOML document text
    pub const TOML: DataFormat = DataFormat::from_static("text.toml");
    /// YAML document text
    pub const YAML: DataFormat = DataFormat::from_static("text.yaml");

    // Callers must pass an already-valid name.
    const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Parse and validate a format name
    pub fn new(name: impl Into<String>) -> Result<Self, FormatParseError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self {
            name: Cow::Owned(name),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Iterate the dot-separated segments, root first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }

    /// Number of segments; root formats have depth 1
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    pub fn is_root(&self) -> bool {
        !self.name.contains('.')
    }

    /// The format with the last segment removed, or `None` for a root
    pub fn parent(&self) -> Option<DataFormat> {
        let idx = self.name.rfind('.')?;
        let name = match &self.name {
            Cow::Borrowed(s) => {
                let s: &'static str = *s;
                Cow::Borrowed(&s[..idx])
            }
            Cow::Owned(s) => Cow::Owned(s[..idx].to_string()),
        };
        Some(DataFormat { name })
    }

    /// True when `ancestor` is a strict ancestor of this format
    pub fn is_child_of(&self, ancestor: &DataFormat) -> bool {
        let this = self.as_str();
        let other = ancestor.as_str();
        this.len() > other.len()
            && this.starts_with(other)
            && this.as_bytes()[other.len()] == b'.'
    }

    /// True when this format equals `ancestor` or descends from it
    pub fn is_same_or_child_of(&self, ancestor: &DataFormat) -> bool {
        self == ancestor || self.is_child_of(ancestor)
    }
}

fn validate(name: &str) -> Result<(), FormatParseError> {
    if name.is_empty() {
        return Err(FormatParseError::Empty);
    }

    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(FormatParseError::EmptySegment {
                name: name.to_string(),
            });
        }
        if let Some(ch) = segment
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
        {
            return Err(FormatParseError::InvalidCharacter {
                name: name.to_string(),
                ch,
            });
        }
    }

    Ok(())
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for DataFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataFormat::new(s)
    }
}

impl TryFrom<String> for DataFormat {
    type Error = FormatParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DataFormat::new(value)
    }
}

impl From<DataFormat> for String {
    fn from(format: DataFormat) -> Self {
        format.name.into_owned()
    }
}

impl AsRef<str> for DataFormat {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
