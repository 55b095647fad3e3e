use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ReverieError;

/// Memory type tag. Selects the base importance and decay half-life.
///
/// Ordered from the slowest-decaying to the fastest-decaying type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    Core,
    Trauma,
    Accomplishment,
    Relationship,
    #[default]
    Regular,
    Mundane,
}

impl MemoryType {
    /// Total number of variants.
    pub const COUNT: usize = 6;

    /// All variants, slowest decay first.
    pub const ALL: [MemoryType; Self::COUNT] = [
        Self::Core,
        Self::Trauma,
        Self::Accomplishment,
        Self::Relationship,
        Self::Regular,
        Self::Mundane,
    ];

    /// Canonical lowercase name, also used as the category tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Trauma => "trauma",
            Self::Accomplishment => "accomplishment",
            Self::Relationship => "relationship",
            Self::Regular => "regular",
            Self::Mundane => "mundane",
        }
    }

    /// Parse a type name, falling back to `Regular` for anything unknown.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            if !name.trim().is_empty() {
                tracing::debug!(memory_type = name, "unknown memory type, using regular");
            }
            Self::Regular
        })
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryType {
    type Err = ReverieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|mt| mt.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ReverieError::UnknownMemoryType {
                name: name.to_string(),
            })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMemoryType {
    Name(String),
    Other(IgnoredAny),
}

/// Unknown, null, or non-string type names deserialize to `Regular`.
impl<'de> Deserialize<'de> for MemoryType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawMemoryType>::deserialize(deserializer)? {
            Some(RawMemoryType::Name(name)) => Self::parse_lenient(&name),
            Some(RawMemoryType::Other(_)) | None => Self::Regular,
        })
    }
}
