use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::half_lives::effective_type;
use super::lenient;
use super::timestamp;
use super::types::MemoryType;
use crate::constants::{DEFAULT_IMPORTANCE, SECONDS_PER_DAY};
use crate::errors::ReverieResult;

/// A snapshot of one NPC memory as handed over by the persistence layer.
///
/// Every field has a default, so partial records deserialize. Scoring code
/// only reads these records; it never mutates or stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    /// Opaque identifier, only echoed back in archival decisions.
    #[serde(default)]
    pub id: String,
    /// Free text description of what happened.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub memory_type: MemoryType,
    /// Free-form tags. Matched case-insensitively.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Base importance, usually computed once at creation.
    #[serde(
        default = "lenient::default_importance",
        deserialize_with = "lenient::importance"
    )]
    pub importance: f64,
    /// Creation time. `None` means unknown, which scores as "just now".
    #[serde(default, with = "timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    /// Number of times the memory was retrieved.
    #[serde(default, deserialize_with = "lenient::access_count")]
    pub access_count: u64,
}

impl Memory {
    pub fn new(content: impl Into<String>, memory_type: MemoryType) -> Self {
        Self {
            id: String::new(),
            content: content.into(),
            memory_type,
            categories: Vec::new(),
            importance: DEFAULT_IMPORTANCE,
            created_at: None,
            access_count: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_access_count(mut self, access_count: u64) -> Self {
        self.access_count = access_count;
        self
    }

    /// Parse one memory record from JSON.
    ///
    /// Individual fields are lenient; only malformed JSON or a non-object
    /// document is an error.
    pub fn from_json(json: &str) -> ReverieResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of memory records.
    pub fn list_from_json(json: &str) -> ReverieResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON, timestamps as RFC 3339.
    pub fn to_json(&self) -> ReverieResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Importance with non-finite values replaced by the default.
    pub fn importance_or_default(&self) -> f64 {
        if self.importance.is_finite() {
            self.importance
        } else {
            DEFAULT_IMPORTANCE
        }
    }

    /// Case-insensitive category membership.
    pub fn has_category(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(name))
    }

    /// The type whose half-life governs this memory.
    pub fn effective_type(&self) -> MemoryType {
        effective_type(self.memory_type, &self.categories)
    }

    /// Fractional age in days at `now`. Unknown or future timestamps are 0.
    pub fn age_days(&self, now: DateTime<Utc>) -> f64 {
        match self.created_at {
            Some(created) => {
                let millis = (now - created).num_milliseconds().max(0);
                millis as f64 / 1000.0 / SECONDS_PER_DAY
            }
            None => 0.0,
        }
    }
}
