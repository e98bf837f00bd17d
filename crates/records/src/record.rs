//! The generic DNS record exchanged between callers and provider adapters.
//!
//! A [`Record`] carries no provider-specific detail: identifiers are opaque
//! strings, the time-to-live is a [`Duration`], and names travel relative to
//! the zone they live in. Each adapter translates to and from its own wire
//! shape.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Provider-assigned identifier of a record.
///
/// The identifier is opaque to callers. An empty identifier is never
/// constructed: a record that has not been created yet has no [`RecordId`] at
/// all (see [`Record::id`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new identifier, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single DNS resource record in provider-agnostic form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Identifier assigned by the provider.
    ///
    /// `None` for a record that has not been created yet. Adapters use this to
    /// choose between creating and updating (see `RecordSetter`).
    pub id: Option<RecordId>,

    /// Record type tag (e.g. `"A"`, `"TXT"`, `"CNAME"`).
    ///
    /// Free-form; adapters pass it through without validation.
    pub record_type: String,

    /// Host label, relative to the zone (`"@"` for the zone apex).
    pub name: String,

    /// Record content, free-form.
    pub value: String,

    /// Time-to-live. Providers store whole seconds; sub-second precision is
    /// dropped at the wire boundary.
    pub ttl: Duration,
}

impl Record {
    /// Creates a record that has not been submitted to any provider yet.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: None,
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }

    /// Returns this record with its identifier replaced.
    #[must_use]
    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns `true` if the record carries no provider identifier.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
