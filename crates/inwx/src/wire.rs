//! INWX wire shapes for the `nameserver.*` and `account.login` methods.
//!
//! These mirror the JSON the API exchanges; conversion to and from the generic
//! [`records::Record`] lives in [`crate::translate`].

use serde::{Deserialize, Deserializer, Serialize};

/// A record as returned by `nameserver.info`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WireRecord {
    /// Provider identifier; `0` when absent.
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    /// Time-to-live in whole seconds.
    pub ttl: u64,
    /// Priority, only meaningful for MX/SRV. Never set by this adapter.
    #[serde(default)]
    pub prio: u64,
}

// ---------------------------------------------------------------------------
// account.login
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginParams<'a> {
    pub user: &'a str,
    pub pass: &'a str,
}

/// `account.login` result; the session itself travels in cookies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResult {}

// ---------------------------------------------------------------------------
// nameserver.info
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct InfoParams<'a> {
    pub domain: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InfoResult {
    #[serde(default)]
    pub domain: String,
    /// Absent or `null` for a zone without records.
    #[serde(default, rename = "record", deserialize_with = "null_as_empty")]
    pub records: Vec<WireRecord>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// nameserver.createRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRecordParams {
    pub domain: String,
    #[serde(rename = "type")]
    pub record_type: String,
    /// Fully-qualified name without trailing dot.
    pub name: String,
    pub content: String,
    pub ttl: u64,
    pub prio: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRecordResult {
    pub id: u64,
}

// ---------------------------------------------------------------------------
// nameserver.deleteRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteRecordParams {
    pub id: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteRecordResult {}

// ---------------------------------------------------------------------------
// nameserver.updateRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRecordParams {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    /// Zone-relative name.
    pub name: String,
    pub content: String,
    pub ttl: u64,
    pub prio: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecordResult {}
