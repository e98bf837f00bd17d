//! Translation between generic [`Record`]s and INWX wire records.
//!
//! INWX is inconsistent about names across methods: `nameserver.info` returns
//! fully-qualified names, `nameserver.createRecord` expects them, and
//! `nameserver.updateRecord` is sent the zone-relative label. The direction for
//! each method is pinned in [`name_form`] so it is decided in exactly one place.
//!
//! All functions here are pure; the `zone` argument is always the unqualified
//! zone (no trailing dot).

use std::time::Duration;

use records::{absolute_name, relative_name, Record, RecordId};

use crate::codec::Method;
use crate::error::{InwxError, Result};
use crate::wire::{CreateRecordParams, UpdateRecordParams, WireRecord};

/// The form a record name takes when it crosses the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameForm {
    /// Relative to the zone (`"www"`, `"@"`).
    Relative,
    /// Fully qualified without trailing dot (`"www.example.com"`).
    Absolute,
}

/// Returns the name form the caller sees for `method`.
///
/// For `nameserver.info` this is the form records are handed back in; for the
/// mutating methods it is the form the name is sent in.
pub fn name_form(method: Method) -> Option<NameForm> {
    match method {
        Method::NameserverInfo => Some(NameForm::Relative),
        Method::NameserverCreateRecord => Some(NameForm::Absolute),
        Method::NameserverUpdateRecord => Some(NameForm::Relative),
        Method::AccountLogin | Method::NameserverDeleteRecord => None,
    }
}

fn convert_name(name: &str, zone: &str, method: Method) -> String {
    match name_form(method) {
        Some(NameForm::Absolute) => absolute_name(name, zone),
        Some(NameForm::Relative) => relative_name(name, zone),
        None => name.to_string(),
    }
}

/// Truncates `ttl` to whole seconds. Never rounds up.
pub fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs()
}

/// Parses a generic record identifier into the provider's integer id.
pub fn parse_record_id(id: Option<&RecordId>) -> Result<u64> {
    let raw = id.map(RecordId::as_str).unwrap_or_default();
    raw.parse::<u64>().map_err(|_| InwxError::InvalidRecordId {
        id: raw.to_string(),
    })
}

/// Converts a record returned by `nameserver.info` into a generic record.
pub fn to_generic(record: WireRecord, zone: &str) -> Record {
    Record {
        id: RecordId::new(record.id.to_string()),
        name: convert_name(&record.name, zone, Method::NameserverInfo),
        record_type: record.record_type,
        value: record.content,
        ttl: Duration::from_secs(record.ttl),
    }
}

/// Builds `nameserver.createRecord` parameters. Any identifier on `record` is
/// ignored; the provider assigns one.
pub fn to_wire_for_create(record: &Record, zone: &str) -> CreateRecordParams {
    CreateRecordParams {
        domain: zone.to_string(),
        record_type: record.record_type.clone(),
        name: convert_name(&record.name, zone, Method::NameserverCreateRecord),
        content: record.value.clone(),
        ttl: ttl_seconds(record.ttl),
        prio: 0,
    }
}

/// Builds `nameserver.updateRecord` parameters.
///
/// Fails with [`InwxError::InvalidRecordId`] if the record's identifier is
/// missing or not a decimal integer.
pub fn to_wire_for_update(record: &Record, zone: &str) -> Result<UpdateRecordParams> {
    Ok(UpdateRecordParams {
        id: parse_record_id(record.id.as_ref())?,
        record_type: record.record_type.clone(),
        name: convert_name(&record.name, zone, Method::NameserverUpdateRecord),
        content: record.value.clone(),
        ttl: ttl_seconds(record.ttl),
        prio: 0,
    })
}
