//! Capability traits a DNS provider adapter implements.
//!
//! Each capability is a separate trait so an adapter can offer any subset.
//! Callers depend on the capabilities they use (`impl RecordGetter + RecordSetter`)
//! rather than on a concrete adapter type.
//!
//! All methods are `async`. Dropping the returned future cancels the operation,
//! including any network call in flight; records already processed by a batch
//! stay processed on the provider.

use async_trait::async_trait;
use thiserror::Error;

use crate::{Record, Zone};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure of a [`RecordSetter::set_records`] batch part-way through.
///
/// Unlike the other batch operations, `set_records` reports the records it
/// completed before the failure so callers can reconcile their state.
#[derive(Debug, Error)]
#[error("set records failed after {} completed record(s): {source}", .completed.len())]
pub struct SetRecordsError<E>
where
    E: std::error::Error + 'static,
{
    /// Records processed successfully before the failure, in input order.
    pub completed: Vec<Record>,

    /// The error that stopped the batch.
    #[source]
    pub source: E,
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Lists the records of a zone.
#[async_trait]
pub trait RecordGetter: Send + Sync {
    /// Provider-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every record in `zone`, with names relative to the zone.
    ///
    /// An empty zone yields an empty `Vec`, never an error.
    async fn get_records(&self, zone: &Zone) -> Result<Vec<Record>, Self::Error>;
}

/// Adds new records to a zone.
#[async_trait]
pub trait RecordAppender: Send + Sync {
    /// Provider-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates each record in order and returns them with identifiers set.
    ///
    /// Stops at the first failure; records created before it are not rolled back.
    async fn append_records(
        &self,
        zone: &Zone,
        records: Vec<Record>,
    ) -> Result<Vec<Record>, Self::Error>;
}

/// Creates or updates records in a zone.
#[async_trait]
pub trait RecordSetter: Send + Sync {
    /// Provider-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates records without an identifier and updates those with one.
    async fn set_records(
        &self,
        zone: &Zone,
        records: Vec<Record>,
    ) -> Result<Vec<Record>, SetRecordsError<Self::Error>>;
}

/// Removes records from a zone.
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// Provider-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deletes each record in order and returns the records that were deleted.
    async fn delete_records(
        &self,
        zone: &Zone,
        records: Vec<Record>,
    ) -> Result<Vec<Record>, Self::Error>;
}
