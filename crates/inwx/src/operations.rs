//! Single-record operations against the `nameserver.*` methods.
//!
//! Each function performs exactly one RPC call. `zone` is the unqualified zone
//! (see [`records::Zone::unqualified`]).
//!
//! Create and update return the caller's field values rather than anything the
//! provider echoes back: only the identifier assigned by `createRecord` is
//! taken from the response.

use records::{Record, RecordId};
use tracing::info;

use crate::codec::Method;
use crate::error::Result;
use crate::session::Session;
use crate::translate::{parse_record_id, to_generic, to_wire_for_create, to_wire_for_update};
use crate::transport::RpcClient;
use crate::wire::{
    CreateRecordResult, DeleteRecordParams, DeleteRecordResult, InfoParams, InfoResult,
    UpdateRecordResult,
};

/// Fetches every record in `zone` (`nameserver.info`).
pub async fn list_records(client: &RpcClient, session: &Session, zone: &str) -> Result<Vec<Record>> {
    let result: InfoResult = client
        .invoke(session, Method::NameserverInfo, &InfoParams { domain: zone })
        .await?;

    Ok(result
        .records
        .into_iter()
        .map(|record| to_generic(record, zone))
        .collect())
}

/// Creates `record` in `zone` (`nameserver.createRecord`) and returns it with
/// the provider-assigned identifier.
pub async fn create_record(
    client: &RpcClient,
    session: &Session,
    zone: &str,
    record: &Record,
) -> Result<Record> {
    let params = to_wire_for_create(record, zone);
    let result: CreateRecordResult = client
        .invoke(session, Method::NameserverCreateRecord, &params)
        .await?;

    info!(zone, name = %params.name, id = result.id, "created record");
    Ok(Record {
        id: RecordId::new(result.id.to_string()),
        ..record.clone()
    })
}

/// Deletes the record with `record`'s identifier (`nameserver.deleteRecord`).
///
/// The identifier alone addresses the record; no zone is needed.
pub async fn delete_record(client: &RpcClient, session: &Session, record: &Record) -> Result<()> {
    let params = DeleteRecordParams {
        id: parse_record_id(record.id.as_ref())?,
    };
    let _: DeleteRecordResult = client
        .invoke(session, Method::NameserverDeleteRecord, &params)
        .await?;

    info!(id = params.id, "deleted record");
    Ok(())
}

/// Replaces the fields of the record with `record`'s identifier
/// (`nameserver.updateRecord`) and returns `record` unchanged.
pub async fn update_record(
    client: &RpcClient,
    session: &Session,
    zone: &str,
    record: &Record,
) -> Result<Record> {
    let params = to_wire_for_update(record, zone)?;
    let _: UpdateRecordResult = client
        .invoke(session, Method::NameserverUpdateRecord, &params)
        .await?;

    info!(zone, id = params.id, name = %params.name, "updated record");
    Ok(record.clone())
}

/// Creates `record` if it has no identifier, updates it otherwise.
pub async fn create_or_update_record(
    client: &RpcClient,
    session: &Session,
    zone: &str,
    record: &Record,
) -> Result<Record> {
    if record.is_new() {
        create_record(client, session, zone, record).await
    } else {
        update_record(client, session, zone, record).await
    }
}
