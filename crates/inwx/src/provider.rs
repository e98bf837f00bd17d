//! [`InwxProvider`]: the INWX implementation of the `records` capability traits.

use std::sync::Arc;

use async_trait::async_trait;
use records::{
    Record, RecordAppender, RecordDeleter, RecordGetter, RecordSetter, SetRecordsError, Zone,
};
use reqwest::Url;
use tracing::debug;

use crate::config::InwxConfig;
use crate::error::{InwxError, Result};
use crate::operations;
use crate::session::{Credentials, Session, SessionManager};
use crate::transport::{ReqwestTransport, RpcClient, Transport};

/// DNS record management for zones hosted at INWX.
///
/// One instance holds one session. It logs in on the first operation and
/// reuses the session cookie for every call after that. Batch operations run
/// one RPC call per record, in input order, and stop at the first failure
/// without rolling back records already changed.
#[derive(Debug)]
pub struct InwxProvider {
    client: RpcClient,
    sessions: SessionManager,
}

impl InwxProvider {
    /// Creates a provider from configuration, using a [`ReqwestTransport`].
    pub fn new(config: InwxConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(
            Credentials::new(config.auth_username, config.auth_password),
            config.endpoint.url()?,
            Arc::new(transport),
        ))
    }

    /// Creates a provider over an arbitrary transport.
    pub fn with_transport(
        credentials: Credentials,
        endpoint: Url,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            client: RpcClient::new(transport, endpoint),
            sessions: SessionManager::new(credentials),
        }
    }

    /// Returns the established session, if any operation has logged in yet.
    pub fn session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    async fn login(&self) -> Result<&Session> {
        self.sessions.ensure(&self.client).await
    }
}

#[async_trait]
impl RecordGetter for InwxProvider {
    type Error = InwxError;

    async fn get_records(&self, zone: &Zone) -> Result<Vec<Record>> {
        let session = self.login().await?;
        let records = operations::list_records(&self.client, session, zone.unqualified()).await?;
        debug!(zone = %zone, count = records.len(), "listed records");
        Ok(records)
    }
}

#[async_trait]
impl RecordAppender for InwxProvider {
    type Error = InwxError;

    async fn append_records(&self, zone: &Zone, records: Vec<Record>) -> Result<Vec<Record>> {
        let session = self.login().await?;
        let zone = zone.unqualified();

        let mut appended = Vec::with_capacity(records.len());
        for record in &records {
            appended.push(operations::create_record(&self.client, session, zone, record).await?);
        }
        Ok(appended)
    }
}

#[async_trait]
impl RecordSetter for InwxProvider {
    type Error = InwxError;

    async fn set_records(
        &self,
        zone: &Zone,
        records: Vec<Record>,
    ) -> std::result::Result<Vec<Record>, SetRecordsError<InwxError>> {
        let mut completed = Vec::with_capacity(records.len());

        let session = match self.login().await {
            Ok(session) => session,
            Err(source) => return Err(SetRecordsError { completed, source }),
        };
        let zone = zone.unqualified();

        for record in &records {
            match operations::create_or_update_record(&self.client, session, zone, record).await {
                Ok(set) => completed.push(set),
                Err(source) => return Err(SetRecordsError { completed, source }),
            }
        }
        Ok(completed)
    }
}

#[async_trait]
impl RecordDeleter for InwxProvider {
    type Error = InwxError;

    async fn delete_records(&self, _zone: &Zone, records: Vec<Record>) -> Result<Vec<Record>> {
        let session = self.login().await?;
        for record in &records {
            operations::delete_record(&self.client, session, record).await?;
        }
        Ok(records)
    }
}
