//! Session establishment via `account.login`.
//!
//! INWX authenticates with a cookie: the login response sets it, and the
//! transport's cookie jar replays it on every later call. The adapter logs in
//! lazily on its first operation and keeps the session for its whole lifetime.
//! There is no expiry handling and no logout.

use chrono::{DateTime, Utc};
use tokio::sync::OnceCell;
use tracing::info;

use crate::codec::Method;
use crate::error::Result;
use crate::transport::RpcClient;
use crate::wire::{LoginParams, LoginResult};

/// Account credentials for `account.login`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials for the given account.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the account username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Proof that `account.login` succeeded on a given transport.
///
/// Only [`SessionManager`] creates sessions; [`RpcClient::invoke`] requires
/// one, so no record operation can run before login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
    established_at: DateTime<Utc>,
}

impl Session {
    /// Returns the account the session belongs to.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns when the login completed.
    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }
}

/// Establishes the session once and hands it out afterwards.
///
/// Concurrent first callers share a single login; later callers get the
/// cached session without network activity. A failed login leaves the manager
/// empty, so the next operation tries again.
#[derive(Debug)]
pub struct SessionManager {
    credentials: Credentials,
    session: OnceCell<Session>,
}

impl SessionManager {
    /// Creates a manager that has not logged in yet.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            session: OnceCell::new(),
        }
    }

    /// Returns the session, logging in first if there is none.
    ///
    /// The login envelope's status code is checked like any other call: an
    /// HTTP 2xx reply carrying a failure code is an error.
    pub async fn ensure(&self, client: &RpcClient) -> Result<&Session> {
        self.session
            .get_or_try_init(|| self.login(client))
            .await
    }

    /// Returns the session if login already happened.
    pub fn current(&self) -> Option<&Session> {
        self.session.get()
    }

    async fn login(&self, client: &RpcClient) -> Result<Session> {
        let params = LoginParams {
            user: &self.credentials.username,
            pass: &self.credentials.password,
        };
        let _: LoginResult = client.call(Method::AccountLogin, &params).await?;

        let session = Session {
            username: self.credentials.username.clone(),
            established_at: Utc::now(),
        };
        info!(
            user = %session.username,
            endpoint = %client.endpoint(),
            "logged in to INWX"
        );
        Ok(session)
    }
}
