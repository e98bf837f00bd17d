//! INWX DNS provider adapter.
//!
//! Implements the [`records`] capability traits ([`records::RecordGetter`],
//! [`records::RecordAppender`], [`records::RecordSetter`],
//! [`records::RecordDeleter`]) over the INWX JSON-RPC API.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Envelope framing, session cookies, HTTP status handling
//! and the translation between generic records and INWX wire records all live
//! here. Callers see only [`records::Record`] and the capability traits.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`codec`] | RPC request/response envelopes and the success code |
//! | [`wire`] | INWX parameter and result shapes |
//! | [`translate`] | Generic ⇄ wire record conversion, per-method name form |
//! | [`transport`] | [`Transport`] seam, [`ReqwestTransport`], [`RpcClient`] |
//! | [`session`] | Credentials and lazy, single-flight login |
//! | [`operations`] | One-call list/create/delete/update/create-or-update |
//! | [`provider`] | [`InwxProvider`] |
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use inwx::{InwxConfig, InwxProvider};
//! use records::{Record, RecordAppender, Zone};
//!
//! # async fn run() -> Result<(), inwx::InwxError> {
//! let provider = InwxProvider::new(InwxConfig::new("user", "password"))?;
//! let zone = Zone::new("example.com.");
//! let created = provider
//!     .append_records(
//!         &zone,
//!         vec![Record::new("TXT", "_acme-challenge", "token", Duration::from_secs(300))],
//!     )
//!     .await?;
//! assert!(!created[0].is_new());
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod operations;
pub mod provider;
pub mod session;
pub mod translate;
pub mod transport;
pub mod wire;

pub use codec::{Method, RpcResponse, SUCCESS_CODE};
pub use config::{Endpoint, InwxConfig, PRODUCTION_ENDPOINT, SANDBOX_ENDPOINT};
pub use error::{InwxError, Result};
pub use provider::InwxProvider;
pub use session::{Credentials, Session, SessionManager};
pub use transport::{HttpReply, ReqwestTransport, RpcClient, Transport};
