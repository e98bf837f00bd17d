//! Shared test fixtures: in-memory [`Transport`] implementations.
//!
//! - [`ScriptedTransport`] replays canned replies and records every request.
//! - [`FakeInwx`] is a small stateful imitation of the INWX nameserver API.
//! - [`StalledTransport`] never answers, for cancellation tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use inwx::{Credentials, HttpReply, InwxProvider, Result, Transport};
use reqwest::Url;
use serde_json::{json, Value};

pub const ENDPOINT: &str = "https://api.ote.domrobot.com/jsonrpc/";
pub const ZONE: &str = "example.com";

pub fn ttl() -> Duration {
    Duration::from_secs(300)
}

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn provider(transport: Arc<dyn Transport>) -> InwxProvider {
    init_tracing();
    InwxProvider::with_transport(
        Credentials::new("usr", "secret"),
        Url::parse(ENDPOINT).unwrap(),
        transport,
    )
}

// ---------------------------------------------------------------------------
// Reply builders
// ---------------------------------------------------------------------------

pub fn success(res_data: Value) -> HttpReply {
    let body = json!({"code": 1000, "msg": "Command completed successfully", "resData": res_data});
    HttpReply::new(200, serde_json::to_vec(&body).unwrap())
}

pub fn success_without_data() -> HttpReply {
    let body = json!({"code": 1000, "msg": "Command completed successfully"});
    HttpReply::new(200, serde_json::to_vec(&body).unwrap())
}

pub fn failure(code: i64, reason_code: &str) -> HttpReply {
    let body = json!({"code": code, "msg": "Command failed", "reasonCode": reason_code});
    HttpReply::new(200, serde_json::to_vec(&body).unwrap())
}

pub fn login_ok() -> HttpReply {
    success(json!({"customerId": 1, "accountId": 1, "tfa": "0"}))
}

// ---------------------------------------------------------------------------
// Scripted transport
// ---------------------------------------------------------------------------

/// Replays replies in order and records each request body as JSON.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<HttpReply>>,
    requests: Mutex<Vec<Value>>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = HttpReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r["method"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post(&self, endpoint: &Url, body: Vec<u8>) -> Result<HttpReply> {
        assert_eq!(endpoint.as_str(), ENDPOINT);
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::from_slice(&body).unwrap());
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpReply::new(500, "unscripted request")))
    }
}

// ---------------------------------------------------------------------------
// Stateful fake
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct StoredRecord {
    record_type: String,
    name: String,
    content: String,
    ttl: u64,
}

#[derive(Default)]
struct FakeState {
    logged_in: bool,
    records: BTreeMap<u64, StoredRecord>,
    /// Remaining successful calls per method before it starts failing.
    fail_after: HashMap<String, usize>,
}

/// In-memory imitation of the INWX API for one zone.
///
/// Records are stored fully qualified, as INWX does. Calls before a
/// successful login fail with code 2200, standing in for a missing cookie.
pub struct FakeInwx {
    zone: String,
    password: String,
    next_id: AtomicU64,
    logins: AtomicU64,
    state: Mutex<FakeState>,
}

impl FakeInwx {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            zone: ZONE.to_string(),
            password: "secret".to_string(),
            next_id: AtomicU64::new(1000),
            logins: AtomicU64::new(0),
            state: Mutex::new(FakeState::default()),
        })
    }

    /// Pre-populates a record as if created through the API.
    pub fn seed(&self, record_type: &str, fqdn: &str, content: &str, ttl: u64) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.state.lock().unwrap().records.insert(
            id,
            StoredRecord {
                record_type: record_type.to_string(),
                name: fqdn.to_string(),
                content: content.to_string(),
                ttl,
            },
        );
        id
    }

    /// Lets `method` succeed `successes` more times, then fail.
    pub fn fail_after(&self, method: &str, successes: usize) {
        self.state
            .lock()
            .unwrap()
            .fail_after
            .insert(method.to_string(), successes);
    }

    pub fn login_count(&self) -> u64 {
        self.logins.load(Ordering::SeqCst)
    }

    pub fn stored_name(&self, id: u64) -> Option<String> {
        self.state.lock().unwrap().records.get(&id).map(|r| r.name.clone())
    }

    pub fn stored_content(&self, id: u64) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .records
            .get(&id)
            .map(|r| r.content.clone())
    }

    pub fn record_count(&self) -> usize {
        self.state.lock().unwrap().records.len()
    }

    fn handle(&self, request: &Value) -> HttpReply {
        let method = request["method"].as_str().unwrap_or_default();
        let params = &request["params"];
        let mut state = self.state.lock().unwrap();

        if let Some(remaining) = state.fail_after.get_mut(method) {
            if *remaining == 0 {
                return failure(2400, "INJECTED_FAILURE");
            }
            *remaining -= 1;
        }

        if method == "account.login" {
            self.logins.fetch_add(1, Ordering::SeqCst);
            if params["pass"] != self.password.as_str() {
                return failure(2200, "AUTHENTICATION_FAILED");
            }
            state.logged_in = true;
            return login_ok();
        }
        if !state.logged_in {
            return failure(2200, "NOT_LOGGED_IN");
        }

        match method {
            "nameserver.info" => {
                if params["domain"] != self.zone.as_str() {
                    return failure(2303, "DOMAIN_NOT_FOUND");
                }
                let records: Vec<Value> = state
                    .records
                    .iter()
                    .map(|(id, r)| {
                        json!({
                            "id": id,
                            "name": r.name,
                            "type": r.record_type,
                            "content": r.content,
                            "ttl": r.ttl,
                            "prio": 0
                        })
                    })
                    .collect();
                if records.is_empty() {
                    success(json!({"domain": self.zone}))
                } else {
                    success(json!({"domain": self.zone, "record": records}))
                }
            }
            "nameserver.createRecord" => {
                if params["domain"] != self.zone.as_str() {
                    return failure(2303, "DOMAIN_NOT_FOUND");
                }
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                state.records.insert(
                    id,
                    StoredRecord {
                        record_type: params["type"].as_str().unwrap_or_default().to_string(),
                        name: params["name"].as_str().unwrap_or_default().to_string(),
                        content: params["content"].as_str().unwrap_or_default().to_string(),
                        ttl: params["ttl"].as_u64().unwrap_or_default(),
                    },
                );
                success(json!({"id": id}))
            }
            "nameserver.deleteRecord" => {
                let id = params["id"].as_u64().unwrap_or_default();
                match state.records.remove(&id) {
                    Some(_) => success_without_data(),
                    None => failure(2303, "RECORD_NOT_FOUND"),
                }
            }
            "nameserver.updateRecord" => {
                let id = params["id"].as_u64().unwrap_or_default();
                let zone = self.zone.clone();
                match state.records.get_mut(&id) {
                    Some(record) => {
                        let name = params["name"].as_str().unwrap_or_default();
                        record.name = if name.is_empty() || name == "@" {
                            zone
                        } else {
                            format!("{name}.{zone}")
                        };
                        record.record_type = params["type"].as_str().unwrap_or_default().to_string();
                        record.content = params["content"].as_str().unwrap_or_default().to_string();
                        record.ttl = params["ttl"].as_u64().unwrap_or_default();
                        success_without_data()
                    }
                    None => failure(2303, "RECORD_NOT_FOUND"),
                }
            }
            _ => failure(2000, "UNKNOWN_COMMAND"),
        }
    }
}

#[async_trait]
impl Transport for FakeInwx {
    async fn post(&self, _endpoint: &Url, body: Vec<u8>) -> Result<HttpReply> {
        let request: Value = serde_json::from_slice(&body).unwrap();
        // Suspend like a real round trip so concurrent callers interleave.
        tokio::task::yield_now().await;
        Ok(self.handle(&request))
    }
}

// ---------------------------------------------------------------------------
// Stalled transport
// ---------------------------------------------------------------------------

/// Never replies; the in-flight call only ends when its future is dropped.
#[derive(Default)]
pub struct StalledTransport {
    pub started: AtomicU64,
}

#[async_trait]
impl Transport for StalledTransport {
    async fn post(&self, _endpoint: &Url, _body: Vec<u8>) -> Result<HttpReply> {
        self.started.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}
