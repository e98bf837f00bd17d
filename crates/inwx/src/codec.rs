//! JSON-RPC envelope encoding and decoding.
//!
//! INWX wraps every call in the same envelope:
//!
//! ```json
//! {"method": "nameserver.info", "params": {"domain": "example.com"}}
//! ```
//!
//! and every reply in
//!
//! ```json
//! {"code": 1000, "msg": "Command completed successfully", "reasonCode": "", "resData": {..}}
//! ```
//!
//! where the shape of `resData` depends on the method.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{InwxError, Result};

/// Provider status code signalling success. Every other code is a failure.
pub const SUCCESS_CODE: i64 = 1000;

// ---------------------------------------------------------------------------
// Methods
// ---------------------------------------------------------------------------

/// The RPC methods used by this adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `account.login`
    AccountLogin,
    /// `nameserver.info`
    NameserverInfo,
    /// `nameserver.createRecord`
    NameserverCreateRecord,
    /// `nameserver.deleteRecord`
    NameserverDeleteRecord,
    /// `nameserver.updateRecord`
    NameserverUpdateRecord,
}

impl Method {
    /// Returns the dotted wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AccountLogin => "account.login",
            Self::NameserverInfo => "nameserver.info",
            Self::NameserverCreateRecord => "nameserver.createRecord",
            Self::NameserverDeleteRecord => "nameserver.deleteRecord",
            Self::NameserverUpdateRecord => "nameserver.updateRecord",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    method: &'static str,
    params: &'a P,
}

/// A decoded response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcResponse<T> {
    /// Provider status code; [`SUCCESS_CODE`] on success.
    pub code: i64,

    /// Human-readable status message.
    #[serde(default)]
    pub msg: String,

    /// Machine-readable reason code, usually present only on failure.
    #[serde(default)]
    pub reason_code: String,

    /// Method-specific result payload. Absent for methods that return nothing.
    #[serde(default = "Option::default")]
    pub res_data: Option<T>,
}

impl<T> RpcResponse<T> {
    /// Returns `true` if the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Converts the envelope into its payload, or a [`InwxError::Protocol`]
    /// if the status code is not [`SUCCESS_CODE`].
    pub fn into_result(self) -> Result<Option<T>> {
        if self.is_success() {
            Ok(self.res_data)
        } else {
            Err(InwxError::Protocol {
                code: self.code,
                reason_code: self.reason_code,
                message: self.msg,
            })
        }
    }
}

/// Serialises a request envelope for `method` with `params`.
pub fn encode<P: Serialize>(method: Method, params: &P) -> Result<Vec<u8>> {
    let request = RpcRequest {
        method: method.as_str(),
        params,
    };
    Ok(serde_json::to_vec(&request)?)
}

/// Parses a response envelope whose payload deserialises into `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<RpcResponse<T>> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Created {
        id: u64,
    }

    #[test]
    fn test_encode_produces_method_and_params_only() {
        let body = encode(Method::NameserverInfo, &json!({"domain": "example.com"})).unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            json!({"method": "nameserver.info", "params": {"domain": "example.com"}})
        );
    }

    #[test]
    fn test_decode_success_with_payload() {
        let body = br#"{"code":1000,"msg":"Command completed successfully","resData":{"id":42}}"#;
        let response: RpcResponse<Created> = decode(body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.into_result().unwrap(), Some(Created { id: 42 }));
    }

    #[test]
    fn test_decode_success_without_payload() {
        let body = br#"{"code":1000,"msg":"Command completed successfully"}"#;
        let response: RpcResponse<Created> = decode(body).unwrap();
        assert_eq!(response.into_result().unwrap(), None);
    }

    #[test]
    fn test_non_success_code_becomes_protocol_error() {
        let body = br#"{"code":2303,"msg":"Object does not exist","reasonCode":"RECORD_NOT_FOUND"}"#;
        let response: RpcResponse<Created> = decode(body).unwrap();
        match response.into_result() {
            Err(InwxError::Protocol {
                code,
                reason_code,
                message,
            }) => {
                assert_eq!(code, 2303);
                assert_eq!(reason_code, "RECORD_NOT_FOUND");
                assert_eq!(message, "Object does not exist");
            }
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_success_codes_are_failures() {
        // 1001 is "command completed successfully; action pending" on INWX.
        let body = br#"{"code":1001,"msg":"pending"}"#;
        let response: RpcResponse<Created> = decode(body).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(InwxError::Protocol { code: 1001, .. })
        ));
    }

    #[test]
    fn test_malformed_body_is_serialisation_error() {
        let result = decode::<Created>(b"<html>gateway timeout</html>");
        assert!(matches!(result, Err(InwxError::Serialization(_))));
    }
}
