use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RpcError;
use crate::id::Id;

/// A JSON-RPC 1.0 response.
///
/// Exactly one of `result` and `error` is meaningful: a success carries a
/// result and a null error, a failure carries a null result and an error
/// object. The constructors enforce this; the fields stay public for
/// callers that decode foreign responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub result: Value,
    pub error: Option<RpcError>,
    #[serde(default)]
    pub id: Id,
}

impl Response {
    /// A successful response.
    pub fn result(id: Id, result: Value) -> Self {
        Self {
            result,
            error: None,
            id,
        }
    }

    /// An error response; the result is forced to null.
    pub fn error(id: Id, error: RpcError) -> Self {
        Self {
            result: Value::Null,
            error: Some(error),
            id,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The result value, or the error converted into a caller-facing
    /// failure.
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.result),
        }
    }
}
