use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::Id;
use crate::version::ProtocolVersion;

/// A JSON-RPC 1.0 request.
///
/// Parameters are positional only. The struct's declaration order is the
/// wire key order (`jsonrpc`, `method`, `params`, `id`), and `params` is
/// always serialized, so an empty parameter list emits `[]` rather than
/// disappearing. Lenient on input: a request missing `params` or `id`
/// still decodes, with an empty list and a null id respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: ProtocolVersion,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
    #[serde(default)]
    pub id: Id,
}

impl Request {
    pub fn new(id: Id, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: ProtocolVersion::V1_0,
            method: method.into(),
            params,
            id,
        }
    }

    /// A request carrying no parameters.
    pub fn new_no_params(id: Id, method: impl Into<String>) -> Self {
        Self::new(id, method, Vec::new())
    }

    /// A notification: a request whose id is null.
    pub fn notification(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(Id::Null, method, params)
    }

    pub fn param(&self, index: usize) -> Option<&Value> {
        self.params.get(index)
    }
}
