//! # JSON-RPC 1.0 Envelope Types
//!
//! The wire-level request and response shapes spoken by the Ferro chain
//! server, wallet server, and their websocket endpoints. This crate only
//! models the envelopes; the typed command catalog and the positional
//! parameter codec live in `ferro-rpc-commands`.
//!
//! The Ferro RPC dialect is JSON-RPC 1.0 with two deliberate strictures:
//! requests always carry a `params` array (an empty parameter list is
//! emitted as `[]`, never omitted), and request keys are emitted in the
//! fixed order `jsonrpc`, `method`, `params`, `id` so that encoded
//! requests are byte-stable.

pub mod error;
pub mod id;
pub mod request;
pub mod response;
pub mod version;

pub use error::RpcError;
pub use id::Id;
pub use request::Request;
pub use response::Response;
pub use version::ProtocolVersion;

/// JSON-RPC protocol version spoken on the wire.
pub const JSONRPC_VERSION: &str = "1.0";

/// Standard JSON-RPC 2.0 reserved error codes, reused verbatim by the
/// 1.0 dialect.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}
