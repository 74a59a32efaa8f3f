//! # Ferro RPC Command Catalog and Codec
//!
//! Typed command records for every method in the Ferro JSON-RPC API, a
//! registry mapping wire method names to their schemas, and the codec
//! that moves commands in and out of JSON-RPC 1.0 request envelopes with
//! positional parameters.
//!
//! ## Model
//!
//! Each RPC method is a plain struct deriving [`CommandSchema`]; the
//! derive emits a per-field metadata table (name, kind, optional flag,
//! default, variadic marker) that drives marshalling and unmarshalling
//! generically. Optional parameters are `Option<T>` fields; a declared
//! default is applied by the unmarshaller when the parameter is omitted
//! from the positional array.
//!
//! ```rust,ignore
//! use ferro_json_rpc::{Id, Request};
//! use ferro_rpc_commands::chain::GetBlockCmd;
//!
//! // Marshal a typed command; unset optionals are trimmed from the tail.
//! let cmd = GetBlockCmd::new("0000...00ab");
//! let bytes = ferro_rpc_commands::marshal_request(Id::Number(1), &cmd)?;
//!
//! // Unmarshal a request back into the registered typed command,
//! // filling declared defaults for omitted optionals.
//! let request: Request = serde_json::from_slice(&bytes)?;
//! let cmd = ferro_rpc_commands::unmarshal_request(&request)?;
//! let cmd = cmd.as_any().downcast_ref::<GetBlockCmd>().unwrap();
//! assert_eq!(cmd.verbose, Some(true));
//! ```
//!
//! The registry is an ordinary value ([`Registry`]) so independent RPC
//! surfaces can coexist; the free functions in this crate operate on a
//! process-wide default registry pre-populated with the built-in catalog.

// The derive macro emits absolute `::ferro_rpc_commands::...` paths so it
// works from any crate; this alias makes those paths resolve here too.
extern crate self as ferro_rpc_commands;

mod codec;
mod descriptions;
pub mod error;
pub mod registry;
pub mod schema;

pub mod chain;
pub mod chain_websocket;
pub mod extensions;
pub mod notifications;
pub mod primitives;
pub mod wallet;
pub mod wallet_websocket;

pub use error::{kind_name, Error, ErrorKind};
pub use registry::{
    build_request, marshal_request, method_description, method_usage, method_usage_flags,
    new_command, register_command, registered_methods, set_description, unmarshal_request,
    Descriptor, Registry, RpcCommand, UsageFlags,
};
pub use schema::{CommandSchema, ParamKind, ParamSpec};

// The derive lives in the macro namespace, alongside the trait of the
// same name, serde-style.
pub use ferro_rpc_derive::CommandSchema;
