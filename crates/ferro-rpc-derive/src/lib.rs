//! # Ferro RPC Derive Macros
//!
//! Provides `#[derive(CommandSchema)]`, which turns a plain command record
//! into a registrable RPC command by emitting its positional parameter
//! schema as a static metadata table.
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
//! #[command(method = "getblock")]
//! pub struct GetBlockCmd {
//!     pub hash: String,
//!     #[command(default = true)]
//!     pub verbose: Option<bool>,
//!     #[command(default = false)]
//!     pub verbose_tx: Option<bool>,
//! }
//! ```
//!
//! Structural schema rules are enforced here, at compile time: the input
//! must be a plain struct with named, public fields; required fields must
//! precede optional ones; defaults are only legal on optional fields; a
//! `variadic` marker is only legal on the last field. Field types map to
//! parameter kinds automatically, with `#[command(kind = "...")]` as an
//! override for newtypes that serialize as a primitive.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod command_derive;

#[proc_macro_derive(CommandSchema, attributes(command))]
pub fn derive_command_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    command_derive::expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
