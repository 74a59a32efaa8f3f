use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use ferro_json_rpc::{Id, Request};
use ferro_rpc_commands::CommandSchema;

/// Asserts the command contract for one method against the process-wide
/// registry:
///
/// 1. the typed value marshals to exactly `want_marshalled`;
/// 2. the generic positional constructor yields byte-identical output;
/// 3. decoding `want_marshalled` and unmarshalling produces
///    `want_unmarshalled`, i.e. the typed value with declared defaults
///    filled in for omitted optionals.
pub fn assert_command<C>(
    new_params: &[Value],
    static_cmd: C,
    want_marshalled: &str,
    want_unmarshalled: C,
) where
    C: CommandSchema + Serialize + DeserializeOwned + PartialEq + Debug + Send + Sync + 'static,
{
    let bytes = ferro_rpc_commands::marshal_request(Id::Number(1), &static_cmd)
        .unwrap_or_else(|err| panic!("marshal of {} failed: {err}", C::METHOD));
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        want_marshalled,
        "marshal of statically constructed {}",
        C::METHOD
    );

    let generic = ferro_rpc_commands::new_command(C::METHOD, new_params)
        .unwrap_or_else(|err| panic!("new_command for {} failed: {err}", C::METHOD));
    let bytes = ferro_rpc_commands::marshal_request(Id::Number(1), generic.as_ref())
        .unwrap_or_else(|err| panic!("marshal of generic {} failed: {err}", C::METHOD));
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        want_marshalled,
        "marshal of generically constructed {}",
        C::METHOD
    );

    let request: Request = serde_json::from_str(want_marshalled)
        .unwrap_or_else(|err| panic!("decoding the {} envelope failed: {err}", C::METHOD));
    let decoded = ferro_rpc_commands::unmarshal_request(&request)
        .unwrap_or_else(|err| panic!("unmarshal of {} failed: {err}", C::METHOD));
    let decoded = decoded
        .as_any()
        .downcast_ref::<C>()
        .unwrap_or_else(|| panic!("unmarshal of {} produced the wrong type", C::METHOD));
    assert_eq!(decoded, &want_unmarshalled, "unmarshal of {}", C::METHOD);
}
