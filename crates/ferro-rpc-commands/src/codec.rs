//! Positional parameter codec.
//!
//! Marshalling walks a command's schema in declaration order, emitting
//! each field's natural JSON form: required fields always, optional
//! fields as their value or `null` when unset, and a variadic tail as
//! individual entries. The trailing run of `null`s is trimmed so the
//! emitted `params` array never ends in a null. Unmarshalling reverses
//! the walk, coercing each positional value to its target kind and
//! filling declared defaults for omitted optionals.
//!
//! One deliberate quirk is preserved from the historical RPC dialect:
//! when a target parameter is structured (array, mapping, or nested
//! record) and the supplied value is a string, the string is re-parsed as
//! JSON and descended into. Callers routinely hand the generic
//! constructor JSON-encoded strings for structured parameters; a plain
//! string target is never re-parsed.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use ferro_json_rpc::{Id, Request};

use crate::error::{Error, ErrorKind};
use crate::registry::{Descriptor, Registry, RpcCommand};
use crate::schema::{CommandSchema, ParamKind, ParamSpec};

/// Monomorphized encoder captured in a descriptor at registration.
pub(crate) fn encode_command<C>(
    cmd: &dyn RpcCommand,
    specs: &[ParamSpec],
) -> Result<Vec<Value>, Error>
where
    C: CommandSchema + Serialize + std::fmt::Debug + Send + Sync + 'static,
{
    let cmd = cmd.as_any().downcast_ref::<C>().ok_or_else(|| {
        Error::new(
            ErrorKind::UnregisteredMethod,
            format!("command value does not match the type registered for {}", C::METHOD),
        )
    })?;
    let encoded = serde_json::to_value(cmd).map_err(|err| {
        Error::new(
            ErrorKind::InvalidType,
            format!("failed to encode command for method {}: {err}", C::METHOD),
        )
    })?;
    let Value::Object(mut fields) = encoded else {
        return Err(Error::new(
            ErrorKind::EmbeddedType,
            format!("command for method {} did not encode as a plain record", C::METHOD),
        ));
    };

    let mut params = Vec::with_capacity(specs.len());
    for spec in specs {
        let value = fields.remove(spec.name).unwrap_or(Value::Null);
        if spec.variadic {
            match value {
                Value::Array(items) => params.extend(items),
                Value::Null => {}
                other => params.push(other),
            }
        } else {
            params.push(value);
        }
    }
    while params.last().is_some_and(Value::is_null) {
        params.pop();
    }
    Ok(params)
}

/// Monomorphized decoder captured in a descriptor at registration.
pub(crate) fn decode_command<C>(fields: Map<String, Value>) -> Result<Box<dyn RpcCommand>, Error>
where
    C: CommandSchema + DeserializeOwned + std::fmt::Debug + Send + Sync + 'static,
{
    let cmd: C = serde_json::from_value(Value::Object(fields)).map_err(|err| {
        Error::new(
            ErrorKind::InvalidType,
            format!("failed to assign parameters for method {}: {err}", C::METHOD),
        )
    })?;
    Ok(Box::new(cmd))
}

pub(crate) fn new_command(
    registry: &Registry,
    method: &str,
    params: &[Value],
) -> Result<Box<dyn RpcCommand>, Error> {
    let descriptor = registry.descriptor(method)?;
    let fields = build_field_map(descriptor, params, Defaults::Omit)?;
    (descriptor.decode())(fields)
}

pub(crate) fn unmarshal_request(
    registry: &Registry,
    request: &Request,
) -> Result<Box<dyn RpcCommand>, Error> {
    let descriptor = registry.descriptor(&request.method)?;
    let fields = build_field_map(descriptor, &request.params, Defaults::Apply)?;
    (descriptor.decode())(fields)
}

pub(crate) fn build_request(
    registry: &Registry,
    id: Id,
    cmd: &dyn RpcCommand,
) -> Result<Request, Error> {
    let descriptor = registry.descriptor_for(cmd)?;
    let params = (descriptor.encode())(cmd, descriptor.param_specs())?;
    Ok(Request::new(id, descriptor.method(), params))
}

pub(crate) fn marshal_request(
    registry: &Registry,
    id: Id,
    cmd: &dyn RpcCommand,
) -> Result<Vec<u8>, Error> {
    let request = build_request(registry, id, cmd)?;
    serde_json::to_vec(&request).map_err(|err| {
        Error::new(
            ErrorKind::InvalidType,
            format!("failed to serialize request for method {}: {err}", request.method),
        )
    })
}

/// Whether omitted optional parameters receive their declared defaults.
/// The unmarshaller applies them; the generic constructor leaves the
/// fields unset so a subsequent marshal emits only what was supplied.
#[derive(Clone, Copy, PartialEq)]
enum Defaults {
    Apply,
    Omit,
}

fn build_field_map(
    descriptor: &Descriptor,
    params: &[Value],
    defaults: Defaults,
) -> Result<Map<String, Value>, Error> {
    let specs = descriptor.param_specs();
    let method = descriptor.method();
    let required = descriptor.required_params();
    let count = params.len();

    if count < required {
        return Err(num_params(method, required, specs.len(), descriptor.has_variadic_tail(), count));
    }
    if !descriptor.has_variadic_tail() && count > specs.len() {
        return Err(num_params(method, required, specs.len(), false, count));
    }

    let mut fields = Map::new();
    for (index, spec) in specs.iter().enumerate() {
        if spec.variadic {
            let ParamKind::Array(element) = &spec.kind else {
                // Registration validated the schema.
                unreachable!("variadic parameter without an array kind");
            };
            let mut items = Vec::with_capacity(count.saturating_sub(index));
            for value in &params[index.min(count)..] {
                items.push(coerce_value(value, element, spec.name, method)?);
            }
            fields.insert(spec.name.to_string(), Value::Array(items));
            break;
        }

        let value = match params.get(index) {
            Some(value) => coerce_param(value, spec, method)?,
            None => match defaults {
                Defaults::Apply => spec.default.clone().unwrap_or(Value::Null),
                Defaults::Omit => Value::Null,
            },
        };
        fields.insert(spec.name.to_string(), value);
    }
    Ok(fields)
}

fn num_params(
    method: &str,
    required: usize,
    max: usize,
    variadic: bool,
    got: usize,
) -> Error {
    let description = if variadic {
        format!("method {method} expects at least {required} parameters, got {got}")
    } else {
        format!("method {method} expects between {required} and {max} parameters, got {got}")
    };
    Error::new(ErrorKind::NumParams, description)
}

fn coerce_param(value: &Value, spec: &ParamSpec, method: &str) -> Result<Value, Error> {
    if value.is_null() {
        if spec.optional {
            return Ok(Value::Null);
        }
        return Err(Error::new(
            ErrorKind::InvalidType,
            format!("parameter {} of method {method} is required and cannot be null", spec.name),
        ));
    }
    coerce_value(value, &spec.kind, spec.name, method)
}

/// Coerces one JSON value to a target kind, descending into arrays and
/// mappings. Structured targets accept JSON-encoded strings.
fn coerce_value(value: &Value, kind: &ParamKind, name: &str, method: &str) -> Result<Value, Error> {
    let mismatch = || {
        Error::new(
            ErrorKind::InvalidType,
            format!(
                "parameter {name} of method {method} must be a {kind}, got {}",
                json_kind(value)
            ),
        )
    };

    match kind {
        ParamKind::Bool => value.is_boolean().then(|| value.clone()).ok_or_else(|| mismatch()),
        ParamKind::Int32 => match value.as_i64() {
            Some(n) if i32::try_from(n).is_ok() => Ok(value.clone()),
            _ => Err(mismatch()),
        },
        ParamKind::Int64 => value.as_i64().map(|_| value.clone()).ok_or_else(|| mismatch()),
        ParamKind::Uint32 => match value.as_u64() {
            Some(n) if u32::try_from(n).is_ok() => Ok(value.clone()),
            _ => Err(mismatch()),
        },
        ParamKind::Uint64 => value.as_u64().map(|_| value.clone()).ok_or_else(|| mismatch()),
        ParamKind::Float => value.is_number().then(|| value.clone()).ok_or_else(|| mismatch()),
        ParamKind::String => value.is_string().then(|| value.clone()).ok_or_else(|| mismatch()),
        ParamKind::Array(element) => {
            let parsed = structured_form(value).ok_or_else(|| mismatch())?;
            let Value::Array(items) = parsed else {
                return Err(mismatch());
            };
            let items = items
                .iter()
                .map(|item| coerce_value(item, element, name, method))
                .collect::<Result<Vec<Value>, Error>>()?;
            Ok(Value::Array(items))
        }
        ParamKind::Map(element) => {
            let parsed = structured_form(value).ok_or_else(|| mismatch())?;
            let Value::Object(entries) = parsed else {
                return Err(mismatch());
            };
            let mut coerced = Map::new();
            for (key, item) in &entries {
                coerced.insert(key.clone(), coerce_value(item, element, name, method)?);
            }
            Ok(Value::Object(coerced))
        }
        ParamKind::Object => match value {
            Value::Object(_) => Ok(value.clone()),
            // A JSON-encoded string is unpacked; a string that is not
            // JSON is passed through for the record's own deserializer
            // (string-backed enumerations arrive this way).
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(parsed) => Ok(parsed),
                Err(_) => Ok(value.clone()),
            },
            other => Ok(other.clone()),
        },
    }
}

/// Resolves a value that should be structured: arrays and objects pass
/// through, strings are re-parsed as JSON.
fn structured_form(value: &Value) -> Option<Value> {
    match value {
        Value::Array(_) | Value::Object(_) => Some(value.clone()),
        Value::String(text) => serde_json::from_str(text).ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
