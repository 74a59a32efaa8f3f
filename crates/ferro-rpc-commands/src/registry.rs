//! The command registry: a mapping from wire method names to immutable
//! per-method descriptors.
//!
//! A [`Registry`] is an ordinary value so applications and tests can run
//! several independent RPC surfaces; the crate also maintains a
//! process-wide default registry pre-populated with the built-in catalog,
//! wrapped by free functions of the same names. The default registry is
//! fully constructed before first use and treated as read-only afterwards.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::sync::RwLock;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use ferro_json_rpc::{Id, Request};

use crate::codec;
use crate::error::{Error, ErrorKind};
use crate::schema::{required_count, validate_param_specs, CommandSchema, ParamSpec};

/// Advisory bitmask describing which RPC surfaces a method belongs to.
///
/// Callers use these to filter help listings and to route methods;
/// registration only checks that at least one known bit is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UsageFlags(u32);

impl UsageFlags {
    /// Chain server method.
    pub const CHAIN: UsageFlags = UsageFlags(1);
    /// Wallet server method.
    pub const WALLET: UsageFlags = UsageFlags(1 << 1);
    /// Only available over a websocket connection.
    pub const WEBSOCKET: UsageFlags = UsageFlags(1 << 2);
    /// A server-to-client push; marshalled with a null id.
    pub const NOTIFICATION: UsageFlags = UsageFlags(1 << 3);
    /// Handled client-side rather than dispatched to a server.
    pub const NOTIFICATION_HANDLER: UsageFlags = UsageFlags(1 << 4);
    /// Result is passed through without decoding.
    pub const RAW: UsageFlags = UsageFlags(1 << 5);

    const KNOWN: u32 = (1 << 6) - 1;

    /// Builds a flag set from raw bits, e.g. flags decoded from a config
    /// file. Unknown bits are preserved and rejected at registration.
    pub const fn from_bits(bits: u32) -> UsageFlags {
        UsageFlags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: UsageFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Combines two flag sets; the `const` counterpart of `|`.
    pub const fn union(self, other: UsageFlags) -> UsageFlags {
        UsageFlags(self.0 | other.0)
    }

    fn is_valid(self) -> bool {
        self.0 != 0 && self.0 & !Self::KNOWN == 0
    }
}

impl BitOr for UsageFlags {
    type Output = UsageFlags;

    fn bitor(self, rhs: UsageFlags) -> UsageFlags {
        UsageFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for UsageFlags {
    fn bitor_assign(&mut self, rhs: UsageFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for UsageFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(UsageFlags, &str); 6] = [
            (UsageFlags::CHAIN, "chain"),
            (UsageFlags::WALLET, "wallet"),
            (UsageFlags::WEBSOCKET, "websocket"),
            (UsageFlags::NOTIFICATION, "notification"),
            (UsageFlags::NOTIFICATION_HANDLER, "notification-handler"),
            (UsageFlags::RAW, "raw"),
        ];
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}

/// A typed command value, as produced by the unmarshaller or the generic
/// constructor. Concrete records are recovered by downcasting.
pub trait RpcCommand: Any + fmt::Debug + Send + Sync {
    /// The wire method name this value invokes.
    fn method(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl<C> RpcCommand for C
where
    C: CommandSchema + Any + fmt::Debug + Send + Sync,
{
    fn method(&self) -> &'static str {
        C::METHOD
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) type DecodeFn = fn(Map<String, Value>) -> Result<Box<dyn RpcCommand>, Error>;
pub(crate) type EncodeFn = fn(&dyn RpcCommand, &[ParamSpec]) -> Result<Vec<Value>, Error>;

/// Immutable per-method metadata held by a registry for the life of the
/// process: the method name, its usage flags, the positional parameter
/// schema, and the typed encode/decode hooks captured at registration.
pub struct Descriptor {
    method: &'static str,
    flags: UsageFlags,
    specs: Vec<ParamSpec>,
    required: usize,
    variadic: bool,
    decode: DecodeFn,
    encode: EncodeFn,
}

impl Descriptor {
    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn usage_flags(&self) -> UsageFlags {
        self.flags
    }

    /// Field metadata in declaration order.
    pub fn param_specs(&self) -> &[ParamSpec] {
        &self.specs
    }

    /// Number of parameters that must always be supplied.
    pub fn required_params(&self) -> usize {
        self.required
    }

    pub fn has_variadic_tail(&self) -> bool {
        self.variadic
    }

    pub(crate) fn decode(&self) -> DecodeFn {
        self.decode
    }

    pub(crate) fn encode(&self) -> EncodeFn {
        self.encode
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("method", &self.method)
            .field("flags", &self.flags)
            .field("required", &self.required)
            .field("variadic", &self.variadic)
            .finish_non_exhaustive()
    }
}

/// A mapping from method names to command descriptors, plus the help
/// descriptions for registered methods.
#[derive(Debug, Default)]
pub struct Registry {
    methods: HashMap<&'static str, Descriptor>,
    methods_by_type: HashMap<TypeId, &'static str>,
    descriptions: HashMap<&'static str, String>,
}

impl Registry {
    /// An empty registry with no commands.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// A registry pre-populated with the Ferro command catalog and its
    /// descriptions.
    pub fn with_builtin_commands() -> Result<Registry, Error> {
        let mut registry = Registry::new();
        crate::chain::register_commands(&mut registry)?;
        crate::chain_websocket::register_commands(&mut registry)?;
        crate::wallet::register_commands(&mut registry)?;
        crate::wallet_websocket::register_commands(&mut registry)?;
        crate::extensions::register_commands(&mut registry)?;
        crate::notifications::register_commands(&mut registry)?;
        crate::descriptions::register_descriptions(&mut registry)?;
        registry.check_descriptions()?;
        Ok(registry)
    }

    /// Registers the command type `C` under its declared method name.
    ///
    /// The parameter schema is validated here; a rejected schema leaves
    /// the registry unchanged.
    pub fn register<C>(&mut self, flags: UsageFlags) -> Result<(), Error>
    where
        C: CommandSchema + Serialize + DeserializeOwned + fmt::Debug + Send + Sync + 'static,
    {
        if !flags.is_valid() {
            return Err(Error::new(
                ErrorKind::InvalidUsageFlags,
                format!("invalid usage flags {:#x} for method {}", flags.bits(), C::METHOD),
            ));
        }
        if self.methods.contains_key(C::METHOD) {
            return Err(Error::new(
                ErrorKind::DuplicateMethod,
                format!("method {} is already registered", C::METHOD),
            ));
        }
        if self.methods_by_type.contains_key(&TypeId::of::<C>()) {
            return Err(Error::new(
                ErrorKind::DuplicateMethod,
                format!(
                    "command type {} is already registered",
                    std::any::type_name::<C>()
                ),
            ));
        }

        let specs = C::param_specs();
        validate_param_specs(C::METHOD, &specs)?;
        let required = required_count(&specs);
        let variadic = specs.last().is_some_and(|spec| spec.variadic);

        debug!(method = C::METHOD, flags = %flags, "registered rpc command");
        self.methods_by_type.insert(TypeId::of::<C>(), C::METHOD);
        self.methods.insert(
            C::METHOD,
            Descriptor {
                method: C::METHOD,
                flags,
                specs,
                required,
                variadic,
                decode: codec::decode_command::<C>,
                encode: codec::encode_command::<C>,
            },
        );
        Ok(())
    }

    /// The descriptor for a method, or `UnregisteredMethod`.
    pub fn descriptor(&self, method: &str) -> Result<&Descriptor, Error> {
        self.methods.get(method).ok_or_else(|| {
            trace!(method, "lookup of unregistered method");
            Error::new(
                ErrorKind::UnregisteredMethod,
                format!("no method {method} is registered"),
            )
        })
    }

    /// The descriptor backing a command value, located by its concrete
    /// type.
    pub(crate) fn descriptor_for(&self, cmd: &dyn RpcCommand) -> Result<&Descriptor, Error> {
        self.methods_by_type
            .get(&cmd.as_any().type_id())
            .and_then(|method| self.methods.get(method))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::UnregisteredMethod,
                    format!("no command type is registered for method {}", cmd.method()),
                )
            })
    }

    pub fn is_registered(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    pub fn method_usage_flags(&self, method: &str) -> Result<UsageFlags, Error> {
        Ok(self.descriptor(method)?.usage_flags())
    }

    /// All registered method names, sorted.
    pub fn registered_methods(&self) -> Vec<&'static str> {
        let mut methods: Vec<&'static str> = self.methods.keys().copied().collect();
        methods.sort_unstable();
        methods
    }

    /// Attaches a help description to a registered method.
    pub fn set_description(&mut self, method: &str, text: impl Into<String>) -> Result<(), Error> {
        let key = self.descriptor(method)?.method();
        self.descriptions.insert(key, text.into());
        Ok(())
    }

    /// The help description for a method; `MissingDescription` when none
    /// was registered.
    pub fn description(&self, method: &str) -> Result<&str, Error> {
        self.descriptor(method)?;
        self.descriptions
            .get(method)
            .map(String::as_str)
            .ok_or_else(|| missing_description(method))
    }

    /// Verifies that every registered method carries a description.
    /// Called once the registry is fully populated.
    pub fn check_descriptions(&self) -> Result<(), Error> {
        let mut methods = self.registered_methods();
        methods.retain(|method| !self.descriptions.contains_key(method));
        match methods.first() {
            Some(method) => Err(missing_description(method)),
            None => Ok(()),
        }
    }

    /// One-line positional usage for a method, rendered from its schema:
    /// required parameters bare, optionals parenthesized, a variadic tail
    /// marked with an ellipsis.
    pub fn usage(&self, method: &str) -> Result<String, Error> {
        let descriptor = self.descriptor(method)?;
        let mut usage = String::from(descriptor.method());
        let mut optionals = Vec::new();
        for spec in descriptor.param_specs() {
            if spec.variadic {
                usage.push_str(&format!(" {}...", spec.name));
            } else if spec.optional {
                optionals.push(spec.name);
            } else {
                usage.push_str(&format!(" {}", spec.name));
            }
        }
        if !optionals.is_empty() {
            usage.push_str(&format!(" ({})", optionals.join(" ")));
        }
        Ok(usage)
    }

    /// Builds a typed command value from positional parameters, applying
    /// the same coercions as the unmarshaller. Omitted trailing optionals
    /// stay unset; the unmarshaller is what fills declared defaults.
    pub fn new_command(&self, method: &str, params: &[Value]) -> Result<Box<dyn RpcCommand>, Error> {
        codec::new_command(self, method, params)
    }

    /// Assembles the request envelope for a command value without
    /// serializing it.
    pub fn build_request(&self, id: Id, cmd: &dyn RpcCommand) -> Result<Request, Error> {
        codec::build_request(self, id, cmd)
    }

    /// Encodes a command value into JSON-RPC request bytes.
    pub fn marshal_request(&self, id: Id, cmd: &dyn RpcCommand) -> Result<Vec<u8>, Error> {
        codec::marshal_request(self, id, cmd)
    }

    /// Decodes a request envelope into the registered typed command,
    /// filling declared defaults for omitted optional parameters.
    pub fn unmarshal_request(&self, request: &Request) -> Result<Box<dyn RpcCommand>, Error> {
        codec::unmarshal_request(self, request)
    }
}

fn missing_description(method: &str) -> Error {
    Error::new(
        ErrorKind::MissingDescription,
        format!("no description registered for method {method}"),
    )
}

static DEFAULT_REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| {
    let registry = Registry::with_builtin_commands()
        .expect("built-in command catalog must register cleanly");
    RwLock::new(registry)
});

/// Registers an application-specific command with the process-wide
/// registry. Built-in methods are registered before first use; this is
/// for extensions added during startup.
pub fn register_command<C>(flags: UsageFlags) -> Result<(), Error>
where
    C: CommandSchema + Serialize + DeserializeOwned + fmt::Debug + Send + Sync + 'static,
{
    DEFAULT_REGISTRY
        .write()
        .expect("registry lock poisoned")
        .register::<C>(flags)
}

/// Attaches a help description to a method in the process-wide registry.
pub fn set_description(method: &str, text: impl Into<String>) -> Result<(), Error> {
    DEFAULT_REGISTRY
        .write()
        .expect("registry lock poisoned")
        .set_description(method, text)
}

/// [`Registry::new_command`] against the process-wide registry.
pub fn new_command(method: &str, params: &[Value]) -> Result<Box<dyn RpcCommand>, Error> {
    DEFAULT_REGISTRY
        .read()
        .expect("registry lock poisoned")
        .new_command(method, params)
}

/// [`Registry::build_request`] against the process-wide registry.
pub fn build_request(id: Id, cmd: &dyn RpcCommand) -> Result<Request, Error> {
    DEFAULT_REGISTRY
        .read()
        .expect("registry lock poisoned")
        .build_request(id, cmd)
}

/// [`Registry::marshal_request`] against the process-wide registry.
pub fn marshal_request(id: Id, cmd: &dyn RpcCommand) -> Result<Vec<u8>, Error> {
    DEFAULT_REGISTRY
        .read()
        .expect("registry lock poisoned")
        .marshal_request(id, cmd)
}

/// [`Registry::unmarshal_request`] against the process-wide registry.
pub fn unmarshal_request(request: &Request) -> Result<Box<dyn RpcCommand>, Error> {
    DEFAULT_REGISTRY
        .read()
        .expect("registry lock poisoned")
        .unmarshal_request(request)
}

/// [`Registry::method_usage_flags`] against the process-wide registry.
pub fn method_usage_flags(method: &str) -> Result<UsageFlags, Error> {
    DEFAULT_REGISTRY
        .read()
        .expect("registry lock poisoned")
        .method_usage_flags(method)
}

/// [`Registry::description`] against the process-wide registry.
pub fn method_description(method: &str) -> Result<String, Error> {
    DEFAULT_REGISTRY
        .read()
        .expect("registry lock poisoned")
        .description(method)
        .map(str::to_owned)
}

/// [`Registry::usage`] against the process-wide registry.
pub fn method_usage(method: &str) -> Result<String, Error> {
    DEFAULT_REGISTRY
        .read()
        .expect("registry lock poisoned")
        .usage(method)
}

/// [`Registry::registered_methods`] against the process-wide registry.
pub fn registered_methods() -> Vec<&'static str> {
    DEFAULT_REGISTRY
        .read()
        .expect("registry lock poisoned")
        .registered_methods()
}
