//! Node-specific extension commands: methods the Ferro daemon answers
//! beyond the common chain server surface.

use serde::{Deserialize, Serialize};
use ferro_rpc_derive::CommandSchema;

use crate::error::Error;
use crate::primitives::NodeSubCmd;
use crate::registry::{Registry, UsageFlags};

/// debuglevel adjusts subsystem log levels at runtime. The spec is
/// either a bare level or a subsystem=level list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "debuglevel")]
pub struct DebugLevelCmd {
    pub level_spec: String,
}

impl DebugLevelCmd {
    pub fn new(level_spec: impl Into<String>) -> Self {
        Self {
            level_spec: level_spec.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "node")]
pub struct NodeCmd {
    #[command(kind = "string")]
    pub sub_cmd: NodeSubCmd,
    pub target: String,
    pub connect_sub_cmd: Option<String>,
}

impl NodeCmd {
    pub fn new(sub_cmd: NodeSubCmd, target: impl Into<String>) -> Self {
        Self {
            sub_cmd,
            target: target.into(),
            connect_sub_cmd: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "generate")]
pub struct GenerateCmd {
    pub num_blocks: u32,
}

impl GenerateCmd {
    pub fn new(num_blocks: u32) -> Self {
        Self { num_blocks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getbestblock")]
pub struct GetBestBlockCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getcurrentnet")]
pub struct GetCurrentNetCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getheaders")]
pub struct GetHeadersCmd {
    pub block_locators: Vec<String>,
    pub hash_stop: String,
}

impl GetHeadersCmd {
    pub fn new(block_locators: Vec<String>, hash_stop: impl Into<String>) -> Self {
        Self {
            block_locators,
            hash_stop: hash_stop.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "version")]
pub struct VersionCmd {}

pub(crate) fn register_commands(registry: &mut Registry) -> Result<(), Error> {
    const FLAGS: UsageFlags = UsageFlags::CHAIN;
    registry.register::<DebugLevelCmd>(FLAGS)?;
    registry.register::<NodeCmd>(FLAGS)?;
    registry.register::<GenerateCmd>(FLAGS)?;
    registry.register::<GetBestBlockCmd>(FLAGS)?;
    registry.register::<GetCurrentNetCmd>(FLAGS)?;
    registry.register::<GetHeadersCmd>(FLAGS)?;
    registry.register::<VersionCmd>(FLAGS)?;
    Ok(())
}
