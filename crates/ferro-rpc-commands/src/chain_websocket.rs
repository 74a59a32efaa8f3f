//! Chain server commands that are only available over a websocket
//! connection: subscription management and rescans.

use serde::{Deserialize, Serialize};
use ferro_rpc_derive::CommandSchema;

use crate::error::Error;
use crate::primitives::OutPoint;
use crate::registry::{Registry, UsageFlags};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "authenticate")]
pub struct AuthenticateCmd {
    pub username: String,
    pub passphrase: String,
}

impl AuthenticateCmd {
    pub fn new(username: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            passphrase: passphrase.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "notifyblocks")]
pub struct NotifyBlocksCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "stopnotifyblocks")]
pub struct StopNotifyBlocksCmd {}

/// notifynewtransactions' verbose flag defaults to false, unlike most
/// other verbose toggles in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "notifynewtransactions")]
pub struct NotifyNewTransactionsCmd {
    #[command(default = false)]
    pub verbose: Option<bool>,
}

impl NotifyNewTransactionsCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "stopnotifynewtransactions")]
pub struct StopNotifyNewTransactionsCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "notifyreceived")]
pub struct NotifyReceivedCmd {
    pub addresses: Vec<String>,
}

impl NotifyReceivedCmd {
    pub fn new(addresses: Vec<String>) -> Self {
        Self { addresses }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "stopnotifyreceived")]
pub struct StopNotifyReceivedCmd {
    pub addresses: Vec<String>,
}

impl StopNotifyReceivedCmd {
    pub fn new(addresses: Vec<String>) -> Self {
        Self { addresses }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "notifyspent")]
pub struct NotifySpentCmd {
    pub out_points: Vec<OutPoint>,
}

impl NotifySpentCmd {
    pub fn new(out_points: Vec<OutPoint>) -> Self {
        Self { out_points }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "stopnotifyspent")]
pub struct StopNotifySpentCmd {
    pub out_points: Vec<OutPoint>,
}

impl StopNotifySpentCmd {
    pub fn new(out_points: Vec<OutPoint>) -> Self {
        Self { out_points }
    }
}

/// rescan replays blocks from begin_block looking for transactions
/// paying the given addresses or spending the given outpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "rescan")]
pub struct RescanCmd {
    pub begin_block: String,
    pub addresses: Vec<String>,
    pub out_points: Vec<OutPoint>,
    pub end_block: Option<String>,
}

impl RescanCmd {
    pub fn new(
        begin_block: impl Into<String>,
        addresses: Vec<String>,
        out_points: Vec<OutPoint>,
    ) -> Self {
        Self {
            begin_block: begin_block.into(),
            addresses,
            out_points,
            end_block: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "loadtxfilter")]
pub struct LoadTxFilterCmd {
    pub reload: bool,
    pub addresses: Vec<String>,
    pub out_points: Vec<OutPoint>,
}

impl LoadTxFilterCmd {
    pub fn new(reload: bool, addresses: Vec<String>, out_points: Vec<OutPoint>) -> Self {
        Self {
            reload,
            addresses,
            out_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "rescanblocks")]
pub struct RescanBlocksCmd {
    pub block_hashes: Vec<String>,
}

impl RescanBlocksCmd {
    pub fn new(block_hashes: Vec<String>) -> Self {
        Self { block_hashes }
    }
}

pub(crate) fn register_commands(registry: &mut Registry) -> Result<(), Error> {
    const FLAGS: UsageFlags = UsageFlags::CHAIN.union(UsageFlags::WEBSOCKET);
    registry.register::<AuthenticateCmd>(FLAGS)?;
    registry.register::<NotifyBlocksCmd>(FLAGS)?;
    registry.register::<StopNotifyBlocksCmd>(FLAGS)?;
    registry.register::<NotifyNewTransactionsCmd>(FLAGS)?;
    registry.register::<StopNotifyNewTransactionsCmd>(FLAGS)?;
    registry.register::<NotifyReceivedCmd>(FLAGS)?;
    registry.register::<StopNotifyReceivedCmd>(FLAGS)?;
    registry.register::<NotifySpentCmd>(FLAGS)?;
    registry.register::<StopNotifySpentCmd>(FLAGS)?;
    registry.register::<RescanCmd>(FLAGS)?;
    registry.register::<LoadTxFilterCmd>(FLAGS)?;
    registry.register::<RescanBlocksCmd>(FLAGS)?;
    Ok(())
}
