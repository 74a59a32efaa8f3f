//! Websocket notifications: server-to-client pushes sharing the request
//! envelope with a null id. They are registered like commands so clients
//! can unmarshal incoming notifications through the same codec.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ferro_rpc_derive::CommandSchema;

use crate::error::Error;
use crate::registry::{Registry, UsageFlags};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "blockconnected")]
pub struct BlockConnectedNtfn {
    pub hash: String,
    pub height: i32,
    pub time: i64,
}

impl BlockConnectedNtfn {
    pub fn new(hash: impl Into<String>, height: i32, time: i64) -> Self {
        Self {
            hash: hash.into(),
            height,
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "blockdisconnected")]
pub struct BlockDisconnectedNtfn {
    pub hash: String,
    pub height: i32,
    pub time: i64,
}

impl BlockDisconnectedNtfn {
    pub fn new(hash: impl Into<String>, height: i32, time: i64) -> Self {
        Self {
            hash: hash.into(),
            height,
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "filteredblockconnected")]
pub struct FilteredBlockConnectedNtfn {
    pub height: i32,
    pub header: String,
    pub subscribed_txs: Vec<String>,
}

impl FilteredBlockConnectedNtfn {
    pub fn new(height: i32, header: impl Into<String>, subscribed_txs: Vec<String>) -> Self {
        Self {
            height,
            header: header.into(),
            subscribed_txs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "filteredblockdisconnected")]
pub struct FilteredBlockDisconnectedNtfn {
    pub height: i32,
    pub header: String,
}

impl FilteredBlockDisconnectedNtfn {
    pub fn new(height: i32, header: impl Into<String>) -> Self {
        Self {
            height,
            header: header.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
#[command(method = "txaccepted")]
pub struct TxAcceptedNtfn {
    pub tx_id: String,
    pub amount: f64,
}

impl TxAcceptedNtfn {
    pub fn new(tx_id: impl Into<String>, amount: f64) -> Self {
        Self {
            tx_id: tx_id.into(),
            amount,
        }
    }
}

/// The verbose form carries the fully decoded transaction as emitted by
/// getrawtransaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
#[command(method = "txacceptedverbose")]
pub struct TxAcceptedVerboseNtfn {
    pub raw_tx: Value,
}

impl TxAcceptedVerboseNtfn {
    pub fn new(raw_tx: Value) -> Self {
        Self { raw_tx }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "relevanttxaccepted")]
pub struct RelevantTxAcceptedNtfn {
    pub transaction: String,
}

impl RelevantTxAcceptedNtfn {
    pub fn new(transaction: impl Into<String>) -> Self {
        Self {
            transaction: transaction.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "rescanfinished")]
pub struct RescanFinishedNtfn {
    pub hash: String,
    pub height: i32,
    pub time: i64,
}

impl RescanFinishedNtfn {
    pub fn new(hash: impl Into<String>, height: i32, time: i64) -> Self {
        Self {
            hash: hash.into(),
            height,
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "rescanprogress")]
pub struct RescanProgressNtfn {
    pub hash: String,
    pub height: i32,
    pub time: i64,
}

impl RescanProgressNtfn {
    pub fn new(hash: impl Into<String>, height: i32, time: i64) -> Self {
        Self {
            hash: hash.into(),
            height,
            time,
        }
    }
}

pub(crate) fn register_commands(registry: &mut Registry) -> Result<(), Error> {
    const FLAGS: UsageFlags = UsageFlags::NOTIFICATION;
    registry.register::<BlockConnectedNtfn>(FLAGS)?;
    registry.register::<BlockDisconnectedNtfn>(FLAGS)?;
    registry.register::<FilteredBlockConnectedNtfn>(FLAGS)?;
    registry.register::<FilteredBlockDisconnectedNtfn>(FLAGS)?;
    registry.register::<TxAcceptedNtfn>(FLAGS)?;
    registry.register::<TxAcceptedVerboseNtfn>(FLAGS)?;
    registry.register::<RelevantTxAcceptedNtfn>(FLAGS)?;
    registry.register::<RescanFinishedNtfn>(FLAGS)?;
    registry.register::<RescanProgressNtfn>(FLAGS)?;
    Ok(())
}
