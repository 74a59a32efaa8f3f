//! Chain server commands.
//!
//! One record per method accepted by the Ferro chain server over HTTP
//! POST or websocket. Optional parameters are `Option` fields; the
//! `new` constructors take only the required parameters and leave
//! optionals unset, so marshalled requests contain exactly what the
//! caller supplied. Full construction uses struct literals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ferro_rpc_derive::CommandSchema;

use crate::error::Error;
use crate::primitives::{
    AddNodeSubCmd, FilterType, SubmitBlockOptions, TemplateRequest, TransactionInput,
};
use crate::registry::{Registry, UsageFlags};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "addnode")]
pub struct AddNodeCmd {
    pub addr: String,
    #[command(kind = "string")]
    pub sub_cmd: AddNodeSubCmd,
}

impl AddNodeCmd {
    pub fn new(addr: impl Into<String>, sub_cmd: AddNodeSubCmd) -> Self {
        Self {
            addr: addr.into(),
            sub_cmd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
#[command(method = "createrawtransaction")]
pub struct CreateRawTransactionCmd {
    pub inputs: Vec<TransactionInput>,
    /// Destination addresses mapped to amounts in whole coins. A sorted
    /// map keeps the encoded form deterministic.
    pub amounts: BTreeMap<String, f64>,
    pub lock_time: Option<i64>,
}

impl CreateRawTransactionCmd {
    pub fn new(inputs: Vec<TransactionInput>, amounts: BTreeMap<String, f64>) -> Self {
        Self {
            inputs,
            amounts,
            lock_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "decoderawtransaction")]
pub struct DecodeRawTransactionCmd {
    pub hex_tx: String,
}

impl DecodeRawTransactionCmd {
    pub fn new(hex_tx: impl Into<String>) -> Self {
        Self {
            hex_tx: hex_tx.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "decodescript")]
pub struct DecodeScriptCmd {
    pub hex_script: String,
}

impl DecodeScriptCmd {
    pub fn new(hex_script: impl Into<String>) -> Self {
        Self {
            hex_script: hex_script.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getaddednodeinfo")]
pub struct GetAddedNodeInfoCmd {
    pub dns: bool,
    pub node: Option<String>,
}

impl GetAddedNodeInfoCmd {
    pub fn new(dns: bool) -> Self {
        Self { dns, node: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getbestblockhash")]
pub struct GetBestBlockHashCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getblock")]
pub struct GetBlockCmd {
    pub hash: String,
    #[command(default = true)]
    pub verbose: Option<bool>,
    #[command(default = false)]
    pub verbose_tx: Option<bool>,
}

impl GetBlockCmd {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            verbose: None,
            verbose_tx: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getblockchaininfo")]
pub struct GetBlockChainInfoCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getblockcount")]
pub struct GetBlockCountCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getblockhash")]
pub struct GetBlockHashCmd {
    pub index: i64,
}

impl GetBlockHashCmd {
    pub fn new(index: i64) -> Self {
        Self { index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getblockheader")]
pub struct GetBlockHeaderCmd {
    pub hash: String,
    #[command(default = true)]
    pub verbose: Option<bool>,
}

impl GetBlockHeaderCmd {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            verbose: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getblocktemplate")]
pub struct GetBlockTemplateCmd {
    pub request: Option<TemplateRequest>,
}

impl GetBlockTemplateCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

/// getcfilter retrieves the committed filter for a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getcfilter")]
pub struct GetCFilterCmd {
    pub hash: String,
    #[command(kind = "uint32")]
    pub filter_type: FilterType,
}

impl GetCFilterCmd {
    pub fn new(hash: impl Into<String>, filter_type: FilterType) -> Self {
        Self {
            hash: hash.into(),
            filter_type,
        }
    }
}

/// getcfilterheader retrieves the filter header chain entry for a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getcfilterheader")]
pub struct GetCFilterHeaderCmd {
    pub hash: String,
    #[command(kind = "uint32")]
    pub filter_type: FilterType,
}

impl GetCFilterHeaderCmd {
    pub fn new(hash: impl Into<String>, filter_type: FilterType) -> Self {
        Self {
            hash: hash.into(),
            filter_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getchaintips")]
pub struct GetChainTipsCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getconnectioncount")]
pub struct GetConnectionCountCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getdifficulty")]
pub struct GetDifficultyCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getgenerate")]
pub struct GetGenerateCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "gethashespersec")]
pub struct GetHashesPerSecCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getinfo")]
pub struct GetInfoCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getmempoolentry")]
pub struct GetMempoolEntryCmd {
    pub tx_id: String,
}

impl GetMempoolEntryCmd {
    pub fn new(tx_id: impl Into<String>) -> Self {
        Self { tx_id: tx_id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getmempoolinfo")]
pub struct GetMempoolInfoCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getmininginfo")]
pub struct GetMiningInfoCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getnetworkinfo")]
pub struct GetNetworkInfoCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getnettotals")]
pub struct GetNetTotalsCmd {}

/// getnetworkhashps estimates the network hash rate. A height of -1
/// means the best block; blocks is the window size.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getnetworkhashps")]
pub struct GetNetworkHashPSCmd {
    #[command(default = 120)]
    pub blocks: Option<i64>,
    #[command(default = -1)]
    pub height: Option<i64>,
}

impl GetNetworkHashPSCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getpeerinfo")]
pub struct GetPeerInfoCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getrawmempool")]
pub struct GetRawMempoolCmd {
    #[command(default = false)]
    pub verbose: Option<bool>,
}

impl GetRawMempoolCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

/// getrawtransaction's verbose parameter is a legacy 0/1 integer rather
/// than a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getrawtransaction")]
pub struct GetRawTransactionCmd {
    pub txid: String,
    #[command(default = 0)]
    pub verbose: Option<i64>,
}

impl GetRawTransactionCmd {
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            verbose: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "gettxout")]
pub struct GetTxOutCmd {
    pub txid: String,
    pub vout: u32,
    #[command(default = true)]
    pub include_mempool: Option<bool>,
}

impl GetTxOutCmd {
    pub fn new(txid: impl Into<String>, vout: u32) -> Self {
        Self {
            txid: txid.into(),
            vout,
            include_mempool: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "gettxoutproof")]
pub struct GetTxOutProofCmd {
    pub tx_ids: Vec<String>,
    pub block_hash: Option<String>,
}

impl GetTxOutProofCmd {
    pub fn new(tx_ids: Vec<String>) -> Self {
        Self {
            tx_ids,
            block_hash: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "gettxoutsetinfo")]
pub struct GetTxOutSetInfoCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getwork")]
pub struct GetWorkCmd {
    pub data: Option<String>,
}

impl GetWorkCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "help")]
pub struct HelpCmd {
    pub command: Option<String>,
}

impl HelpCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "invalidateblock")]
pub struct InvalidateBlockCmd {
    pub block_hash: String,
}

impl InvalidateBlockCmd {
    pub fn new(block_hash: impl Into<String>) -> Self {
        Self {
            block_hash: block_hash.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "ping")]
pub struct PingCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "preciousblock")]
pub struct PreciousBlockCmd {
    pub block_hash: String,
}

impl PreciousBlockCmd {
    pub fn new(block_hash: impl Into<String>) -> Self {
        Self {
            block_hash: block_hash.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "reconsiderblock")]
pub struct ReconsiderBlockCmd {
    pub block_hash: String,
}

impl ReconsiderBlockCmd {
    pub fn new(block_hash: impl Into<String>) -> Self {
        Self {
            block_hash: block_hash.into(),
        }
    }
}

/// searchrawtransactions pages through the address index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "searchrawtransactions")]
pub struct SearchRawTransactionsCmd {
    pub address: String,
    #[command(default = 1)]
    pub verbose: Option<i64>,
    #[command(default = 0)]
    pub skip: Option<i64>,
    #[command(default = 100)]
    pub count: Option<i64>,
    #[command(default = 0)]
    pub vin_extra: Option<i64>,
    #[command(default = false)]
    pub reverse: Option<bool>,
    pub filter_addrs: Option<Vec<String>>,
}

impl SearchRawTransactionsCmd {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            verbose: None,
            skip: None,
            count: None,
            vin_extra: None,
            reverse: None,
            filter_addrs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "sendrawtransaction")]
pub struct SendRawTransactionCmd {
    pub hex_tx: String,
    #[command(default = false)]
    pub allow_high_fees: Option<bool>,
}

impl SendRawTransactionCmd {
    pub fn new(hex_tx: impl Into<String>) -> Self {
        Self {
            hex_tx: hex_tx.into(),
            allow_high_fees: None,
        }
    }
}

/// setgenerate's process limit of -1 means all available cores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "setgenerate")]
pub struct SetGenerateCmd {
    pub generate: bool,
    #[command(default = -1)]
    pub gen_proc_limit: Option<i64>,
}

impl SetGenerateCmd {
    pub fn new(generate: bool) -> Self {
        Self {
            generate,
            gen_proc_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "stop")]
pub struct StopCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "submitblock")]
pub struct SubmitBlockCmd {
    pub hex_block: String,
    pub options: Option<SubmitBlockOptions>,
}

impl SubmitBlockCmd {
    pub fn new(hex_block: impl Into<String>) -> Self {
        Self {
            hex_block: hex_block.into(),
            options: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "uptime")]
pub struct UptimeCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "validateaddress")]
pub struct ValidateAddressCmd {
    pub address: String,
}

impl ValidateAddressCmd {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "verifychain")]
pub struct VerifyChainCmd {
    #[command(default = 3)]
    pub check_level: Option<i32>,
    #[command(default = 288)]
    pub check_depth: Option<i32>,
}

impl VerifyChainCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "verifymessage")]
pub struct VerifyMessageCmd {
    pub address: String,
    pub signature: String,
    pub message: String,
}

impl VerifyMessageCmd {
    pub fn new(
        address: impl Into<String>,
        signature: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            signature: signature.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "verifytxoutproof")]
pub struct VerifyTxOutProofCmd {
    pub proof: String,
}

impl VerifyTxOutProofCmd {
    pub fn new(proof: impl Into<String>) -> Self {
        Self {
            proof: proof.into(),
        }
    }
}

pub(crate) fn register_commands(registry: &mut Registry) -> Result<(), Error> {
    const FLAGS: UsageFlags = UsageFlags::CHAIN;
    registry.register::<AddNodeCmd>(FLAGS)?;
    registry.register::<CreateRawTransactionCmd>(FLAGS)?;
    registry.register::<DecodeRawTransactionCmd>(FLAGS)?;
    registry.register::<DecodeScriptCmd>(FLAGS)?;
    registry.register::<GetAddedNodeInfoCmd>(FLAGS)?;
    registry.register::<GetBestBlockHashCmd>(FLAGS)?;
    registry.register::<GetBlockCmd>(FLAGS)?;
    registry.register::<GetBlockChainInfoCmd>(FLAGS)?;
    registry.register::<GetBlockCountCmd>(FLAGS)?;
    registry.register::<GetBlockHashCmd>(FLAGS)?;
    registry.register::<GetBlockHeaderCmd>(FLAGS)?;
    registry.register::<GetBlockTemplateCmd>(FLAGS)?;
    registry.register::<GetCFilterCmd>(FLAGS)?;
    registry.register::<GetCFilterHeaderCmd>(FLAGS)?;
    registry.register::<GetChainTipsCmd>(FLAGS)?;
    registry.register::<GetConnectionCountCmd>(FLAGS)?;
    registry.register::<GetDifficultyCmd>(FLAGS)?;
    registry.register::<GetGenerateCmd>(FLAGS)?;
    registry.register::<GetHashesPerSecCmd>(FLAGS)?;
    registry.register::<GetInfoCmd>(FLAGS)?;
    registry.register::<GetMempoolEntryCmd>(FLAGS)?;
    registry.register::<GetMempoolInfoCmd>(FLAGS)?;
    registry.register::<GetMiningInfoCmd>(FLAGS)?;
    registry.register::<GetNetworkInfoCmd>(FLAGS)?;
    registry.register::<GetNetTotalsCmd>(FLAGS)?;
    registry.register::<GetNetworkHashPSCmd>(FLAGS)?;
    registry.register::<GetPeerInfoCmd>(FLAGS)?;
    registry.register::<GetRawMempoolCmd>(FLAGS)?;
    registry.register::<GetRawTransactionCmd>(FLAGS)?;
    registry.register::<GetTxOutCmd>(FLAGS)?;
    registry.register::<GetTxOutProofCmd>(FLAGS)?;
    registry.register::<GetTxOutSetInfoCmd>(FLAGS)?;
    registry.register::<GetWorkCmd>(FLAGS)?;
    registry.register::<HelpCmd>(FLAGS)?;
    registry.register::<InvalidateBlockCmd>(FLAGS)?;
    registry.register::<PingCmd>(FLAGS)?;
    registry.register::<PreciousBlockCmd>(FLAGS)?;
    registry.register::<ReconsiderBlockCmd>(FLAGS)?;
    registry.register::<SearchRawTransactionsCmd>(FLAGS)?;
    registry.register::<SendRawTransactionCmd>(FLAGS)?;
    registry.register::<SetGenerateCmd>(FLAGS)?;
    registry.register::<StopCmd>(FLAGS)?;
    registry.register::<SubmitBlockCmd>(FLAGS)?;
    registry.register::<UptimeCmd>(FLAGS)?;
    registry.register::<ValidateAddressCmd>(FLAGS)?;
    registry.register::<VerifyChainCmd>(FLAGS)?;
    registry.register::<VerifyMessageCmd>(FLAGS)?;
    registry.register::<VerifyTxOutProofCmd>(FLAGS)?;
    Ok(())
}
