//! Wallet server commands.
//!
//! Account-era wallet methods: balances, addresses, transaction listing,
//! sending, and key management. Amounts are expressed in whole coins as
//! 64-bit floats, matching the wire convention.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ferro_rpc_derive::CommandSchema;

use crate::error::Error;
use crate::primitives::{RawTxInput, TransactionInput};
use crate::registry::{Registry, UsageFlags};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "addmultisigaddress")]
pub struct AddMultisigAddressCmd {
    pub n_required: i64,
    pub keys: Vec<String>,
    pub account: Option<String>,
}

impl AddMultisigAddressCmd {
    pub fn new(n_required: i64, keys: Vec<String>) -> Self {
        Self {
            n_required,
            keys,
            account: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "addwitnessaddress")]
pub struct AddWitnessAddressCmd {
    pub address: String,
}

impl AddWitnessAddressCmd {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "createmultisig")]
pub struct CreateMultisigCmd {
    pub n_required: i64,
    pub keys: Vec<String>,
}

impl CreateMultisigCmd {
    pub fn new(n_required: i64, keys: Vec<String>) -> Self {
        Self { n_required, keys }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "dumpprivkey")]
pub struct DumpPrivKeyCmd {
    pub address: String,
}

impl DumpPrivKeyCmd {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "encryptwallet")]
pub struct EncryptWalletCmd {
    pub passphrase: String,
}

impl EncryptWalletCmd {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "estimatefee")]
pub struct EstimateFeeCmd {
    pub num_blocks: i64,
}

impl EstimateFeeCmd {
    pub fn new(num_blocks: i64) -> Self {
        Self { num_blocks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "estimatepriority")]
pub struct EstimatePriorityCmd {
    pub num_blocks: i64,
}

impl EstimatePriorityCmd {
    pub fn new(num_blocks: i64) -> Self {
        Self { num_blocks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getaccount")]
pub struct GetAccountCmd {
    pub address: String,
}

impl GetAccountCmd {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getaccountaddress")]
pub struct GetAccountAddressCmd {
    pub account: String,
}

impl GetAccountAddressCmd {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getaddressesbyaccount")]
pub struct GetAddressesByAccountCmd {
    pub account: String,
}

impl GetAddressesByAccountCmd {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getbalance")]
pub struct GetBalanceCmd {
    pub account: Option<String>,
    #[command(default = 1)]
    pub min_conf: Option<i64>,
}

impl GetBalanceCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getnewaddress")]
pub struct GetNewAddressCmd {
    pub account: Option<String>,
}

impl GetNewAddressCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getrawchangeaddress")]
pub struct GetRawChangeAddressCmd {
    pub account: Option<String>,
}

impl GetRawChangeAddressCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getreceivedbyaccount")]
pub struct GetReceivedByAccountCmd {
    pub account: String,
    #[command(default = 1)]
    pub min_conf: Option<i64>,
}

impl GetReceivedByAccountCmd {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            min_conf: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "getreceivedbyaddress")]
pub struct GetReceivedByAddressCmd {
    pub address: String,
    #[command(default = 1)]
    pub min_conf: Option<i64>,
}

impl GetReceivedByAddressCmd {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            min_conf: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "gettransaction")]
pub struct GetTransactionCmd {
    pub txid: String,
    #[command(default = false)]
    pub include_watch_only: Option<bool>,
}

impl GetTransactionCmd {
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            include_watch_only: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getwalletinfo")]
pub struct GetWalletInfoCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "importprivkey")]
pub struct ImportPrivKeyCmd {
    pub priv_key: String,
    pub label: Option<String>,
    #[command(default = true)]
    pub rescan: Option<bool>,
}

impl ImportPrivKeyCmd {
    pub fn new(priv_key: impl Into<String>) -> Self {
        Self {
            priv_key: priv_key.into(),
            label: None,
            rescan: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "keypoolrefill")]
pub struct KeyPoolRefillCmd {
    #[command(default = 100)]
    pub new_size: Option<u32>,
}

impl KeyPoolRefillCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listaccounts")]
pub struct ListAccountsCmd {
    #[command(default = 1)]
    pub min_conf: Option<i64>,
}

impl ListAccountsCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listaddressgroupings")]
pub struct ListAddressGroupingsCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listlockunspent")]
pub struct ListLockUnspentCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listreceivedbyaccount")]
pub struct ListReceivedByAccountCmd {
    #[command(default = 1)]
    pub min_conf: Option<i64>,
    #[command(default = false)]
    pub include_empty: Option<bool>,
    #[command(default = false)]
    pub include_watch_only: Option<bool>,
}

impl ListReceivedByAccountCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listreceivedbyaddress")]
pub struct ListReceivedByAddressCmd {
    #[command(default = 1)]
    pub min_conf: Option<i64>,
    #[command(default = false)]
    pub include_empty: Option<bool>,
    #[command(default = false)]
    pub include_watch_only: Option<bool>,
}

impl ListReceivedByAddressCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listsinceblock")]
pub struct ListSinceBlockCmd {
    pub block_hash: Option<String>,
    #[command(default = 1)]
    pub target_confirmations: Option<i64>,
    #[command(default = false)]
    pub include_watch_only: Option<bool>,
}

impl ListSinceBlockCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listtransactions")]
pub struct ListTransactionsCmd {
    pub account: Option<String>,
    #[command(default = 10)]
    pub count: Option<i64>,
    #[command(default = 0)]
    pub from: Option<i64>,
    #[command(default = false)]
    pub include_watch_only: Option<bool>,
}

impl ListTransactionsCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listunspent")]
pub struct ListUnspentCmd {
    #[command(default = 1)]
    pub min_conf: Option<i64>,
    #[command(default = 9999999)]
    pub max_conf: Option<i64>,
    pub addresses: Option<Vec<String>>,
}

impl ListUnspentCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "lockunspent")]
pub struct LockUnspentCmd {
    pub unlock: bool,
    pub transactions: Vec<TransactionInput>,
}

impl LockUnspentCmd {
    pub fn new(unlock: bool, transactions: Vec<TransactionInput>) -> Self {
        Self {
            unlock,
            transactions,
        }
    }
}

/// move shifts funds between accounts inside the wallet; nothing hits
/// the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
#[command(method = "move")]
pub struct MoveCmd {
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    #[command(default = 1)]
    pub min_conf: Option<i64>,
    pub comment: Option<String>,
}

impl MoveCmd {
    pub fn new(from_account: impl Into<String>, to_account: impl Into<String>, amount: f64) -> Self {
        Self {
            from_account: from_account.into(),
            to_account: to_account.into(),
            amount,
            min_conf: None,
            comment: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
#[command(method = "sendfrom")]
pub struct SendFromCmd {
    pub from_account: String,
    pub to_address: String,
    pub amount: f64,
    #[command(default = 1)]
    pub min_conf: Option<i64>,
    pub comment: Option<String>,
    pub comment_to: Option<String>,
}

impl SendFromCmd {
    pub fn new(from_account: impl Into<String>, to_address: impl Into<String>, amount: f64) -> Self {
        Self {
            from_account: from_account.into(),
            to_address: to_address.into(),
            amount,
            min_conf: None,
            comment: None,
            comment_to: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
#[command(method = "sendmany")]
pub struct SendManyCmd {
    pub from_account: String,
    pub amounts: BTreeMap<String, f64>,
    #[command(default = 1)]
    pub min_conf: Option<i64>,
    pub comment: Option<String>,
}

impl SendManyCmd {
    pub fn new(from_account: impl Into<String>, amounts: BTreeMap<String, f64>) -> Self {
        Self {
            from_account: from_account.into(),
            amounts,
            min_conf: None,
            comment: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
#[command(method = "sendtoaddress")]
pub struct SendToAddressCmd {
    pub address: String,
    pub amount: f64,
    pub comment: Option<String>,
    pub comment_to: Option<String>,
}

impl SendToAddressCmd {
    pub fn new(address: impl Into<String>, amount: f64) -> Self {
        Self {
            address: address.into(),
            amount,
            comment: None,
            comment_to: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "setaccount")]
pub struct SetAccountCmd {
    pub address: String,
    pub account: String,
}

impl SetAccountCmd {
    pub fn new(address: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            account: account.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CommandSchema)]
#[command(method = "settxfee")]
pub struct SetTxFeeCmd {
    pub amount: f64,
}

impl SetTxFeeCmd {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "signmessage")]
pub struct SignMessageCmd {
    pub address: String,
    pub message: String,
}

impl SignMessageCmd {
    pub fn new(address: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            message: message.into(),
        }
    }
}

/// signrawtransaction's signature hash flags default to signing
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "signrawtransaction")]
pub struct SignRawTransactionCmd {
    pub raw_tx: String,
    pub inputs: Option<Vec<RawTxInput>>,
    pub priv_keys: Option<Vec<String>>,
    #[command(default = "ALL")]
    pub flags: Option<String>,
}

impl SignRawTransactionCmd {
    pub fn new(raw_tx: impl Into<String>) -> Self {
        Self {
            raw_tx: raw_tx.into(),
            inputs: None,
            priv_keys: None,
            flags: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "walletlock")]
pub struct WalletLockCmd {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "walletpassphrase")]
pub struct WalletPassphraseCmd {
    pub passphrase: String,
    pub timeout: i64,
}

impl WalletPassphraseCmd {
    pub fn new(passphrase: impl Into<String>, timeout: i64) -> Self {
        Self {
            passphrase: passphrase.into(),
            timeout,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "walletpassphrasechange")]
pub struct WalletPassphraseChangeCmd {
    pub old_passphrase: String,
    pub new_passphrase: String,
}

impl WalletPassphraseChangeCmd {
    pub fn new(old_passphrase: impl Into<String>, new_passphrase: impl Into<String>) -> Self {
        Self {
            old_passphrase: old_passphrase.into(),
            new_passphrase: new_passphrase.into(),
        }
    }
}

pub(crate) fn register_commands(registry: &mut Registry) -> Result<(), Error> {
    const FLAGS: UsageFlags = UsageFlags::WALLET;
    registry.register::<AddMultisigAddressCmd>(FLAGS)?;
    registry.register::<AddWitnessAddressCmd>(FLAGS)?;
    registry.register::<CreateMultisigCmd>(FLAGS)?;
    registry.register::<DumpPrivKeyCmd>(FLAGS)?;
    registry.register::<EncryptWalletCmd>(FLAGS)?;
    registry.register::<EstimateFeeCmd>(FLAGS)?;
    registry.register::<EstimatePriorityCmd>(FLAGS)?;
    registry.register::<GetAccountCmd>(FLAGS)?;
    registry.register::<GetAccountAddressCmd>(FLAGS)?;
    registry.register::<GetAddressesByAccountCmd>(FLAGS)?;
    registry.register::<GetBalanceCmd>(FLAGS)?;
    registry.register::<GetNewAddressCmd>(FLAGS)?;
    registry.register::<GetRawChangeAddressCmd>(FLAGS)?;
    registry.register::<GetReceivedByAccountCmd>(FLAGS)?;
    registry.register::<GetReceivedByAddressCmd>(FLAGS)?;
    registry.register::<GetTransactionCmd>(FLAGS)?;
    registry.register::<GetWalletInfoCmd>(FLAGS)?;
    registry.register::<ImportPrivKeyCmd>(FLAGS)?;
    registry.register::<KeyPoolRefillCmd>(FLAGS)?;
    registry.register::<ListAccountsCmd>(FLAGS)?;
    registry.register::<ListAddressGroupingsCmd>(FLAGS)?;
    registry.register::<ListLockUnspentCmd>(FLAGS)?;
    registry.register::<ListReceivedByAccountCmd>(FLAGS)?;
    registry.register::<ListReceivedByAddressCmd>(FLAGS)?;
    registry.register::<ListSinceBlockCmd>(FLAGS)?;
    registry.register::<ListTransactionsCmd>(FLAGS)?;
    registry.register::<ListUnspentCmd>(FLAGS)?;
    registry.register::<LockUnspentCmd>(FLAGS)?;
    registry.register::<MoveCmd>(FLAGS)?;
    registry.register::<SendFromCmd>(FLAGS)?;
    registry.register::<SendManyCmd>(FLAGS)?;
    registry.register::<SendToAddressCmd>(FLAGS)?;
    registry.register::<SetAccountCmd>(FLAGS)?;
    registry.register::<SetTxFeeCmd>(FLAGS)?;
    registry.register::<SignMessageCmd>(FLAGS)?;
    registry.register::<SignRawTransactionCmd>(FLAGS)?;
    registry.register::<WalletLockCmd>(FLAGS)?;
    registry.register::<WalletPassphraseCmd>(FLAGS)?;
    registry.register::<WalletPassphraseChangeCmd>(FLAGS)?;
    Ok(())
}
