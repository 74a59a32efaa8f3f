//! Wallet server commands that are only available over a websocket
//! connection.

use serde::{Deserialize, Serialize};
use ferro_rpc_derive::CommandSchema;

use crate::error::Error;
use crate::registry::{Registry, UsageFlags};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "createencryptedwallet")]
pub struct CreateEncryptedWalletCmd {
    pub passphrase: String,
}

impl CreateEncryptedWalletCmd {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "exportwatchingwallet")]
pub struct ExportWatchingWalletCmd {
    pub account: Option<String>,
    #[command(default = false)]
    pub download: Option<bool>,
}

impl ExportWatchingWalletCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "getunconfirmedbalance")]
pub struct GetUnconfirmedBalanceCmd {
    pub account: Option<String>,
}

impl GetUnconfirmedBalanceCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "listaddresstransactions")]
pub struct ListAddressTransactionsCmd {
    pub addresses: Vec<String>,
    pub account: Option<String>,
}

impl ListAddressTransactionsCmd {
    pub fn new(addresses: Vec<String>) -> Self {
        Self {
            addresses,
            account: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "listalltransactions")]
pub struct ListAllTransactionsCmd {
    pub account: Option<String>,
}

impl ListAllTransactionsCmd {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CommandSchema)]
#[command(method = "recoveraddresses")]
pub struct RecoverAddressesCmd {
    pub account: String,
    pub n: i32,
}

impl RecoverAddressesCmd {
    pub fn new(account: impl Into<String>, n: i32) -> Self {
        Self {
            account: account.into(),
            n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, CommandSchema)]
#[command(method = "walletislocked")]
pub struct WalletIsLockedCmd {}

pub(crate) fn register_commands(registry: &mut Registry) -> Result<(), Error> {
    const FLAGS: UsageFlags = UsageFlags::WALLET.union(UsageFlags::WEBSOCKET);
    registry.register::<CreateEncryptedWalletCmd>(FLAGS)?;
    registry.register::<ExportWatchingWalletCmd>(FLAGS)?;
    registry.register::<GetUnconfirmedBalanceCmd>(FLAGS)?;
    registry.register::<ListAddressTransactionsCmd>(FLAGS)?;
    registry.register::<ListAllTransactionsCmd>(FLAGS)?;
    registry.register::<RecoverAddressesCmd>(FLAGS)?;
    registry.register::<WalletIsLockedCmd>(FLAGS)?;
    Ok(())
}
