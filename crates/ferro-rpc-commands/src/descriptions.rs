//! One-line help descriptions for the built-in catalog, keyed by method
//! name. Registry construction fails if any registered method is left
//! undescribed.

use crate::error::Error;
use crate::registry::Registry;

pub(crate) fn register_descriptions(registry: &mut Registry) -> Result<(), Error> {
    for (method, text) in DESCRIPTIONS {
        registry.set_description(method, *text)?;
    }
    Ok(())
}

const DESCRIPTIONS: &[(&str, &str)] = &[
    // Chain server.
    ("addnode", "Attempts to add or remove a persistent peer."),
    ("createrawtransaction", "Returns a new unsigned transaction spending the passed inputs and paying the passed amounts."),
    ("decoderawtransaction", "Returns a JSON object representing the provided serialized transaction."),
    ("decodescript", "Returns a JSON object with information about the provided hex-encoded script."),
    ("getaddednodeinfo", "Returns information about manually added peers."),
    ("getbestblockhash", "Returns the hash of the best block in the longest chain."),
    ("getblock", "Returns information about a block given its hash."),
    ("getblockchaininfo", "Returns information about the current blockchain state."),
    ("getblockcount", "Returns the number of blocks in the longest chain."),
    ("getblockhash", "Returns the hash of the block at the given height."),
    ("getblockheader", "Returns information about a block header given its hash."),
    ("getblocktemplate", "Returns a block template for mining, per BIP 0022 and BIP 0023."),
    ("getcfilter", "Returns the committed filter for a block."),
    ("getcfilterheader", "Returns the committed filter header chain entry for a block."),
    ("getchaintips", "Returns information about all known chain tips."),
    ("getconnectioncount", "Returns the number of active peer connections."),
    ("getdifficulty", "Returns the proof-of-work difficulty as a multiple of the minimum difficulty."),
    ("getgenerate", "Returns whether the node is set to generate coins (mine)."),
    ("gethashespersec", "Returns a recent hashes-per-second mining measurement."),
    ("getinfo", "Returns a JSON object with general state information."),
    ("getmempoolentry", "Returns mempool data for the given transaction."),
    ("getmempoolinfo", "Returns details about the active state of the transaction memory pool."),
    ("getmininginfo", "Returns mining-related information."),
    ("getnetworkinfo", "Returns information about the node's connection to the network."),
    ("getnettotals", "Returns network traffic statistics."),
    ("getnetworkhashps", "Returns the estimated network hashes per second."),
    ("getpeerinfo", "Returns data about each connected peer."),
    ("getrawmempool", "Returns all transaction ids in the memory pool."),
    ("getrawtransaction", "Returns a serialized or decoded representation of a transaction."),
    ("gettxout", "Returns details about an unspent transaction output."),
    ("gettxoutproof", "Returns a proof that the given transactions were included in a block."),
    ("gettxoutsetinfo", "Returns statistics about the unspent transaction output set."),
    ("getwork", "Returns or validates formatted hash data to work on."),
    ("help", "Returns a list of all commands or help for a specified command."),
    ("invalidateblock", "Permanently marks a block as invalid, as if it violated a consensus rule."),
    ("ping", "Queues a ping to be sent to each connected peer."),
    ("preciousblock", "Treats a block as if it were received before others with the same work."),
    ("reconsiderblock", "Removes the invalid status of a block, reconsidering it for the best chain."),
    ("searchrawtransactions", "Returns transactions involving the passed address from the address index."),
    ("sendrawtransaction", "Submits a serialized transaction to the network."),
    ("setgenerate", "Sets whether the node generates coins and with how many processors."),
    ("stop", "Shuts down the node."),
    ("submitblock", "Submits a serialized block to the network."),
    ("uptime", "Returns the node's total uptime in seconds."),
    ("validateaddress", "Verifies an address and returns information about it."),
    ("verifychain", "Verifies the block chain database."),
    ("verifymessage", "Verifies a signed message against an address."),
    ("verifytxoutproof", "Verifies an inclusion proof and returns the transactions it commits to."),
    // Chain server websocket.
    ("authenticate", "Authenticates the websocket connection."),
    ("notifyblocks", "Requests block connect and disconnect notifications."),
    ("stopnotifyblocks", "Cancels block connect and disconnect notifications."),
    ("notifynewtransactions", "Requests notifications for transactions accepted to the mempool."),
    ("stopnotifynewtransactions", "Cancels mempool transaction notifications."),
    ("notifyreceived", "Requests notifications for transactions paying the passed addresses."),
    ("stopnotifyreceived", "Cancels notifications for transactions paying the passed addresses."),
    ("notifyspent", "Requests notifications when the passed outpoints are spent."),
    ("stopnotifyspent", "Cancels notifications for the passed outpoints."),
    ("rescan", "Rescans blocks for transactions relevant to the passed addresses and outpoints."),
    ("loadtxfilter", "Loads or reloads the connection's transaction filter for relevant notifications."),
    ("rescanblocks", "Rescans the given blocks against the loaded transaction filter."),
    // Wallet server.
    ("addmultisigaddress", "Adds a multisignature address requiring the given number of signatures."),
    ("addwitnessaddress", "Adds a witness address for a script."),
    ("createmultisig", "Creates a multisignature address and returns its redeem script."),
    ("dumpprivkey", "Returns the private key for an address in wallet import format."),
    ("encryptwallet", "Encrypts the wallet with the passed passphrase."),
    ("estimatefee", "Estimates the fee per kilobyte for a transaction to confirm within the given blocks."),
    ("estimatepriority", "Estimates the priority needed for a zero-fee transaction to confirm within the given blocks."),
    ("getaccount", "Returns the account associated with an address."),
    ("getaccountaddress", "Returns the current receiving address for an account."),
    ("getaddressesbyaccount", "Returns the list of addresses for an account."),
    ("getbalance", "Returns the available balance, optionally for a single account."),
    ("getnewaddress", "Generates and returns a new receiving address."),
    ("getrawchangeaddress", "Returns a new address for receiving change."),
    ("getreceivedbyaccount", "Returns the total amount received by an account."),
    ("getreceivedbyaddress", "Returns the total amount received by an address."),
    ("gettransaction", "Returns detailed information about an in-wallet transaction."),
    ("getwalletinfo", "Returns information about the wallet state."),
    ("importprivkey", "Imports a private key into the wallet."),
    ("keypoolrefill", "Fills the key pool up to the given size."),
    ("listaccounts", "Returns account names and balances."),
    ("listaddressgroupings", "Returns address groupings with common ownership."),
    ("listlockunspent", "Returns outputs locked against spending."),
    ("listreceivedbyaccount", "Returns amounts received, grouped by account."),
    ("listreceivedbyaddress", "Returns amounts received, grouped by address."),
    ("listsinceblock", "Returns wallet transactions since the given block."),
    ("listtransactions", "Returns the most recent wallet transactions."),
    ("listunspent", "Returns unspent outputs available for spending."),
    ("lockunspent", "Locks or unlocks outputs against spending."),
    ("move", "Moves funds between accounts within the wallet."),
    ("sendfrom", "Sends an amount from an account to an address."),
    ("sendmany", "Sends amounts from an account to multiple addresses."),
    ("sendtoaddress", "Sends an amount to an address."),
    ("setaccount", "Associates an address with an account."),
    ("settxfee", "Sets the transaction fee per kilobyte."),
    ("signmessage", "Signs a message with the private key of an address."),
    ("signrawtransaction", "Signs inputs of a serialized transaction."),
    ("walletlock", "Removes the wallet encryption key from memory, locking the wallet."),
    ("walletpassphrase", "Unlocks the wallet for the given number of seconds."),
    ("walletpassphrasechange", "Changes the wallet passphrase."),
    // Wallet server websocket.
    ("createencryptedwallet", "Creates a new encrypted wallet."),
    ("exportwatchingwallet", "Exports a watching-only copy of the wallet."),
    ("getunconfirmedbalance", "Returns the unconfirmed balance, optionally for a single account."),
    ("listaddresstransactions", "Returns transactions involving the passed addresses."),
    ("listalltransactions", "Returns all wallet transactions."),
    ("recoveraddresses", "Recovers the given number of addresses for an account."),
    ("walletislocked", "Returns whether the wallet is locked."),
    // Node extensions.
    ("debuglevel", "Dynamically changes the subsystem logging levels."),
    ("node", "Attempts to connect to, or disconnect or remove, a peer."),
    ("generate", "Generates the given number of blocks and returns their hashes."),
    ("getbestblock", "Returns the hash and height of the best block."),
    ("getcurrentnet", "Returns the network the node is running on."),
    ("getheaders", "Returns block headers starting from the first known block locator."),
    ("version", "Returns the version of the JSON-RPC API."),
    // Websocket notifications.
    ("blockconnected", "Notifies that a block was connected to the best chain."),
    ("blockdisconnected", "Notifies that a block was disconnected from the best chain."),
    ("filteredblockconnected", "Notifies that a filtered block was connected, with relevant transactions."),
    ("filteredblockdisconnected", "Notifies that a filtered block was disconnected."),
    ("txaccepted", "Notifies that a transaction was accepted to the mempool."),
    ("txacceptedverbose", "Notifies that a transaction was accepted to the mempool, with full details."),
    ("relevanttxaccepted", "Notifies that a transaction matching the loaded filter was accepted."),
    ("rescanfinished", "Notifies that an in-progress rescan has completed."),
    ("rescanprogress", "Reports progress of an in-progress rescan."),
];
