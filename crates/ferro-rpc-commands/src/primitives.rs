//! Shared record types referenced by command parameters.
//!
//! These hit the wire inside `params` entries, so their serde names and
//! declaration order are part of the protocol.

use serde::{Deserialize, Serialize};

/// A transaction input referenced by its previous outpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub txid: String,
    pub vout: u32,
}

/// A transaction outpoint used by notification filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: String,
    pub index: u32,
}

/// A transaction input along with the scripts needed to sign it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTxInput {
    pub txid: String,
    pub vout: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    #[serde(rename = "redeemScript")]
    pub redeem_script: String,
}

/// Optional hints accompanying a submitted block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitBlockOptions {
    #[serde(rename = "workid", skip_serializing_if = "String::is_empty", default)]
    pub work_id: String,
}

/// A limit value that miners may express either as a hard number or as a
/// boolean toggle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrInt {
    Bool(bool),
    Int(i64),
}

fn u32_is_zero(n: &u32) -> bool {
    *n == 0
}

/// A block template request per the getblocktemplate conventions (BIP
/// 0022/0023). Unset fields are omitted from the encoded object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,

    // Long polling.
    #[serde(rename = "longpollid", skip_serializing_if = "String::is_empty")]
    pub long_poll_id: String,

    // Template tweaking.
    #[serde(rename = "sigoplimit", skip_serializing_if = "Option::is_none")]
    pub sig_op_limit: Option<BoolOrInt>,
    #[serde(rename = "sizelimit", skip_serializing_if = "Option::is_none")]
    pub size_limit: Option<BoolOrInt>,
    #[serde(rename = "maxversion", skip_serializing_if = "u32_is_zero")]
    pub max_version: u32,

    // Basic pool extension (BIP 0023).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target: String,

    // Block proposal (BIP 0023); data is only present in proposal mode.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(rename = "workid", skip_serializing_if = "String::is_empty")]
    pub work_id: String,
}

/// Subcommand accepted by the addnode method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddNodeSubCmd {
    Add,
    Remove,
    OneTry,
}

/// Subcommand accepted by the node method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeSubCmd {
    Connect,
    Remove,
    Disconnect,
}

/// Committed filter type tag, carried on the wire as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    Regular,
}

impl FilterType {
    pub fn as_u8(self) -> u8 {
        match self {
            FilterType::Regular => 0,
        }
    }
}

impl Serialize for FilterType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for FilterType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = u8::deserialize(deserializer)?;
        match tag {
            0 => Ok(FilterType::Regular),
            other => Err(serde::de::Error::custom(format!(
                "unknown filter type {other}"
            ))),
        }
    }
}
