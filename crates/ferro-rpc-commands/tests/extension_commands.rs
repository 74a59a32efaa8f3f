//! Wire vectors for the node extension commands and the websocket
//! notification pushes.

mod common;

use serde_json::json;

use common::assert_command;
use ferro_json_rpc::{Id, Request};
use ferro_rpc_commands::extensions::*;
use ferro_rpc_commands::notifications::*;
use ferro_rpc_commands::primitives::NodeSubCmd;

#[test]
fn debuglevel() {
    assert_command(
        &[json!("trace")],
        DebugLevelCmd::new("trace"),
        r#"{"jsonrpc":"1.0","method":"debuglevel","params":["trace"],"id":1}"#,
        DebugLevelCmd::new("trace"),
    );
}

#[test]
fn node_remove() {
    assert_command(
        &[json!("remove"), json!("1.1.1.1")],
        NodeCmd::new(NodeSubCmd::Remove, "1.1.1.1"),
        r#"{"jsonrpc":"1.0","method":"node","params":["remove","1.1.1.1"],"id":1}"#,
        NodeCmd::new(NodeSubCmd::Remove, "1.1.1.1"),
    );
}

#[test]
fn node_disconnect() {
    assert_command(
        &[json!("disconnect"), json!("1.1.1.1")],
        NodeCmd::new(NodeSubCmd::Disconnect, "1.1.1.1"),
        r#"{"jsonrpc":"1.0","method":"node","params":["disconnect","1.1.1.1"],"id":1}"#,
        NodeCmd::new(NodeSubCmd::Disconnect, "1.1.1.1"),
    );
}

#[test]
fn node_connect_perm() {
    assert_command(
        &[json!("connect"), json!("1.1.1.1"), json!("perm")],
        NodeCmd {
            sub_cmd: NodeSubCmd::Connect,
            target: "1.1.1.1".to_string(),
            connect_sub_cmd: Some("perm".to_string()),
        },
        r#"{"jsonrpc":"1.0","method":"node","params":["connect","1.1.1.1","perm"],"id":1}"#,
        NodeCmd {
            sub_cmd: NodeSubCmd::Connect,
            target: "1.1.1.1".to_string(),
            connect_sub_cmd: Some("perm".to_string()),
        },
    );
}

#[test]
fn node_connect_temp() {
    assert_command(
        &[json!("connect"), json!("1.1.1.1"), json!("temp")],
        NodeCmd {
            sub_cmd: NodeSubCmd::Connect,
            target: "1.1.1.1".to_string(),
            connect_sub_cmd: Some("temp".to_string()),
        },
        r#"{"jsonrpc":"1.0","method":"node","params":["connect","1.1.1.1","temp"],"id":1}"#,
        NodeCmd {
            sub_cmd: NodeSubCmd::Connect,
            target: "1.1.1.1".to_string(),
            connect_sub_cmd: Some("temp".to_string()),
        },
    );
}

#[test]
fn generate() {
    assert_command(
        &[json!(1)],
        GenerateCmd::new(1),
        r#"{"jsonrpc":"1.0","method":"generate","params":[1],"id":1}"#,
        GenerateCmd::new(1),
    );
}

#[test]
fn getbestblock() {
    assert_command(
        &[],
        GetBestBlockCmd {},
        r#"{"jsonrpc":"1.0","method":"getbestblock","params":[],"id":1}"#,
        GetBestBlockCmd {},
    );
}

#[test]
fn getcurrentnet() {
    assert_command(
        &[],
        GetCurrentNetCmd {},
        r#"{"jsonrpc":"1.0","method":"getcurrentnet","params":[],"id":1}"#,
        GetCurrentNetCmd {},
    );
}

#[test]
fn getheaders_empty() {
    assert_command(
        &[json!([]), json!("")],
        GetHeadersCmd::new(vec![], ""),
        r#"{"jsonrpc":"1.0","method":"getheaders","params":[[],""],"id":1}"#,
        GetHeadersCmd::new(vec![], ""),
    );
}

#[test]
fn getheaders_with_locators() {
    let locators = vec![
        "000000000000000001f1739002418e2f9a84c47a4fd2a0eb7a787a6b7dc12f16".to_string(),
        "0000000000000000026f4b7f56eef057b32167eb5ad9ff62006f1807b7336d10".to_string(),
    ];
    let stop = "000000000000000000ba33b33e1fad70b69e234fc24414dd47113bff38f523f7";
    assert_command(
        &[
            json!([
                "000000000000000001f1739002418e2f9a84c47a4fd2a0eb7a787a6b7dc12f16",
                "0000000000000000026f4b7f56eef057b32167eb5ad9ff62006f1807b7336d10"
            ]),
            json!(stop),
        ],
        GetHeadersCmd::new(locators.clone(), stop),
        r#"{"jsonrpc":"1.0","method":"getheaders","params":[["000000000000000001f1739002418e2f9a84c47a4fd2a0eb7a787a6b7dc12f16","0000000000000000026f4b7f56eef057b32167eb5ad9ff62006f1807b7336d10"],"000000000000000000ba33b33e1fad70b69e234fc24414dd47113bff38f523f7"],"id":1}"#,
        GetHeadersCmd::new(locators, stop),
    );
}

#[test]
fn version() {
    assert_command(
        &[],
        VersionCmd {},
        r#"{"jsonrpc":"1.0","method":"version","params":[],"id":1}"#,
        VersionCmd {},
    );
}

// Notifications marshal with a null id and unmarshal through the same
// codec as commands.

#[test]
fn blockconnected_notification() {
    let ntfn = BlockConnectedNtfn::new("123", 100000, 123456789);
    let bytes = ferro_rpc_commands::marshal_request(Id::Null, &ntfn).unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"jsonrpc":"1.0","method":"blockconnected","params":["123",100000,123456789],"id":null}"#
    );
}

#[test]
fn txaccepted_notification_round_trip() {
    let ntfn = TxAcceptedNtfn::new("123", 1.5);
    let bytes = ferro_rpc_commands::marshal_request(Id::Null, &ntfn).unwrap();
    let request: Request = serde_json::from_slice(&bytes).unwrap();
    assert!(request.id.is_null());

    let decoded = ferro_rpc_commands::unmarshal_request(&request).unwrap();
    let decoded = decoded.as_any().downcast_ref::<TxAcceptedNtfn>().unwrap();
    assert_eq!(decoded, &ntfn);
}

#[test]
fn filteredblockconnected_notification() {
    assert_command(
        &[json!(100000), json!("header"), json!(["tx0hex"])],
        FilteredBlockConnectedNtfn::new(100000, "header", vec!["tx0hex".to_string()]),
        r#"{"jsonrpc":"1.0","method":"filteredblockconnected","params":[100000,"header",["tx0hex"]],"id":1}"#,
        FilteredBlockConnectedNtfn::new(100000, "header", vec!["tx0hex".to_string()]),
    );
}

#[test]
fn rescanprogress_notification() {
    assert_command(
        &[json!("123"), json!(100000), json!(123456789)],
        RescanProgressNtfn::new("123", 100000, 123456789),
        r#"{"jsonrpc":"1.0","method":"rescanprogress","params":["123",100000,123456789],"id":1}"#,
        RescanProgressNtfn::new("123", 100000, 123456789),
    );
}
