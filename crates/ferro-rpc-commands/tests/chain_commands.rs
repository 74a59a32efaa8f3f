//! Wire vectors for the chain server commands: every method marshals to
//! known bytes from both construction paths and unmarshals back with
//! defaults applied to omitted optionals.

mod common;

use std::collections::BTreeMap;

use serde_json::json;

use common::assert_command;
use ferro_rpc_commands::chain::*;
use ferro_rpc_commands::primitives::{
    AddNodeSubCmd, BoolOrInt, FilterType, SubmitBlockOptions, TemplateRequest, TransactionInput,
};

#[test]
fn addnode() {
    assert_command(
        &[json!("127.0.0.1"), json!("remove")],
        AddNodeCmd::new("127.0.0.1", AddNodeSubCmd::Remove),
        r#"{"jsonrpc":"1.0","method":"addnode","params":["127.0.0.1","remove"],"id":1}"#,
        AddNodeCmd::new("127.0.0.1", AddNodeSubCmd::Remove),
    );
}

#[test]
fn createrawtransaction() {
    let inputs = vec![TransactionInput {
        txid: "123".to_string(),
        vout: 1,
    }];
    let amounts = BTreeMap::from([("456".to_string(), 0.0123)]);
    assert_command(
        &[json!(r#"[{"txid":"123","vout":1}]"#), json!(r#"{"456":0.0123}"#)],
        CreateRawTransactionCmd::new(inputs.clone(), amounts.clone()),
        r#"{"jsonrpc":"1.0","method":"createrawtransaction","params":[[{"txid":"123","vout":1}],{"456":0.0123}],"id":1}"#,
        CreateRawTransactionCmd::new(inputs, amounts),
    );
}

#[test]
fn createrawtransaction_with_locktime() {
    let inputs = vec![TransactionInput {
        txid: "123".to_string(),
        vout: 1,
    }];
    let amounts = BTreeMap::from([("456".to_string(), 0.0123)]);
    assert_command(
        &[
            json!(r#"[{"txid":"123","vout":1}]"#),
            json!(r#"{"456":0.0123}"#),
            json!(12312333333_i64),
        ],
        CreateRawTransactionCmd {
            inputs: inputs.clone(),
            amounts: amounts.clone(),
            lock_time: Some(12312333333),
        },
        r#"{"jsonrpc":"1.0","method":"createrawtransaction","params":[[{"txid":"123","vout":1}],{"456":0.0123},12312333333],"id":1}"#,
        CreateRawTransactionCmd {
            inputs,
            amounts,
            lock_time: Some(12312333333),
        },
    );
}

#[test]
fn decoderawtransaction() {
    assert_command(
        &[json!("123")],
        DecodeRawTransactionCmd::new("123"),
        r#"{"jsonrpc":"1.0","method":"decoderawtransaction","params":["123"],"id":1}"#,
        DecodeRawTransactionCmd::new("123"),
    );
}

#[test]
fn decodescript() {
    assert_command(
        &[json!("00")],
        DecodeScriptCmd::new("00"),
        r#"{"jsonrpc":"1.0","method":"decodescript","params":["00"],"id":1}"#,
        DecodeScriptCmd::new("00"),
    );
}

#[test]
fn getaddednodeinfo() {
    assert_command(
        &[json!(true)],
        GetAddedNodeInfoCmd::new(true),
        r#"{"jsonrpc":"1.0","method":"getaddednodeinfo","params":[true],"id":1}"#,
        GetAddedNodeInfoCmd::new(true),
    );
}

#[test]
fn getaddednodeinfo_with_node() {
    assert_command(
        &[json!(true), json!("127.0.0.1")],
        GetAddedNodeInfoCmd {
            dns: true,
            node: Some("127.0.0.1".to_string()),
        },
        r#"{"jsonrpc":"1.0","method":"getaddednodeinfo","params":[true,"127.0.0.1"],"id":1}"#,
        GetAddedNodeInfoCmd {
            dns: true,
            node: Some("127.0.0.1".to_string()),
        },
    );
}

#[test]
fn getbestblockhash() {
    assert_command(
        &[],
        GetBestBlockHashCmd {},
        r#"{"jsonrpc":"1.0","method":"getbestblockhash","params":[],"id":1}"#,
        GetBestBlockHashCmd {},
    );
}

#[test]
fn getblock() {
    assert_command(
        &[json!("123")],
        GetBlockCmd::new("123"),
        r#"{"jsonrpc":"1.0","method":"getblock","params":["123"],"id":1}"#,
        GetBlockCmd {
            hash: "123".to_string(),
            verbose: Some(true),
            verbose_tx: Some(false),
        },
    );
}

#[test]
fn getblock_with_verbose() {
    assert_command(
        &[json!("123"), json!(true)],
        GetBlockCmd {
            hash: "123".to_string(),
            verbose: Some(true),
            verbose_tx: None,
        },
        r#"{"jsonrpc":"1.0","method":"getblock","params":["123",true],"id":1}"#,
        GetBlockCmd {
            hash: "123".to_string(),
            verbose: Some(true),
            verbose_tx: Some(false),
        },
    );
}

#[test]
fn getblock_with_verbose_tx() {
    assert_command(
        &[json!("123"), json!(true), json!(true)],
        GetBlockCmd {
            hash: "123".to_string(),
            verbose: Some(true),
            verbose_tx: Some(true),
        },
        r#"{"jsonrpc":"1.0","method":"getblock","params":["123",true,true],"id":1}"#,
        GetBlockCmd {
            hash: "123".to_string(),
            verbose: Some(true),
            verbose_tx: Some(true),
        },
    );
}

#[test]
fn getblockchaininfo() {
    assert_command(
        &[],
        GetBlockChainInfoCmd {},
        r#"{"jsonrpc":"1.0","method":"getblockchaininfo","params":[],"id":1}"#,
        GetBlockChainInfoCmd {},
    );
}

#[test]
fn getblockcount() {
    assert_command(
        &[],
        GetBlockCountCmd {},
        r#"{"jsonrpc":"1.0","method":"getblockcount","params":[],"id":1}"#,
        GetBlockCountCmd {},
    );
}

#[test]
fn getblockhash() {
    assert_command(
        &[json!(123)],
        GetBlockHashCmd::new(123),
        r#"{"jsonrpc":"1.0","method":"getblockhash","params":[123],"id":1}"#,
        GetBlockHashCmd::new(123),
    );
}

#[test]
fn getblockheader() {
    assert_command(
        &[json!("123")],
        GetBlockHeaderCmd::new("123"),
        r#"{"jsonrpc":"1.0","method":"getblockheader","params":["123"],"id":1}"#,
        GetBlockHeaderCmd {
            hash: "123".to_string(),
            verbose: Some(true),
        },
    );
}

#[test]
fn getblocktemplate() {
    assert_command(
        &[],
        GetBlockTemplateCmd::new(),
        r#"{"jsonrpc":"1.0","method":"getblocktemplate","params":[],"id":1}"#,
        GetBlockTemplateCmd::new(),
    );
}

#[test]
fn getblocktemplate_with_request() {
    let template = TemplateRequest {
        mode: "template".to_string(),
        capabilities: vec!["longpoll".to_string(), "coinbasetxn".to_string()],
        ..Default::default()
    };
    assert_command(
        &[json!(r#"{"mode":"template","capabilities":["longpoll","coinbasetxn"]}"#)],
        GetBlockTemplateCmd {
            request: Some(template.clone()),
        },
        r#"{"jsonrpc":"1.0","method":"getblocktemplate","params":[{"mode":"template","capabilities":["longpoll","coinbasetxn"]}],"id":1}"#,
        GetBlockTemplateCmd {
            request: Some(template),
        },
    );
}

#[test]
fn getblocktemplate_with_tweaked_request() {
    let template = TemplateRequest {
        mode: "template".to_string(),
        capabilities: vec!["longpoll".to_string(), "coinbasetxn".to_string()],
        sig_op_limit: Some(BoolOrInt::Int(500)),
        size_limit: Some(BoolOrInt::Int(100000000)),
        max_version: 2,
        ..Default::default()
    };
    assert_command(
        &[json!(
            r#"{"mode":"template","capabilities":["longpoll","coinbasetxn"],"sigoplimit":500,"sizelimit":100000000,"maxversion":2}"#
        )],
        GetBlockTemplateCmd {
            request: Some(template.clone()),
        },
        r#"{"jsonrpc":"1.0","method":"getblocktemplate","params":[{"mode":"template","capabilities":["longpoll","coinbasetxn"],"sigoplimit":500,"sizelimit":100000000,"maxversion":2}],"id":1}"#,
        GetBlockTemplateCmd {
            request: Some(template),
        },
    );
}

#[test]
fn getblocktemplate_with_boolean_limits() {
    let template = TemplateRequest {
        mode: "template".to_string(),
        capabilities: vec!["longpoll".to_string(), "coinbasetxn".to_string()],
        sig_op_limit: Some(BoolOrInt::Bool(true)),
        size_limit: Some(BoolOrInt::Int(100000000)),
        max_version: 2,
        ..Default::default()
    };
    assert_command(
        &[json!(
            r#"{"mode":"template","capabilities":["longpoll","coinbasetxn"],"sigoplimit":true,"sizelimit":100000000,"maxversion":2}"#
        )],
        GetBlockTemplateCmd {
            request: Some(template.clone()),
        },
        r#"{"jsonrpc":"1.0","method":"getblocktemplate","params":[{"mode":"template","capabilities":["longpoll","coinbasetxn"],"sigoplimit":true,"sizelimit":100000000,"maxversion":2}],"id":1}"#,
        GetBlockTemplateCmd {
            request: Some(template),
        },
    );
}

#[test]
fn getcfilter() {
    assert_command(
        &[json!("123"), json!(0)],
        GetCFilterCmd::new("123", FilterType::Regular),
        r#"{"jsonrpc":"1.0","method":"getcfilter","params":["123",0],"id":1}"#,
        GetCFilterCmd::new("123", FilterType::Regular),
    );
}

#[test]
fn getcfilterheader() {
    assert_command(
        &[json!("123"), json!(0)],
        GetCFilterHeaderCmd::new("123", FilterType::Regular),
        r#"{"jsonrpc":"1.0","method":"getcfilterheader","params":["123",0],"id":1}"#,
        GetCFilterHeaderCmd::new("123", FilterType::Regular),
    );
}

#[test]
fn getchaintips() {
    assert_command(
        &[],
        GetChainTipsCmd {},
        r#"{"jsonrpc":"1.0","method":"getchaintips","params":[],"id":1}"#,
        GetChainTipsCmd {},
    );
}

#[test]
fn getconnectioncount() {
    assert_command(
        &[],
        GetConnectionCountCmd {},
        r#"{"jsonrpc":"1.0","method":"getconnectioncount","params":[],"id":1}"#,
        GetConnectionCountCmd {},
    );
}

#[test]
fn getdifficulty() {
    assert_command(
        &[],
        GetDifficultyCmd {},
        r#"{"jsonrpc":"1.0","method":"getdifficulty","params":[],"id":1}"#,
        GetDifficultyCmd {},
    );
}

#[test]
fn getgenerate() {
    assert_command(
        &[],
        GetGenerateCmd {},
        r#"{"jsonrpc":"1.0","method":"getgenerate","params":[],"id":1}"#,
        GetGenerateCmd {},
    );
}

#[test]
fn gethashespersec() {
    assert_command(
        &[],
        GetHashesPerSecCmd {},
        r#"{"jsonrpc":"1.0","method":"gethashespersec","params":[],"id":1}"#,
        GetHashesPerSecCmd {},
    );
}

#[test]
fn getinfo() {
    assert_command(
        &[],
        GetInfoCmd {},
        r#"{"jsonrpc":"1.0","method":"getinfo","params":[],"id":1}"#,
        GetInfoCmd {},
    );
}

#[test]
fn getmempoolentry() {
    assert_command(
        &[json!("txhash")],
        GetMempoolEntryCmd::new("txhash"),
        r#"{"jsonrpc":"1.0","method":"getmempoolentry","params":["txhash"],"id":1}"#,
        GetMempoolEntryCmd::new("txhash"),
    );
}

#[test]
fn getmempoolinfo() {
    assert_command(
        &[],
        GetMempoolInfoCmd {},
        r#"{"jsonrpc":"1.0","method":"getmempoolinfo","params":[],"id":1}"#,
        GetMempoolInfoCmd {},
    );
}

#[test]
fn getmininginfo() {
    assert_command(
        &[],
        GetMiningInfoCmd {},
        r#"{"jsonrpc":"1.0","method":"getmininginfo","params":[],"id":1}"#,
        GetMiningInfoCmd {},
    );
}

#[test]
fn getnetworkinfo() {
    assert_command(
        &[],
        GetNetworkInfoCmd {},
        r#"{"jsonrpc":"1.0","method":"getnetworkinfo","params":[],"id":1}"#,
        GetNetworkInfoCmd {},
    );
}

#[test]
fn getnettotals() {
    assert_command(
        &[],
        GetNetTotalsCmd {},
        r#"{"jsonrpc":"1.0","method":"getnettotals","params":[],"id":1}"#,
        GetNetTotalsCmd {},
    );
}

#[test]
fn getnetworkhashps() {
    assert_command(
        &[],
        GetNetworkHashPSCmd::new(),
        r#"{"jsonrpc":"1.0","method":"getnetworkhashps","params":[],"id":1}"#,
        GetNetworkHashPSCmd {
            blocks: Some(120),
            height: Some(-1),
        },
    );
}

#[test]
fn getnetworkhashps_with_blocks() {
    assert_command(
        &[json!(200)],
        GetNetworkHashPSCmd {
            blocks: Some(200),
            height: None,
        },
        r#"{"jsonrpc":"1.0","method":"getnetworkhashps","params":[200],"id":1}"#,
        GetNetworkHashPSCmd {
            blocks: Some(200),
            height: Some(-1),
        },
    );
}

#[test]
fn getnetworkhashps_with_blocks_and_height() {
    assert_command(
        &[json!(200), json!(123)],
        GetNetworkHashPSCmd {
            blocks: Some(200),
            height: Some(123),
        },
        r#"{"jsonrpc":"1.0","method":"getnetworkhashps","params":[200,123],"id":1}"#,
        GetNetworkHashPSCmd {
            blocks: Some(200),
            height: Some(123),
        },
    );
}

#[test]
fn getpeerinfo() {
    assert_command(
        &[],
        GetPeerInfoCmd {},
        r#"{"jsonrpc":"1.0","method":"getpeerinfo","params":[],"id":1}"#,
        GetPeerInfoCmd {},
    );
}

#[test]
fn getrawmempool() {
    assert_command(
        &[],
        GetRawMempoolCmd::new(),
        r#"{"jsonrpc":"1.0","method":"getrawmempool","params":[],"id":1}"#,
        GetRawMempoolCmd {
            verbose: Some(false),
        },
    );
}

#[test]
fn getrawmempool_with_verbose() {
    assert_command(
        &[json!(false)],
        GetRawMempoolCmd {
            verbose: Some(false),
        },
        r#"{"jsonrpc":"1.0","method":"getrawmempool","params":[false],"id":1}"#,
        GetRawMempoolCmd {
            verbose: Some(false),
        },
    );
}

#[test]
fn getrawtransaction() {
    assert_command(
        &[json!("123")],
        GetRawTransactionCmd::new("123"),
        r#"{"jsonrpc":"1.0","method":"getrawtransaction","params":["123"],"id":1}"#,
        GetRawTransactionCmd {
            txid: "123".to_string(),
            verbose: Some(0),
        },
    );
}

#[test]
fn getrawtransaction_with_verbose() {
    assert_command(
        &[json!("123"), json!(1)],
        GetRawTransactionCmd {
            txid: "123".to_string(),
            verbose: Some(1),
        },
        r#"{"jsonrpc":"1.0","method":"getrawtransaction","params":["123",1],"id":1}"#,
        GetRawTransactionCmd {
            txid: "123".to_string(),
            verbose: Some(1),
        },
    );
}

#[test]
fn gettxout() {
    assert_command(
        &[json!("123"), json!(1)],
        GetTxOutCmd::new("123", 1),
        r#"{"jsonrpc":"1.0","method":"gettxout","params":["123",1],"id":1}"#,
        GetTxOutCmd {
            txid: "123".to_string(),
            vout: 1,
            include_mempool: Some(true),
        },
    );
}

#[test]
fn gettxout_with_mempool_flag() {
    assert_command(
        &[json!("123"), json!(1), json!(true)],
        GetTxOutCmd {
            txid: "123".to_string(),
            vout: 1,
            include_mempool: Some(true),
        },
        r#"{"jsonrpc":"1.0","method":"gettxout","params":["123",1,true],"id":1}"#,
        GetTxOutCmd {
            txid: "123".to_string(),
            vout: 1,
            include_mempool: Some(true),
        },
    );
}

#[test]
fn gettxoutproof() {
    let tx_ids = vec!["123".to_string(), "456".to_string()];
    assert_command(
        &[json!(["123", "456"])],
        GetTxOutProofCmd::new(tx_ids.clone()),
        r#"{"jsonrpc":"1.0","method":"gettxoutproof","params":[["123","456"]],"id":1}"#,
        GetTxOutProofCmd::new(tx_ids),
    );
}

#[test]
fn gettxoutproof_with_block_hash() {
    let tx_ids = vec!["123".to_string(), "456".to_string()];
    let hash = "000000000000034a7dedef4a161fa058a2d67a173a90155f3a2fe6fc132e0ebf";
    assert_command(
        &[json!(["123", "456"]), json!(hash)],
        GetTxOutProofCmd {
            tx_ids: tx_ids.clone(),
            block_hash: Some(hash.to_string()),
        },
        r#"{"jsonrpc":"1.0","method":"gettxoutproof","params":[["123","456"],"000000000000034a7dedef4a161fa058a2d67a173a90155f3a2fe6fc132e0ebf"],"id":1}"#,
        GetTxOutProofCmd {
            tx_ids,
            block_hash: Some(hash.to_string()),
        },
    );
}

#[test]
fn gettxoutsetinfo() {
    assert_command(
        &[],
        GetTxOutSetInfoCmd {},
        r#"{"jsonrpc":"1.0","method":"gettxoutsetinfo","params":[],"id":1}"#,
        GetTxOutSetInfoCmd {},
    );
}

#[test]
fn getwork() {
    assert_command(
        &[],
        GetWorkCmd::new(),
        r#"{"jsonrpc":"1.0","method":"getwork","params":[],"id":1}"#,
        GetWorkCmd { data: None },
    );
}

#[test]
fn getwork_with_data() {
    assert_command(
        &[json!("00112233")],
        GetWorkCmd {
            data: Some("00112233".to_string()),
        },
        r#"{"jsonrpc":"1.0","method":"getwork","params":["00112233"],"id":1}"#,
        GetWorkCmd {
            data: Some("00112233".to_string()),
        },
    );
}

#[test]
fn help() {
    assert_command(
        &[],
        HelpCmd::new(),
        r#"{"jsonrpc":"1.0","method":"help","params":[],"id":1}"#,
        HelpCmd { command: None },
    );
}

#[test]
fn help_with_command() {
    assert_command(
        &[json!("getblock")],
        HelpCmd {
            command: Some("getblock".to_string()),
        },
        r#"{"jsonrpc":"1.0","method":"help","params":["getblock"],"id":1}"#,
        HelpCmd {
            command: Some("getblock".to_string()),
        },
    );
}

#[test]
fn invalidateblock() {
    assert_command(
        &[json!("123")],
        InvalidateBlockCmd::new("123"),
        r#"{"jsonrpc":"1.0","method":"invalidateblock","params":["123"],"id":1}"#,
        InvalidateBlockCmd::new("123"),
    );
}

#[test]
fn ping() {
    assert_command(
        &[],
        PingCmd {},
        r#"{"jsonrpc":"1.0","method":"ping","params":[],"id":1}"#,
        PingCmd {},
    );
}

#[test]
fn preciousblock() {
    assert_command(
        &[json!("0123")],
        PreciousBlockCmd::new("0123"),
        r#"{"jsonrpc":"1.0","method":"preciousblock","params":["0123"],"id":1}"#,
        PreciousBlockCmd::new("0123"),
    );
}

#[test]
fn reconsiderblock() {
    assert_command(
        &[json!("123")],
        ReconsiderBlockCmd::new("123"),
        r#"{"jsonrpc":"1.0","method":"reconsiderblock","params":["123"],"id":1}"#,
        ReconsiderBlockCmd::new("123"),
    );
}

#[test]
fn searchrawtransactions() {
    assert_command(
        &[json!("1Address")],
        SearchRawTransactionsCmd::new("1Address"),
        r#"{"jsonrpc":"1.0","method":"searchrawtransactions","params":["1Address"],"id":1}"#,
        SearchRawTransactionsCmd {
            address: "1Address".to_string(),
            verbose: Some(1),
            skip: Some(0),
            count: Some(100),
            vin_extra: Some(0),
            reverse: Some(false),
            filter_addrs: None,
        },
    );
}

#[test]
fn searchrawtransactions_with_verbose() {
    assert_command(
        &[json!("1Address"), json!(0)],
        SearchRawTransactionsCmd {
            verbose: Some(0),
            ..SearchRawTransactionsCmd::new("1Address")
        },
        r#"{"jsonrpc":"1.0","method":"searchrawtransactions","params":["1Address",0],"id":1}"#,
        SearchRawTransactionsCmd {
            address: "1Address".to_string(),
            verbose: Some(0),
            skip: Some(0),
            count: Some(100),
            vin_extra: Some(0),
            reverse: Some(false),
            filter_addrs: None,
        },
    );
}

#[test]
fn searchrawtransactions_with_paging() {
    assert_command(
        &[json!("1Address"), json!(0), json!(5), json!(10)],
        SearchRawTransactionsCmd {
            verbose: Some(0),
            skip: Some(5),
            count: Some(10),
            ..SearchRawTransactionsCmd::new("1Address")
        },
        r#"{"jsonrpc":"1.0","method":"searchrawtransactions","params":["1Address",0,5,10],"id":1}"#,
        SearchRawTransactionsCmd {
            address: "1Address".to_string(),
            verbose: Some(0),
            skip: Some(5),
            count: Some(10),
            vin_extra: Some(0),
            reverse: Some(false),
            filter_addrs: None,
        },
    );
}

#[test]
fn searchrawtransactions_with_all_params() {
    assert_command(
        &[
            json!("1Address"),
            json!(0),
            json!(5),
            json!(10),
            json!(1),
            json!(true),
            json!(["1Address"]),
        ],
        SearchRawTransactionsCmd {
            address: "1Address".to_string(),
            verbose: Some(0),
            skip: Some(5),
            count: Some(10),
            vin_extra: Some(1),
            reverse: Some(true),
            filter_addrs: Some(vec!["1Address".to_string()]),
        },
        r#"{"jsonrpc":"1.0","method":"searchrawtransactions","params":["1Address",0,5,10,1,true,["1Address"]],"id":1}"#,
        SearchRawTransactionsCmd {
            address: "1Address".to_string(),
            verbose: Some(0),
            skip: Some(5),
            count: Some(10),
            vin_extra: Some(1),
            reverse: Some(true),
            filter_addrs: Some(vec!["1Address".to_string()]),
        },
    );
}

#[test]
fn sendrawtransaction() {
    assert_command(
        &[json!("1122")],
        SendRawTransactionCmd::new("1122"),
        r#"{"jsonrpc":"1.0","method":"sendrawtransaction","params":["1122"],"id":1}"#,
        SendRawTransactionCmd {
            hex_tx: "1122".to_string(),
            allow_high_fees: Some(false),
        },
    );
}

#[test]
fn sendrawtransaction_with_high_fees() {
    assert_command(
        &[json!("1122"), json!(false)],
        SendRawTransactionCmd {
            hex_tx: "1122".to_string(),
            allow_high_fees: Some(false),
        },
        r#"{"jsonrpc":"1.0","method":"sendrawtransaction","params":["1122",false],"id":1}"#,
        SendRawTransactionCmd {
            hex_tx: "1122".to_string(),
            allow_high_fees: Some(false),
        },
    );
}

#[test]
fn setgenerate() {
    assert_command(
        &[json!(true)],
        SetGenerateCmd::new(true),
        r#"{"jsonrpc":"1.0","method":"setgenerate","params":[true],"id":1}"#,
        SetGenerateCmd {
            generate: true,
            gen_proc_limit: Some(-1),
        },
    );
}

#[test]
fn setgenerate_with_proc_limit() {
    assert_command(
        &[json!(true), json!(6)],
        SetGenerateCmd {
            generate: true,
            gen_proc_limit: Some(6),
        },
        r#"{"jsonrpc":"1.0","method":"setgenerate","params":[true,6],"id":1}"#,
        SetGenerateCmd {
            generate: true,
            gen_proc_limit: Some(6),
        },
    );
}

#[test]
fn stop() {
    assert_command(
        &[],
        StopCmd {},
        r#"{"jsonrpc":"1.0","method":"stop","params":[],"id":1}"#,
        StopCmd {},
    );
}

#[test]
fn submitblock() {
    assert_command(
        &[json!("112233")],
        SubmitBlockCmd::new("112233"),
        r#"{"jsonrpc":"1.0","method":"submitblock","params":["112233"],"id":1}"#,
        SubmitBlockCmd {
            hex_block: "112233".to_string(),
            options: None,
        },
    );
}

#[test]
fn submitblock_with_options() {
    assert_command(
        &[json!("112233"), json!(r#"{"workid":"12345"}"#)],
        SubmitBlockCmd {
            hex_block: "112233".to_string(),
            options: Some(SubmitBlockOptions {
                work_id: "12345".to_string(),
            }),
        },
        r#"{"jsonrpc":"1.0","method":"submitblock","params":["112233",{"workid":"12345"}],"id":1}"#,
        SubmitBlockCmd {
            hex_block: "112233".to_string(),
            options: Some(SubmitBlockOptions {
                work_id: "12345".to_string(),
            }),
        },
    );
}

#[test]
fn uptime() {
    assert_command(
        &[],
        UptimeCmd {},
        r#"{"jsonrpc":"1.0","method":"uptime","params":[],"id":1}"#,
        UptimeCmd {},
    );
}

#[test]
fn validateaddress() {
    assert_command(
        &[json!("1Address")],
        ValidateAddressCmd::new("1Address"),
        r#"{"jsonrpc":"1.0","method":"validateaddress","params":["1Address"],"id":1}"#,
        ValidateAddressCmd::new("1Address"),
    );
}

#[test]
fn verifychain() {
    assert_command(
        &[],
        VerifyChainCmd::new(),
        r#"{"jsonrpc":"1.0","method":"verifychain","params":[],"id":1}"#,
        VerifyChainCmd {
            check_level: Some(3),
            check_depth: Some(288),
        },
    );
}

#[test]
fn verifychain_with_level() {
    assert_command(
        &[json!(2)],
        VerifyChainCmd {
            check_level: Some(2),
            check_depth: None,
        },
        r#"{"jsonrpc":"1.0","method":"verifychain","params":[2],"id":1}"#,
        VerifyChainCmd {
            check_level: Some(2),
            check_depth: Some(288),
        },
    );
}

#[test]
fn verifychain_with_level_and_depth() {
    assert_command(
        &[json!(2), json!(500)],
        VerifyChainCmd {
            check_level: Some(2),
            check_depth: Some(500),
        },
        r#"{"jsonrpc":"1.0","method":"verifychain","params":[2,500],"id":1}"#,
        VerifyChainCmd {
            check_level: Some(2),
            check_depth: Some(500),
        },
    );
}

#[test]
fn verifymessage() {
    assert_command(
        &[json!("1Address"), json!("301234"), json!("test")],
        VerifyMessageCmd::new("1Address", "301234", "test"),
        r#"{"jsonrpc":"1.0","method":"verifymessage","params":["1Address","301234","test"],"id":1}"#,
        VerifyMessageCmd::new("1Address", "301234", "test"),
    );
}

#[test]
fn verifytxoutproof() {
    assert_command(
        &[json!("test")],
        VerifyTxOutProofCmd::new("test"),
        r#"{"jsonrpc":"1.0","method":"verifytxoutproof","params":["test"],"id":1}"#,
        VerifyTxOutProofCmd::new("test"),
    );
}
