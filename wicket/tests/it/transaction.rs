//! transaction submission tests

use crate::utils::*;
use alloy_primitives::{TxHash, U256};
use pretty_assertions::assert_eq;
use serde_json::json;
use wicket::{WalletError, WalletTransaction};
use wicket_rpc::error::ErrorCode;

#[tokio::test]
async fn normalizes_numeric_string_fields() {
    let (api, wallet) = spawn_default();
    api.grant_permission(DAPP, &["*"]);

    let response = api
        .handle(
            call(
                "eth_sendTransaction",
                json!([{
                    "to": format!("{BOB}"),
                    "value": "1000",
                    "gas": "0x5208",
                    "gasPrice": "20000000000"
                }]),
            ),
            sender(DAPP),
        )
        .await;
    expect_success(&response);

    assert_eq!(
        wallet.calls(),
        vec![WalletCall::SendTransaction(WalletTransaction {
            to: Some(BOB),
            value: Some(U256::from(1000u64)),
            data: None,
            gas_limit: Some(U256::from(21_000u64)),
            gas_price: Some(U256::from(20_000_000_000u64)),
        })]
    );
}

#[tokio::test]
async fn unset_fields_reach_the_wallet_unset() {
    let (api, wallet) = spawn_default();
    api.grant_permission(DAPP, &["*"]);

    api.handle(call("eth_sendTransaction", json!([{"to": format!("{BOB}")}])), sender(DAPP))
        .await;

    assert_eq!(
        wallet.calls(),
        vec![WalletCall::SendTransaction(WalletTransaction {
            to: Some(BOB),
            ..Default::default()
        })]
    );
}

#[tokio::test]
async fn accepts_plain_json_numbers() {
    let (api, wallet) = spawn_default();
    api.grant_permission(DAPP, &["*"]);

    api.handle(
        call("eth_sendTransaction", json!([{"to": format!("{BOB}"), "value": 1000}])),
        sender(DAPP),
    )
    .await;

    match wallet.calls().as_slice() {
        [WalletCall::SendTransaction(tx)] => assert_eq!(tx.value, Some(U256::from(1000u64))),
        other => panic!("unexpected calls: {other:?}"),
    }
}

#[tokio::test]
async fn returns_the_transaction_hash() {
    let (api, _) = spawn_default();
    api.grant_permission(DAPP, &["*"]);

    let response = api
        .handle(call("eth_sendTransaction", json!([{"to": format!("{BOB}")}])), sender(DAPP))
        .await;

    let hash: TxHash = serde_json::from_value(expect_success(&response)).unwrap();
    assert_eq!(hash, TX_HASH);
}

#[tokio::test]
async fn wallet_rejection_is_relayed_verbatim() {
    let (api, wallet) = spawn_default();
    api.grant_permission(DAPP, &["*"]);
    wallet.fail_next(WalletError::Rejected);

    let response = api
        .handle(call("eth_sendTransaction", json!([{"to": format!("{BOB}")}])), sender(DAPP))
        .await;

    let err = expect_error(&response);
    assert_eq!(err.code, ErrorCode::UserRejectedRequest);
    assert_eq!(err.message, "User rejected the request");
}
