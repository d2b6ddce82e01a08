//! account disclosure and account query tests

use crate::utils::*;
use alloy_primitives::Address;
use pretty_assertions::assert_eq;
use serde_json::json;
use wicket::{GatewayConfig, WalletError};

fn addresses(value: serde_json::Value) -> Vec<Address> {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn disclosure_connects_the_origin_and_returns_addresses() {
    let (api, _) = spawn_default();
    let recorder = EventRecorder::attach(&api);

    let response = api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;

    assert_eq!(addresses(expect_success(&response)), vec![ALICE, BOB]);
    assert_eq!(api.connections().list(), vec![DAPP.to_string()]);
    assert_eq!(recorder.accounts.lock().as_slice(), &[ALICE]);
    assert_eq!(recorder.connections.lock().as_slice(), &[(DAPP.to_string(), true)]);
}

#[tokio::test]
async fn plain_origin_succeeds_without_a_prior_grant() {
    let (api, _) = spawn_default();

    let response = api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;

    assert_eq!(addresses(expect_success(&response)), vec![ALICE, BOB]);
    assert!(api.permissions().granted(DAPP).is_none());
}

#[tokio::test]
async fn trusted_origin_succeeds_without_a_prior_grant() {
    let (api, _) = spawn(GatewayConfig::default().with_trusted_origins([WALLET_UI]));

    let response = api.handle(call("eth_requestAccounts", json!([])), sender(WALLET_UI)).await;

    assert_eq!(addresses(expect_success(&response)), vec![ALICE, BOB]);
    assert!(api.connections().is_connected(WALLET_UI));
}

#[tokio::test]
async fn account_query_returns_the_disclosed_addresses() {
    let (api, _) = spawn_default();

    api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;
    let response = api.handle(call("eth_accounts", json!([])), sender(DAPP)).await;

    assert_eq!(addresses(expect_success(&response)), vec![ALICE, BOB]);
}

#[tokio::test]
async fn account_query_for_never_connected_origin_is_empty() {
    let (api, _) = spawn_default();

    let response = api.handle(call("eth_accounts", json!([])), sender(DAPP)).await;

    assert_eq!(addresses(expect_success(&response)), Vec::<Address>::new());
}

#[tokio::test]
async fn account_query_after_disconnect_is_empty_not_an_error() {
    let (api, _) = spawn_default();

    api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;
    api.revoke_permission(DAPP);

    let response = api.handle(call("eth_accounts", json!([])), sender(DAPP)).await;
    assert_eq!(addresses(expect_success(&response)), Vec::<Address>::new());
}

#[tokio::test]
async fn locked_wallet_failure_is_relayed_and_does_not_connect() {
    let (api, wallet) = spawn_default();
    wallet.fail_next(WalletError::Locked);

    let response = api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;

    assert_eq!(expect_error(&response).message, "Wallet is locked");
    assert!(api.connections().list().is_empty());
}

#[tokio::test]
async fn repeated_disclosure_emits_no_duplicate_connection_event() {
    let (api, _) = spawn_default();
    let recorder = EventRecorder::attach(&api);

    api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;
    api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;

    assert_eq!(recorder.connections.lock().as_slice(), &[(DAPP.to_string(), true)]);
    // the active account is still announced per disclosure
    assert_eq!(recorder.accounts.lock().as_slice(), &[ALICE, ALICE]);
}
