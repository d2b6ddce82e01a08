//! authorization policy tests against the full gateway

use crate::utils::*;
use serde_json::json;
use wicket::GatewayConfig;
use wicket_rpc::error::ErrorCode;

#[tokio::test]
async fn wildcard_grant_allows_every_restricted_method() {
    let (api, _) = spawn_default();
    api.grant_permission(DAPP, &["*"]);

    let send = api
        .handle(call("eth_sendTransaction", json!([{"to": format!("{BOB}")}])), sender(DAPP))
        .await;
    expect_success(&send);

    let sign =
        api.handle(call("personal_sign", json!(["gm", format!("{ALICE}")])), sender(DAPP)).await;
    expect_success(&sign);

    let typed = api
        .handle(
            call("eth_signTypedData_v4", json!([format!("{ALICE}"), {"types": {}}])),
            sender(DAPP),
        )
        .await;
    expect_success(&typed);
}

#[tokio::test]
async fn grant_scopes_to_the_listed_methods() {
    let (api, _) = spawn_default();
    api.grant_permission(DAPP, &["personal_sign"]);

    let send = api
        .handle(call("eth_sendTransaction", json!([{"to": format!("{BOB}")}])), sender(DAPP))
        .await;
    assert_eq!(expect_error(&send).message, "Unauthorized");

    let sign =
        api.handle(call("personal_sign", json!(["gm", format!("{ALICE}")])), sender(DAPP)).await;
    let signature = expect_success(&sign);
    assert!(signature.as_str().unwrap().starts_with("0x"));
}

#[tokio::test]
async fn trusted_origin_may_use_restricted_methods_without_a_grant() {
    let (api, _) = spawn(GatewayConfig::default().with_trusted_origins([WALLET_UI]));

    let response = api
        .handle(call("eth_sendTransaction", json!([{"to": format!("{BOB}")}])), sender(WALLET_UI))
        .await;
    expect_success(&response);
}

#[tokio::test]
async fn typed_data_signing_requires_a_grant() {
    let (api, _) = spawn_default();

    let response = api
        .handle(
            call("eth_signTypedData_v4", json!([format!("{ALICE}"), {"types": {}}])),
            sender(DAPP),
        )
        .await;
    assert_eq!(expect_error(&response).code, ErrorCode::Unauthorized);
}

#[tokio::test]
async fn revoke_removes_grant_and_connection() {
    let (api, _) = spawn_default();
    let recorder = EventRecorder::attach(&api);

    api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;
    api.grant_permission(DAPP, &["*"]);
    api.revoke_permission(DAPP);

    assert!(api.permissions().granted(DAPP).is_none());
    assert!(api.connections().list().is_empty());
    assert_eq!(
        recorder.connections.lock().as_slice(),
        &[(DAPP.to_string(), true), (DAPP.to_string(), false)]
    );

    let send = api
        .handle(call("eth_sendTransaction", json!([{"to": format!("{BOB}")}])), sender(DAPP))
        .await;
    assert_eq!(expect_error(&send).message, "Unauthorized");
}

#[tokio::test]
async fn clear_all_empties_both_stores() {
    let (api, _) = spawn_default();

    api.handle(call("eth_requestAccounts", json!([])), sender(DAPP)).await;
    api.grant_permission(DAPP, &["*"]);
    api.grant_permission("https://other.example", &["personal_sign"]);

    api.clear_all();

    assert!(api.permissions().origins().is_empty());
    assert!(api.connections().list().is_empty());
}

#[tokio::test]
async fn unrestricted_methods_need_no_grant() {
    let (api, _) = spawn_default();

    let response = api.handle(call("eth_chainId", json!([])), sender(DAPP)).await;
    assert_eq!(expect_success(&response), json!("0x1"));
}
