//! Aggregated error type for the provider gateway

use crate::wallet::WalletError;
use serde::Serialize;
use tracing::error;
use wicket_rpc::{
    error::{ErrorCode, RpcError},
    response::ResponseResult,
};

pub(crate) type Result<T> = std::result::Result<T, GatewayError>;

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    /// Origin lacks permission for a restricted method.
    #[error("Unauthorized")]
    Unauthorized,
    /// A failure surfaced by the wallet collaborator.
    #[error(transparent)]
    Wallet(#[from] WalletError),
    /// Switching chains failed and no usable fallback succeeded.
    #[error("Failed to switch chain: {0}")]
    ChainSwitch(String),
    /// The chain id parameter was not a parsable hex string.
    #[error("invalid chain id {0:?}")]
    InvalidChainId(String),
}

/// Helper trait to easily convert results to rpc results
pub(crate) trait ToRpcResponseResult {
    fn to_rpc_result(self) -> ResponseResult;
}

/// Converts a serializable value into a [`ResponseResult`]
pub fn to_rpc_result<T: Serialize>(val: T) -> ResponseResult {
    match serde_json::to_value(val) {
        Ok(success) => ResponseResult::Success(success),
        Err(err) => {
            error!(target: "provider", "failed to serialize rpc response: {err:?}");
            ResponseResult::error(RpcError::internal_error_with("Unknown error"))
        }
    }
}

impl<T: Serialize> ToRpcResponseResult for Result<T> {
    fn to_rpc_result(self) -> ResponseResult {
        match self {
            Ok(val) => to_rpc_result(val),
            Err(err) => match err {
                GatewayError::Unauthorized => RpcError::unauthorized(),
                GatewayError::Wallet(err) => {
                    let message = non_empty_message(err.to_string());
                    match err {
                        WalletError::Rejected => RpcError::user_rejected(message),
                        WalletError::Locked => RpcError {
                            code: ErrorCode::Unauthorized,
                            message: message.into(),
                            data: None,
                        },
                        WalletError::UnrecognizedChain(_) => {
                            RpcError::unrecognized_chain(message)
                        }
                        WalletError::Other(_) => RpcError::internal_error_with(message),
                    }
                }
                err @ GatewayError::ChainSwitch(_) => RpcError::unrecognized_chain(err.to_string()),
                err @ GatewayError::InvalidChainId(_) => RpcError::invalid_params(err.to_string()),
            }
            .into(),
        }
    }
}

/// Failures that render no message are normalized to "Unknown error."
fn non_empty_message(message: String) -> String {
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}
