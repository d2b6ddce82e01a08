//! Provider request types

use alloy_primitives::Address;
use serde::Deserialize;

pub mod sender;
pub mod serde_helpers;
pub mod transaction;

pub use sender::{SenderContext, TabContext};
pub use transaction::{SwitchChainArgs, TransactionArgs};

use serde_helpers::empty_params;

/// A provider request with a dedicated handler, plus the explicit `Raw`
/// passthrough for everything else.
///
/// Method naming follows [EIP-1193](https://eips.ethereum.org/EIPS/eip-1193).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum ProviderRequest {
    /// Account disclosure; establishes the origin's connection
    #[serde(rename = "eth_requestAccounts", with = "empty_params")]
    RequestAccounts(()),

    #[serde(rename = "eth_accounts", with = "empty_params")]
    Accounts(()),

    #[serde(rename = "eth_sendTransaction")]
    SendTransaction([TransactionArgs; 1]),

    /// `personal_sign(message, address)`; the address is informational, a
    /// single active signer is assumed
    #[serde(rename = "personal_sign")]
    PersonalSign(String, Address),

    #[serde(rename = "eth_signTypedData_v4")]
    SignTypedData(Address, serde_json::Value),

    #[serde(rename = "wallet_switchEthereumChain")]
    SwitchChain([SwitchChainArgs; 1]),

    #[serde(rename = "eth_chainId", with = "empty_params")]
    ChainId(()),

    #[serde(rename = "net_version", with = "empty_params")]
    NetVersion(()),

    /// Any method without a dedicated handler; forwarded to the wallet
    /// verbatim with its params
    #[serde(skip)]
    Raw {
        method: String,
        params: Vec<serde_json::Value>,
    },
}

impl ProviderRequest {
    /// Parses a raw `(method, params)` pair into a typed request.
    ///
    /// A method without a dedicated variant becomes [`ProviderRequest::Raw`]
    /// with absent params defaulted to an empty list. Malformed params for a
    /// known method surface as the serde error.
    pub fn parse(method: &str, params: serde_json::Value) -> Result<Self, serde_json::Error> {
        let call = serde_json::json!({
            "method": method,
            "params": params
        });
        match serde_json::from_value::<Self>(call.clone()) {
            Ok(request) => Ok(request),
            Err(err) if err.to_string().contains("unknown variant") => {
                let params = match call["params"].clone() {
                    serde_json::Value::Array(values) => values,
                    serde_json::Value::Null => Vec::new(),
                    other => vec![other],
                };
                Ok(Self::Raw { method: method.to_string(), params })
            }
            Err(err) => Err(err),
        }
    }
}
