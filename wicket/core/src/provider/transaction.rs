use crate::provider::serde_helpers::deserialize_amount_opt;
use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Call arguments for `eth_sendTransaction`.
///
/// Page script sends `value`, `gas` and `gasPrice` as JSON numbers, decimal
/// strings or hex strings; all three are normalized to integer amounts on
/// the way in. Unset fields stay unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(
        default,
        deserialize_with = "deserialize_amount_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<U256>,
    #[serde(
        default,
        deserialize_with = "deserialize_amount_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas: Option<U256>,
    #[serde(
        default,
        deserialize_with = "deserialize_amount_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas_price: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
}

/// Target of a `wallet_switchEthereumChain` request, per
/// [EIP-3326](https://eips.ethereum.org/EIPS/eip-3326).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SwitchChainArgs {
    /// `0x`-prefixed hex chain id
    pub chain_id: String,
}

impl SwitchChainArgs {
    /// Parses the hex chain id into an integer, `None` if malformed.
    pub fn parse_chain_id(&self) -> Option<u64> {
        let s = self.chain_id.trim();
        let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        u64::from_str_radix(hex, 16).ok()
    }
}
