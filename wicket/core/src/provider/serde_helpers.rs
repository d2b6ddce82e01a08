//! custom serde helper functions

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer};

/// Parses a decimal or `0x`-prefixed hex string into a [`U256`].
pub fn parse_amount(s: &str) -> Option<U256> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        U256::from_str_radix(hex, 16).ok()
    } else {
        U256::from_str_radix(s, 10).ok()
    }
}

/// Deserializes an optional integer amount from the shapes page script
/// produces: a JSON number, a decimal string or a hex string:
/// `1000`, `"1000"`, `"0x3e8"`.
pub fn deserialize_amount_opt<'de, D>(deserializer: D) -> Result<Option<U256>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Num(u64),
        Text(String),
    }

    match Option::<Amount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Amount::Num(n)) => Ok(Some(U256::from(n))),
        Some(Amount::Text(s)) => parse_amount(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid numeric value: {s}"))),
    }
}

/// A module that deserializes an empty (or absent) `params` sequence
pub mod empty_params {
    use serde::{Deserialize, Deserializer};

    #[derive(Debug, Deserialize)]
    struct Empty;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        let seq = Option::<Vec<Empty>>::deserialize(deserializer)?.unwrap_or_default();
        if !seq.is_empty() {
            return Err(serde::de::Error::custom(format!(
                "expected params sequence with length 0 but got {}",
                seq.len()
            )));
        }
        Ok(())
    }
}
