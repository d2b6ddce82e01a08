//! Provider call bindings

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

/// A provider request issued by a page against the wallet.
///
/// Shaped like a JSON-RPC method call, plus the metadata the content script
/// attaches on the way in: the injected-provider tag and the page
/// [`RequestOptions`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCall {
    /// The name of the method to be invoked
    pub method: String,
    /// Positional parameter values
    #[serde(default)]
    pub params: RequestParams,
    /// An identifier established by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    /// Injected-provider tag, e.g. `"ethereum"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Page metadata attached by the content script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<RequestOptions>,
}

impl ProviderCall {
    /// Creates a new call with the given method and params.
    pub fn new(method: impl Into<String>, params: impl Into<RequestParams>) -> Self {
        Self {
            method: method.into(),
            params: params.into(),
            id: None,
            provider: None,
            options: None,
        }
    }

    /// Sets the request id.
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }
}

/// Representation of a method call's parameters
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestParams {
    /// No parameters
    #[default]
    None,
    /// An ordered list of values
    Array(Vec<serde_json::Value>),
}

impl From<Vec<serde_json::Value>> for RequestParams {
    fn from(params: Vec<serde_json::Value>) -> Self {
        RequestParams::Array(params)
    }
}

impl From<RequestParams> for serde_json::Value {
    fn from(params: RequestParams) -> Self {
        match params {
            RequestParams::None => serde_json::Value::Null,
            RequestParams::Array(values) => values.into(),
        }
    }
}

/// Metadata about the page that issued a request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "faviconURL", default, skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<u32>,
}

/// Represents a JSON-RPC request id: a number, a string or null.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// A numerical id
    Number(u64),
    /// A string id
    String(String),
    /// Null id
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(num) => num.fmt(f),
            Id::String(s) => s.fmt(f),
            Id::Null => f.write_str("null"),
        }
    }
}

/// The JSON-RPC 2.0 protocol version tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    V2,
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str("2.0")
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Version, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("\"2.0\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match value {
                    "2.0" => Ok(Version::V2),
                    _ => Err(de::Error::custom("unsupported JSON-RPC protocol version")),
                }
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
