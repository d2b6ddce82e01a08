use serde::{Deserialize, Serialize};
use url::Url;

/// Context describing where a provider call came from.
///
/// Extension surfaces populate `origin` directly; content scripts usually
/// only know the page `url`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<TabContext>,
}

/// Metadata about the browser tab a call originated in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "faviconURL", default, skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
}

impl SenderContext {
    /// A sender known only by its origin.
    pub fn from_origin(origin: impl Into<String>) -> Self {
        Self { origin: Some(origin.into()), ..Default::default() }
    }

    /// A sender known only by its page url.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self { url: Some(url.into()), ..Default::default() }
    }

    /// The requesting origin: the explicit `origin` field when present,
    /// otherwise derived from `url` (`scheme://host[:port]`). Opaque
    /// origins resolve to `None`.
    pub fn resolved_origin(&self) -> Option<String> {
        if let Some(origin) = self.origin.as_deref() {
            if !origin.is_empty() {
                return Some(origin.to_string());
            }
        }
        let url = Url::parse(self.url.as_deref()?).ok()?;
        let origin = url.origin();
        origin.is_tuple().then(|| origin.ascii_serialization())
    }
}
