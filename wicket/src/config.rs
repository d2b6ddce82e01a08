use std::collections::HashSet;

/// Gateway construction parameters.
///
/// The trusted-origin allow list is injected here rather than baked in, so
/// the authorization policy stays reproducible and swappable in tests.
#[derive(Clone, Debug, Default)]
pub struct GatewayConfig {
    /// First-party origins exempt from explicit-grant checks for every
    /// method.
    pub trusted_origins: HashSet<String>,
}

impl GatewayConfig {
    /// Sets the trusted origins.
    #[must_use]
    pub fn with_trusted_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_origins = origins.into_iter().map(Into::into).collect();
        self
    }
}
