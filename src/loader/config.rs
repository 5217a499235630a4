use std::time::Duration;

use reqwest::Url;

use crate::loader::error::ConfigError;

/// Where the dataset lives and how to ask for it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoaderConfig {
    pub base_url: String,
    pub resource_path: String,
    /// 0 disables the timeout.
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl LoaderConfig {
    pub fn v0() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            resource_path: "/specimens.json".into(),
            timeout_ms: 10_000,
            user_agent: concat!("specimen-catalog/", env!("CARGO_PKG_VERSION")).into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resource_url().map(|_| ())
    }

    /// Resolve the resource path against the base URL the way a browser
    /// resolves a root-relative fetch: `/specimens.json` replaces any path
    /// already on the base.
    pub fn resource_url(&self) -> Result<Url, ConfigError> {
        if self.resource_path.trim().is_empty() {
            return Err(ConfigError::EmptyResourcePath);
        }

        let base = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base.scheme().to_string()));
        }

        base.join(&self.resource_path)
            .map_err(|e| ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: e.to_string(),
            })
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::v0()
    }
}
