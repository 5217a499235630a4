use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Url;

use crate::loader::config::LoaderConfig;
use crate::loader::error::{ConfigError, LoadError};

/// Where the raw dataset body comes from.
#[async_trait]
pub trait SpecimenSource: Send + Sync {
    /// Human-readable location, recorded in the manifest.
    fn describe(&self) -> String;

    /// One read of the whole body. Implementations must not retry.
    async fn read(&self) -> Result<Vec<u8>, LoadError>;
}

/// Single GET against the static dataset resource.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn from_config(config: &LoaderConfig) -> Result<Self, ConfigError> {
        let url = config.resource_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SpecimenSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        Ok(body.to_vec())
    }
}

/// The same JSON document read from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SpecimenSource for FileSource {
    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }

    async fn read(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Transport(format!("{}: {e}", self.path.display())))
    }
}
