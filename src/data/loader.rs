//! Single-shot JSON loading from a stats root (HTTP base URL or local directory).

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::Context;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::LoadError;

/// Location the `stats/*.json` paths are resolved against.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsRoot {
    Url(Url),
    Dir(PathBuf),
}

impl StatsRoot {
    /// `http://` and `https://` roots are fetched over the network, anything
    /// else is treated as a directory.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            let mut url = Url::parse(raw).with_context(|| format!("invalid url {raw}"))?;
            // Url::join drops the last segment unless the base ends with a slash.
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(Self::Url(url))
        } else {
            Ok(Self::Dir(PathBuf::from(raw)))
        }
    }

    /// Directory backing this root, if it is local.
    pub fn local_dir(&self) -> Option<&Path> {
        match self {
            Self::Url(_) => None,
            Self::Dir(dir) => Some(dir),
        }
    }
}

impl fmt::Display for StatsRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Dir(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Loads JSON documents relative to a [`StatsRoot`].
///
/// One attempt per call: no retries, no timeout, no caching.
#[derive(Debug, Clone)]
pub struct JsonLoader {
    root: StatsRoot,
    client: Client,
}

impl JsonLoader {
    pub fn new(root: StatsRoot) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("drawboard/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { root, client })
    }

    pub fn root(&self) -> &StatsRoot {
        &self.root
    }

    /// Fetch `path` and parse the body as JSON.
    #[instrument(skip(self), fields(root = %self.root))]
    pub async fn load(&self, path: &str) -> Result<Value, LoadError> {
        let body = self.fetch(path).await?;
        debug!(bytes = body.len(), "fetched stats document");
        serde_json::from_slice(&body).map_err(|source| LoadError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// [`load`](Self::load), then decode into `T`.
    pub async fn load_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let value = self.load(path).await?;
        serde_json::from_value(value).map_err(|source| LoadError::Shape {
            path: path.to_string(),
            source,
        })
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let network = |reason: String| LoadError::Network {
            path: path.to_string(),
            reason,
        };
        match &self.root {
            StatsRoot::Url(base) => {
                let url = base.join(path).map_err(|e| network(e.to_string()))?;
                let resp = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| network(e.to_string()))?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        path: path.to_string(),
                        status: status.as_u16(),
                    });
                }
                let bytes = resp.bytes().await.map_err(|e| network(e.to_string()))?;
                Ok(bytes.to_vec())
            }
            StatsRoot::Dir(dir) => tokio::fs::read(dir.join(path))
                .await
                .map_err(|e| network(e.to_string())),
        }
    }
}
