//! Bundled static assets.
//!
//! The pack descriptor and the totem item model ship with the application and
//! are copied into every archive unmodified. They are read fresh on every
//! request; a missing asset is a deployment defect and the error says where
//! the file was expected.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PackError, PackResult};
use crate::provider::{AsyncHttpClient, AsyncReqwestClient, HttpError};

/// Path of the pack descriptor, relative to the asset root and inside the archive.
pub const PACK_MCMETA: &str = "pack.mcmeta";

/// Path of the totem item model, relative to the asset root and inside the archive.
pub const TOTEM_MODEL: &str = "assets/minecraft/models/item/totem_of_undying.json";

/// How an asset should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// UTF-8 text.
    Text,
    /// Raw bytes.
    Binary,
}

/// Content of a bundled asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticAsset {
    Text(String),
    Binary(Vec<u8>),
}

impl StaticAsset {
    /// Consume the asset and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            StaticAsset::Text(text) => text.into_bytes(),
            StaticAsset::Binary(bytes) => bytes,
        }
    }

    /// Borrow the text content, if this is a text asset.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StaticAsset::Text(text) => Some(text),
            StaticAsset::Binary(_) => None,
        }
    }
}

/// Source of the bundled static assets.
pub trait AssetSource: Send + Sync {
    /// Read the asset at `path` (relative to the asset root).
    fn fetch_static(
        &self,
        path: &str,
        kind: AssetKind,
    ) -> impl Future<Output = PackResult<StaticAsset>> + Send;

    /// Read a text asset.
    fn fetch_text(&self, path: &str) -> impl Future<Output = PackResult<String>> + Send {
        async move {
            match self.fetch_static(path, AssetKind::Text).await? {
                StaticAsset::Text(text) => Ok(text),
                StaticAsset::Binary(bytes) => decode_text(path, &self.location(), bytes),
            }
        }
    }

    /// Human-readable location of the asset root, used in remediation hints.
    fn location(&self) -> String;
}

fn decode_text(path: &str, location: &str, bytes: Vec<u8>) -> PackResult<String> {
    String::from_utf8(bytes).map_err(|e| PackError::StaticAssetMissing {
        path: path.to_string(),
        location: location.to_string(),
        reason: format!("not valid UTF-8 text: {}", e),
    })
}

/// Assets read from a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalAssetSource {
    root: PathBuf,
}

impl LocalAssetSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for LocalAssetSource {
    async fn fetch_static(&self, path: &str, kind: AssetKind) -> PackResult<StaticAsset> {
        let full_path = self.root.join(path);
        debug!(path = %full_path.display(), ?kind, "reading static asset");

        let bytes = tokio::fs::read(&full_path)
            .await
            .map_err(|e| PackError::StaticAssetMissing {
                path: full_path.display().to_string(),
                location: self.location(),
                reason: e.to_string(),
            })?;

        match kind {
            AssetKind::Binary => Ok(StaticAsset::Binary(bytes)),
            AssetKind::Text => decode_text(path, &self.location(), bytes).map(StaticAsset::Text),
        }
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

/// Assets served over HTTP from a base URL.
#[derive(Clone)]
pub struct RemoteAssetSource<C> {
    client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> RemoteAssetSource<C> {
    /// Create a source that requests `{base_url}/{path}`.
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

impl<C: AsyncHttpClient> AssetSource for RemoteAssetSource<C> {
    async fn fetch_static(&self, path: &str, kind: AssetKind) -> PackResult<StaticAsset> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, ?kind, "fetching static asset");

        let bytes = self.client.get(&url).await.map_err(|e| {
            let reason = match &e {
                HttpError::Status { status, .. } => format!("Status: {}", status),
                HttpError::Transport { reason, .. } => reason.clone(),
            };
            PackError::StaticAssetMissing {
                path: url.clone(),
                location: self.location(),
                reason,
            }
        })?;

        match kind {
            AssetKind::Binary => Ok(StaticAsset::Binary(bytes)),
            AssetKind::Text => decode_text(&url, &self.location(), bytes).map(StaticAsset::Text),
        }
    }

    fn location(&self) -> String {
        format!("{}/", self.base_url)
    }
}

/// Asset source selected at runtime from a location string.
pub enum AssetStore {
    Local(LocalAssetSource),
    Remote(RemoteAssetSource<AsyncReqwestClient>),
}

impl AssetStore {
    /// Choose a source for `location`.
    ///
    /// `http://` and `https://` locations are fetched with `client`; anything
    /// else is treated as a directory.
    pub fn from_location(location: &str, client: AsyncReqwestClient) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            AssetStore::Remote(RemoteAssetSource::new(client, location))
        } else {
            AssetStore::Local(LocalAssetSource::new(location))
        }
    }
}

impl AssetSource for AssetStore {
    async fn fetch_static(&self, path: &str, kind: AssetKind) -> PackResult<StaticAsset> {
        match self {
            AssetStore::Local(source) => source.fetch_static(path, kind).await,
            AssetStore::Remote(source) => source.fetch_static(path, kind).await,
        }
    }

    fn location(&self) -> String {
        match self {
            AssetStore::Local(source) => source.location(),
            AssetStore::Remote(source) => source.location(),
        }
    }
}
