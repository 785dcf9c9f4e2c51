//! Skin service: player skin textures and avatar thumbnails.

use tracing::{debug, info};

use super::http::{AsyncHttpClient, HttpError};
use crate::error::{PackError, PackResult};

/// Default base URL of the skin hosting service.
pub const DEFAULT_SKIN_SERVICE_URL: &str = "https://mineskin.eu";

/// Pixel size requested for avatar thumbnails.
const AVATAR_SIZE: u32 = 256;

/// URL layout of the skin service.
///
/// Usernames are inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinEndpoints {
    base_url: String,
}

impl Default for SkinEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_SKIN_SERVICE_URL)
    }
}

impl SkinEndpoints {
    /// Create endpoints for a service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the raw skin texture.
    pub fn skin_url(&self, username: &str) -> String {
        format!("{}/skin/{}", self.base_url, username)
    }

    /// URL of the rendered avatar thumbnail.
    pub fn avatar_url(&self, username: &str) -> String {
        format!("{}/avatar/{}/{}.png", self.base_url, username, AVATAR_SIZE)
    }
}

/// Fetches skins and avatars for a username.
pub struct SkinService<C> {
    client: C,
    endpoints: SkinEndpoints,
}

impl<C: AsyncHttpClient> SkinService<C> {
    /// Create a new skin service.
    pub fn new(client: C, endpoints: SkinEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// The endpoints this service requests.
    pub fn endpoints(&self) -> &SkinEndpoints {
        &self.endpoints
    }

    /// Borrow the underlying HTTP client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch the raw skin texture (undecoded PNG).
    ///
    /// A 404 means the user has no public skin and is reported as
    /// [`PackError::NotFound`], separate from other remote failures.
    pub async fn fetch_skin(&self, username: &str) -> PackResult<Vec<u8>> {
        let url = self.endpoints.skin_url(username);
        debug!(username, url = %url, "fetching skin texture");

        match self.client.get(&url).await {
            Ok(bytes) => {
                info!(username, bytes = bytes.len(), "skin texture fetched");
                Ok(bytes)
            }
            Err(HttpError::Status { status: 404, .. }) => Err(PackError::NotFound {
                username: username.to_string(),
            }),
            Err(e) => Err(remote_error("skin", e)),
        }
    }

    /// Fetch the avatar thumbnail used as the pack icon.
    pub async fn fetch_avatar(&self, username: &str) -> PackResult<Vec<u8>> {
        let url = self.endpoints.avatar_url(username);
        debug!(username, url = %url, "fetching avatar image");

        let bytes = self
            .client
            .get(&url)
            .await
            .map_err(|e| remote_error("avatar image", e))?;
        debug!(username, bytes = bytes.len(), "avatar image fetched");
        Ok(bytes)
    }
}

fn remote_error(resource: &'static str, err: HttpError) -> PackError {
    match err {
        HttpError::Status { status, url } => PackError::Remote {
            resource,
            status,
            url,
        },
        HttpError::Transport { url, reason } => PackError::Network { url, reason },
    }
}
