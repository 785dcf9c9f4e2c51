//! Remote skin provider.
//!
//! Fetches a player's raw skin texture and avatar thumbnail from a
//! third-party skin service over HTTP.
//!
//! ```ignore
//! use totempack::provider::{AsyncReqwestClient, SkinEndpoints, SkinService};
//!
//! let service = SkinService::new(AsyncReqwestClient::new()?, SkinEndpoints::default());
//! let skin = service.fetch_skin("Notch").await?;
//! ```

mod http;
mod skin;

pub use http::{AsyncHttpClient, AsyncReqwestClient, HttpError};
pub use skin::{SkinEndpoints, SkinService, DEFAULT_SKIN_SERVICE_URL};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
