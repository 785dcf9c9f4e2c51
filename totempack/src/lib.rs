//! totempack - Minecraft totem resource packs from player skins
//!
//! This library builds a resource pack that replaces the totem-of-undying item
//! texture with a player's skin. A build runs one pipeline to completion:
//!
//! ```text
//! fetch skin ──► transform ──► fetch pack.mcmeta ┐
//!                              fetch avatar      ├──► assemble ──► deliver
//!                              fetch item model  ┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use totempack::assets::LocalAssetSource;
//! use totempack::pipeline::TotemPackPipeline;
//! use totempack::provider::{AsyncReqwestClient, SkinEndpoints, SkinService};
//! use totempack::texture::TextureProcessor;
//!
//! let skins = SkinService::new(AsyncReqwestClient::new()?, SkinEndpoints::default());
//! let assets = LocalAssetSource::new(totempack::config::DEFAULT_ASSETS_DIR);
//! let pipeline = TotemPackPipeline::new(skins, assets, TextureProcessor::default(), ".");
//!
//! let outcome = pipeline.download_totem_pack("Notch").await?;
//! println!("wrote {}", outcome.path.display());
//! ```

pub mod archive;
pub mod assets;
pub mod config;
pub mod delivery;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod preview;
pub mod provider;
pub mod texture;

pub use error::PackError;

/// Version of the totempack library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
