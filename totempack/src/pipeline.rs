//! Totem pack pipeline driver.
//!
//! Runs one build from username to delivered archive. Stages run strictly in
//! order; the only concurrency is the fan-out that fetches the pack
//! descriptor, the avatar and the item model together once the texture is
//! ready. Any failure aborts the remaining stages and no archive is written.
//!
//! Overlapping builds are independent: nothing is shared between invocations
//! and nothing de-duplicates them.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{error, info, instrument, Span};

use crate::archive::{self, PackContents};
use crate::assets::{AssetSource, PACK_MCMETA, TOTEM_MODEL};
use crate::delivery;
use crate::error::{PackError, PackResult};
use crate::provider::{AsyncHttpClient, SkinService};
use crate::texture::TextureProcessor;

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutcome {
    /// Username the pack was built for.
    pub username: String,
    /// Path of the delivered archive.
    pub path: PathBuf,
    /// Size of the archive in bytes.
    pub archive_size: usize,
}

/// Builds totem resource packs.
pub struct TotemPackPipeline<C, A> {
    skins: SkinService<C>,
    assets: A,
    processor: TextureProcessor,
    output_dir: PathBuf,
}

impl<C, A> TotemPackPipeline<C, A>
where
    C: AsyncHttpClient,
    A: AssetSource,
{
    /// Create a pipeline that delivers archives into `output_dir`.
    pub fn new(
        skins: SkinService<C>,
        assets: A,
        processor: TextureProcessor,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            skins,
            assets,
            processor,
            output_dir: output_dir.into(),
        }
    }

    /// Directory archives are delivered to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The skin service used for remote fetches.
    pub fn skins(&self) -> &SkinService<C> {
        &self.skins
    }

    /// Build the pack for `username` and deliver it as `{username}.zip`.
    ///
    /// Failures are logged on the diagnostic channel and returned; use
    /// [`PackError::notice`] for the user-facing message.
    #[instrument(skip(self), fields(output_dir = %self.output_dir.display()))]
    pub async fn download_totem_pack(&self, username: &str) -> PackResult<PackOutcome> {
        let start = Instant::now();
        match self.build(username).await {
            Ok(outcome) => {
                info!(
                    path = %outcome.path.display(),
                    bytes = outcome.archive_size,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "totem pack ready"
                );
                Ok(outcome)
            }
            Err(e) => {
                error!(error = %e, "totem pack build failed");
                Err(e)
            }
        }
    }

    async fn build(&self, username: &str) -> PackResult<PackOutcome> {
        if username.is_empty() {
            return Err(PackError::EmptyUsername);
        }

        let raw_skin = self.skins.fetch_skin(username).await?;
        let texture = self.processor.transform(raw_skin).await?;
        info!(bytes = texture.len(), "totem texture generated");

        let (pack_descriptor, avatar, model_descriptor) = tokio::try_join!(
            self.assets.fetch_text(PACK_MCMETA),
            self.skins.fetch_avatar(username),
            self.assets.fetch_text(TOTEM_MODEL),
        )?;

        let contents = PackContents {
            texture,
            avatar,
            pack_descriptor,
            model_descriptor,
        };
        let filename = delivery::archive_filename(username);
        let (path, archive_size) =
            package(contents, self.output_dir.clone(), filename).await?;

        Ok(PackOutcome {
            username: username.to_string(),
            path,
            archive_size,
        })
    }
}

/// Compress and write the archive on the blocking pool.
async fn package(
    contents: PackContents,
    output_dir: PathBuf,
    filename: String,
) -> PackResult<(PathBuf, usize)> {
    let span = Span::current();
    tokio::task::spawn_blocking(move || {
        span.in_scope(|| -> PackResult<(PathBuf, usize)> {
            let archive = archive::assemble(&contents)?;
            drop(contents);
            let path = delivery::deliver(&archive, &output_dir, &filename)?;
            Ok((path, archive.len()))
        })
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::LocalAssetSource;
    use crate::provider::{MockAsyncHttpClient, SkinEndpoints};
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    const BASE: &str = "http://skins.test";

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn asset_dir() -> tempfile::TempDir {
        let dir = tempfile::TempDir::new().unwrap();
        let model_dir = dir.path().join("assets/minecraft/models/item");
        std::fs::create_dir_all(&model_dir).unwrap();
        std::fs::write(dir.path().join(PACK_MCMETA), "{\"pack\":{}}").unwrap();
        std::fs::write(model_dir.join("totem_of_undying.json"), "{}").unwrap();
        dir
    }

    fn pipeline(
        client: MockAsyncHttpClient,
        assets: &Path,
        out: &Path,
    ) -> TotemPackPipeline<MockAsyncHttpClient, LocalAssetSource> {
        TotemPackPipeline::new(
            SkinService::new(client, SkinEndpoints::new(BASE)),
            LocalAssetSource::new(assets),
            TextureProcessor::default(),
            out,
        )
    }

    #[tokio::test]
    async fn test_successful_build() {
        let assets = asset_dir();
        let out = tempfile::TempDir::new().unwrap();
        let client = MockAsyncHttpClient::new()
            .with_body("http://skins.test/skin/Steve", png(64, 64))
            .with_body("http://skins.test/avatar/Steve/256.png", png(8, 8));

        let outcome = pipeline(client, assets.path(), out.path())
            .download_totem_pack("Steve")
            .await
            .unwrap();

        assert_eq!(outcome.username, "Steve");
        assert_eq!(outcome.path, out.path().join("Steve.zip"));
        assert_eq!(
            std::fs::metadata(&outcome.path).unwrap().len() as usize,
            outcome.archive_size
        );
    }

    #[tokio::test]
    async fn test_empty_username_makes_no_requests() {
        let assets = asset_dir();
        let out = tempfile::TempDir::new().unwrap();
        let pipeline = pipeline(MockAsyncHttpClient::new(), assets.path(), out.path());

        let err = pipeline.download_totem_pack("").await.unwrap_err();

        assert!(matches!(err, PackError::EmptyUsername));
        assert!(pipeline.skins().client().requests().is_empty());
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_missing_skin_stops_before_avatar() {
        let assets = asset_dir();
        let out = tempfile::TempDir::new().unwrap();
        let pipeline = pipeline(MockAsyncHttpClient::new(), assets.path(), out.path());

        let err = pipeline.download_totem_pack("Nobody").await.unwrap_err();

        assert!(matches!(err, PackError::NotFound { .. }));
        assert_eq!(
            pipeline.skins().client().requests(),
            vec!["http://skins.test/skin/Nobody".to_string()]
        );
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    fn contents() -> PackContents {
        PackContents {
            texture: png(4, 4),
            avatar: png(2, 2),
            pack_descriptor: "{}".to_string(),
            model_descriptor: "{}".to_string(),
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_package_writes_archive_off_runtime() {
        let out = tempfile::TempDir::new().unwrap();

        let (path, size) = package(contents(), out.path().to_path_buf(), "Alex.zip".to_string())
            .await
            .unwrap();

        assert_eq!(path, out.path().join("Alex.zip"));
        assert_eq!(std::fs::metadata(&path).unwrap().len() as usize, size);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_package_reports_delivery_failure() {
        let out = tempfile::TempDir::new().unwrap();
        let blocker = out.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let err = package(contents(), blocker, "Alex.zip".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, PackError::Delivery { .. }));
    }
}
