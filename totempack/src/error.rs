//! Error types for the resource pack pipeline.
//!
//! Every stage reports failures as a [`PackError`]. Nothing retries: the
//! pipeline stops at the first error and the caller turns it into a single
//! user-facing notice with [`PackError::notice`].

use thiserror::Error;

/// Result type for pipeline operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur while building a totem resource pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// The username was empty; nothing was requested.
    #[error("Please provide a username.")]
    EmptyUsername,

    /// The skin service has no public skin for this username.
    #[error("User '{username}' not found or does not have a public skin.")]
    NotFound { username: String },

    /// The skin service answered with a non-success status.
    #[error("Failed to load {resource} from {url}. Status: {status}")]
    Remote {
        resource: &'static str,
        status: u16,
        url: String,
    },

    /// The request never produced a status (connection, TLS, body read).
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// A bundled asset could not be read. This is a packaging defect.
    #[error(
        "Failed to load static file: {path}. {reason}. \
         HINT: Ensure the file is placed correctly in '{location}'."
    )]
    StaticAssetMissing {
        path: String,
        location: String,
        reason: String,
    },

    /// The skin payload is not a decodable image.
    #[error("Image loading failed: {0}")]
    ImageDecode(String),

    /// No drawing surface could be obtained for the decoded image.
    #[error("Could not get a drawing surface: {0}")]
    RenderContext(String),

    /// Re-encoding the surface produced no PNG output.
    #[error("Failed to encode PNG: {0}")]
    ImageEncode(String),

    /// Writing an archive entry failed.
    #[error("Failed to write archive: {0}")]
    Archive(String),

    /// The finished archive could not be offered to the user.
    #[error("Failed to save {path}: {reason}")]
    Delivery { path: String, reason: String },

    /// Anything not classified above.
    #[error("{0}")]
    Unknown(String),
}

impl PackError {
    /// Normalize this error into the single message shown to the user.
    pub fn notice(&self) -> String {
        match self {
            PackError::EmptyUsername => self.to_string(),
            other => format!("Error creating the resource pack: {}", other),
        }
    }

    /// Whether the user can fix this by changing their input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, PackError::EmptyUsername | PackError::NotFound { .. })
    }
}

impl From<zip::result::ZipError> for PackError {
    fn from(err: zip::result::ZipError) -> Self {
        PackError::Archive(err.to_string())
    }
}

impl From<tokio::task::JoinError> for PackError {
    fn from(err: tokio::task::JoinError) -> Self {
        PackError::Unknown(format!("background task failed: {}", err))
    }
}
