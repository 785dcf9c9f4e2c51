//! Delivery of the finished archive.
//!
//! The archive is staged in a temporary file inside the destination directory
//! and then persisted under its final name. The temporary file is removed on
//! every failure path, so a partial archive is never left behind.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{PackError, PackResult};

/// File name offered for a username's pack.
pub fn archive_filename(username: &str) -> String {
    format!("{}.zip", username)
}

/// Write `archive` to `output_dir/filename`, replacing any existing file.
///
/// Returns the path of the delivered file.
pub fn deliver(archive: &[u8], output_dir: &Path, filename: &str) -> PackResult<PathBuf> {
    let target = output_dir.join(filename);
    let delivery_error = |reason: String| PackError::Delivery {
        path: target.display().to_string(),
        reason,
    };

    if !is_plain_file_name(filename) {
        return Err(delivery_error(format!(
            "'{}' is not a plain file name",
            filename
        )));
    }

    std::fs::create_dir_all(output_dir).map_err(|e| delivery_error(e.to_string()))?;

    let mut staged =
        NamedTempFile::new_in(output_dir).map_err(|e| delivery_error(e.to_string()))?;
    debug!(staging = %staged.path().display(), "staging archive");

    staged
        .write_all(archive)
        .and_then(|_| staged.flush())
        .map_err(|e| delivery_error(e.to_string()))?;

    staged
        .persist(&target)
        .map_err(|e| delivery_error(e.error.to_string()))?;

    info!(path = %target.display(), bytes = archive.len(), "archive delivered");
    Ok(target)
}

fn is_plain_file_name(filename: &str) -> bool {
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == filename
    )
}
