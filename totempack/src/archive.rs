//! Resource pack archive assembly.
//!
//! Every pack holds exactly four entries at fixed paths:
//!
//! ```text
//! assets/minecraft/textures/item/totem.png            (binary, processed skin)
//! pack.mcmeta                                         (text, bundled)
//! pack.png                                            (binary, avatar)
//! assets/minecraft/models/item/totem_of_undying.json  (text, bundled)
//! ```

use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::assets::{PACK_MCMETA, TOTEM_MODEL};
use crate::error::{PackError, PackResult};

/// Archive path of the totem texture.
pub const TEXTURE_PATH: &str = "assets/minecraft/textures/item/totem.png";

/// Archive path of the pack icon.
pub const PACK_ICON: &str = "pack.png";

/// Deflate level used for every entry.
const COMPRESSION_LEVEL: i64 = 9;

/// How an entry's content should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEncoding {
    Binary,
    Text,
}

/// A single file placed into the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry<'a> {
    pub path: &'static str,
    pub content: &'a [u8],
    pub encoding: EntryEncoding,
}

/// The four payloads a totem pack is built from.
#[derive(Debug, Clone)]
pub struct PackContents {
    /// Processed skin texture (PNG).
    pub texture: Vec<u8>,
    /// Avatar thumbnail used as the pack icon (PNG).
    pub avatar: Vec<u8>,
    /// `pack.mcmeta`, passed through unmodified.
    pub pack_descriptor: String,
    /// Totem item model, passed through unmodified.
    pub model_descriptor: String,
}

impl PackContents {
    /// Entries in archive order.
    pub fn entries(&self) -> [ArchiveEntry<'_>; 4] {
        [
            ArchiveEntry {
                path: TEXTURE_PATH,
                content: &self.texture,
                encoding: EntryEncoding::Binary,
            },
            ArchiveEntry {
                path: PACK_MCMETA,
                content: self.pack_descriptor.as_bytes(),
                encoding: EntryEncoding::Text,
            },
            ArchiveEntry {
                path: PACK_ICON,
                content: &self.avatar,
                encoding: EntryEncoding::Binary,
            },
            ArchiveEntry {
                path: TOTEM_MODEL,
                content: self.model_descriptor.as_bytes(),
                encoding: EntryEncoding::Text,
            },
        ]
    }
}

/// Build the ZIP archive in memory.
pub fn assemble(contents: &PackContents) -> PackResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    for entry in contents.entries() {
        writer.start_file(entry.path, options)?;
        writer
            .write_all(entry.content)
            .map_err(|e| PackError::Archive(format!("{}: {}", entry.path, e)))?;
        debug!(path = entry.path, bytes = entry.content.len(), encoding = ?entry.encoding, "archive entry written");
    }

    let archive = writer.finish()?.into_inner();
    debug!(bytes = archive.len(), "archive assembled");
    Ok(archive)
}
