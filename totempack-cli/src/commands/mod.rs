//! CLI command implementations.
//!
//! - [`build`] - Build and save a player's totem pack
//! - [`preview`] - 3D viewer settings, optionally following stdin
//! - [`init`] - Configuration file initialization and path

pub mod build;
pub mod common;
pub mod init;
pub mod preview;
