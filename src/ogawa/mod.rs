//! Low-level Ogawa binary format reader.
//!
//! Ogawa is the container format used by Alembic archives: a tree of
//! groups and data blocks addressed by 64-bit offsets. This module reads
//! the container and the Alembic header structures stored inside it.
//! Sample payloads are never touched.

pub mod archive;
pub mod format;
pub mod read_util;
pub mod reader;

pub use archive::OgawaArchiveReader;
pub use reader::{IArchive, IData, IGroup, IStreams};
