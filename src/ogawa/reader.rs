//! Ogawa container reader.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

use memmap2::Mmap;
use parking_lot::RwLock;
use tracing::warn;

use super::format::*;
use crate::util::{Error, Result};

/// Input streams for reading Ogawa data.
/// Supports both memory-mapped and buffered I/O modes.
pub struct IStreams {
    inner: StreamsInner,
    version: u16,
    frozen: bool,
    size: u64,
}

enum StreamsInner {
    /// Memory-mapped file (preferred)
    Mmap(Mmap),
    /// Buffered file access (fallback)
    File(Arc<RwLock<File>>),
}

impl IStreams {
    /// Open a file for reading, memory-mapped when possible.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let metadata = file.metadata()?;
        let size = metadata.len();

        if size < HEADER_SIZE as u64 {
            return Err(Error::UnexpectedEof(size));
        }

        // Safety: file is opened read-only; a concurrent truncation would
        // surface as a read fault, which is acceptable for a scanner.
        let inner = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => StreamsInner::Mmap(mmap),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "mmap failed, using buffered reads");
                StreamsInner::File(Arc::new(RwLock::new(file)))
            }
        };

        let (version, frozen) = match &inner {
            StreamsInner::Mmap(mmap) => Self::parse_header(mmap)?,
            StreamsInner::File(file) => {
                let mut f = file.write();
                let mut header = [0u8; HEADER_SIZE];
                f.seek(SeekFrom::Start(0))?;
                f.read_exact(&mut header)?;
                Self::parse_header(&header)?
            }
        };

        Ok(Self { inner, version, frozen, size })
    }

    /// Parse and validate the Ogawa header.
    fn parse_header(data: &[u8]) -> Result<(u16, bool)> {
        if data.len() < HEADER_SIZE {
            return Err(Error::UnexpectedEof(data.len() as u64));
        }

        if &data[0..5] != OGAWA_MAGIC {
            return Err(Error::InvalidMagic);
        }

        let frozen = data[FROZEN_OFFSET] == FROZEN_FLAG;
        let version = u16::from_le_bytes([data[VERSION_OFFSET], data[VERSION_OFFSET + 1]]);

        Ok((version, frozen))
    }

    /// Check if the archive is frozen (finalized).
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Get the format version.
    #[inline]
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Get the total file size.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the root group position from the header.
    pub fn root_pos(&self) -> Result<u64> {
        self.read_u64(ROOT_POS_OFFSET as u64)
    }

    /// Read bytes at a specific position.
    pub fn read_bytes(&self, pos: u64, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.read_into(pos, &mut buf)?;
        Ok(buf)
    }

    /// Read bytes into an existing buffer.
    pub fn read_into(&self, pos: u64, buf: &mut [u8]) -> Result<()> {
        if pos + buf.len() as u64 > self.size {
            return Err(Error::UnexpectedEof(pos + buf.len() as u64));
        }

        match &self.inner {
            StreamsInner::Mmap(mmap) => {
                buf.copy_from_slice(&mmap[pos as usize..(pos as usize + buf.len())]);
                Ok(())
            }
            StreamsInner::File(file) => {
                let mut f = file.write();
                f.seek(SeekFrom::Start(pos))?;
                f.read_exact(buf)?;
                Ok(())
            }
        }
    }

    /// Read a u64 value at the given position.
    pub fn read_u64(&self, pos: u64) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.read_into(pos, &mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}

/// Ogawa archive reader - the container root.
pub struct IArchive {
    streams: Arc<IStreams>,
    root: IGroup,
}

impl IArchive {
    /// Open an Ogawa file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let streams = Arc::new(IStreams::open(path)?);
        let root_pos = streams.root_pos()?;
        let root = IGroup::new(streams.clone(), root_pos)?;
        Ok(Self { streams, root })
    }

    /// Check if the archive is frozen (finalized).
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.streams.is_frozen()
    }

    /// Get the format version.
    #[inline]
    pub fn version(&self) -> u16 {
        self.streams.version()
    }

    /// Get the root group.
    #[inline]
    pub fn root(&self) -> &IGroup {
        &self.root
    }
}

/// A group in the Ogawa hierarchy.
/// Groups contain children which can be either data or other groups.
#[derive(Clone)]
pub struct IGroup {
    streams: Arc<IStreams>,
    pos: u64,
    child_offsets: Vec<u64>,
}

impl IGroup {
    /// Create a new group reader at the given position.
    /// Position 0 is the empty group marker.
    pub fn new(streams: Arc<IStreams>, pos: u64) -> Result<Self> {
        let num_children = if pos == 0 { 0 } else { streams.read_u64(pos)? };

        // Cap against absurd counts from corrupt files before allocating
        if num_children > streams.size() / 8 {
            return Err(Error::invalid(format!(
                "Group child count {} exceeds file size",
                num_children
            )));
        }

        let mut child_offsets = Vec::with_capacity(num_children as usize);
        for i in 0..num_children {
            child_offsets.push(streams.read_u64(pos + 8 + i * 8)?);
        }

        Ok(Self { streams, pos, child_offsets })
    }

    /// Get the position of this group in the file.
    #[inline]
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Get the number of children.
    #[inline]
    pub fn num_children(&self) -> u64 {
        self.child_offsets.len() as u64
    }

    /// Check if this group is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.child_offsets.is_empty()
    }

    /// Get the raw offset for a child (with group/data flag).
    pub fn child_offset(&self, index: u64) -> Result<u64> {
        self.child_offsets
            .get(index as usize)
            .copied()
            .ok_or(Error::ChildOutOfBounds {
                index: index as usize,
                count: self.child_offsets.len(),
            })
    }

    /// Check if child at index is a group.
    pub fn is_child_group(&self, index: u64) -> Result<bool> {
        Ok(is_group_offset(self.child_offset(index)?))
    }

    /// Check if child at index is data.
    pub fn is_child_data(&self, index: u64) -> Result<bool> {
        Ok(is_data_offset(self.child_offset(index)?))
    }

    /// Get a child group.
    pub fn group(&self, index: u64) -> Result<IGroup> {
        let offset = self.child_offset(index)?;
        if !is_group_offset(offset) {
            return Err(Error::TypeMismatch {
                expected: "group".to_string(),
                actual: "data".to_string(),
            });
        }
        IGroup::new(self.streams.clone(), extract_offset(offset))
    }

    /// Get child data.
    pub fn data(&self, index: u64) -> Result<IData> {
        let offset = self.child_offset(index)?;
        if !is_data_offset(offset) {
            return Err(Error::TypeMismatch {
                expected: "data".to_string(),
                actual: "group".to_string(),
            });
        }
        IData::new(self.streams.clone(), extract_offset(offset))
    }
}

/// Data block in the Ogawa hierarchy.
pub struct IData {
    streams: Arc<IStreams>,
    pos: u64,
    size: u64,
}

impl IData {
    /// Create a new data reader at the given position.
    /// Position 0 is the empty data marker.
    pub fn new(streams: Arc<IStreams>, pos: u64) -> Result<Self> {
        let size = if pos == 0 { 0 } else { streams.read_u64(pos)? };
        Ok(Self { streams, pos, size })
    }

    /// Get the size of the data in bytes.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Check if this data is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the position of the actual data bytes (after size field).
    #[inline]
    pub fn data_pos(&self) -> u64 {
        if self.pos == 0 {
            0
        } else {
            self.pos + 8
        }
    }

    /// Read all data as bytes.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        if self.size == 0 {
            return Ok(Vec::new());
        }
        self.streams.read_bytes(self.data_pos(), self.size as usize)
    }

    /// Read data as a string (UTF-8, trailing NUL stripped).
    pub fn read_string(&self) -> Result<String> {
        let bytes = self.read_all()?;
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Ok(String::from_utf8(bytes[..len].to_vec())?)
    }
}
