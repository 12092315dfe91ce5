//! Parsing of Alembic header structures from raw Ogawa data blocks.
//!
//! Everything here operates on schema-level metadata. Sample bookkeeping
//! fields inside property headers are decoded only to advance the cursor.

use crate::core::{MetaData, PropertyType};
use crate::util::{DataType, Error, PlainOldDataType, Result};

/// Alembic Ogawa file version constant.
pub const ALEMBIC_OGAWA_FILE_VERSION: i32 = 1;

/// Minimum supported Alembic library version.
pub const MIN_ALEMBIC_VERSION: i32 = 9999;

/// Trailing hash bytes at the end of an object headers block.
const OBJECT_HASHES_SIZE: usize = 32;

// ============================================================================
// Indexed Metadata Parsing
// ============================================================================

/// Read the archive-level indexed metadata table.
///
/// Entry 0 is always the empty metadata; on-disk entries follow.
pub fn read_indexed_metadata(buf: &[u8]) -> Result<Vec<MetaData>> {
    let mut metadata_vec = Vec::new();
    metadata_vec.push(MetaData::new());

    if buf.is_empty() {
        return Ok(metadata_vec);
    }

    // Indexed metadata is limited to 256 entries of max 256 bytes each
    if buf.len() > 65536 {
        return Err(Error::invalid("Indexed MetaData buffer too large"));
    }

    let buf_size = buf.len();
    let mut pos = 0;

    while pos < buf_size {
        let metadata_size = buf[pos] as usize;
        pos += 1;

        if pos + metadata_size > buf_size {
            return Err(Error::invalid("Indexed MetaData string truncated"));
        }

        if metadata_size == 0 {
            metadata_vec.push(MetaData::new());
        } else {
            let metadata_str = std::str::from_utf8(&buf[pos..pos + metadata_size])
                .map_err(|e| Error::other(format!("Invalid UTF-8 in metadata: {}", e)))?;
            pos += metadata_size;
            metadata_vec.push(MetaData::parse(metadata_str));
        }
    }

    Ok(metadata_vec)
}

// ============================================================================
// Object Header Parsing
// ============================================================================

/// Parsed child object header.
#[derive(Debug, Clone)]
pub struct ParsedObjectHeader {
    pub name: String,
    pub full_name: String,
    pub metadata: MetaData,
}

/// Read packed child object headers from an object group's headers block.
///
/// The block ends with 32 bytes of property/children hashes which are
/// skipped; a block of 32 bytes or less describes zero children.
pub fn read_object_headers(
    buf: &[u8],
    parent_name: &str,
    indexed_metadata: &[MetaData],
) -> Result<Vec<ParsedObjectHeader>> {
    let mut headers = Vec::new();

    if buf.len() <= OBJECT_HASHES_SIZE {
        return Ok(headers);
    }

    let buf = &buf[..buf.len() - OBJECT_HASHES_SIZE];
    let buf_size = buf.len();
    let mut pos = 0;

    while pos < buf_size {
        if pos + 4 > buf_size {
            return Err(Error::invalid("Object header name size truncated"));
        }

        let name_size = read_u32_le(&buf[pos..]) as usize;
        pos += 4;

        if name_size == 0 || pos + name_size + 1 > buf_size {
            return Err(Error::invalid("Object header name invalid"));
        }

        let name = std::str::from_utf8(&buf[pos..pos + name_size])
            .map_err(|e| Error::other(format!("Invalid UTF-8 in object name: {}", e)))?
            .to_string();
        pos += name_size;

        let metadata_index = buf[pos] as usize;
        pos += 1;

        let full_name = if parent_name.is_empty() || parent_name == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", parent_name, name)
        };

        let metadata = if metadata_index == 0xff {
            // Inline metadata
            if pos + 4 > buf_size {
                return Err(Error::invalid("Object header metadata size truncated"));
            }

            let metadata_size = read_u32_le(&buf[pos..]) as usize;
            pos += 4;

            if pos + metadata_size > buf_size {
                return Err(Error::invalid("Object header metadata string truncated"));
            }

            let metadata_str = std::str::from_utf8(&buf[pos..pos + metadata_size])
                .map_err(|e| Error::other(format!("Invalid UTF-8 in metadata: {}", e)))?;
            pos += metadata_size;

            MetaData::parse(metadata_str)
        } else if metadata_index < indexed_metadata.len() {
            indexed_metadata[metadata_index].clone()
        } else {
            return Err(Error::invalid(format!(
                "Invalid metadata index: {}",
                metadata_index
            )));
        };

        headers.push(ParsedObjectHeader { name, full_name, metadata });
    }

    Ok(headers)
}

// ============================================================================
// Property Header Parsing
// ============================================================================

/// Parsed property header - schema-level fields only.
#[derive(Debug, Clone)]
pub struct ParsedPropertyHeader {
    pub name: String,
    pub property_type: PropertyType,
    pub metadata: MetaData,
    pub data_type: DataType,
}

/// Get uint32 with variable size hint.
fn get_u32_with_hint(buf: &[u8], size_hint: u32, pos: &mut usize) -> Result<u32> {
    let buf_size = buf.len();
    let result = match size_hint {
        0 => {
            if *pos + 1 > buf_size {
                return Err(Error::invalid("Truncated u8 in property header"));
            }
            let val = buf[*pos] as u32;
            *pos += 1;
            val
        }
        1 => {
            if *pos + 2 > buf_size {
                return Err(Error::invalid("Truncated u16 in property header"));
            }
            let val = u16::from_le_bytes([buf[*pos], buf[*pos + 1]]) as u32;
            *pos += 2;
            val
        }
        2 => {
            if *pos + 4 > buf_size {
                return Err(Error::invalid("Truncated u32 in property header"));
            }
            let val = read_u32_le(&buf[*pos..]);
            *pos += 4;
            val
        }
        _ => return Err(Error::invalid("Invalid size hint")),
    };
    Ok(result)
}

/// Read packed property headers from a compound's headers block.
pub fn read_property_headers(
    buf: &[u8],
    indexed_metadata: &[MetaData],
) -> Result<Vec<ParsedPropertyHeader>> {
    let mut headers = Vec::new();

    let buf_size = buf.len();
    let mut pos = 0;

    while pos < buf_size {
        if pos + 4 > buf_size {
            return Err(Error::invalid("Property header info truncated"));
        }

        // First 4 bytes is info bitmask
        let info = read_u32_le(&buf[pos..]);
        pos += 4;

        // Property type (bits 0-1)
        let property_type = match info & 0x0003 {
            0 => PropertyType::Compound,
            1 => PropertyType::Scalar,
            _ => PropertyType::Array,
        };

        // Size hint (bits 2-3)
        let size_hint = (info & 0x000c) >> 2;

        let data_type = if property_type != PropertyType::Compound {
            // POD type (bits 4-7)
            let pod = ((info & 0x00f0) >> 4) as u8;
            let pod_type = PlainOldDataType::from_u8(pod);
            if pod_type == PlainOldDataType::Unknown {
                return Err(Error::invalid(format!("Invalid POD type: {}", pod)));
            }

            // Extent (bits 12-19)
            let extent = ((info & 0xff000) >> 12) as u8;

            // Sample bookkeeping: next sample index, then optional explicit
            // first/last changed (bit 9), then optional time sampling index
            // (bit 8). Decoded only to advance the cursor.
            let _next_sample_index = get_u32_with_hint(buf, size_hint, &mut pos)?;
            if (info & 0x0200) != 0 {
                let _first = get_u32_with_hint(buf, size_hint, &mut pos)?;
                let _last = get_u32_with_hint(buf, size_hint, &mut pos)?;
            }
            if (info & 0x0100) != 0 {
                let _tsi = get_u32_with_hint(buf, size_hint, &mut pos)?;
            }

            DataType::new(pod_type, extent)
        } else {
            DataType::default()
        };

        // Property name
        let name_size = get_u32_with_hint(buf, size_hint, &mut pos)? as usize;
        if name_size == 0 || pos + name_size > buf_size {
            return Err(Error::invalid("Property header name invalid"));
        }

        let name = std::str::from_utf8(&buf[pos..pos + name_size])
            .map_err(|e| Error::other(format!("Invalid UTF-8 in property name: {}", e)))?
            .to_string();
        pos += name_size;

        // Metadata (bits 20-27; 0xff = inline)
        let metadata_index = ((info & 0xff00000) >> 20) as usize;
        let metadata = if metadata_index == 0xff {
            let metadata_size = get_u32_with_hint(buf, size_hint, &mut pos)? as usize;

            if pos + metadata_size > buf_size {
                return Err(Error::invalid("Property header metadata truncated"));
            }

            if metadata_size == 0 {
                MetaData::new()
            } else {
                let metadata_str = std::str::from_utf8(&buf[pos..pos + metadata_size])
                    .map_err(|e| Error::other(format!("Invalid UTF-8 in metadata: {}", e)))?;
                pos += metadata_size;
                MetaData::parse(metadata_str)
            }
        } else if metadata_index < indexed_metadata.len() {
            indexed_metadata[metadata_index].clone()
        } else {
            return Err(Error::invalid(format!(
                "Invalid metadata index: {}",
                metadata_index
            )));
        };

        headers.push(ParsedPropertyHeader {
            name,
            property_type,
            metadata,
            data_type,
        });
    }

    Ok(headers)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Read little-endian u32 from bytes.
#[inline]
fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
