//! Metadata-only Alembic archive reader backed by the Ogawa container.
//!
//! This bridges the raw Ogawa tree to the [`crate::core`] reader traits.
//! Only the structures needed to enumerate objects and property headers
//! are parsed; sample payloads are never read.

use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use super::read_util::{
    read_indexed_metadata, read_object_headers, read_property_headers, ParsedObjectHeader,
    ParsedPropertyHeader, ALEMBIC_OGAWA_FILE_VERSION, MIN_ALEMBIC_VERSION,
};
use super::{IArchive, IGroup};
use crate::core::{
    CompoundPropertyReader, MetaData, ObjectHeader, ObjectReader, PropertyHeader, PropertyReader,
    PropertyType,
};
use crate::util::{Error, Result};

// ============================================================================
// Archive Reader
// ============================================================================

/// Alembic archive reader.
///
/// The archive itself acts as the root [`ObjectReader`]: its children are
/// the top-level objects of the scene.
pub struct OgawaArchiveReader {
    name: String,
    #[allow(dead_code)]
    inner: Arc<IArchive>,
    archive_version: i32,
    root_data: ObjectData,
    root_header: ObjectHeader,
}

impl OgawaArchiveReader {
    /// Open an Alembic file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.to_string_lossy().to_string();
        let inner = Arc::new(IArchive::open(path)?);

        Self::init(name, inner)
    }

    fn init(name: String, inner: Arc<IArchive>) -> Result<Self> {
        let group = inner.root();
        let num_children = group.num_children();

        // Archive root layout:
        // Child 0: Ogawa file version (data), Child 1: library version (data)
        // Child 2: root object (group), Child 3: archive metadata (data)
        // Child 4: time samplings (data), Child 5: indexed metadata (data)
        if num_children <= 5 {
            return Err(Error::invalid("Invalid Alembic file: not enough children"));
        }

        if !group.is_child_data(0)?
            || !group.is_child_data(1)?
            || !group.is_child_group(2)?
            || !group.is_child_data(3)?
            || !group.is_child_data(4)?
            || !group.is_child_data(5)?
        {
            return Err(Error::invalid("Invalid Alembic file structure"));
        }

        let version = read_i32_data(group, 0)?;
        if !(0..=ALEMBIC_OGAWA_FILE_VERSION).contains(&version) {
            return Err(Error::UnsupportedVersion(version));
        }

        let archive_version = read_i32_data(group, 1)?;
        if archive_version < MIN_ALEMBIC_VERSION {
            return Err(Error::UnsupportedVersion(archive_version));
        }

        let metadata_buf = group.data(5)?.read_all()?;
        let indexed_metadata = Arc::new(read_indexed_metadata(&metadata_buf)?);

        let root_group = group.group(2)?;
        let root_data = ObjectData::new(root_group, "", indexed_metadata)?;

        let mut root_header = ObjectHeader::new("ABC", "/");
        let archive_meta = group.data(3)?;
        if archive_meta.size() > 0 {
            root_header.meta_data = MetaData::parse(&archive_meta.read_string()?);
        }

        Ok(Self {
            name,
            inner,
            archive_version,
            root_data,
            root_header,
        })
    }

    /// Get the archive name (the path it was opened from).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the Alembic library version the archive was written with.
    pub fn archive_version(&self) -> i32 {
        self.archive_version
    }

    /// Get the archive-level metadata (writer application, etc.).
    pub fn archive_metadata(&self) -> &MetaData {
        &self.root_header.meta_data
    }

    /// Get the root object.
    pub fn root(&self) -> &dyn ObjectReader {
        self
    }
}

// The archive doubles as the root object of the hierarchy.
impl ObjectReader for OgawaArchiveReader {
    fn header(&self) -> &ObjectHeader {
        &self.root_header
    }

    fn num_children(&self) -> usize {
        self.root_data.num_children()
    }

    fn child(&self, index: usize) -> Option<Box<dyn ObjectReader + '_>> {
        self.root_data.child(index)
    }

    fn properties(&self) -> Option<&dyn CompoundPropertyReader> {
        self.root_data.properties()
    }
}

/// Read a 4-byte data child as a little-endian i32.
fn read_i32_data(group: &IGroup, index: u64) -> Result<i32> {
    let data = group.data(index)?;
    if data.size() != 4 {
        return Err(Error::invalid("Invalid version data size"));
    }
    let bytes = data.read_all()?;
    Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

// ============================================================================
// Object Data
// ============================================================================

/// Internal object container.
///
/// Object group layout: child 0 = properties compound (group), children
/// 1..n-1 = child object groups, last data child = packed child headers.
struct ObjectData {
    group: IGroup,
    children: Vec<ParsedObjectHeader>,
    properties: Option<CompoundData>,
    indexed_metadata: Arc<Vec<MetaData>>,
}

impl ObjectData {
    fn new(group: IGroup, parent_name: &str, indexed_metadata: Arc<Vec<MetaData>>) -> Result<Self> {
        let num_children = group.num_children();

        let children = if num_children > 0 && group.is_child_data(num_children - 1)? {
            let buf = group.data(num_children - 1)?.read_all()?;
            read_object_headers(&buf, parent_name, &indexed_metadata)?
        } else {
            Vec::new()
        };

        let properties = if num_children > 0 && group.is_child_group(0)? {
            let props_group = group.group(0)?;
            Some(CompoundData::from_group(props_group, indexed_metadata.clone())?)
        } else {
            None
        };

        Ok(Self {
            group,
            children,
            properties,
            indexed_metadata,
        })
    }

    fn num_children(&self) -> usize {
        self.children.len()
    }

    fn properties(&self) -> Option<&dyn CompoundPropertyReader> {
        self.properties
            .as_ref()
            .map(|p| p as &dyn CompoundPropertyReader)
    }

    fn child(&self, index: usize) -> Option<Box<dyn ObjectReader + '_>> {
        let header = self.children.get(index)?;
        // Child objects start at group index 1 (index 0 is properties)
        let group_index = (index + 1) as u64;

        match self.create_child(group_index, header) {
            Ok(reader) => Some(Box::new(reader)),
            Err(e) => {
                warn!(object = %header.full_name, error = %e, "failed to read child object");
                None
            }
        }
    }

    fn create_child(&self, group_index: u64, header: &ParsedObjectHeader) -> Result<OgawaObjectReader> {
        let child_group = self.group.group(group_index)?;
        let data = ObjectData::new(child_group, &header.full_name, self.indexed_metadata.clone())?;

        Ok(OgawaObjectReader {
            header: ObjectHeader::with_meta_data(
                &header.name,
                &header.full_name,
                header.metadata.clone(),
            ),
            data,
        })
    }
}

/// Ogawa-backed object reader.
pub struct OgawaObjectReader {
    header: ObjectHeader,
    data: ObjectData,
}

impl ObjectReader for OgawaObjectReader {
    fn header(&self) -> &ObjectHeader {
        &self.header
    }

    fn num_children(&self) -> usize {
        self.data.num_children()
    }

    fn child(&self, index: usize) -> Option<Box<dyn ObjectReader + '_>> {
        self.data.child(index)
    }

    fn properties(&self) -> Option<&dyn CompoundPropertyReader> {
        self.data.properties()
    }

    fn is_instance_root(&self) -> bool {
        self.header.meta_data.is_instance()
    }
}

// ============================================================================
// Compound Property Data
// ============================================================================

/// Compound property container.
///
/// Compound group layout: children 0..n-1 = sub-property groups, last
/// data child = packed property headers.
struct CompoundData {
    header: PropertyHeader,
    sub_properties: Vec<ParsedPropertyHeader>,
    group: IGroup,
    indexed_metadata: Arc<Vec<MetaData>>,
}

impl CompoundData {
    fn from_group(group: IGroup, indexed_metadata: Arc<Vec<MetaData>>) -> Result<Self> {
        Self::with_header(PropertyHeader::compound(".prop"), group, indexed_metadata)
    }

    fn with_header(
        header: PropertyHeader,
        group: IGroup,
        indexed_metadata: Arc<Vec<MetaData>>,
    ) -> Result<Self> {
        let num_children = group.num_children();

        let sub_properties = if num_children > 0 && group.is_child_data(num_children - 1)? {
            let buf = group.data(num_children - 1)?.read_all()?;
            read_property_headers(&buf, &indexed_metadata)?
        } else {
            Vec::new()
        };

        Ok(Self {
            header,
            sub_properties,
            group,
            indexed_metadata,
        })
    }
}

impl PropertyReader for CompoundData {
    fn header(&self) -> &PropertyHeader {
        &self.header
    }

    fn as_compound(&self) -> Option<&dyn CompoundPropertyReader> {
        Some(self)
    }
}

impl CompoundPropertyReader for CompoundData {
    fn num_properties(&self) -> usize {
        self.sub_properties.len()
    }

    fn property(&self, index: usize) -> Option<Box<dyn PropertyReader + '_>> {
        let parsed = self.sub_properties.get(index)?;

        let header = match parsed.property_type {
            PropertyType::Compound => PropertyHeader::compound(&parsed.name),
            PropertyType::Scalar => PropertyHeader::scalar(&parsed.name, parsed.data_type),
            PropertyType::Array => PropertyHeader::array(&parsed.name, parsed.data_type),
        }
        .with_meta_data(parsed.metadata.clone());

        if parsed.property_type == PropertyType::Compound {
            // Sub-property i lives in group child i
            match self
                .group
                .group(index as u64)
                .and_then(|g| CompoundData::with_header(header, g, self.indexed_metadata.clone()))
            {
                Ok(compound) => Some(Box::new(compound)),
                Err(e) => {
                    warn!(property = %parsed.name, error = %e, "failed to read compound property");
                    None
                }
            }
        } else {
            Some(Box::new(OgawaPropertyReader { header }))
        }
    }
}

/// Leaf (scalar or array) property reader - header access only.
pub struct OgawaPropertyReader {
    header: PropertyHeader,
}

impl PropertyReader for OgawaPropertyReader {
    fn header(&self) -> &PropertyHeader {
        &self.header
    }
}
