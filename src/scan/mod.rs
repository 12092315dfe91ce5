//! Directory scanning, hierarchy traversal and CSV export.

mod export;
mod walk;

pub use export::{export_tables, write_tables, ATTRIBUTES_CSV, FILES_CSV, OBJECTS_CSV};
pub use walk::{
    analyze_archive, classify_attribute, is_alembic_file, scan_directory, walk_hierarchy,
    walk_properties,
};

use std::path::PathBuf;

use crate::core::GeometryScope;
use crate::geom::GeomKind;

/// One recognized attribute of a geometry object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Property name.
    pub name: String,
    /// Rendered data type (e.g. "float32_t[3]").
    pub type_name: String,
    /// Geometry scope from the property metadata.
    pub scope: GeometryScope,
}

/// One recognized geometry object inside an archive.
#[derive(Clone, Debug)]
pub struct ObjectRecord {
    /// Matched schema kind.
    pub kind: GeomKind,
    /// Attributes in property declaration order.
    pub attributes: Vec<Attribute>,
}

/// Scan result for one archive.
#[derive(Clone, Debug)]
pub struct FileRecord {
    /// Path the archive was opened from.
    pub path: PathBuf,
    /// True when any unrecognized object was an instance root.
    pub has_instances: bool,
    /// Objects in pre-order discovery order.
    pub objects: Vec<ObjectRecord>,
}

impl FileRecord {
    /// Create an empty record for a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            has_instances: false,
            objects: Vec::new(),
        }
    }
}
