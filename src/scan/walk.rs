//! Hierarchy and property walkers plus the directory-level analyzer.

use std::path::Path;

use tracing::{info, warn};
use walkdir::WalkDir;

use super::{Attribute, FileRecord, ObjectRecord};
use crate::core::{CompoundPropertyReader, ObjectReader, PropertyHeader};
use crate::geom::{extract_scope, GeomKind, GeomParamType};
use crate::ogawa::OgawaArchiveReader;
use crate::util::Result;

/// Classify a leaf property header as a recognized attribute.
///
/// Returns None for properties outside the recognized parameter set.
pub fn classify_attribute(header: &PropertyHeader) -> Option<Attribute> {
    GeomParamType::classify(header)?;
    Some(Attribute {
        name: header.name.clone(),
        type_name: header.data_type.to_string(),
        scope: extract_scope(header),
    })
}

/// Collect recognized attributes from a property namespace, depth-first.
///
/// Compound children are recursed in declared order; leaves that classify
/// are appended. Results with an empty name or type are dropped silently.
pub fn walk_properties(attributes: &mut Vec<Attribute>, props: Option<&dyn CompoundPropertyReader>) {
    let Some(props) = props else {
        return;
    };

    for i in 0..props.num_properties() {
        let Some(prop) = props.property(i) else {
            continue;
        };

        if let Some(compound) = prop.as_compound() {
            walk_properties(attributes, Some(compound));
        } else if let Some(attr) = classify_attribute(prop.header()) {
            if !attr.name.is_empty() && !attr.type_name.is_empty() {
                attributes.push(attr);
            }
        }
    }
}

/// Walk the object hierarchy in pre-order, recording recognized objects.
///
/// Unmatched objects are checked for instancing; their children are
/// visited either way. A child that fails to decode is skipped with its
/// subtree (the reader logs the failure), keeping what was found so far.
pub fn walk_hierarchy(file: &mut FileRecord, node: &dyn ObjectReader) {
    if let Some(kind) = GeomKind::from_meta_data(node.meta_data()) {
        let mut record = ObjectRecord {
            kind,
            attributes: Vec::new(),
        };
        walk_properties(&mut record.attributes, node.properties());
        file.objects.push(record);
    } else if node.is_instance_root() {
        file.has_instances = true;
    }

    for i in 0..node.num_children() {
        if let Some(child) = node.child(i) {
            walk_hierarchy(file, child.as_ref());
        }
    }
}

/// Check if a path names an Alembic archive.
///
/// The extension comparison is exact: `.abc` or `.ABC`, nothing else.
pub fn is_alembic_file(path: &Path) -> bool {
    matches!(path.extension(), Some(ext) if ext == "abc" || ext == "ABC")
}

/// Open one archive and record its hierarchy.
pub fn analyze_archive(path: &Path) -> Result<FileRecord> {
    let archive = OgawaArchiveReader::open(path)?;

    let mut file = FileRecord::new(path);
    walk_hierarchy(&mut file, archive.root());

    if file.has_instances {
        info!(path = %path.display(), "archive contains instances");
    }

    Ok(file)
}

/// Recursively scan a directory tree for Alembic archives.
///
/// Entries are visited in lexicographic order so repeated runs over the
/// same tree produce identical output. Unreadable archives are reported
/// and skipped.
pub fn scan_directory(root: &Path) -> Result<Vec<FileRecord>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_alembic_file(entry.path()) {
            continue;
        }

        info!(path = %entry.path().display(), "scanning archive");
        match analyze_archive(entry.path()) {
            Ok(file) => files.push(file),
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "cannot open archive, skipping");
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeometryScope, MetaData};
    use crate::util::DataType;

    #[test]
    fn test_is_alembic_file() {
        assert!(is_alembic_file(Path::new("/scenes/shot.abc")));
        assert!(is_alembic_file(Path::new("/scenes/SHOT.ABC")));
        assert!(!is_alembic_file(Path::new("/scenes/shot.Abc")));
        assert!(!is_alembic_file(Path::new("/scenes/shot.aBC")));
        assert!(!is_alembic_file(Path::new("/scenes/shot.obj")));
        assert!(!is_alembic_file(Path::new("/scenes/shot")));
    }

    #[test]
    fn test_classify_attribute() {
        let header = PropertyHeader::scalar("width", DataType::FLOAT32)
            .with_meta_data(MetaData::parse("geoScope=var"));
        let attr = classify_attribute(&header).unwrap();
        assert_eq!(attr.name, "width");
        assert_eq!(attr.type_name, "float32_t");
        assert_eq!(attr.scope, GeometryScope::Varying);
    }

    #[test]
    fn test_classify_attribute_unmatched() {
        let header = PropertyHeader::array("uvs", DataType::new(crate::util::PlainOldDataType::Float16, 2));
        assert!(classify_attribute(&header).is_none());
    }

    #[test]
    fn test_classify_attribute_missing_scope() {
        let header = PropertyHeader::array("N", DataType::VEC3F)
            .with_meta_data(MetaData::parse("interpretation=normal"));
        let attr = classify_attribute(&header).unwrap();
        assert_eq!(attr.type_name, "float32_t[3]");
        assert_eq!(attr.scope, GeometryScope::Unknown);
    }
}
