//! Recognized geometry object kinds.

use std::fmt;

use super::{
    CURVES_SCHEMA, FACESET_SCHEMA, NUPATCH_SCHEMA, POINTS_SCHEMA, POLYMESH_SCHEMA, SUBD_SCHEMA,
    XFORM_SCHEMA,
};
use crate::core::MetaData;

/// The closed set of geometry kinds the scanner records.
///
/// Anything outside this set (cameras, lights, materials) is skipped,
/// though its children are still visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeomKind {
    PolyMesh,
    SubD,
    Curves,
    Xform,
    FaceSet,
    NuPatch,
    Points,
}

impl GeomKind {
    /// Match priority order; mirrors the order schemas are probed in.
    pub const ALL: [GeomKind; 7] = [
        GeomKind::PolyMesh,
        GeomKind::SubD,
        GeomKind::Curves,
        GeomKind::Xform,
        GeomKind::FaceSet,
        GeomKind::NuPatch,
        GeomKind::Points,
    ];

    /// The schema title stored in object metadata for this kind.
    pub const fn schema(self) -> &'static str {
        match self {
            Self::PolyMesh => POLYMESH_SCHEMA,
            Self::SubD => SUBD_SCHEMA,
            Self::Curves => CURVES_SCHEMA,
            Self::Xform => XFORM_SCHEMA,
            Self::FaceSet => FACESET_SCHEMA,
            Self::NuPatch => NUPATCH_SCHEMA,
            Self::Points => POINTS_SCHEMA,
        }
    }

    /// Label used in exported tables.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PolyMesh => "IPolyMesh",
            Self::SubD => "ISubD",
            Self::Curves => "ICurves",
            Self::Xform => "IXform",
            Self::FaceSet => "IFaceSet",
            Self::NuPatch => "INuPatch",
            Self::Points => "IPoints",
        }
    }

    /// Match an object's metadata against the recognized schemas.
    pub fn from_meta_data(meta: &MetaData) -> Option<Self> {
        Self::ALL.into_iter().find(|k| meta.matches_schema(k.schema()))
    }
}

impl fmt::Display for GeomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_schema() {
        let meta = MetaData::parse("schema=AbcGeom_PolyMesh_v1");
        assert_eq!(GeomKind::from_meta_data(&meta), Some(GeomKind::PolyMesh));

        let meta = MetaData::parse("schema=AbcGeom_Points_v1");
        assert_eq!(GeomKind::from_meta_data(&meta), Some(GeomKind::Points));
    }

    #[test]
    fn test_kind_no_match() {
        let meta = MetaData::parse("schema=AbcGeom_Camera_v1");
        assert_eq!(GeomKind::from_meta_data(&meta), None);

        assert_eq!(GeomKind::from_meta_data(&MetaData::new()), None);
    }

    #[test]
    fn test_kind_requires_exact_title() {
        // Version bumps do not match
        let meta = MetaData::parse("schema=AbcGeom_PolyMesh_v2");
        assert_eq!(GeomKind::from_meta_data(&meta), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(GeomKind::Points.label(), "IPoints");
        assert_eq!(GeomKind::NuPatch.label(), "INuPatch");
        assert_eq!(GeomKind::Xform.to_string(), "IXform");
    }
}
