//! Geometry schema and parameter recognition.
//!
//! The scanner does not instantiate full geometry schemas; it only needs
//! to recognize which schema an object carries ([`GeomKind`]) and which
//! typed parameters its properties are ([`GeomParamType`]).

mod kind;
mod param;

pub use kind::GeomKind;
pub use param::{extract_scope, GeomParamType};

/// Polygon mesh schema title.
pub const POLYMESH_SCHEMA: &str = "AbcGeom_PolyMesh_v1";
/// Subdivision surface schema title.
pub const SUBD_SCHEMA: &str = "AbcGeom_SubD_v1";
/// Curves schema title.
pub const CURVES_SCHEMA: &str = "AbcGeom_Curve_v2";
/// Transform schema title.
pub const XFORM_SCHEMA: &str = "AbcGeom_Xform_v3";
/// Face set schema title.
pub const FACESET_SCHEMA: &str = "AbcGeom_FaceSet_v1";
/// NURBS patch schema title.
pub const NUPATCH_SCHEMA: &str = "AbcGeom_NuPatch_v2";
/// Point cloud schema title.
pub const POINTS_SCHEMA: &str = "AbcGeom_Points_v1";
