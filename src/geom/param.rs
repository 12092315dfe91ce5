//! Typed geometry parameter recognition.

use crate::core::{GeometryScope, MetaData, PropertyHeader};
use crate::util::{DataType, PlainOldDataType};

/// The closed set of typed geometry parameters the scanner recognizes.
///
/// A leaf property matches a parameter type when its data type equals the
/// type's and its interpretation metadata equals the type's interpretation
/// (an absent key counts as empty). The pairs are mutually exclusive, so
/// the probe order only affects cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeomParamType {
    Float,
    Double,
    Vector3d,
    Int32,
    String,
    Vector2f,
    Vector3f,
    Point3f,
    Point3d,
    Normal3f,
    Color3f,
    Matrix44f,
    Bool,
}

impl GeomParamType {
    /// Probe order.
    pub const ALL: [GeomParamType; 13] = [
        GeomParamType::Float,
        GeomParamType::Double,
        GeomParamType::Vector3d,
        GeomParamType::Int32,
        GeomParamType::String,
        GeomParamType::Vector2f,
        GeomParamType::Vector3f,
        GeomParamType::Point3f,
        GeomParamType::Point3d,
        GeomParamType::Normal3f,
        GeomParamType::Color3f,
        GeomParamType::Matrix44f,
        GeomParamType::Bool,
    ];

    /// The data type this parameter stores.
    pub const fn data_type(self) -> DataType {
        match self {
            Self::Float => DataType::FLOAT32,
            Self::Double => DataType::FLOAT64,
            Self::Vector3d => DataType::VEC3D,
            Self::Int32 => DataType::INT32,
            Self::String => DataType::STRING,
            Self::Vector2f => DataType::VEC2F,
            Self::Vector3f => DataType::VEC3F,
            Self::Point3f => DataType::new(PlainOldDataType::Float32, 3),
            Self::Point3d => DataType::new(PlainOldDataType::Float64, 3),
            Self::Normal3f => DataType::new(PlainOldDataType::Float32, 3),
            Self::Color3f => DataType::new(PlainOldDataType::Float32, 3),
            Self::Matrix44f => DataType::MAT44F,
            Self::Bool => DataType::BOOL,
        }
    }

    /// The interpretation metadata this parameter requires.
    pub const fn interpretation(self) -> &'static str {
        match self {
            Self::Float | Self::Double | Self::Int32 | Self::String | Self::Bool => "",
            Self::Vector3d | Self::Vector2f | Self::Vector3f => "vector",
            Self::Point3f | Self::Point3d => "point",
            Self::Normal3f => "normal",
            Self::Color3f => "rgb",
            Self::Matrix44f => "matrix",
        }
    }

    /// Check if a property header is this parameter type.
    pub fn matches(self, header: &PropertyHeader) -> bool {
        header.data_type == self.data_type()
            && header.interpretation().unwrap_or("") == self.interpretation()
    }

    /// Find the parameter type of a leaf property header, if any.
    pub fn classify(header: &PropertyHeader) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.matches(header))
    }
}

/// Extract the geometry scope from a property header's metadata.
pub fn extract_scope(header: &PropertyHeader) -> GeometryScope {
    header
        .meta_data
        .get(MetaData::GEO_SCOPE_KEY)
        .map(GeometryScope::parse)
        .unwrap_or(GeometryScope::Unknown)
}
