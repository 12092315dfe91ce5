//! DataType - combines POD type with extent (dimensionality).

use super::PlainOldDataType;
use std::fmt;

/// DataType describes how an element of a property is stored.
///
/// It combines a [`PlainOldDataType`] with an extent (dimensionality).
/// For example, a Vec3f would be Float32 with extent 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    /// The base plain old data type
    pub pod: PlainOldDataType,
    /// Number of POD elements (1 for scalar, 2 for Vec2, 3 for Vec3, etc.)
    pub extent: u8,
}

impl DataType {
    /// Create a new DataType with given POD and extent.
    #[inline]
    pub const fn new(pod: PlainOldDataType, extent: u8) -> Self {
        Self { pod, extent }
    }

    /// Create a scalar DataType (extent = 1).
    #[inline]
    pub const fn scalar(pod: PlainOldDataType) -> Self {
        Self { pod, extent: 1 }
    }

    /// Returns true if this is a valid (known) type.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.pod, PlainOldDataType::Unknown) && self.extent > 0
    }

    /// Unknown/invalid DataType.
    pub const UNKNOWN: Self = Self::new(PlainOldDataType::Unknown, 0);

    // === Common predefined types ===

    pub const BOOL: Self = Self::scalar(PlainOldDataType::Boolean);
    pub const INT32: Self = Self::scalar(PlainOldDataType::Int32);
    pub const FLOAT32: Self = Self::scalar(PlainOldDataType::Float32);
    pub const FLOAT64: Self = Self::scalar(PlainOldDataType::Float64);
    pub const STRING: Self = Self::scalar(PlainOldDataType::String);

    pub const VEC2F: Self = Self::new(PlainOldDataType::Float32, 2);
    pub const VEC3F: Self = Self::new(PlainOldDataType::Float32, 3);
    pub const VEC3D: Self = Self::new(PlainOldDataType::Float64, 3);
    pub const MAT44F: Self = Self::new(PlainOldDataType::Float32, 16);
}

impl Default for DataType {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Debug for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extent == 1 {
            write!(f, "{}", self.pod.name())
        } else {
            write!(f, "{}[{}]", self.pod.name(), self.extent)
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
