//! Plain Old Data types - fundamental storage types in Alembic.

use std::fmt;

/// Plain Old Data type enum - represents basic storage types.
///
/// These are the fundamental types that can be stored in Alembic properties.
/// Each type has a fixed size and well-defined binary representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PlainOldDataType {
    /// Boolean (stored as u8: 0 = false, non-zero = true)
    Boolean = 0,
    /// Unsigned 8-bit integer
    Uint8 = 1,
    /// Signed 8-bit integer
    Int8 = 2,
    /// Unsigned 16-bit integer
    Uint16 = 3,
    /// Signed 16-bit integer
    Int16 = 4,
    /// Unsigned 32-bit integer
    Uint32 = 5,
    /// Signed 32-bit integer
    Int32 = 6,
    /// Unsigned 64-bit integer
    Uint64 = 7,
    /// Signed 64-bit integer
    Int64 = 8,
    /// 16-bit floating point (IEEE 754 half precision)
    Float16 = 9,
    /// 32-bit floating point (IEEE 754 single precision)
    Float32 = 10,
    /// 64-bit floating point (IEEE 754 double precision)
    Float64 = 11,
    /// UTF-8 string
    String = 12,
    /// Wide string (stored as UTF-8 in Rust)
    Wstring = 13,
    /// Unknown/invalid type
    #[default]
    Unknown = 127,
}

impl PlainOldDataType {
    /// Number of POD types (excluding Unknown)
    pub const COUNT: usize = 14;

    /// Returns the name of this type as a string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "bool_t",
            Self::Uint8 => "uint8_t",
            Self::Int8 => "int8_t",
            Self::Uint16 => "uint16_t",
            Self::Int16 => "int16_t",
            Self::Uint32 => "uint32_t",
            Self::Int32 => "int32_t",
            Self::Uint64 => "uint64_t",
            Self::Int64 => "int64_t",
            Self::Float16 => "float16_t",
            Self::Float32 => "float32_t",
            Self::Float64 => "float64_t",
            Self::String => "string",
            Self::Wstring => "wstring",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse POD type from its name string.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bool_t" => Self::Boolean,
            "uint8_t" => Self::Uint8,
            "int8_t" => Self::Int8,
            "uint16_t" => Self::Uint16,
            "int16_t" => Self::Int16,
            "uint32_t" => Self::Uint32,
            "int32_t" => Self::Int32,
            "uint64_t" => Self::Uint64,
            "int64_t" => Self::Int64,
            "float16_t" => Self::Float16,
            "float32_t" => Self::Float32,
            "float64_t" => Self::Float64,
            "string" => Self::String,
            "wstring" => Self::Wstring,
            _ => Self::Unknown,
        }
    }

    /// Convert from u8 value (the on-disk encoding).
    pub const fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Boolean,
            1 => Self::Uint8,
            2 => Self::Int8,
            3 => Self::Uint16,
            4 => Self::Int16,
            5 => Self::Uint32,
            6 => Self::Int32,
            7 => Self::Uint64,
            8 => Self::Int64,
            9 => Self::Float16,
            10 => Self::Float32,
            11 => Self::Float64,
            12 => Self::String,
            13 => Self::Wstring,
            _ => Self::Unknown,
        }
    }

    /// Returns true if this is a string type.
    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self, Self::String | Self::Wstring)
    }
}

impl fmt::Display for PlainOldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
