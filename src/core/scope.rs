//! Scope/extent of data in a geom schema parameter.

use std::fmt;

/// Scope of a geometry parameter - what each value applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeometryScope {
    /// Constant for entire object.
    Constant,
    /// Per-face.
    Uniform,
    /// Per-point, varying over time.
    Varying,
    /// Per-vertex.
    Vertex,
    /// Per-face-vertex (indexed).
    FaceVarying,
    /// Missing or unrecognized scope metadata.
    #[default]
    Unknown,
}

impl GeometryScope {
    /// Parse from string (as stored in metadata).
    pub fn parse(s: &str) -> Self {
        match s {
            "con" | "constant" => Self::Constant,
            "uni" | "uniform" => Self::Uniform,
            "var" | "varying" => Self::Varying,
            "vtx" | "vertex" => Self::Vertex,
            "fvr" | "facevarying" => Self::FaceVarying,
            _ => Self::Unknown,
        }
    }

    /// Convert to short string for metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "con",
            Self::Uniform => "uni",
            Self::Varying => "var",
            Self::Vertex => "vtx",
            Self::FaceVarying => "fvr",
            Self::Unknown => "",
        }
    }

    /// Long-form label used in exported tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Constant => "kConstantScope",
            Self::Uniform => "kUniformScope",
            Self::Varying => "kVaryingScope",
            Self::Vertex => "kVertexScope",
            Self::FaceVarying => "kFacevaryingScope",
            Self::Unknown => "kUnknownScope",
        }
    }
}

impl fmt::Display for GeometryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parse() {
        assert_eq!(GeometryScope::parse("fvr"), GeometryScope::FaceVarying);
        assert_eq!(GeometryScope::parse("facevarying"), GeometryScope::FaceVarying);
        assert_eq!(GeometryScope::parse("con"), GeometryScope::Constant);
        assert_eq!(GeometryScope::parse("vtx"), GeometryScope::Vertex);
        assert_eq!(GeometryScope::parse(""), GeometryScope::Unknown);
        assert_eq!(GeometryScope::parse("bogus"), GeometryScope::Unknown);
    }

    #[test]
    fn test_scope_labels() {
        assert_eq!(GeometryScope::Varying.label(), "kVaryingScope");
        assert_eq!(GeometryScope::Unknown.label(), "kUnknownScope");
        assert_eq!(GeometryScope::Vertex.as_str(), "vtx");
    }
}
