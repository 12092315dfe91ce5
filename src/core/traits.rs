//! Abstract traits for objects and properties.
//!
//! These traits define the interface between the low-level Ogawa layer
//! and the hierarchy/property walkers. The walkers only need headers and
//! child iteration; no sample access appears here.

use crate::core::{MetaData, ObjectHeader, PropertyHeader};

// ============================================================================
// Object Traits
// ============================================================================

/// Reader interface for an object in the hierarchy.
pub trait ObjectReader {
    /// Get the object header.
    fn header(&self) -> &ObjectHeader;

    /// Get the number of child objects.
    fn num_children(&self) -> usize;

    /// Get a child by index.
    ///
    /// Returns None when the index is out of range or the child fails to
    /// decode; implementations log the failure themselves.
    fn child(&self, index: usize) -> Option<Box<dyn ObjectReader + '_>>;

    /// Get the properties compound, if the object has one.
    fn properties(&self) -> Option<&dyn CompoundPropertyReader>;

    /// Get object name (convenience).
    fn name(&self) -> &str {
        &self.header().name
    }

    /// Get full path (convenience).
    fn full_name(&self) -> &str {
        &self.header().full_name
    }

    /// Get metadata (convenience).
    fn meta_data(&self) -> &MetaData {
        &self.header().meta_data
    }

    /// Check if object matches a schema.
    fn matches_schema(&self, schema: &str) -> bool {
        self.header().meta_data.matches_schema(schema)
    }

    /// Check if this object is an instance root (directly instances
    /// another object in the same archive).
    fn is_instance_root(&self) -> bool {
        false
    }
}

// ============================================================================
// Property Traits
// ============================================================================

/// Base reader interface for any property.
pub trait PropertyReader {
    /// Get the property header.
    fn header(&self) -> &PropertyHeader;

    /// Check if this is a compound property.
    fn is_compound(&self) -> bool {
        self.header().is_compound()
    }

    /// Get property name.
    fn name(&self) -> &str {
        &self.header().name
    }

    /// Try to cast to compound property reader.
    fn as_compound(&self) -> Option<&dyn CompoundPropertyReader> {
        None
    }
}

/// Reader for compound properties (container of sub-properties).
pub trait CompoundPropertyReader: PropertyReader {
    /// Get the number of sub-properties.
    fn num_properties(&self) -> usize;

    /// Get a property by index.
    fn property(&self, index: usize) -> Option<Box<dyn PropertyReader + '_>>;

    /// Get a property by name.
    fn property_by_name(&self, name: &str) -> Option<Box<dyn PropertyReader + '_>> {
        (0..self.num_properties())
            .filter_map(|i| self.property(i))
            .find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::DataType;

    #[test]
    fn test_property_type_checks() {
        let header = PropertyHeader::scalar("test", DataType::FLOAT32);
        assert!(header.is_scalar());
        assert!(!header.is_array());
        assert!(!header.is_compound());
    }
}
