//! Core layer - headers, metadata and the reader traits.
//!
//! This module provides:
//! - [`MetaData`] - Key-value metadata storage
//! - [`ObjectHeader`] / [`PropertyHeader`] - Headers for objects and properties
//! - [`GeometryScope`] - Scope of geometry parameters
//! - Abstract traits for reading objects and properties

mod header;
mod metadata;
mod scope;
mod traits;

pub use header::{ObjectHeader, PropertyHeader, PropertyType};
pub use metadata::MetaData;
pub use scope::GeometryScope;
pub use traits::{CompoundPropertyReader, ObjectReader, PropertyReader};
