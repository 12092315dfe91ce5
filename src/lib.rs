//! # abc-scan
//!
//! Recursively scans a directory for Alembic (`.abc`) archives, walks each
//! archive's object hierarchy and exports the recognized geometry objects
//! and their typed attributes as three relational CSV tables.
//!
//! Original Alembic format developed by Sony Pictures Imageworks and
//! Industrial Light & Magic. This crate reads the Ogawa container directly
//! and only at the schema level; no sample data is ever loaded.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (POD, DataType, errors)
//! - [`core`] - Headers, metadata and the reader traits
//! - [`ogawa`] - Low-level Ogawa binary format and the archive reader
//! - [`geom`] - Geometry schema and parameter recognition
//! - [`scan`] - Directory walking, hierarchy traversal and CSV export
//!
//! ## Example
//!
//! ```ignore
//! use abc_scan::scan::{export_tables, scan_directory};
//!
//! let files = scan_directory(std::path::Path::new("/scenes"))?;
//! export_tables(&files)?;
//! ```

pub mod core;
pub mod geom;
pub mod ogawa;
pub mod scan;
pub mod util;

// Re-export commonly used types
pub use util::{DataType, Error, PlainOldDataType, Result};
