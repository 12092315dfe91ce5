//! Basic types shared across the crate.

mod data_type;
mod error;
mod pod;

pub use data_type::DataType;
pub use error::{Error, Result};
pub use pod::PlainOldDataType;
