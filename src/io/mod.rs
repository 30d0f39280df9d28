//! Input/output helpers.
//!
//! - in-memory table (`table`)
//! - CSV loading (`ingest`)
//! - JSON summary export (`export`)

pub mod export;
pub mod ingest;
pub mod table;

pub use export::*;
pub use ingest::*;
pub use table::*;
