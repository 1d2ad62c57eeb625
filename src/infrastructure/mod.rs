//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O other than reading matched files.
//!
//! ## Structure
//!
//! - `fs/` - directory walking and atomic manifest output

pub mod fs;

pub use fs::{write_manifest, WalkLister};
