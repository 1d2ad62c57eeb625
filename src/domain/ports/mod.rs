//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_lister;

pub use file_lister::{FileLister, ListedFile};
