//! File system implementations

mod walker;
mod writer;

pub use walker::{WalkLister, STATE_DIR};
pub use writer::{write_atomic, write_manifest};
