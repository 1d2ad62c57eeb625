//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod content_type;
mod hash;
mod pattern_set;

pub use content_type::{
    classify, content_type_for, ContentType, DEFAULT_TEXT_ENCODING, NO_CHARSET,
};
pub use hash::ContentHash;
pub use pattern_set::PatternSet;
