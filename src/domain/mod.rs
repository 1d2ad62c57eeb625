//! Domain Layer
//!
//! Manifest rules and data types without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - FileRule, ResolvedAsset, Manifest
//! - `value_objects/` - ContentHash, ContentType, PatternSet
//! - `services/` - rule priority (ClaimTracker)
//! - `ports/` - interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
