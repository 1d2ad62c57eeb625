//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PatternResolver` - rules -> hashed, classified assets
//! - `ManifestBuilder` - resolver output -> validated `Manifest`

pub mod builder;
pub mod resolver;

pub use builder::ManifestBuilder;
pub use resolver::{PatternResolver, ResolverOptions, DEFAULT_CONCURRENCY};
