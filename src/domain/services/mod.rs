//! Domain Services
//!
//! Stateless or single-owner logic with no I/O.

mod claims;

pub use claims::{Claim, ClaimTracker};
