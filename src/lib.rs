//! Quantum circuit records
//!
//! This crate provides the value types a circuit simulation pipeline passes
//! around: gates carrying their moment, targets and unitary, and circuits
//! holding an ordered list of gates.

pub mod error;
pub mod quantum;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::quantum::prelude::*;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
