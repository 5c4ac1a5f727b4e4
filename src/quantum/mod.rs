// src/quantum/mod.rs
//! Gate and circuit records
//!
//! Plain value types describing which unitaries act on which qubits and when.

pub mod gate;
pub mod circuit;

pub use gate::{Gate, MAX_GATE_QUBITS, MAX_MATRIX_LEN};
pub use circuit::{Circuit, CircuitBuilder};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{Gate, Circuit, CircuitBuilder};
    pub use crate::error::{CircuitError, Result};
}
