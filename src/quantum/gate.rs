// src/quantum/gate.rs
//! Quantum gate records
//!
//! A gate is a plain value: the moment it acts in, the qubits it targets and
//! its unitary stored as a flat row-major buffer of interleaved real and
//! imaginary parts. Storage is sized for the largest supported arity; only
//! the portion selected by `num_qubits` is meaningful.

use std::fmt;

use ndarray::Array2;
use num_complex::Complex32;
use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, Result};

/// Largest arity a gate can store
pub const MAX_GATE_QUBITS: usize = 2;

/// Length of the matrix buffer, enough for a two-qubit unitary
pub const MAX_MATRIX_LEN: usize = 32;

/// Number of `f32` values used by the matrix of a gate with the given arity.
///
/// A zero-qubit gate carries no matrix. Arities above the storage limit are
/// clamped to the full buffer.
pub fn matrix_len(num_qubits: u32) -> usize {
    match num_qubits as usize {
        0 => 0,
        n if n <= MAX_GATE_QUBITS => 2 * (1 << (2 * n)),
        _ => MAX_MATRIX_LEN,
    }
}

/// A single gate application within a circuit.
///
/// Fields are public so callers can construct and patch records directly.
/// Two gates are equal when their time, arity, used qubits and used matrix
/// values match exactly. Floating point values are compared with `==`, so a
/// gate holding a NaN is not equal to itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Gate {
    pub time: u32,
    pub num_qubits: u32,
    pub qubits: [u32; MAX_GATE_QUBITS],
    pub matrix: [f32; MAX_MATRIX_LEN],
}

impl Gate {
    /// Create a single-qubit gate from its 2x2 unitary (8 values)
    pub fn one_qubit(time: u32, qubit: u32, matrix: [f32; 8]) -> Self {
        let mut gate = Gate {
            time,
            num_qubits: 1,
            qubits: [qubit, 0],
            ..Gate::default()
        };
        gate.matrix[..8].copy_from_slice(&matrix);
        gate
    }

    /// Create a two-qubit gate from its 4x4 unitary (32 values)
    pub fn two_qubit(time: u32, qubit0: u32, qubit1: u32, matrix: [f32; 32]) -> Self {
        Gate {
            time,
            num_qubits: 2,
            qubits: [qubit0, qubit1],
            matrix,
        }
    }

    /// Create a gate whose arity is taken from `qubits`.
    ///
    /// Fails when the arity exceeds [`MAX_GATE_QUBITS`] or when `matrix` does
    /// not hold exactly [`matrix_len`] values for that arity.
    pub fn new(time: u32, qubits: &[u32], matrix: &[f32]) -> Result<Self> {
        let num_qubits = checked_arity(qubits)?;
        let expected = matrix_len(num_qubits);
        if matrix.len() != expected {
            return Err(CircuitError::invalid_argument(format!(
                "{}-qubit gate needs {} matrix values, got {}",
                num_qubits,
                expected,
                matrix.len()
            )));
        }

        let mut gate = Gate {
            time,
            num_qubits,
            ..Gate::default()
        };
        gate.qubits[..qubits.len()].copy_from_slice(qubits);
        gate.matrix[..expected].copy_from_slice(matrix);
        Ok(gate)
    }

    /// Create a gate from a complex unitary of dimension `2^qubits.len()`.
    ///
    /// A zero-qubit gate takes an empty 0x0 matrix.
    pub fn from_unitary(time: u32, qubits: &[u32], unitary: &Array2<Complex32>) -> Result<Self> {
        let num_qubits = checked_arity(qubits)?;
        let dim = unitary_dim(num_qubits);
        if unitary.dim() != (dim, dim) {
            return Err(CircuitError::invalid_argument(format!(
                "{}-qubit gate needs a {}x{} unitary, got {:?}",
                num_qubits,
                dim,
                dim,
                unitary.shape()
            )));
        }

        let mut gate = Gate {
            time,
            num_qubits,
            ..Gate::default()
        };
        gate.qubits[..qubits.len()].copy_from_slice(qubits);
        for ((row, col), z) in unitary.indexed_iter() {
            let k = 2 * (row * dim + col);
            gate.matrix[k] = z.re;
            gate.matrix[k + 1] = z.im;
        }
        Ok(gate)
    }

    /// The qubits this gate targets
    pub fn targets(&self) -> &[u32] {
        let n = (self.num_qubits as usize).min(MAX_GATE_QUBITS);
        &self.qubits[..n]
    }

    /// The used portion of the matrix buffer
    pub fn matrix_values(&self) -> &[f32] {
        &self.matrix[..matrix_len(self.num_qubits)]
    }

    pub fn acts_on(&self, qubit: u32) -> bool {
        self.targets().contains(&qubit)
    }

    /// Complex matrix entry at `(row, col)`, or `None` outside the unitary
    pub fn entry(&self, row: usize, col: usize) -> Option<Complex32> {
        let dim = self.dimension();
        if row >= dim || col >= dim {
            return None;
        }
        let k = 2 * (row * dim + col);
        Some(Complex32::new(self.matrix[k], self.matrix[k + 1]))
    }

    /// Returns the unitary as a complex matrix.
    ///
    /// A zero-qubit gate yields an empty 0x0 matrix.
    pub fn unitary(&self) -> Array2<Complex32> {
        let dim = self.dimension();
        let values = self.matrix_values();
        Array2::from_shape_fn((dim, dim), |(row, col)| {
            let k = 2 * (row * dim + col);
            Complex32::new(values[k], values[k + 1])
        })
    }

    fn dimension(&self) -> usize {
        unitary_dim(self.num_qubits.min(MAX_GATE_QUBITS as u32))
    }
}

/// Side length of the unitary; zero-qubit gates have none
fn unitary_dim(num_qubits: u32) -> usize {
    match num_qubits {
        0 => 0,
        n => 1 << n,
    }
}

fn checked_arity(qubits: &[u32]) -> Result<u32> {
    if qubits.len() > MAX_GATE_QUBITS {
        return Err(CircuitError::invalid_argument(format!(
            "gates act on at most {} qubits, got {}",
            MAX_GATE_QUBITS,
            qubits.len()
        )));
    }
    Ok(qubits.len() as u32)
}

impl PartialEq for Gate {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
            && self.num_qubits == other.num_qubits
            && self.targets() == other.targets()
            && self.matrix_values() == other.matrix_values()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gate(t={}, q={:?})", self.time, self.targets())
    }
}
