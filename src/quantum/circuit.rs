use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, Result};
use crate::quantum::gate::Gate;

/// A quantum circuit: an ordered sequence of gates over `num_qubits` qubits.
///
/// Gate order is significant. Two circuits are equal when they address the
/// same number of qubits and hold equal gates in the same order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Circuit {
    pub num_qubits: u32,
    pub gates: Vec<Gate>,
}

impl Circuit {
    /// Create a new empty circuit
    pub fn new(num_qubits: u32) -> Self {
        Circuit {
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Append a gate without checking it against the circuit
    pub fn push_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Append a gate after checking that its targets fit the circuit
    pub fn try_push_gate(&mut self, gate: Gate) -> Result<()> {
        self.check_gate(self.gates.len(), &gate)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Check every gate against the circuit, reporting the first offender
    pub fn validate(&self) -> Result<()> {
        for (position, gate) in self.gates.iter().enumerate() {
            self.check_gate(position, gate)?;
        }
        Ok(())
    }

    fn check_gate(&self, position: usize, gate: &Gate) -> Result<()> {
        for &q in gate.targets() {
            if q >= self.num_qubits {
                log::debug!("rejecting {} at position {}: qubit {} out of range", gate, position, q);
                return Err(CircuitError::invalid_argument(format!(
                    "gate {} targets qubit {} but the circuit has {} qubits",
                    position, q, self.num_qubits
                )));
            }
        }

        if let [a, b] = gate.targets() {
            if a == b {
                log::debug!("rejecting {} at position {}: repeated target", gate, position);
                return Err(CircuitError::invalid_argument(format!(
                    "gate {} targets qubit {} twice",
                    position, a
                )));
            }
        }

        Ok(())
    }

    /// Get the number of gates in the circuit
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of moments spanned, one past the latest gate time
    pub fn num_moments(&self) -> u32 {
        self.gates.iter().map(|g| g.time.saturating_add(1)).max().unwrap_or(0)
    }

    /// Gates acting in the given moment, in circuit order
    pub fn gates_at(&self, time: u32) -> impl Iterator<Item = &Gate> + '_ {
        self.gates.iter().filter(move |g| g.time == time)
    }
}

impl PartialEq for Circuit {
    fn eq(&self, other: &Self) -> bool {
        self.num_qubits == other.num_qubits && self.gates == other.gates
    }
}

/// Builder that stamps each added gate with the current moment
#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    circuit: Circuit,
    moment: u32,
}

impl CircuitBuilder {
    /// Create a new circuit builder
    pub fn new(num_qubits: u32) -> Self {
        CircuitBuilder {
            circuit: Circuit::new(num_qubits),
            moment: 0,
        }
    }

    /// The moment newly added gates are placed in
    pub fn moment(&self) -> u32 {
        self.moment
    }

    /// Start a new moment
    pub fn next_moment(mut self) -> Self {
        self.moment += 1;
        self
    }

    /// Add a single-qubit gate in the current moment
    pub fn one_qubit(mut self, qubit: u32, matrix: [f32; 8]) -> Self {
        self.circuit.push_gate(Gate::one_qubit(self.moment, qubit, matrix));
        self
    }

    /// Add a two-qubit gate in the current moment
    pub fn two_qubit(mut self, qubit0: u32, qubit1: u32, matrix: [f32; 32]) -> Self {
        self.circuit.push_gate(Gate::two_qubit(self.moment, qubit0, qubit1, matrix));
        self
    }

    /// Add a gate, replacing its time with the current moment
    pub fn gate(mut self, gate: Gate) -> Self {
        self.circuit.push_gate(Gate {
            time: self.moment,
            ..gate
        });
        self
    }

    /// Validate and return the circuit
    pub fn build(self) -> Result<Circuit> {
        self.circuit.validate()?;
        log::trace!(
            "built circuit with {} gates over {} moments",
            self.circuit.gate_count(),
            self.circuit.num_moments()
        );
        Ok(self.circuit)
    }
}
