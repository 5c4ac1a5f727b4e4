use rand::Rng;

use qcircuit::prelude::*;

fn random_gate_1q() -> Gate {
    let mut rng = rand::thread_rng();
    let matrix: [f32; 8] = std::array::from_fn(|_| rng.gen());
    Gate::one_qubit(18, 3, matrix)
}

fn random_gate_2q() -> Gate {
    let mut rng = rand::thread_rng();
    let matrix: [f32; 32] = std::array::from_fn(|_| rng.gen());
    Gate::two_qubit(19, 3, 4, matrix)
}

fn full_circuit() -> Circuit {
    let mut circuit = Circuit::new(53);
    circuit.push_gate(Gate::default());
    circuit.push_gate(random_gate_1q());
    circuit.push_gate(random_gate_2q());
    circuit
}

#[cfg(test)]
mod circuit_equality_tests {
    use super::*;

    #[test]
    fn test_circuit_empty() {
        let mut true_circuit = Circuit::default();
        let mut test_circuit = Circuit::default();
        assert_eq!(test_circuit, true_circuit);

        true_circuit.num_qubits = 53;
        test_circuit.num_qubits = 53;

        test_circuit.num_qubits = true_circuit.num_qubits + 1;
        assert_ne!(test_circuit, true_circuit);
        test_circuit.num_qubits = true_circuit.num_qubits;
        assert_eq!(test_circuit, true_circuit);
    }

    #[test]
    fn test_circuit_full() {
        let true_circuit = full_circuit();
        let mut test_circuit = true_circuit.clone();
        assert_eq!(test_circuit, true_circuit);

        test_circuit.num_qubits = true_circuit.num_qubits + 1;
        assert_ne!(test_circuit, true_circuit);
        test_circuit.num_qubits = true_circuit.num_qubits;

        test_circuit.gates[2] = true_circuit.gates[0];
        assert_ne!(test_circuit, true_circuit);
        test_circuit.gates[2] = true_circuit.gates[2];

        assert_eq!(test_circuit, true_circuit);
    }

    #[test]
    fn test_every_position_matters() {
        let true_circuit = full_circuit();
        let replacement = random_gate_2q();
        for i in 0..true_circuit.gate_count() {
            let mut test_circuit = true_circuit.clone();
            test_circuit.gates[i] = replacement;
            assert_ne!(test_circuit, true_circuit, "gate {} change went unnoticed", i);
        }
    }

    #[test]
    fn test_length_and_order_matter() {
        let true_circuit = full_circuit();

        let mut shorter = true_circuit.clone();
        shorter.gates.pop();
        assert_ne!(shorter, true_circuit);
        assert_ne!(true_circuit, shorter);

        let mut reordered = true_circuit.clone();
        reordered.gates.swap(1, 2);
        assert_ne!(reordered, true_circuit);
    }
}

#[cfg(test)]
mod circuit_construction_tests {
    use super::*;

    #[test]
    fn test_full_circuit_is_valid() {
        assert!(full_circuit().validate().is_ok());

        let mut narrow = full_circuit();
        narrow.num_qubits = 4;
        let err = narrow.validate().unwrap_err();
        assert!(matches!(err, CircuitError::InvalidArgument { .. }));
    }

    #[test]
    fn test_builder_matches_manual_construction() {
        let g1 = random_gate_1q();
        let g2 = random_gate_2q();

        let built = CircuitBuilder::new(5)
            .gate(g1)
            .next_moment()
            .gate(g2)
            .build()
            .unwrap();

        let mut manual = Circuit::new(5);
        manual.push_gate(Gate { time: 0, ..g1 });
        manual.push_gate(Gate { time: 1, ..g2 });

        assert_eq!(built, manual);
        assert_eq!(built.num_moments(), 2);
        assert_eq!(CircuitBuilder::new(1).next_moment().moment(), 1);
    }

    #[test]
    fn test_builder_rejects_out_of_range() {
        let result = CircuitBuilder::new(2).one_qubit(2, [0.0; 8]).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip_preserves_equality() {
        // Dyadic values survive the decimal text form exactly
        let matrix: [f32; 32] = std::array::from_fn(|i| i as f32 / 8.0);
        let mut circuit = Circuit::new(53);
        circuit.push_gate(Gate::default());
        circuit.push_gate(Gate::one_qubit(18, 3, [0.5, 0.0, -0.25, 1.0, 0.0, 0.0, 2.0, -1.5]));
        circuit.push_gate(Gate::two_qubit(19, 3, 4, matrix));

        let json = serde_json::to_string(&circuit).unwrap();
        let restored: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, circuit);
    }
}
