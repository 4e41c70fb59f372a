// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Lowering of R1CS constraints to PLONK gates.
//!
//! Every gate has the form `qL·l + qR·r + qM·l·r + qO·o + qK = 0` over three
//! wire slots. Variable ids are R1CS column indexes (0 is the constant one,
//! then instance, then witness), followed by internal variables introduced
//! to break linear combinations with more than one term into two-input sums.
//!
//! The first `nb_public` rows bind the public inputs: `qL = −1`, `l = xᵢ`, so
//! with the `PI(X)` term added by the prover the row reads `−xᵢ + xᵢ = 0`.

use std::collections::BTreeMap;

use ark_ff::PrimeField;
use ark_relations::r1cs::ConstraintMatrices;

use crate::error::ProveError;

/// Variable occupying a wire slot, or `None` for an unused slot.
pub type Wire = Option<usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate<F> {
    pub ql: F,
    pub qr: F,
    pub qm: F,
    pub qo: F,
    pub qk: F,
    pub wires: [Wire; 3],
}

impl<F: PrimeField> Gate<F> {
    fn is_trivial(&self) -> bool {
        [self.ql, self.qr, self.qm, self.qo, self.qk].iter().all(|s| s.is_zero())
    }

    fn residual(&self, values: &[F]) -> F {
        let [l, r, o] = self.wires.map(|w| w.map_or(F::zero(), |v| values[v]));
        self.ql * l + self.qr * r + self.qm * l * r + self.qo * o + self.qk
    }
}

/// `scale · wire + constant`
struct Term<F> {
    scale: F,
    wire: Wire,
    constant: F,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseCircuit<F> {
    pub nb_public: usize,
    /// R1CS variables, including the constant one.
    pub nb_r1cs_variables: usize,
    /// Internal variable `nb_r1cs_variables + i` equals `a·x + b·y` for
    /// `definitions[i] = (a, x, b, y)`.
    pub definitions: Vec<(F, usize, F, usize)>,
    /// Public rows first.
    pub gates: Vec<Gate<F>>,
}

impl<F: PrimeField> SparseCircuit<F> {
    pub fn from_matrices(m: &ConstraintMatrices<F>) -> Self {
        let nb_public = m.num_instance_variables - 1;
        let mut circuit = Self {
            nb_public,
            nb_r1cs_variables: m.num_instance_variables + m.num_witness_variables,
            definitions: Vec::new(),
            gates: (1..=nb_public)
                .map(|i| Gate {
                    ql: -F::one(),
                    qr: F::zero(),
                    qm: F::zero(),
                    qo: F::zero(),
                    qk: F::zero(),
                    wires: [Some(i), None, None],
                })
                .collect(),
        };

        for ((a, b), c) in m.a.iter().zip(&m.b).zip(&m.c) {
            let a = circuit.reduce(a);
            let b = circuit.reduce(b);
            let c = circuit.reduce(c);
            circuit.push(Gate {
                qm: a.scale * b.scale,
                ql: a.scale * b.constant,
                qr: a.constant * b.scale,
                qo: -c.scale,
                qk: a.constant * b.constant - c.constant,
                wires: [a.wire, b.wire, c.wire],
            });
        }
        circuit
    }

    /// Gates excluding the public-input rows.
    pub fn nb_constraints(&self) -> usize {
        self.gates.len() - self.nb_public
    }

    pub fn nb_variables(&self) -> usize {
        self.nb_r1cs_variables + self.definitions.len()
    }

    fn push(&mut self, gate: Gate<F>) {
        if !gate.is_trivial() {
            self.gates.push(gate);
        }
    }

    /// Collapses a linear combination to a single scaled wire, emitting one
    /// addition gate per extra term.
    fn reduce(&mut self, lc: &[(F, usize)]) -> Term<F> {
        let mut constant = F::zero();
        let mut merged = BTreeMap::<usize, F>::new();
        for &(coeff, var) in lc {
            if var == 0 {
                constant += coeff;
            } else {
                *merged.entry(var).or_insert_with(F::zero) += coeff;
            }
        }
        merged.retain(|_, c| !c.is_zero());

        let mut terms = merged.into_iter();
        let Some((mut var, mut scale)) = terms.next() else {
            return Term { scale: F::zero(), wire: None, constant };
        };
        for (next, coeff) in terms {
            let id = self.nb_variables();
            self.definitions.push((scale, var, coeff, next));
            self.push(Gate {
                ql: scale,
                qr: coeff,
                qm: F::zero(),
                qo: -F::one(),
                qk: F::zero(),
                wires: [Some(var), Some(next), Some(id)],
            });
            var = id;
            scale = F::one();
        }
        Term { scale, wire: Some(var), constant }
    }

    /// Values of every variable, from an R1CS instance assignment (leading
    /// one included) and witness assignment.
    pub fn solve(&self, instance: &[F], witness: &[F]) -> Result<Vec<F>, ProveError> {
        let expected_instance = self.nb_public + 1;
        let expected_witness = self.nb_r1cs_variables - expected_instance;
        if instance.len() != expected_instance || witness.len() != expected_witness {
            return Err(ProveError::Shape {
                instance: instance.len(),
                witness: witness.len(),
                expected_instance,
                expected_witness,
            });
        }
        let mut values = Vec::with_capacity(self.nb_variables());
        values.extend_from_slice(instance);
        values.extend_from_slice(witness);
        for &(a, x, b, y) in &self.definitions {
            let v = a * values[x] + b * values[y];
            values.push(v);
        }
        Ok(values)
    }

    /// Checks every non-public gate against `values`.
    pub fn check(&self, values: &[F]) -> Result<(), ProveError> {
        match self
            .gates
            .iter()
            .enumerate()
            .skip(self.nb_public)
            .find(|(_, gate)| !gate.residual(values).is_zero())
        {
            Some((row, _)) => Err(ProveError::Unsatisfied { row }),
            None => Ok(()),
        }
    }

    /// Wire values per column, padded with zeros to `n` rows.
    pub fn wire_values(&self, values: &[F], n: usize) -> [Vec<F>; 3] {
        let mut columns = [vec![F::zero(); n], vec![F::zero(); n], vec![F::zero(); n]];
        for (row, gate) in self.gates.iter().enumerate() {
            for (col, wire) in gate.wires.iter().enumerate() {
                if let Some(v) = wire {
                    columns[col][row] = values[*v];
                }
            }
        }
        columns
    }

    /// Copy-constraint permutation over positions `col·n + row`: each
    /// position maps to the next one holding the same variable, cyclically.
    /// Unused slots and padding rows map to themselves.
    pub fn permutation(&self, n: usize) -> Vec<usize> {
        let mut sigma: Vec<usize> = (0..3 * n).collect();
        let mut occurrences = BTreeMap::<usize, Vec<usize>>::new();
        for col in 0..3 {
            for (row, gate) in self.gates.iter().enumerate() {
                if let Some(v) = gate.wires[col] {
                    occurrences.entry(v).or_default().push(col * n + row);
                }
            }
        }
        for positions in occurrences.values() {
            for (i, &pos) in positions.iter().enumerate() {
                sigma[pos] = positions[(i + 1) % positions.len()];
            }
        }
        sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
    use ark_relations::r1cs::{ConstraintSystem, ConstraintSystemRef, OptimizationGoal};

    /// x·y = z with x public, plus z + x + y = w.
    fn synthesize(x: u64, y: u64) -> (SparseCircuit<Fr>, ConstraintSystemRef<Fr>) {
        let cs = ConstraintSystem::<Fr>::new_ref();
        cs.set_optimization_goal(OptimizationGoal::Constraints);
        let xv = FpVar::new_input(cs.clone(), || Ok(Fr::from(x))).unwrap();
        let yv = FpVar::new_witness(cs.clone(), || Ok(Fr::from(y))).unwrap();
        let z = &xv * &yv;
        let w = FpVar::new_witness(cs.clone(), || Ok(Fr::from(x * y + x + y))).unwrap();
        (&z + &xv + &yv).enforce_equal(&w).unwrap();
        cs.finalize();
        let m = cs.to_matrices().unwrap();
        (SparseCircuit::from_matrices(&m), cs)
    }

    fn assignment(cs: &ConstraintSystemRef<Fr>) -> (Vec<Fr>, Vec<Fr>) {
        let inner = cs.borrow().unwrap();
        (inner.instance_assignment.clone(), inner.witness_assignment.clone())
    }

    #[test]
    fn test_public_rows_come_first() {
        let (circuit, _) = synthesize(3, 5);
        assert_eq!(circuit.nb_public, 1);
        assert_eq!(circuit.gates[0].wires, [Some(1), None, None]);
        assert_eq!(circuit.gates[0].ql, -Fr::from(1u64));
        assert!(circuit.nb_constraints() >= 2);
    }

    #[test]
    fn test_satisfied_assignment_checks() {
        let (circuit, cs) = synthesize(3, 5);
        let (instance, witness) = assignment(&cs);
        let values = circuit.solve(&instance, &witness).unwrap();
        assert_eq!(values.len(), circuit.nb_variables());
        circuit.check(&values).unwrap();
    }

    #[test]
    fn test_tampered_value_is_caught() {
        let (circuit, cs) = synthesize(3, 5);
        let (instance, mut witness) = assignment(&cs);
        witness[0] += Fr::from(1u64);
        let values = circuit.solve(&instance, &witness).unwrap();
        assert!(matches!(circuit.check(&values), Err(ProveError::Unsatisfied { .. })));
    }

    #[test]
    fn test_shape_mismatch() {
        let (circuit, cs) = synthesize(3, 5);
        let (instance, _) = assignment(&cs);
        assert!(matches!(circuit.solve(&instance, &[]), Err(ProveError::Shape { .. })));
    }

    #[test]
    fn test_permutation_is_a_permutation() {
        let (circuit, _) = synthesize(3, 5);
        let n = (circuit.gates.len() + 1).next_power_of_two();
        let sigma = circuit.permutation(n);
        let mut seen = vec![false; 3 * n];
        for &p in &sigma {
            assert!(!seen[p]);
            seen[p] = true;
        }
        // Padding rows are fixed points.
        assert_eq!(sigma[n - 1], n - 1);
    }
}
