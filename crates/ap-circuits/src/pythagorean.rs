// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_ff::PrimeField;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

/// "I know `c` such that `a² + b² == c²`", with `a` and `b` public.
#[derive(Clone)]
pub struct PythagoreanCircuit<F> {
    pub a: Option<F>,
    pub b: Option<F>,
    pub c: Option<F>,
}

impl<F: PrimeField> PythagoreanCircuit<F> {
    pub fn empty() -> Self {
        Self { a: None, b: None, c: None }
    }

    pub fn new(a: u64, b: u64, c: u64) -> Self {
        Self { a: Some(F::from(a)), b: Some(F::from(b)), c: Some(F::from(c)) }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for PythagoreanCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let a = FpVar::new_input(cs.clone(), || self.a.ok_or(SynthesisError::AssignmentMissing))?;
        let b = FpVar::new_input(cs.clone(), || self.b.ok_or(SynthesisError::AssignmentMissing))?;
        let c = FpVar::new_witness(cs, || self.c.ok_or(SynthesisError::AssignmentMissing))?;

        let aa = &a * &a;
        let bb = &b * &b;
        let cc = &c * &c;
        (aa + bb).enforce_equal(&cc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_relations::r1cs::ConstraintSystem;

    #[test]
    fn test_satisfied() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        PythagoreanCircuit::<Fr>::new(3, 4, 5).generate_constraints(cs.clone()).unwrap();
        assert!(cs.is_satisfied().unwrap());
        assert_eq!(cs.num_instance_variables(), 3);
    }

    #[test]
    fn test_wrong_hypotenuse() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        PythagoreanCircuit::<Fr>::new(3, 4, 6).generate_constraints(cs.clone()).unwrap();
        assert!(!cs.is_satisfied().unwrap(), "should fail: 9 + 16 != 36");
    }
}
