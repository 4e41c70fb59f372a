// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_ff::PrimeField;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar, fields::FieldVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

/// "I know `x` such that `x³ + x + 5 == y`", with `y` public.
#[derive(Clone)]
pub struct CubicCircuit<F> {
    pub x: Option<F>,
}

impl<F: PrimeField> CubicCircuit<F> {
    pub fn empty() -> Self {
        Self { x: None }
    }

    pub fn new(x: u64) -> Self {
        Self { x: Some(F::from(x)) }
    }

    /// `x³ + x + 5`
    pub fn evaluate(x: F) -> F {
        x * x * x + x + F::from(5u64)
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for CubicCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let y = FpVar::new_input(cs.clone(), || {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(Self::evaluate(x))
        })?;
        let x = FpVar::new_witness(cs, || self.x.ok_or(SynthesisError::AssignmentMissing))?;

        let x3 = &x * &x * &x;
        (x3 + &x + FpVar::constant(F::from(5u64))).enforce_equal(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_relations::r1cs::ConstraintSystem;

    #[test]
    fn test_satisfied() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        CubicCircuit::<Fr>::new(3).generate_constraints(cs.clone()).unwrap();
        assert!(cs.is_satisfied().unwrap());
        assert_eq!(CubicCircuit::<Fr>::evaluate(Fr::from(3u64)), Fr::from(35u64));
    }
}
