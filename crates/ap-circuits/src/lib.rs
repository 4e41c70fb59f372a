// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Example circuits, and a by-name registry the CLI compiles and proves
//! through.

pub mod cubic;
pub mod pythagorean;

use std::fmt;
use std::str::FromStr;

use ap_circuit::{compile, CompileError, CompileOptions, CompiledCircuit, ProveError, SetupMode, VerifiedProof};
use ap_types::SupportedCurve;
use ark_std::rand::RngCore;

pub use cubic::CubicCircuit;
pub use pythagorean::PythagoreanCircuit;

#[derive(Debug, thiserror::Error)]
pub enum CircuitsError {
    #[error("unknown circuit '{0}' (expected pythagorean or cubic)")]
    UnknownCircuit(String),

    #[error("{circuit} takes {expected} inputs, got {actual}")]
    InputCount { circuit: ExampleCircuit, expected: usize, actual: usize },

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Prove(#[from] ProveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleCircuit {
    /// Inputs `a b c`; `a`, `b` public.
    Pythagorean,
    /// Input `x`; `x³ + x + 5` public.
    Cubic,
}

impl ExampleCircuit {
    pub const ALL: [ExampleCircuit; 2] = [ExampleCircuit::Pythagorean, ExampleCircuit::Cubic];

    pub fn name(self) -> &'static str {
        match self {
            ExampleCircuit::Pythagorean => "pythagorean",
            ExampleCircuit::Cubic => "cubic",
        }
    }

    /// Number of values `prove` expects.
    pub fn input_count(self) -> usize {
        match self {
            ExampleCircuit::Pythagorean => 3,
            ExampleCircuit::Cubic => 1,
        }
    }

    pub fn compile<C: SupportedCurve>(
        self,
        setup: SetupMode<'_>,
        options: CompileOptions,
    ) -> Result<CompiledCircuit<C>, CircuitsError> {
        let compiled: CompiledCircuit<C> = match self {
            ExampleCircuit::Pythagorean => compile(PythagoreanCircuit::<C::Fr>::empty(), setup, options)?,
            ExampleCircuit::Cubic => compile(CubicCircuit::<C::Fr>::empty(), setup, options)?,
        };
        Ok(compiled)
    }

    pub fn prove<C: SupportedCurve, R: RngCore + ?Sized>(
        self,
        compiled: &CompiledCircuit<C>,
        inputs: &[u64],
        rng: &mut R,
    ) -> Result<VerifiedProof<C>, CircuitsError> {
        if inputs.len() != self.input_count() {
            return Err(CircuitsError::InputCount {
                circuit: self,
                expected: self.input_count(),
                actual: inputs.len(),
            });
        }
        let proof = match self {
            ExampleCircuit::Pythagorean => {
                compiled.prove(PythagoreanCircuit::<C::Fr>::new(inputs[0], inputs[1], inputs[2]), rng)?
            }
            ExampleCircuit::Cubic => compiled.prove(CubicCircuit::<C::Fr>::new(inputs[0]), rng)?,
        };
        Ok(proof)
    }
}

impl fmt::Display for ExampleCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExampleCircuit {
    type Err = CircuitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CircuitsError::UnknownCircuit(s.to_string()))
    }
}
