// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Recompiles an example circuit the same way on every invocation, so keys
//! never need to be stored between `compile`, `prove` and `verify`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use ap_circuit::{CompileOptions, CompiledCircuit, SetupMode};
use ap_circuits::ExampleCircuit;
use ap_setup::{SetupId, SetupStore};
use ap_types::{Curve, ProtocolVariant, SupportedCurve};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use clap::ValueEnum;
use tracing::debug;

use crate::config::{Config, SetupChoice};
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Quotient identity folded into the opening check.
    Folded,
    /// Proof carries t(ζ) and r(ζ); the verifier checks the identity first.
    Explicit,
}

impl From<VariantArg> for ProtocolVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Folded => ProtocolVariant::FoldedQuotient,
            VariantArg::Explicit => ProtocolVariant::ExplicitQuotient,
        }
    }
}

/// Circuit, curve and variant a command works on.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub circuit: ExampleCircuit,
    pub curve: Curve,
    pub variant: ProtocolVariant,
}

impl Target {
    pub fn resolve(config: &Config, circuit: ExampleCircuit, curve: Option<Curve>, variant: VariantArg) -> Result<Self> {
        let curve = match curve {
            Some(c) => c,
            None => config.curve()?,
        };
        Ok(Self { circuit, curve, variant: variant.into() })
    }

    /// `<output_dir>/<circuit>/<curve>`.
    pub fn artefact_dir(&self, config: &Config) -> PathBuf {
        config.output_dir().join(self.circuit.name()).join(self.curve.name())
    }
}

pub fn compile<C: SupportedCurve>(config: &Config, target: &Target) -> Result<CompiledCircuit<C>> {
    let options = CompileOptions { variant: target.variant };
    let compiled = match config.setup_choice()? {
        SetupChoice::Test => {
            output::warn("using the insecure test-only setup; do not deploy this verifier");
            let mut rng = StdRng::seed_from_u64(config.seed);
            target.circuit.compile::<C>(SetupMode::TestOnly(&mut rng), options)
        }
        SetupChoice::Trusted => {
            let store = SetupStore::directory(&config.setup_dir);
            let id = SetupId::default_for(C::CURVE);
            target.circuit.compile::<C>(SetupMode::Trusted { store: &store, id }, options)
        }
    };
    let compiled = compiled.with_context(|| format!("cannot compile {} on {}", target.circuit, C::CURVE))?;
    debug!(circuit = %target.circuit, curve = %C::CURVE, constraints = compiled.constraint_count(), "recompiled");
    Ok(compiled)
}

/// Proof blinding randomness.
pub fn prover_rng() -> StdRng {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}

/// Instantiates a generic function for the runtime curve.
macro_rules! with_curve {
    ($curve:expr, $f:ident ( $($arg:expr),* $(,)? )) => {
        match $curve {
            ap_types::Curve::Bn254 => $f::<ark_bn254::Bn254>($($arg),*),
            ap_types::Curve::Bls12_381 => $f::<ark_bls12_381::Bls12_381>($($arg),*),
        }
    };
}

pub(crate) use with_curve;
