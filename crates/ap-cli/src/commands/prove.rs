// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use ap_sdk::export::export_proof_and_public_inputs;
use ap_types::SupportedCurve;

use crate::commands::verify::blob_paths;
use crate::config::Config;
use crate::output::{self, Outcome, Report};
use crate::session::{self, with_curve, Target};

fn run_on<C: SupportedCurve>(config: &Config, target: &Target, inputs: &[u64]) -> Result<()> {
    let compiled = session::compile::<C>(config, target)?;

    let pb = output::progress(&format!("proving {} on {}...", target.circuit, target.curve));
    let mut rng = session::prover_rng();
    let verified = target.circuit.prove(&compiled, inputs, &mut rng);
    pb.finish_and_clear();
    let verified = verified.with_context(|| format!("cannot prove {} with inputs {inputs:?}", target.circuit))?;

    let dir = target.artefact_dir(config);
    let (proof_bytes, public_bytes) =
        export_proof_and_public_inputs(&dir, target.circuit.name(), &verified.proof, &verified.witness)?;
    let (proof_path, public_path) = blob_paths(config, target, None, None);

    Report::new(Outcome::Done, format!("proof for {} on {}", target.circuit, target.curve))
        .artefact("proof", &proof_path, proof_bytes as u64)
        .artefact("public_inputs", &public_path, public_bytes as u64)
        .field("variant", target.variant.name())
        .print();
    Ok(())
}

pub fn run(config: &Config, target: Target, inputs: &[u64]) -> Result<()> {
    with_curve!(target.curve, run_on(config, &target, inputs))
}
