// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ap_circuit::verify_offchain;
use ap_sdk::codec::{decode_proof, decode_public_inputs};
use ap_sdk::export::{PROOF_EXTENSION, PUBLIC_INPUTS_EXTENSION};
use ap_types::SupportedCurve;
use ap_verifier::{build, simulate, Verdict};

use crate::config::Config;
use crate::output::{Outcome, Report};
use crate::session::{self, with_curve, Target};

pub fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Explicit paths, or the files `prove` writes for `target`.
pub fn blob_paths(
    config: &Config,
    target: &Target,
    proof: Option<PathBuf>,
    public_inputs: Option<PathBuf>,
) -> (PathBuf, PathBuf) {
    let dir = target.artefact_dir(config);
    let stem = target.circuit.name();
    (
        proof.unwrap_or_else(|| dir.join(format!("{stem}.{PROOF_EXTENSION}"))),
        public_inputs.unwrap_or_else(|| dir.join(format!("{stem}.{PUBLIC_INPUTS_EXTENSION}"))),
    )
}

fn run_on<C: SupportedCurve>(config: &Config, target: &Target, proof_path: &Path, public_path: &Path) -> Result<()> {
    let proof = read(proof_path)?;
    let public = read(public_path)?;
    let compiled = session::compile::<C>(config, target)?;
    let vk = compiled.verifying_key();

    let program = build(vk).context("cannot build verifier program")?;
    let verdict = simulate::<C>(&program, &proof, &public).context("verifier program failed to run")?;

    // The native verifier needs well-formed blobs; malformed ones are already a rejection above.
    let native = match (decode_proof::<C>(&proof, target.variant), decode_public_inputs::<C::Fr>(&public)) {
        (Ok(p), Ok(x)) => verify_offchain(vk, &p, &x),
        _ => false,
    };
    let (outcome, headline, reason) = match &verdict {
        Verdict::Accepted => (Outcome::Accepted, "proof accepted", None),
        Verdict::Rejected(r) => (Outcome::Rejected, "proof rejected", Some(format!("{r:?}"))),
    };
    let mut report = Report::new(outcome, headline)
        .artefact("proof", proof_path, proof.len() as u64)
        .artefact("public_inputs", public_path, public.len() as u64)
        .field("reason", reason)
        .field("native_accepted", native);
    if native != verdict.is_accepted() {
        report = report.note("native and generated verifiers disagree");
    }
    report.print();

    if report.is_rejected() {
        anyhow::bail!("verification failed");
    }
    Ok(())
}

pub fn run(config: &Config, target: Target, proof: Option<PathBuf>, public_inputs: Option<PathBuf>) -> Result<()> {
    let (proof_path, public_path) = blob_paths(config, &target, proof, public_inputs);
    with_curve!(target.curve, run_on(config, &target, &proof_path, &public_path))
}
