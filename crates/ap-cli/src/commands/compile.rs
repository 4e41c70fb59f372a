// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs::{self, File};
use std::io::BufWriter;

use anyhow::{Context, Result};
use ap_types::{ProofLayout, SupportedCurve};
use ap_verifier::{write_verifier, OutputKind, DEFAULT_CONTRACT_NAME};

use crate::config::Config;
use crate::output::{self, Outcome, Report};
use crate::session::{self, with_curve, Target};

fn run_on<C: SupportedCurve>(config: &Config, target: &Target, kind: OutputKind) -> Result<()> {
    let pb = output::progress(&format!("compiling {} on {}...", target.circuit, target.curve));
    let compiled = session::compile::<C>(config, target)?;
    pb.finish_and_clear();
    let vk = compiled.verifying_key();

    let dir = target.artefact_dir(config);
    fs::create_dir_all(&dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let path = dir.join(format!("{DEFAULT_CONTRACT_NAME}.py"));
    let file = File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
    write_verifier(vk, kind, BufWriter::new(file)).with_context(|| format!("cannot write {}", path.display()))?;
    let bytes = fs::metadata(&path).map(|m| m.len()).unwrap_or_default();

    let proof_len = ProofLayout::new(target.curve, target.variant).byte_len();
    Report::new(Outcome::Done, format!("{kind} verifier for {} on {}", target.circuit, target.curve))
        .artefact("verifier", &path, bytes)
        .field("variant", target.variant.name())
        .field("constraints", compiled.constraint_count())
        .field("domain_size", vk.size)
        .field("public_inputs", vk.nb_public_variables)
        .field("proof_bytes", proof_len)
        .print();
    Ok(())
}

pub fn run(config: &Config, target: Target, kind: Option<OutputKind>) -> Result<()> {
    let kind = match kind {
        Some(k) => k,
        None => config.kind()?,
    };
    with_curve!(target.curve, run_on(config, &target, kind))
}
