// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::Result;
use ap_sdk::abi::{abi_encode_proof_and_public_inputs, proof_and_public_inputs_args};

use crate::commands::verify::read;
use crate::output::{self, Outcome, Report};

pub fn run(proof_path: &Path, public_path: &Path) -> Result<()> {
    let proof = read(proof_path)?;
    let public = read(public_path)?;

    let (proof_chunks, public_chunks) = proof_and_public_inputs_args(&proof, &public)
        .map_err(|e| output::hint(&e.to_string(), "blobs must come from `avmplonk prove` or the sdk codec"))?;
    let [proof_arg, public_arg] = abi_encode_proof_and_public_inputs(&proof, &public)?;

    Report::new(Outcome::Done, "ARC4 call arguments")
        .artefact("proof", proof_path, proof.len() as u64)
        .artefact("public_inputs", public_path, public.len() as u64)
        .field("proof_type", format!("byte[32][{}]", proof_chunks.len()))
        .field("public_inputs_type", format!("byte[32][{}]", public_chunks.len()))
        .field("proof_arg", hex::encode(&proof_arg))
        .field("public_inputs_arg", hex::encode(&public_arg))
        .print();
    Ok(())
}
