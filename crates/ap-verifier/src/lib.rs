// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # ap-verifier
//!
//! Generates PuyaPy verifiers for PLONK proofs, either as a logicsig that
//! fails on invalid proofs or as an ARC4 contract whose `verify` method
//! returns a bool.
//!
//! Generation goes through a small straight-line [`ir::Program`]. The same
//! program is [rendered](render::render) to Python and can be
//! [simulated](interpret::simulate) natively, which is how tests check that
//! the emitted verifier accepts exactly the proofs the prover produces.

pub mod builder;
pub mod error;
pub mod interpret;
pub mod ir;
pub mod render;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use ap_types::{SupportedCurve, VerifyingKey};
use tracing::debug;

pub use builder::build;
pub use error::{GenerateError, SimulationError};
pub use interpret::{simulate, Rejection, Verdict, VmFault};
pub use ir::Program;

/// Name of the generated logicsig or contract, and the stem PuyaPy uses for
/// its output files.
pub const DEFAULT_CONTRACT_NAME: &str = "Verifier";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputKind {
    /// Stateless; fails the transaction group on an invalid proof.
    #[default]
    LogicSig,
    /// ARC4 application with a `verify(byte[32][],byte[32][])bool` method.
    SmartContract,
}

impl OutputKind {
    pub fn name(self) -> &'static str {
        match self {
            OutputKind::LogicSig => "logicsig",
            OutputKind::SmartContract => "smart-contract",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "logicsig" | "lsig" => Ok(OutputKind::LogicSig),
            "smart-contract" | "contract" | "app" => Ok(OutputKind::SmartContract),
            _ => Err(format!("unknown output kind `{s}`: expected logicsig or smart-contract")),
        }
    }
}

/// PuyaPy source of a verifier for `vk`.
pub fn generate<C: SupportedCurve>(vk: &VerifyingKey<C>, kind: OutputKind) -> Result<String, GenerateError> {
    let program = build(vk)?;
    let source = render::render(&program, kind, DEFAULT_CONTRACT_NAME);
    debug!(curve = %C::CURVE, %kind, variant = %vk.variant, bytes = source.len(), "verifier generated");
    Ok(source)
}

/// Writes the output of [`generate`] to `writer`.
pub fn write_verifier<C: SupportedCurve, W: Write>(
    vk: &VerifyingKey<C>,
    kind: OutputKind,
    mut writer: W,
) -> Result<(), GenerateError> {
    let source = generate(vk, kind)?;
    writer.write_all(source.as_bytes())?;
    writer.flush()?;
    Ok(())
}
