// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for codec, ABI and export operations.

use std::path::PathBuf;

use ap_types::{Curve, ProtocolVariant, TypesError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("{curve} {variant} proof must be {expected} bytes, got {actual}")]
    ProofLength { curve: Curve, variant: ProtocolVariant, expected: usize, actual: usize },

    #[error("proof field {field}: {source}")]
    Field { field: &'static str, source: TypesError },

    #[error("error extracting public inputs: {0}")]
    WitnessExtraction(TypesError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
    #[error("proof and public inputs must be 32-byte aligned")]
    Alignment,

    #[error("{what} has {count} elements; byte[32][] holds at most 65535")]
    TooManyElements { what: &'static str, count: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error("writing {bytes} bytes to {path}: {source}")]
    Io { path: PathBuf, bytes: usize, source: std::io::Error },
}

pub type SdkResult<T> = Result<T, SdkError>;
