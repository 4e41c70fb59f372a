// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::PathBuf;

use ap_types::Curve;

use crate::loader::SetupId;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("setup size must be at least 2, got {required}")]
    InvalidSize { required: usize },

    #[error(
        "you required {required} G1 parameters, but only {available} are available \
         (header declares {declared})"
    )]
    InsufficientParameters { required: usize, declared: usize, available: usize },

    #[error("{id} setup is for {actual}, not {expected}")]
    CurveMismatch { id: SetupId, expected: Curve, actual: Curve },

    #[error("no {0} setup in this store")]
    Missing(SetupId),

    #[error("G1 blob is {len} bytes, too short for its 4-byte count header")]
    MissingHeader { len: usize },

    #[error("verifier blob must be {expected} bytes (2 G2 + 1 G1), got {actual}")]
    VerifierBlobLength { expected: usize, actual: usize },

    #[error("invalid point #{index} in {blob} blob: {source}")]
    Point {
        blob: &'static str,
        index: usize,
        #[source]
        source: ark_serialize::SerializationError,
    },

    #[error("encoding setup: {0}")]
    Serialize(#[from] ark_serialize::SerializationError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SetupResult<T> = Result<T, SetupError>;
