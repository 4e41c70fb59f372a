// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("verifying key has {count} custom-gate commitments; generated verifiers do not support them")]
    CustomGatesUnsupported { count: usize },

    #[error("failed to write verifier: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed program, as opposed to a proof the program rejects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("variable `{0}` used before assignment")]
    UnboundVariable(String),

    #[error("{op} expects {expected} operands")]
    TypeMismatch { expected: &'static str, op: &'static str },
}
