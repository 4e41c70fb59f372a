// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared data model for the AVM PLONK workspace: curve tags and their
//! encoding parameters, verifying keys, proofs with their positional
//! layout, and witnesses.

pub mod curve;
pub mod encoding;
pub mod error;
pub mod key;
pub mod proof;
pub mod witness;

pub use curve::{Curve, CurveParameters, SupportedCurve, G1, G2};
pub use error::{TypesError, TypesResult};
pub use key::{KzgVerifyingKey, VerifyingKey};
pub use proof::{
    FieldKind, Proof, ProofElement, ProofField, ProofLayout, ProtocolVariant, QuotientClaims,
    WireEvaluations,
};
pub use witness::{Witness, WITNESS_HEADER_LEN};
