// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # ap-sdk
//!
//! Everything between a proof and a verifier call.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`codec`] | Proof and public-input blobs in the AVM byte layout |
//! | [`abi`] | ARC4 `byte[32][]` call arguments |
//! | [`export`] | `.proof` / `.public_inputs` files |
//!
//! ```rust,no_run
//! # fn example(proof: &ap_types::Proof<ark_bn254::Bn254>, witness: &ap_types::Witness<ark_bn254::Fr>) -> ap_sdk::SdkResult<()> {
//! let proof_bytes = ap_sdk::codec::encode_proof(proof);
//! let public_bytes = ap_sdk::codec::encode_public_inputs(witness)?;
//! let [proof_arg, public_arg] =
//!     ap_sdk::abi::abi_encode_proof_and_public_inputs(&proof_bytes, &public_bytes)?;
//! # Ok(())
//! # }
//! ```

pub mod abi;
pub mod codec;
pub mod error;
pub mod export;

pub use abi::{abi_encode_proof_and_public_inputs, proof_and_public_inputs_args};
pub use codec::{decode_proof, decode_public_inputs, encode_proof, encode_public_inputs};
pub use error::{AbiError, CodecError, SdkError, SdkResult};
