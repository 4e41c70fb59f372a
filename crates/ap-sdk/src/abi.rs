// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifier call arguments. Both blobs travel as ARC4 `byte[32][]`: a
//! big-endian `uint16` element count followed by the elements.

use crate::error::AbiError;

pub const ELEMENT_WIDTH: usize = 32;

pub type Element = [u8; ELEMENT_WIDTH];

fn chunks(data: &[u8]) -> Vec<Element> {
    data.chunks_exact(ELEMENT_WIDTH)
        .map(|chunk| {
            let mut element = [0u8; ELEMENT_WIDTH];
            element.copy_from_slice(chunk);
            element
        })
        .collect()
}

fn encode_arc4(what: &'static str, elements: &[Element]) -> Result<Vec<u8>, AbiError> {
    let count = u16::try_from(elements.len())
        .map_err(|_| AbiError::TooManyElements { what, count: elements.len() })?;
    let mut out = Vec::with_capacity(2 + elements.len() * ELEMENT_WIDTH);
    out.extend(count.to_be_bytes());
    for element in elements {
        out.extend(element);
    }
    Ok(out)
}

/// Splits both blobs into 32-byte elements, for callers that let their
/// transaction composer do the ARC4 encoding.
pub fn proof_and_public_inputs_args(
    proof: &[u8],
    public_inputs: &[u8],
) -> Result<(Vec<Element>, Vec<Element>), AbiError> {
    if proof.len() % ELEMENT_WIDTH != 0 || public_inputs.len() % ELEMENT_WIDTH != 0 {
        return Err(AbiError::Alignment);
    }
    Ok((chunks(proof), chunks(public_inputs)))
}

/// `[proof, public_inputs]`, each ARC4-encoded as `byte[32][]`.
pub fn abi_encode_proof_and_public_inputs(
    proof: &[u8],
    public_inputs: &[u8],
) -> Result<[Vec<u8>; 2], AbiError> {
    let (proof, public_inputs) = proof_and_public_inputs_args(proof, public_inputs)?;
    Ok([encode_arc4("proof", &proof)?, encode_arc4("public inputs", &public_inputs)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_prefixes_count() {
        let proof: Vec<u8> = (0..768u32).map(|i| i as u8).collect();
        let public = vec![7u8; 64];
        let [p, pi] = abi_encode_proof_and_public_inputs(&proof, &public).unwrap();
        assert_eq!(&p[..2], &[0, 24]);
        assert_eq!(&p[2..], &proof[..]);
        assert_eq!(&pi[..2], &[0, 2]);
        assert_eq!(pi.len(), 66);
    }

    #[test]
    fn test_empty_public_inputs() {
        let [_, pi] = abi_encode_proof_and_public_inputs(&[0u8; 32], &[]).unwrap();
        assert_eq!(pi, vec![0, 0]);
    }

    #[test]
    fn test_misaligned() {
        assert_eq!(abi_encode_proof_and_public_inputs(&[0u8; 33], &[]), Err(AbiError::Alignment));
        assert_eq!(proof_and_public_inputs_args(&[0u8; 32], &[0u8; 31]), Err(AbiError::Alignment));
    }

    #[test]
    fn test_args_chunks() {
        let (proof, public) = proof_and_public_inputs_args(&[1u8; 64], &[2u8; 32]).unwrap();
        assert_eq!(proof, vec![[1u8; 32], [1u8; 32]]);
        assert_eq!(public, vec![[2u8; 32]]);
    }

    #[test]
    fn test_too_many_elements() {
        let big = vec![0u8; 65536 * ELEMENT_WIDTH];
        assert_eq!(
            abi_encode_proof_and_public_inputs(&big, &[]),
            Err(AbiError::TooManyElements { what: "proof", count: 65536 })
        );
    }
}
