// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Full circuit assignments and their binary format.
//!
//! `[nb_public: u32 BE][nb_secret: u32 BE][total: u32 BE]` followed by
//! `total` 32-byte big-endian field elements, public values first.

use ark_ff::PrimeField;

use crate::encoding::{scalar_from_bytes, scalar_to_bytes, SCALAR_WIDTH};
use crate::error::{TypesError, TypesResult};

pub const WITNESS_HEADER_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness<F> {
    public: Vec<F>,
    secret: Vec<F>,
}

impl<F: PrimeField> Witness<F> {
    pub fn new(public: Vec<F>, secret: Vec<F>) -> Self {
        Self { public, secret }
    }

    pub fn public_values(&self) -> &[F] {
        &self.public
    }

    pub fn secret_values(&self) -> &[F] {
        &self.secret
    }

    /// Projection onto the public values.
    pub fn public(&self) -> Witness<F> {
        Self { public: self.public.clone(), secret: Vec::new() }
    }

    pub fn to_binary(&self) -> TypesResult<Vec<u8>> {
        let total = self.public.len() + self.secret.len();
        let count = |n: usize| u32::try_from(n).map_err(|_| TypesError::WitnessTooLarge(total));
        let mut out = Vec::with_capacity(WITNESS_HEADER_LEN + total * SCALAR_WIDTH);
        out.extend_from_slice(&count(self.public.len())?.to_be_bytes());
        out.extend_from_slice(&count(self.secret.len())?.to_be_bytes());
        out.extend_from_slice(&count(total)?.to_be_bytes());
        for x in self.public.iter().chain(&self.secret) {
            out.extend(scalar_to_bytes(x));
        }
        Ok(out)
    }

    pub fn from_binary(bytes: &[u8]) -> TypesResult<Self> {
        if bytes.len() < WITNESS_HEADER_LEN {
            return Err(TypesError::Length { expected: WITNESS_HEADER_LEN, actual: bytes.len() });
        }
        let read = |i: usize| {
            let mut word = [0u8; 4];
            word.copy_from_slice(&bytes[4 * i..4 * i + 4]);
            u32::from_be_bytes(word) as usize
        };
        let (nb_public, nb_secret, total) = (read(0), read(1), read(2));
        let body = &bytes[WITNESS_HEADER_LEN..];
        let actual = body.len() / SCALAR_WIDTH;
        if nb_public + nb_secret != total || body.len() % SCALAR_WIDTH != 0 || actual != total {
            return Err(TypesError::WitnessCount { declared: total, actual });
        }

        let mut values = body
            .chunks(SCALAR_WIDTH)
            .map(scalar_from_bytes::<F>)
            .collect::<TypesResult<Vec<F>>>()?;
        let secret = values.split_off(nb_public);
        Ok(Self { public: values, secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;

    #[test]
    fn test_binary_header_and_order() {
        let w = Witness::new(vec![Fr::from(3u64), Fr::from(4u64)], vec![Fr::from(5u64)]);
        let bytes = w.to_binary().unwrap();
        assert_eq!(&bytes[..12], &[0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 3]);
        assert_eq!(bytes.len(), 12 + 3 * 32);
        assert_eq!(bytes[12 + 31], 3);
        assert_eq!(bytes[12 + 63], 4);
        assert_eq!(bytes[12 + 95], 5);
        assert_eq!(Witness::<Fr>::from_binary(&bytes).unwrap(), w);
    }

    #[test]
    fn test_public_projection_drops_secret() {
        let w = Witness::new(vec![Fr::from(9u64)], vec![Fr::from(1u64), Fr::from(2u64)]);
        let p = w.public();
        assert_eq!(p.public_values(), &[Fr::from(9u64)]);
        assert!(p.secret_values().is_empty());
        assert_eq!(&p.to_binary().unwrap()[..12], &[0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_from_binary_rejects_count_mismatch() {
        let w = Witness::new(vec![Fr::from(1u64)], vec![]);
        let mut bytes = w.to_binary().unwrap();
        bytes[11] = 2;
        assert!(matches!(
            Witness::<Fr>::from_binary(&bytes),
            Err(TypesError::WitnessCount { declared: 2, actual: 1 })
        ));
    }
}
