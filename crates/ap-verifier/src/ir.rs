// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifier program representation.
//!
//! A [`Program`] is straight-line code over two value kinds: unsigned
//! integers (scalars mod r, unless noted) and byte strings (points, digests,
//! slices of the inputs). The renderer prints it as PuyaPy and the
//! interpreter executes it with AVM opcode semantics.

use std::ops::Range;

use ap_types::{Curve, ProofField, ProofLayout, ProtocolVariant};
use num_bigint::BigUint;

use crate::interpret::Rejection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Var(String),
    /// Integer literal.
    Int(BigUint),
    /// Byte-string literal.
    Hex(Vec<u8>),
    /// Byte-string literal of ASCII text, for transcript labels.
    Label(&'static str),
    /// The scalar field modulus r.
    ScalarModulus,
    /// Bytes of the proof blob.
    ProofSlice(Range<usize>),
    /// The whole public-input blob.
    PublicInputs,

    /// Big-endian bytes to integer, no reduction.
    FromBytes(Box<Expr>),
    /// Integer to its 32-byte big-endian encoding.
    Word(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    /// `base^exp mod r`, by square and multiply.
    Pow(Box<Expr>, Box<Expr>),
    /// `x^(r-2) mod r`.
    Inverse(Box<Expr>),
    /// Bytes to integer mod r.
    Reduce(Box<Expr>),

    Concat(Vec<Expr>),
    Sha256(Box<Expr>),
    /// Sets the top bit of an all-zero point encoding.
    Fs(Box<Expr>),

    EcAdd(Box<Expr>, Box<Expr>),
    /// Point times integer scalar.
    EcMul(Box<Expr>, Box<Expr>),
    /// `(x, (p - y) mod p)` on the raw encoding.
    EcNeg(Box<Expr>),
    /// Product of pairings over concatenated G1 and G2 points equals one.
    PairingCheck(Box<Expr>, Box<Expr>),
}

/// Shorthands for building expressions.
pub mod dsl {
    use super::Expr;
    use num_bigint::BigUint;

    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    pub fn int(v: impl Into<BigUint>) -> Expr {
        Expr::Int(v.into())
    }

    pub fn add(a: Expr, b: Expr) -> Expr {
        Expr::Add(Box::new(a), Box::new(b))
    }

    pub fn sub(a: Expr, b: Expr) -> Expr {
        Expr::Sub(Box::new(a), Box::new(b))
    }

    pub fn mul(a: Expr, b: Expr) -> Expr {
        Expr::Mul(Box::new(a), Box::new(b))
    }

    pub fn neg(a: Expr) -> Expr {
        Expr::Neg(Box::new(a))
    }

    pub fn pow(a: Expr, e: Expr) -> Expr {
        Expr::Pow(Box::new(a), Box::new(e))
    }

    pub fn inverse(a: Expr) -> Expr {
        Expr::Inverse(Box::new(a))
    }

    pub fn reduce(a: Expr) -> Expr {
        Expr::Reduce(Box::new(a))
    }

    pub fn from_bytes(a: Expr) -> Expr {
        Expr::FromBytes(Box::new(a))
    }

    pub fn word(a: Expr) -> Expr {
        Expr::Word(Box::new(a))
    }

    pub fn sha256(parts: Vec<Expr>) -> Expr {
        Expr::Sha256(Box::new(Expr::Concat(parts)))
    }

    pub fn fs(a: Expr) -> Expr {
        Expr::Fs(Box::new(a))
    }

    pub fn ec_add(a: Expr, b: Expr) -> Expr {
        Expr::EcAdd(Box::new(a), Box::new(b))
    }

    pub fn ec_mul(p: Expr, s: Expr) -> Expr {
        Expr::EcMul(Box::new(p), Box::new(s))
    }

    pub fn ec_neg(p: Expr) -> Expr {
        Expr::EcNeg(Box::new(p))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    Ge,
    Ne,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub lhs: Expr,
    pub cond: Cond,
    pub rhs: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Heading comment.
    Section(&'static str),
    Comment(String),
    Let(String, Expr),
    /// Abort unless both blobs have their expected lengths.
    CheckLengths,
    /// Return "invalid" if any condition holds.
    RejectIf { any: Vec<Condition>, reason: Rejection },
    /// Return "invalid" if any public input is not below r.
    RejectNonCanonicalPublicInputs,
    /// `dst = Σ Lᵢ(ζ)·xᵢ` with one batched inversion, where
    /// `Lᵢ(ζ) = ωⁱ·zn / (ζ − ωⁱ)` and `zn = (ζⁿ − 1)/n`.
    InterpolatePublicInputs { dst: String, zeta: String, zn: String, omega: String },
    /// Return the boolean value of the expression.
    Accept(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub curve: Curve,
    pub variant: ProtocolVariant,
    pub nb_public_inputs: usize,
    pub layout: ProofLayout,
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn proof_len(&self) -> usize {
        self.layout.byte_len()
    }

    pub fn public_inputs_len(&self) -> usize {
        self.nb_public_inputs * ap_types::encoding::SCALAR_WIDTH
    }

    /// Byte range of a proof element, for builders.
    pub fn slice(&self, field: ProofField) -> Option<Expr> {
        self.layout.range(field).map(Expr::ProofSlice)
    }
}
