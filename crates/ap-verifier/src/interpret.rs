// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Executes a verifier [`Program`] with AVM opcode semantics.
//!
//! Integers are unbounded like `BigUInt`, but a subtraction that would go
//! negative panics as `b-` does, and every `ec_*` call decodes its operands
//! the way the opcode does. A run ends in a [`Verdict`]; a program that is
//! itself malformed yields a [`SimulationError`] instead.

use std::collections::HashMap;

use ap_types::encoding::{point_from_bytes, point_to_bytes, uint_to_be, PointCheck, SCALAR_WIDTH};
use ap_types::{CurveParameters, SupportedCurve, G1, G2};
use ark_ec::{AffineRepr, CurveGroup};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::error::SimulationError;
use crate::ir::{Cond, Condition, Expr, Program, Stmt};

/// Why a program answered "invalid".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    LengthMismatch,
    NonCanonicalProofScalar,
    NonCanonicalPublicInput { index: usize },
    QuotientIdentity,
    PairingCheck,
    /// The VM would have panicked.
    Fault(VmFault),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmFault {
    InvalidPoint { op: &'static str },
    Underflow { op: &'static str },
    ScalarTooWide,
    OutOfBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Int(BigUint),
    Bytes(Vec<u8>),
    Bool(bool),
}

enum Stop {
    Reject(Rejection),
    Error(SimulationError),
}

impl From<SimulationError> for Stop {
    fn from(e: SimulationError) -> Self {
        Stop::Error(e)
    }
}

impl From<VmFault> for Stop {
    fn from(f: VmFault) -> Self {
        Stop::Reject(Rejection::Fault(f))
    }
}

type Step<T> = Result<T, Stop>;

struct Machine<'a, C: SupportedCurve> {
    params: CurveParameters,
    program: &'a Program,
    proof: &'a [u8],
    public_inputs: &'a [u8],
    env: HashMap<String, Value>,
    _curve: std::marker::PhantomData<C>,
}

fn int(v: Value, op: &'static str) -> Step<BigUint> {
    match v {
        Value::Int(x) => Ok(x),
        _ => Err(SimulationError::TypeMismatch { expected: "integer", op }.into()),
    }
}

fn bytes(v: Value, op: &'static str) -> Step<Vec<u8>> {
    match v {
        Value::Bytes(b) => Ok(b),
        _ => Err(SimulationError::TypeMismatch { expected: "byte-string", op }.into()),
    }
}

impl<C: SupportedCurve> Machine<'_, C> {
    fn r(&self) -> &BigUint {
        &self.params.scalar_modulus
    }

    fn g1(&self, raw: &[u8], op: &'static str) -> Step<G1<C>> {
        point_from_bytes::<C::G1>(raw, self.params.coordinate_width, PointCheck::OnCurve)
            .map_err(|_| VmFault::InvalidPoint { op }.into())
    }

    fn g1_bytes(&self, p: G1<C>) -> Vec<u8> {
        point_to_bytes(&p, self.params.coordinate_width)
    }

    fn eval_int(&self, e: &Expr, op: &'static str) -> Step<BigUint> {
        int(self.eval(e)?, op)
    }

    fn eval_bytes(&self, e: &Expr, op: &'static str) -> Step<Vec<u8>> {
        bytes(self.eval(e)?, op)
    }

    fn eval(&self, e: &Expr) -> Step<Value> {
        let r = self.r();
        Ok(match e {
            Expr::Var(name) => self
                .env
                .get(name)
                .cloned()
                .ok_or_else(|| SimulationError::UnboundVariable(name.clone()))?,
            Expr::Int(x) => Value::Int(x.clone()),
            Expr::Hex(b) => Value::Bytes(b.clone()),
            Expr::Label(s) => Value::Bytes(s.as_bytes().to_vec()),
            Expr::ScalarModulus => Value::Int(r.clone()),
            Expr::ProofSlice(range) => {
                Value::Bytes(self.proof.get(range.clone()).ok_or(VmFault::OutOfBounds)?.to_vec())
            }
            Expr::PublicInputs => Value::Bytes(self.public_inputs.to_vec()),

            Expr::FromBytes(a) => Value::Int(BigUint::from_bytes_be(&self.eval_bytes(a, "from_bytes")?)),
            Expr::Word(a) => {
                let x = self.eval_int(a, "word")?;
                if x.bits() as usize > 8 * SCALAR_WIDTH {
                    return Err(VmFault::ScalarTooWide.into());
                }
                Value::Bytes(uint_to_be(&x, SCALAR_WIDTH))
            }

            Expr::Add(a, b) => Value::Int((self.eval_int(a, "add")? + self.eval_int(b, "add")?) % r),
            Expr::Sub(a, b) => {
                let (a, b) = (self.eval_int(a, "sub")?, self.eval_int(b, "sub")?);
                let lhs = a + r;
                if lhs < b {
                    return Err(VmFault::Underflow { op: "sub" }.into());
                }
                Value::Int((lhs - b) % r)
            }
            Expr::Mul(a, b) => Value::Int((self.eval_int(a, "mul")? * self.eval_int(b, "mul")?) % r),
            Expr::Neg(a) => {
                let a = self.eval_int(a, "neg")?;
                if &a > r {
                    return Err(VmFault::Underflow { op: "neg" }.into());
                }
                Value::Int((r - a) % r)
            }
            Expr::Pow(b, e) => Value::Int(self.eval_int(b, "pow")?.modpow(&self.eval_int(e, "pow")?, r)),
            Expr::Inverse(a) => {
                let exp = r - BigUint::from(2u32);
                Value::Int(self.eval_int(a, "inverse")?.modpow(&exp, r))
            }
            Expr::Reduce(a) => Value::Int(BigUint::from_bytes_be(&self.eval_bytes(a, "reduce")?) % r),

            Expr::Concat(parts) => {
                let mut out = Vec::new();
                for p in parts {
                    out.extend(self.eval_bytes(p, "concat")?);
                }
                Value::Bytes(out)
            }
            Expr::Sha256(a) => Value::Bytes(Sha256::digest(self.eval_bytes(a, "sha256")?).to_vec()),
            Expr::Fs(a) => {
                let mut b = self.eval_bytes(a, "fs")?;
                if let Some(flag) = self.params.infinity_flag {
                    if !b.is_empty() && b.iter().all(|x| *x == 0) {
                        b[0] |= flag;
                    }
                }
                Value::Bytes(b)
            }

            Expr::EcAdd(a, b) => {
                let a = self.g1(&self.eval_bytes(a, "ec_add")?, "ec_add")?;
                let b = self.g1(&self.eval_bytes(b, "ec_add")?, "ec_add")?;
                Value::Bytes(self.g1_bytes((a + b).into_affine()))
            }
            Expr::EcMul(p, s) => {
                let p = self.g1(&self.eval_bytes(p, "ec_scalar_mul")?, "ec_scalar_mul")?;
                let s = self.eval_int(s, "ec_scalar_mul")?;
                if s.bits() as usize > 8 * SCALAR_WIDTH {
                    return Err(VmFault::ScalarTooWide.into());
                }
                Value::Bytes(self.g1_bytes(p.mul_bigint(s.to_u64_digits()).into_affine()))
            }
            Expr::EcNeg(p) => {
                let raw = self.eval_bytes(p, "invert")?;
                let w = self.params.coordinate_width;
                if raw.len() != 2 * w {
                    return Err(VmFault::OutOfBounds.into());
                }
                let y = BigUint::from_bytes_be(&raw[w..]);
                let base = &self.params.base_modulus;
                if &y > base {
                    return Err(VmFault::Underflow { op: "invert" }.into());
                }
                let mut out = raw[..w].to_vec();
                out.extend(uint_to_be(&((base - y) % base), w));
                Value::Bytes(out)
            }
            Expr::PairingCheck(g1s, g2s) => {
                let op = "ec_pairing_check";
                let g1s = self.eval_bytes(g1s, op)?;
                let g2s = self.eval_bytes(g2s, op)?;
                let (w1, w2) = (self.params.g1_width(), self.params.g2_width());
                if g1s.len() % w1 != 0 || g2s.len() % w2 != 0 || g1s.len() / w1 != g2s.len() / w2 {
                    return Err(VmFault::InvalidPoint { op }.into());
                }
                let cw = self.params.coordinate_width;
                let g1 = g1s
                    .chunks(w1)
                    .map(|c| point_from_bytes::<C::G1>(c, cw, PointCheck::Subgroup))
                    .collect::<Result<Vec<G1<C>>, _>>()
                    .map_err(|_| VmFault::InvalidPoint { op })?;
                let g2 = g2s
                    .chunks(w2)
                    .map(|c| point_from_bytes::<C::G2>(c, cw, PointCheck::Subgroup))
                    .collect::<Result<Vec<G2<C>>, _>>()
                    .map_err(|_| VmFault::InvalidPoint { op })?;
                Value::Bool(C::pairing_is_one(&g1, &g2))
            }
        })
    }

    fn holds(&self, c: &Condition) -> Step<bool> {
        let (lhs, rhs) = (self.eval(&c.lhs)?, self.eval(&c.rhs)?);
        Ok(match c.cond {
            Cond::Ge => int(lhs, ">=")? >= int(rhs, ">=")?,
            Cond::Ne => lhs != rhs,
        })
    }

    /// Batched-inversion interpolation, in the same order as the rendered loop.
    fn interpolate(&self, zeta: &str, zn: &str, omega: &str) -> Step<BigUint> {
        let r = self.r();
        let n = self.program.nb_public_inputs;
        if n == 0 {
            return Ok(BigUint::from(0u32));
        }
        let zeta = self.eval_int(&Expr::Var(zeta.to_string()), "interpolate")?;
        let zn = self.eval_int(&Expr::Var(zn.to_string()), "interpolate")?;
        let omega = self.eval_int(&Expr::Var(omega.to_string()), "interpolate")?;

        let mut ws = Vec::with_capacity(n);
        let mut dens = Vec::with_capacity(n);
        let mut prefix = Vec::with_capacity(n);
        let mut w = BigUint::from(1u32);
        let mut acc = BigUint::from(1u32);
        for _ in 0..n {
            let d = (&zeta + r - &w) % r;
            acc = (acc * &d) % r;
            ws.push(w.clone());
            dens.push(d);
            prefix.push(acc.clone());
            w = (w * &omega) % r;
        }

        let mut inv = acc.modpow(&(r - BigUint::from(2u32)), r);
        let mut pi = BigUint::from(0u32);
        for i in (0..n).rev() {
            let inv_i = if i > 0 { (&inv * &prefix[i - 1]) % r } else { inv.clone() };
            inv = (inv * &dens[i]) % r;
            let x = BigUint::from_bytes_be(
                self.public_inputs
                    .get(i * SCALAR_WIDTH..(i + 1) * SCALAR_WIDTH)
                    .ok_or(VmFault::OutOfBounds)?,
            );
            pi = (pi + (((&ws[i] * &zn) % r * inv_i) % r * x) % r) % r;
        }
        Ok(pi)
    }

    fn exec(&mut self, stmt: &Stmt) -> Step<Option<bool>> {
        match stmt {
            Stmt::Section(_) | Stmt::Comment(_) => {}
            Stmt::Let(name, e) => {
                let value = self.eval(e)?;
                self.env.insert(name.clone(), value);
            }
            Stmt::CheckLengths => {
                if self.proof.len() != self.program.proof_len()
                    || self.public_inputs.len() != self.program.public_inputs_len()
                {
                    return Err(Stop::Reject(Rejection::LengthMismatch));
                }
            }
            Stmt::RejectIf { any, reason } => {
                for c in any {
                    if self.holds(c)? {
                        return Err(Stop::Reject(reason.clone()));
                    }
                }
            }
            Stmt::RejectNonCanonicalPublicInputs => {
                for (index, chunk) in self.public_inputs.chunks(SCALAR_WIDTH).enumerate() {
                    if &BigUint::from_bytes_be(chunk) >= self.r() {
                        return Err(Stop::Reject(Rejection::NonCanonicalPublicInput { index }));
                    }
                }
            }
            Stmt::InterpolatePublicInputs { dst, zeta, zn, omega } => {
                let pi = self.interpolate(zeta, zn, omega)?;
                self.env.insert(dst.clone(), Value::Int(pi));
            }
            Stmt::Accept(e) => match self.eval(e)? {
                Value::Bool(ok) => return Ok(Some(ok)),
                _ => return Err(SimulationError::TypeMismatch { expected: "boolean", op: "return" }.into()),
            },
        }
        Ok(None)
    }
}

/// Runs `program` on the given blobs.
pub fn simulate<C: SupportedCurve>(
    program: &Program,
    proof: &[u8],
    public_inputs: &[u8],
) -> Result<Verdict, SimulationError> {
    let mut machine = Machine::<C> {
        params: C::parameters(),
        program,
        proof,
        public_inputs,
        env: HashMap::new(),
        _curve: std::marker::PhantomData,
    };
    for stmt in &program.body {
        match machine.exec(stmt) {
            Ok(None) => {}
            Ok(Some(true)) => return Ok(Verdict::Accepted),
            Ok(Some(false)) => return Ok(Verdict::Rejected(Rejection::PairingCheck)),
            Err(Stop::Reject(reason)) => {
                trace!(?reason, "program rejected");
                return Ok(Verdict::Rejected(reason));
            }
            Err(Stop::Error(e)) => return Err(e),
        }
    }
    Err(SimulationError::TypeMismatch { expected: "return statement", op: "program" })
}
