// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Polynomial helpers and KZG commitments.

use ap_types::{SupportedCurve, G1};
use ark_ec::short_weierstrass::Projective;
use ark_ec::CurveGroup;
use ark_ff::{Field, Zero};
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;

use crate::error::SrsTooSmall;

pub type Poly<F> = DensePolynomial<F>;

pub fn poly<F: Field>(coeffs: Vec<F>) -> Poly<F> {
    Poly::from_coefficients_vec(coeffs)
}

pub fn constant<F: Field>(c: F) -> Poly<F> {
    poly(vec![c])
}

pub fn scale<F: Field>(p: &Poly<F>, s: F) -> Poly<F> {
    poly(p.coeffs.iter().map(|c| *c * s).collect())
}

/// `p(ω·X)`
pub fn shift<F: Field>(p: &Poly<F>, omega: F) -> Poly<F> {
    let mut power = F::one();
    poly(
        p.coeffs
            .iter()
            .map(|c| {
                let v = *c * power;
                power *= omega;
                v
            })
            .collect(),
    )
}

/// `Σ sᵢ·pᵢ`
pub fn combine<F: Field>(terms: &[(F, &Poly<F>)]) -> Poly<F> {
    let len = terms.iter().map(|(_, p)| p.coeffs.len()).max().unwrap_or(0);
    let mut out = vec![F::zero(); len];
    for (s, p) in terms {
        for (o, c) in out.iter_mut().zip(&p.coeffs) {
            *o += *c * s;
        }
    }
    poly(out)
}

/// `p + b(X)·(Xⁿ − 1)` where `b` has coefficients `blinding`.
pub fn blind<F: Field>(p: Poly<F>, blinding: &[F], n: usize) -> Poly<F> {
    let mut coeffs = p.coeffs;
    coeffs.resize(coeffs.len().max(n + blinding.len()), F::zero());
    for (i, b) in blinding.iter().enumerate() {
        coeffs[i] -= b;
        coeffs[n + i] += b;
    }
    poly(coeffs)
}

/// Exact division by `Xⁿ − 1`, or `None` if it leaves a remainder.
pub fn divide_by_vanishing<F: Field>(p: &Poly<F>, n: usize) -> Option<Poly<F>> {
    let mut rem = p.coeffs.clone();
    if rem.len() <= n {
        return rem.iter().all(|c| c.is_zero()).then(Poly::zero);
    }
    let mut quotient = vec![F::zero(); rem.len() - n];
    for i in (n..rem.len()).rev() {
        let c = rem[i];
        quotient[i - n] = c;
        rem[i - n] += c;
    }
    rem[..n].iter().all(|c| c.is_zero()).then(|| poly(quotient))
}

/// `(p(X) − p(a)) / (X − a)` by synthetic division.
pub fn divide_by_linear<F: Field>(p: &Poly<F>, a: F) -> Poly<F> {
    let coeffs = &p.coeffs;
    if coeffs.len() < 2 {
        return Poly::zero();
    }
    let mut quotient = vec![F::zero(); coeffs.len() - 1];
    let mut acc = F::zero();
    for i in (1..coeffs.len()).rev() {
        acc = acc * a + coeffs[i];
        quotient[i - 1] = acc;
    }
    poly(quotient)
}

/// KZG commitment `Σ cᵢ·[τⁱ]₁`.
pub fn commit<C: SupportedCurve>(srs: &[G1<C>], p: &Poly<C::Fr>) -> Result<G1<C>, SrsTooSmall> {
    if p.coeffs.len() > srs.len() {
        return Err(SrsTooSmall { needed: p.coeffs.len(), available: srs.len() });
    }
    let sum = srs
        .iter()
        .zip(&p.coeffs)
        .fold(Projective::<C::G1>::zero(), |acc, (g, c)| acc + *g * c);
    Ok(sum.into_affine())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_poly::Polynomial;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use ark_std::UniformRand;

    fn random_poly(len: usize, rng: &mut StdRng) -> Poly<Fr> {
        poly((0..len).map(|_| Fr::rand(rng)).collect())
    }

    #[test]
    fn test_divide_by_linear() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = random_poly(9, &mut rng);
        let a = Fr::rand(&mut rng);
        let q = divide_by_linear(&p, a);
        let x = Fr::rand(&mut rng);
        assert_eq!(q.evaluate(&x) * (x - a), p.evaluate(&x) - p.evaluate(&a));
    }

    #[test]
    fn test_divide_by_vanishing() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 8;
        let q = random_poly(5, &mut rng);
        let blinded = blind(Poly::zero(), &q.coeffs, n);
        assert_eq!(divide_by_vanishing(&blinded, n), Some(q));

        let off = &blinded + &constant(Fr::from(1u64));
        assert_eq!(divide_by_vanishing(&off, n), None);
    }

    #[test]
    fn test_shift_and_combine() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = random_poly(6, &mut rng);
        let r = random_poly(3, &mut rng);
        let (w, x, s) = (Fr::rand(&mut rng), Fr::rand(&mut rng), Fr::rand(&mut rng));
        assert_eq!(shift(&p, w).evaluate(&x), p.evaluate(&(w * x)));
        assert_eq!(
            combine(&[(s, &p), (Fr::from(1u64), &r)]).evaluate(&x),
            s * p.evaluate(&x) + r.evaluate(&x)
        );
    }
}
