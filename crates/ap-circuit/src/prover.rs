// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! PLONK prover over KZG commitments.
//!
//! Gate identity, with `PI(X)` interpolating the public inputs on the first
//! rows:
//!
//! ```text
//! qL·l + qR·r + qM·l·r + qO·o + qK + PI
//!   + α·[z(ωX)·Π(w + β·σ + γ) − z(X)·Π(w + β·id + γ)]
//!   + α²·(z − 1)·L₁  =  t·(Xⁿ − 1)
//! ```
//!
//! `t` is split in three chunks of `n + 2` coefficients.

use ap_types::{
    ProtocolVariant, Proof, QuotientClaims, SupportedCurve, VerifyingKey, WireEvaluations,
};
use ark_ff::{batch_inversion, AdditiveGroup, Field, Zero};
use ark_poly::{EvaluationDomain, Polynomial};
use ark_std::rand::RngCore;
use ark_std::UniformRand;
use tracing::debug;

use crate::error::ProveError;
use crate::keys::ProvingKey;
use crate::poly::{
    blind, combine, commit, constant, divide_by_linear, divide_by_vanishing, poly, scale, shift,
    Poly,
};
use crate::transcript::{self, OpeningTranscript};

/// Proves that `values` (every circuit variable, as returned by
/// [`SparseCircuit::solve`](crate::arith::SparseCircuit::solve)) satisfies
/// the circuit.
pub fn prove<C: SupportedCurve, R: RngCore + ?Sized>(
    pk: &ProvingKey<C>,
    vk: &VerifyingKey<C>,
    values: &[C::Fr],
    rng: &mut R,
) -> Result<Proof<C>, ProveError> {
    let domain = &pk.domain;
    let n = domain.size();
    let one = C::Fr::ONE;
    let public = &values[1..=pk.circuit.nb_public];
    let mut random = || C::Fr::rand(rng);

    // Round 1: wires.
    let wire_evals = pk.circuit.wire_values(values, n);
    let [l, r, o] = wire_evals
        .each_ref()
        .map(|evals| blind(poly(domain.ifft(evals)), &[random(), random()], n));
    let lro = [commit::<C>(&pk.srs, &l)?, commit::<C>(&pk.srs, &r)?, commit::<C>(&pk.srs, &o)?];

    let gamma_digest = transcript::gamma(vk, public, &lro);
    let beta_digest = transcript::beta(&gamma_digest);
    let gamma: C::Fr = transcript::reduce(&gamma_digest);
    let beta: C::Fr = transcript::reduce(&beta_digest);

    // Round 2: grand product.
    let k = vk.coset_shift;
    let k2 = k * k;
    let mut numerators = Vec::with_capacity(n);
    let mut denominators = Vec::with_capacity(n);
    for (row, w) in domain.elements().enumerate() {
        let [a, b, c] = [wire_evals[0][row], wire_evals[1][row], wire_evals[2][row]];
        let s = [pk.sigma_evals[0][row], pk.sigma_evals[1][row], pk.sigma_evals[2][row]];
        numerators.push((a + beta * w + gamma) * (b + beta * k * w + gamma) * (c + beta * k2 * w + gamma));
        denominators.push((a + beta * s[0] + gamma) * (b + beta * s[1] + gamma) * (c + beta * s[2] + gamma));
    }
    batch_inversion(&mut denominators);
    let mut z_evals = Vec::with_capacity(n);
    let mut acc = one;
    for (num, den_inv) in numerators.iter().zip(&denominators) {
        z_evals.push(acc);
        acc *= *num * den_inv;
    }
    if acc != one {
        return Err(ProveError::CopyConstraint);
    }
    let z = blind(poly(domain.ifft(&z_evals)), &[random(), random(), random()], n);
    let z_com = commit::<C>(&pk.srs, &z)?;

    let alpha_digest = transcript::alpha::<C>(&beta_digest, &z_com);
    let alpha: C::Fr = transcript::reduce(&alpha_digest);

    // Round 3: quotient.
    let mut pi_evals = vec![C::Fr::ZERO; n];
    pi_evals[..public.len()].copy_from_slice(public);
    let pi = poly(domain.ifft(&pi_evals));
    let mut l1_evals = vec![C::Fr::ZERO; n];
    l1_evals[0] = one;
    let l1 = poly(domain.ifft(&l1_evals));

    let sel = &pk.selectors;
    let gate = &(&(&(&(&sel.ql * &l) + &(&sel.qr * &r)) + &(&sel.qm * &(&l * &r))) + &(&sel.qo * &o))
        + &(&sel.qk + &pi);

    let id = |k: C::Fr| poly(vec![gamma, beta * k]);
    let perm_den = &(&(&z * &(&l + &id(one))) * &(&r + &id(k))) * &(&o + &id(k2));
    let with_sigma = |w: &Poly<C::Fr>, s: &Poly<C::Fr>| &(w + &scale(s, beta)) + &constant(gamma);
    let perm_num = &(&(&shift(&z, vk.generator) * &with_sigma(&l, &pk.sigma[0]))
        * &with_sigma(&r, &pk.sigma[1]))
        * &with_sigma(&o, &pk.sigma[2]);
    let boundary = &(&z - &constant(one)) * &l1;

    let numerator = combine(&[
        (one, &gate),
        (alpha, &(&perm_num - &perm_den)),
        (alpha * alpha, &boundary),
    ]);
    let t = divide_by_vanishing(&numerator, n).ok_or(ProveError::QuotientRemainder)?;

    let chunk = n + 2;
    let mut t_coeffs = t.coeffs;
    if t_coeffs.len() > 3 * chunk {
        return Err(ProveError::QuotientRemainder);
    }
    t_coeffs.resize(3 * chunk, C::Fr::ZERO);
    let h: [Poly<C::Fr>; 3] = std::array::from_fn(|i| poly(t_coeffs[i * chunk..(i + 1) * chunk].to_vec()));
    let h_com = [commit::<C>(&pk.srs, &h[0])?, commit::<C>(&pk.srs, &h[1])?, commit::<C>(&pk.srs, &h[2])?];

    let zeta_digest = transcript::zeta::<C>(&alpha_digest, &h_com);
    let zeta: C::Fr = transcript::reduce(&zeta_digest);

    // Round 4: evaluations.
    let omega_zeta = vk.generator * zeta;
    let evaluations = WireEvaluations {
        l: l.evaluate(&zeta),
        r: r.evaluate(&zeta),
        o: o.evaluate(&zeta),
        s1: pk.sigma[0].evaluate(&zeta),
        s2: pk.sigma[1].evaluate(&zeta),
    };
    let z_at_zeta_omega = z.evaluate(&omega_zeta);

    // Round 5: linearization and openings.
    let ev = &evaluations;
    let vanishing = zeta.pow([n as u64]) - one;
    if vanishing.is_zero() {
        return Err(ProveError::DegenerateChallenge);
    }
    let l1_at_zeta = vanishing
        * vk.size_inv
        * (zeta - one).inverse().ok_or(ProveError::DegenerateChallenge)?;
    let s3_coeff = alpha * beta * z_at_zeta_omega * (ev.l + beta * ev.s1 + gamma) * (ev.r + beta * ev.s2 + gamma);
    let beta_zeta = beta * zeta;
    let z_coeff = alpha * alpha * l1_at_zeta
        - alpha * (ev.l + beta_zeta + gamma) * (ev.r + beta_zeta * k + gamma) * (ev.o + beta_zeta * k2 + gamma);

    let zeta_n2 = zeta.pow([(n + 2) as u64]);
    let folded_t = combine(&[(one, &h[0]), (zeta_n2, &h[1]), (zeta_n2 * zeta_n2, &h[2])]);

    let mut linear_terms = vec![
        (ev.l, &sel.ql),
        (ev.r, &sel.qr),
        (ev.l * ev.r, &sel.qm),
        (ev.o, &sel.qo),
        (one, &sel.qk),
        (s3_coeff, &pk.sigma[2]),
        (z_coeff, &z),
    ];
    if vk.variant == ProtocolVariant::FoldedQuotient {
        linear_terms.push((-vanishing, &folded_t));
    }
    let linearization = combine(&linear_terms);
    let lin_com = commit::<C>(&pk.srs, &linearization)?;
    let lin_at_zeta = linearization.evaluate(&zeta);

    let (claims, folded_h_com) = match vk.variant {
        ProtocolVariant::FoldedQuotient => (None, None),
        ProtocolVariant::ExplicitQuotient => (
            Some(QuotientClaims { quotient: folded_t.evaluate(&zeta), linearized: lin_at_zeta }),
            Some(commit::<C>(&pk.srs, &folded_t)?),
        ),
    };

    let mut polys = Vec::with_capacity(7);
    let mut values_at_zeta = Vec::with_capacity(7);
    if let Some(c) = &claims {
        polys.push(&folded_t);
        values_at_zeta.push(c.quotient);
    }
    polys.extend([&linearization, &l, &r, &o, &pk.sigma[0], &pk.sigma[1]]);
    values_at_zeta.extend([lin_at_zeta, ev.l, ev.r, ev.o, ev.s1, ev.s2]);

    let v = transcript::opening::<C>(&OpeningTranscript {
        zeta,
        folded_h: folded_h_com.as_ref(),
        linearization: &lin_com,
        lro: &lro,
        s: [&vk.s[0], &vk.s[1]],
        claims: &values_at_zeta,
        z_at_zeta_omega,
    });

    let mut v_power = one;
    let mut terms = Vec::with_capacity(polys.len());
    for p in &polys {
        terms.push((v_power, *p));
        v_power *= v;
    }
    let folded = combine(&terms);
    let opening_at_zeta = commit::<C>(&pk.srs, &divide_by_linear(&folded, zeta))?;
    let opening_at_zeta_omega = commit::<C>(&pk.srs, &divide_by_linear(&z, omega_zeta))?;

    debug!(curve = %C::CURVE, n, variant = %vk.variant, "proof generated");
    Ok(Proof {
        lro,
        h: h_com,
        evaluations,
        z: z_com,
        z_at_zeta_omega,
        claims,
        opening_at_zeta,
        opening_at_zeta_omega,
    })
}
