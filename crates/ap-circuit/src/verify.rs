// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Native verifier. Follows the same steps, in the same order, as the
//! generated AVM program, so a proof accepted here is accepted on chain.

use ap_types::{ProtocolVariant, Proof, SupportedCurve, VerifyingKey, G1};
use ark_ec::short_weierstrass::Projective;
use ark_ec::CurveGroup;
use ark_ff::{AdditiveGroup, Field, Zero};
use tracing::trace;

use crate::transcript::{self, OpeningTranscript};

/// `Σ Lᵢ(ζ)·xᵢ` with `Lᵢ(ζ) = ωⁱ·(ζⁿ − 1) / (n·(ζ − ωⁱ))`.
fn public_input_eval<C: SupportedCurve>(vk: &VerifyingKey<C>, public: &[C::Fr], zeta: C::Fr, vanishing: C::Fr) -> Option<C::Fr> {
    let mut acc = C::Fr::ZERO;
    let mut omega_i = C::Fr::ONE;
    for x in public {
        let lagrange = omega_i * vanishing * vk.size_inv * (zeta - omega_i).inverse()?;
        acc += lagrange * x;
        omega_i *= vk.generator;
    }
    Some(acc)
}

pub fn verify_offchain<C: SupportedCurve>(vk: &VerifyingKey<C>, proof: &Proof<C>, public: &[C::Fr]) -> bool {
    if public.len() != vk.nb_public_variables || proof.variant() != vk.variant {
        return false;
    }
    let ch = transcript::challenges(vk, public, &proof.lro, &proof.z, &proof.h);
    let (alpha, beta, gamma, zeta) = (ch.alpha, ch.beta, ch.gamma, ch.zeta);
    let one = C::Fr::ONE;

    let vanishing = zeta.pow([vk.size]) - one;
    if vanishing.is_zero() {
        return false;
    }
    let Some(pi) = public_input_eval(vk, public, zeta, vanishing) else {
        return false;
    };
    let Some(l1) = (zeta - one).inverse().map(|inv| vanishing * vk.size_inv * inv) else {
        return false;
    };

    let ev = &proof.evaluations;
    let zw = proof.z_at_zeta_omega;
    let alpha_sq_l1 = alpha * alpha * l1;
    let perm = alpha * zw * (ev.l + beta * ev.s1 + gamma) * (ev.r + beta * ev.s2 + gamma) * (ev.o + gamma);

    let lin_at_zeta = match (vk.variant, &proof.claims) {
        (ProtocolVariant::FoldedQuotient, _) => -(perm + pi - alpha_sq_l1),
        (ProtocolVariant::ExplicitQuotient, Some(c)) => {
            if c.linearized + pi + perm - alpha_sq_l1 != c.quotient * vanishing {
                trace!("quotient identity failed");
                return false;
            }
            c.linearized
        }
        (ProtocolVariant::ExplicitQuotient, None) => return false,
    };

    let zeta_n2 = zeta.pow([vk.size + 2]);
    let folded_h: Projective<C::G1> =
        proof.h[1] * zeta_n2 + proof.h[2] * (zeta_n2 * zeta_n2) + proof.h[0];

    let k = vk.coset_shift;
    let beta_zeta = beta * zeta;
    let s3_coeff = alpha * beta * zw * (ev.l + beta * ev.s1 + gamma) * (ev.r + beta * ev.s2 + gamma);
    let z_coeff = alpha_sq_l1
        - alpha * (ev.l + beta_zeta + gamma) * (ev.r + beta_zeta * k + gamma) * (ev.o + beta_zeta * k * k + gamma);

    let mut lin_com: Projective<C::G1> = vk.ql * ev.l
        + vk.qr * ev.r
        + vk.qo * ev.o
        + vk.qm * (ev.l * ev.r)
        + vk.qk
        + vk.s[2] * s3_coeff
        + proof.z * z_coeff;
    if vk.variant == ProtocolVariant::FoldedQuotient {
        lin_com -= folded_h * vanishing;
    }
    let lin_com = lin_com.into_affine();
    let folded_h = folded_h.into_affine();

    let mut commitments: Vec<&G1<C>> = Vec::with_capacity(7);
    let mut claims = Vec::with_capacity(7);
    if let Some(c) = &proof.claims {
        commitments.push(&folded_h);
        claims.push(c.quotient);
    }
    commitments.extend([&lin_com, &proof.lro[0], &proof.lro[1], &proof.lro[2], &vk.s[0], &vk.s[1]]);
    claims.extend([lin_at_zeta, ev.l, ev.r, ev.o, ev.s1, ev.s2]);

    let v = transcript::opening::<C>(&OpeningTranscript {
        zeta,
        folded_h: proof.claims.is_some().then_some(&folded_h),
        linearization: &lin_com,
        lro: &proof.lro,
        s: [&vk.s[0], &vk.s[1]],
        claims: &claims,
        z_at_zeta_omega: zw,
    });

    let mut digest = Projective::<C::G1>::zero();
    let mut claimed = C::Fr::ZERO;
    let mut v_power = one;
    for (point, value) in commitments.iter().zip(&claims) {
        digest += **point * v_power;
        claimed += *value * v_power;
        v_power *= v;
    }
    let digest_affine = digest.into_affine();

    let u = transcript::batch::<C>(
        &digest_affine,
        &proof.opening_at_zeta,
        &proof.z,
        &proof.opening_at_zeta_omega,
        &zeta,
        &v,
    );
    let omega_zeta = vk.generator * zeta;

    digest += proof.z * u;
    claimed += u * zw;
    digest -= vk.kzg.g1 * claimed;
    digest += proof.opening_at_zeta * zeta + proof.opening_at_zeta_omega * (u * omega_zeta);
    let quotient = -(proof.opening_at_zeta_omega * u + proof.opening_at_zeta);

    C::pairing_is_one(&[digest.into_affine(), quotient.into_affine()], &vk.kzg.g2)
}
