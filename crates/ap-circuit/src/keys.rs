// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ap_setup::{Srs, SRS_PADDING};
use ap_types::{ProtocolVariant, SupportedCurve, VerifyingKey, G1};
use ark_ff::{AdditiveGroup, FftField, Field};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use tracing::debug;

use crate::arith::{Gate, SparseCircuit};
use crate::error::CompileError;
use crate::poly::{commit, poly, Poly};

/// Domain size for a circuit with `rows` gates (public rows included).
pub fn domain_size(rows: usize) -> usize {
    rows.next_power_of_two().max(2)
}

/// SRS size needed for a circuit with `rows` gates.
pub fn srs_size(rows: usize) -> usize {
    domain_size(rows) + SRS_PADDING
}

#[derive(Debug, Clone)]
pub struct Selectors<F: Field> {
    pub ql: Poly<F>,
    pub qr: Poly<F>,
    pub qm: Poly<F>,
    pub qo: Poly<F>,
    pub qk: Poly<F>,
}

/// Everything the prover needs besides the assignment.
#[derive(Debug, Clone)]
pub struct ProvingKey<C: SupportedCurve> {
    pub domain: Radix2EvaluationDomain<C::Fr>,
    pub circuit: SparseCircuit<C::Fr>,
    pub selectors: Selectors<C::Fr>,
    pub sigma: [Poly<C::Fr>; 3],
    /// `σ` on the domain, as wire ids.
    pub sigma_evals: [Vec<C::Fr>; 3],
    pub srs: Vec<G1<C>>,
}

/// Builds selector and permutation polynomials and commits to them.
pub fn setup<C: SupportedCurve>(
    circuit: SparseCircuit<C::Fr>,
    srs: &Srs<C>,
    variant: ProtocolVariant,
) -> Result<(ProvingKey<C>, VerifyingKey<C>), CompileError> {
    let n = domain_size(circuit.gates.len());
    let domain = Radix2EvaluationDomain::<C::Fr>::new(n).ok_or(CompileError::Domain(n))?;
    let omega = domain.group_gen();
    let k = C::Fr::GENERATOR;

    let column = |select: fn(&Gate<C::Fr>) -> C::Fr| {
        let mut evals: Vec<C::Fr> = circuit.gates.iter().map(select).collect();
        evals.resize(n, C::Fr::ZERO);
        poly(domain.ifft(&evals))
    };
    let selectors = Selectors {
        ql: column(|g| g.ql),
        qr: column(|g| g.qr),
        qm: column(|g| g.qm),
        qo: column(|g| g.qo),
        qk: column(|g| g.qk),
    };

    // Wire id of position col·n + row is k^col·ω^row.
    let ids: Vec<C::Fr> = {
        let roots: Vec<C::Fr> = domain.elements().collect();
        let shifts = [C::Fr::ONE, k, k * k];
        shifts.iter().flat_map(|s| roots.iter().map(move |w| *s * w)).collect()
    };
    let permutation = circuit.permutation(n);
    let sigma_evals: [Vec<C::Fr>; 3] =
        std::array::from_fn(|col| (0..n).map(|row| ids[permutation[col * n + row]]).collect());
    let sigma = sigma_evals.each_ref().map(|evals| poly(domain.ifft(evals)));

    let srs_points = &srs.g1_powers;
    let vk = VerifyingKey {
        size: n as u64,
        size_inv: domain.size_inv(),
        generator: omega,
        nb_public_variables: circuit.nb_public,
        coset_shift: k,
        s: [
            commit::<C>(srs_points, &sigma[0])?,
            commit::<C>(srs_points, &sigma[1])?,
            commit::<C>(srs_points, &sigma[2])?,
        ],
        ql: commit::<C>(srs_points, &selectors.ql)?,
        qr: commit::<C>(srs_points, &selectors.qr)?,
        qm: commit::<C>(srs_points, &selectors.qm)?,
        qo: commit::<C>(srs_points, &selectors.qo)?,
        qk: commit::<C>(srs_points, &selectors.qk)?,
        kzg: srs.kzg.clone(),
        commitment_constraint_indexes: Vec::new(),
        variant,
    };
    debug!(curve = %C::CURVE, n, gates = circuit.gates.len(), srs = srs.len(), %variant, "plonk setup");

    let pk = ProvingKey { domain, circuit, selectors, sigma, sigma_evals, srs: srs.g1_powers.clone() };
    Ok((pk, vk))
}
