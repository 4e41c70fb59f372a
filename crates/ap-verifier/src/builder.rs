// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Lowers a verifying key to a verifier [`Program`].

use ap_types::encoding::{hash_form, point_to_bytes};
use ap_types::{FieldKind, ProofField, ProofLayout, ProtocolVariant, SupportedCurve, VerifyingKey, G1};
use ark_ff::PrimeField;

use crate::error::GenerateError;
use crate::interpret::Rejection;
use crate::ir::dsl::*;
use crate::ir::{Cond, Condition, Expr, Program, Stmt};

/// Verifying-key points in transcript order, with their literal names.
const VK_POINTS: [&str; 8] = ["VK_S1", "VK_S2", "VK_S3", "VK_QL", "VK_QR", "VK_QM", "VK_QO", "VK_QK"];

struct Builder {
    body: Vec<Stmt>,
    flagged: bool,
}

impl Builder {
    fn section(&mut self, title: &'static str) {
        self.body.push(Stmt::Section(title));
    }

    fn comment(&mut self, text: &str) {
        self.body.push(Stmt::Comment(text.to_string()));
    }

    fn let_(&mut self, name: &str, expr: Expr) -> Expr {
        self.body.push(Stmt::Let(name.to_string(), expr));
        var(name)
    }

    /// A proof point as it enters the transcript.
    fn hashed(&self, point: &str) -> Expr {
        if self.flagged {
            fs(var(point))
        } else {
            var(point)
        }
    }

    /// A verifying-key point as it enters the transcript.
    fn hashed_vk(&self, point: &str) -> Expr {
        if self.flagged {
            var(&format!("{point}_fs"))
        } else {
            var(point)
        }
    }
}

fn scalar_literal<F: PrimeField>(x: F) -> Expr {
    Expr::Int(x.into_bigint().into())
}

pub fn build<C: SupportedCurve>(vk: &VerifyingKey<C>) -> Result<Program, GenerateError> {
    if vk.has_custom_gate_commitments() {
        return Err(GenerateError::CustomGatesUnsupported { count: vk.commitment_constraint_indexes.len() });
    }
    let params = C::parameters();
    let cw = params.coordinate_width;
    let layout = ProofLayout::new(C::CURVE, vk.variant);
    let explicit = vk.variant == ProtocolVariant::ExplicitQuotient;
    let mut b = Builder { body: Vec::new(), flagged: params.infinity_flag.is_some() };

    // Verifying key.
    b.section("Verifying key");
    b.let_("VK_DOMAIN_SIZE", int(vk.size));
    b.let_("VK_INV_DOMAIN_SIZE", scalar_literal(vk.size_inv));
    b.let_("VK_OMEGA", scalar_literal(vk.generator));
    b.let_("VK_COSET_SHIFT", scalar_literal(vk.coset_shift));
    let vk_points: [&G1<C>; 8] = vk.transcript_points();
    for (name, point) in VK_POINTS.iter().zip(vk_points) {
        b.let_(name, Expr::Hex(point_to_bytes(point, cw)));
    }
    if let Some(flag) = params.infinity_flag {
        b.comment("Transcript encodings: the identity is hashed with its top bit set");
        for (name, point) in VK_POINTS.iter().zip(vk_points) {
            b.let_(&format!("{name}_fs"), Expr::Hex(hash_form(&point_to_bytes(point, cw), Some(flag))));
        }
    }
    b.let_("G1_SRS", Expr::Hex(point_to_bytes(&vk.kzg.g1, cw)));
    let mut g2 = point_to_bytes(&vk.kzg.g2[0], cw);
    g2.extend(point_to_bytes(&vk.kzg.g2[1], cw));
    b.let_("G2_SRS", Expr::Hex(g2));

    // Proof.
    b.section("Proof");
    b.body.push(Stmt::CheckLengths);
    for (field, range) in layout.entries() {
        let slice = Expr::ProofSlice(range.clone());
        match field.kind() {
            FieldKind::Point => b.let_(field.ident(), slice),
            FieldKind::Scalar => b.let_(field.ident(), from_bytes(slice)),
        };
    }

    b.section("Range checks");
    b.body.push(Stmt::RejectIf {
        any: layout
            .scalar_fields()
            .map(|f| Condition { lhs: var(f.ident()), cond: Cond::Ge, rhs: Expr::ScalarModulus })
            .collect(),
        reason: Rejection::NonCanonicalProofScalar,
    });
    b.body.push(Stmt::RejectNonCanonicalPublicInputs);

    use ProofField::*;
    let l = var(LAtZeta.ident());
    let r = var(RAtZeta.ident());
    let o = var(OAtZeta.ident());
    let s1 = var(S1AtZeta.ident());
    let s2 = var(S2AtZeta.ident());
    let zw = var(ZAtZetaOmega.ident());

    // Fiat-Shamir.
    b.section("Fiat-Shamir challenges");
    let mut gamma_parts = vec![Expr::Label("gamma")];
    gamma_parts.extend(VK_POINTS.iter().map(|p| b.hashed_vk(p)));
    gamma_parts.push(Expr::PublicInputs);
    gamma_parts.extend([b.hashed(L.ident()), b.hashed(R.ident()), b.hashed(O.ident())]);
    let gamma_digest = b.let_("gamma_digest", sha256(gamma_parts));
    let beta_digest = b.let_("beta_digest", sha256(vec![Expr::Label("beta"), gamma_digest.clone()]));
    let alpha_digest = b.let_("alpha_digest", sha256(vec![Expr::Label("alpha"), beta_digest.clone(), b.hashed(Z.ident())]));
    let zeta_digest = b.let_(
        "zeta_digest",
        sha256(vec![
            Expr::Label("zeta"),
            alpha_digest.clone(),
            b.hashed(H0.ident()),
            b.hashed(H1.ident()),
            b.hashed(H2.ident()),
        ]),
    );
    let gamma = b.let_("gamma", reduce(gamma_digest));
    let beta = b.let_("beta", reduce(beta_digest));
    let alpha = b.let_("alpha", reduce(alpha_digest));
    let zeta = b.let_("zeta", reduce(zeta_digest));

    // Vanishing polynomial and public inputs.
    b.section("Vanishing polynomial and public inputs");
    let zz = b.let_("Zz", sub(pow(zeta.clone(), var("VK_DOMAIN_SIZE")), int(1u32)));
    let zn = b.let_("zn", mul(zz.clone(), var("VK_INV_DOMAIN_SIZE")));
    b.body.push(Stmt::InterpolatePublicInputs {
        dst: "PI".to_string(),
        zeta: "zeta".to_string(),
        zn: "zn".to_string(),
        omega: "VK_OMEGA".to_string(),
    });
    let pi = var("PI");
    b.comment("alpha^2 * L_1(zeta) = alpha^2 * (zeta^n - 1) / (n * (zeta - 1))");
    let alpha2_lagrange = b.let_(
        "alpha2_lagrange",
        mul(mul(mul(inverse(sub(zeta.clone(), int(1u32))), zn), alpha.clone()), alpha.clone()),
    );

    // Quotient identity.
    b.section("Quotient identity");
    let s1_term = add(add(mul(s1.clone(), beta.clone()), l.clone()), gamma.clone());
    let s2_term = add(add(mul(s2.clone(), beta.clone()), r.clone()), gamma.clone());
    let perm = b.let_(
        "perm",
        mul(mul(mul(mul(s1_term.clone(), s2_term.clone()), add(o.clone(), gamma.clone())), alpha.clone()), zw.clone()),
    );
    let lin_at_zeta = if explicit {
        let lhs = sub(add(add(var(LinearizedAtZeta.ident()), pi), perm), alpha2_lagrange.clone());
        let rhs = mul(var(QuotientAtZeta.ident()), zz.clone());
        b.body.push(Stmt::RejectIf {
            any: vec![Condition { lhs, cond: Cond::Ne, rhs }],
            reason: Rejection::QuotientIdentity,
        });
        var(LinearizedAtZeta.ident())
    } else {
        b.let_("lin_at_zeta", neg(sub(add(perm, pi), alpha2_lagrange.clone())))
    };

    // Folded quotient commitment.
    b.section("Folded quotient commitment");
    let zeta_n2 = b.let_("zeta_n2", pow(zeta.clone(), add(var("VK_DOMAIN_SIZE"), int(2u32))));
    let mut folded_h = b.let_(
        "folded_h",
        ec_add(
            ec_mul(ec_add(ec_mul(var(H2.ident()), zeta_n2.clone()), var(H1.ident())), zeta_n2),
            var(H0.ident()),
        ),
    );
    if !explicit {
        folded_h = b.let_("folded_h", ec_neg(ec_mul(folded_h, zz)));
    }

    // Linearization commitment.
    b.section("Linearization commitment");
    let s3_coeff = b.let_("s3_coeff", mul(mul(mul(zw.clone(), beta.clone()), s1_term), mul(s2_term, alpha.clone())));
    let beta_zeta = b.let_("beta_zeta", mul(beta, zeta.clone()));
    let k = var("VK_COSET_SHIFT");
    let z_coeff = b.let_(
        "z_coeff",
        add(
            neg(mul(
                mul(
                    mul(
                        add(add(beta_zeta.clone(), l.clone()), gamma.clone()),
                        add(add(mul(beta_zeta.clone(), k.clone()), r.clone()), gamma.clone()),
                    ),
                    add(add(mul(beta_zeta, mul(k.clone(), k)), o.clone()), gamma),
                ),
                alpha,
            )),
            alpha2_lagrange,
        ),
    );
    let lin_com = b.let_("lin_com", ec_mul(var("VK_QL"), l.clone()));
    let terms = [
        ec_mul(var("VK_QR"), r.clone()),
        ec_mul(var("VK_QO"), o.clone()),
        ec_mul(var("VK_QM"), mul(l.clone(), r.clone())),
        var("VK_QK"),
        ec_mul(var("VK_S3"), s3_coeff),
        ec_mul(var(Z.ident()), z_coeff),
    ];
    let mut lin_com = lin_com;
    for term in terms {
        lin_com = b.let_("lin_com", ec_add(lin_com, term));
    }
    if !explicit {
        lin_com = b.let_("lin_com", ec_add(lin_com, folded_h.clone()));
    }

    // Opening fold.
    b.section("Batched opening");
    let mut claims: Vec<(Expr, Expr)> = Vec::new();
    if explicit {
        claims.push((folded_h.clone(), var(QuotientAtZeta.ident())));
    }
    claims.push((lin_com.clone(), lin_at_zeta));
    claims.extend([
        (var(L.ident()), l),
        (var(R.ident()), r),
        (var(O.ident()), o),
        (var("VK_S1"), s1),
        (var("VK_S2"), s2),
    ]);

    let mut v_parts = vec![Expr::Label("gamma"), word(zeta.clone())];
    if explicit {
        v_parts.push(folded_h);
    }
    v_parts.push(lin_com);
    v_parts.extend([b.hashed(L.ident()), b.hashed(R.ident()), b.hashed(O.ident())]);
    v_parts.extend([b.hashed_vk("VK_S1"), b.hashed_vk("VK_S2")]);
    v_parts.extend(claims.iter().map(|(_, value)| word(value.clone())));
    v_parts.push(word(zw.clone()));
    let v = b.let_("v", reduce(sha256(v_parts)));

    // The fold always starts with at least the linearization claim.
    let (first_point, first_value) = claims.remove(0);
    let mut digest = b.let_("digest", first_point);
    let mut claimed = b.let_("claims", first_value);
    let mut v_acc = b.let_("v_acc", v.clone());
    for (i, (point, value)) in claims.into_iter().enumerate() {
        if i > 0 {
            v_acc = b.let_("v_acc", mul(v_acc, v.clone()));
        }
        digest = b.let_("digest", ec_add(digest, ec_mul(point, v_acc.clone())));
        claimed = b.let_("claims", add(claimed, mul(value, v_acc.clone())));
    }

    let u = b.let_(
        "u",
        reduce(sha256(vec![
            digest.clone(),
            var(OpeningAtZeta.ident()),
            b.hashed(Z.ident()),
            var(OpeningAtZetaOmega.ident()),
            word(zeta.clone()),
            word(v),
        ])),
    );

    // Pairing.
    b.section("Pairing check");
    let digest = b.let_("digest", ec_add(digest, ec_mul(var(Z.ident()), u.clone())));
    let claimed = b.let_("claims", add(claimed, mul(zw, u.clone())));
    let digest = b.let_("digest", ec_add(digest, ec_neg(ec_mul(var("G1_SRS"), claimed))));
    let zeta_omega = b.let_("zeta_omega", mul(zeta.clone(), var("VK_OMEGA")));
    let digest = b.let_(
        "digest",
        ec_add(
            digest,
            ec_add(
                ec_mul(var(OpeningAtZeta.ident()), zeta),
                ec_mul(var(OpeningAtZetaOmega.ident()), mul(u.clone(), zeta_omega)),
            ),
        ),
    );
    let quotient = b.let_(
        "quotient",
        ec_neg(ec_add(var(OpeningAtZeta.ident()), ec_mul(var(OpeningAtZetaOmega.ident()), u))),
    );
    b.body.push(Stmt::Accept(Expr::PairingCheck(
        Box::new(Expr::Concat(vec![digest, quotient])),
        Box::new(var("G2_SRS")),
    )));

    Ok(Program {
        curve: C::CURVE,
        variant: vk.variant,
        nb_public_inputs: vk.nb_public_variables,
        layout,
        body: b.body,
    })
}
