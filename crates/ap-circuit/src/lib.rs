// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Circuit compiler facade.
//!
//! [`compile`] lowers an arkworks R1CS circuit to PLONK gates, fetches an SRS
//! of `next_power_of_two(gates) + 5` points and builds the proving and
//! verifying keys. [`CompiledCircuit::prove`] synthesizes a witness, proves,
//! and re-checks the proof with the native verifier before returning it.

pub mod arith;
pub mod error;
pub mod keys;
pub mod poly;
pub mod prover;
pub mod transcript;
pub mod verify;

use ap_setup::{trusted_srs, SetupId, SetupStore, Srs};
use ap_types::{Curve, Proof, ProtocolVariant, SupportedCurve, VerifyingKey, Witness};
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, OptimizationGoal, SynthesisMode,
};
use ark_std::rand::RngCore;
use tracing::{debug, info};

pub use arith::SparseCircuit;
pub use error::{CompileError, ProveError, SrsTooSmall};
pub use keys::{domain_size, srs_size, ProvingKey};
pub use verify::verify_offchain;

/// Where the SRS comes from.
pub enum SetupMode<'a> {
    /// Slice of a ceremony's parameters.
    Trusted { store: &'a SetupStore, id: SetupId },
    /// Random τ. Anyone who knows the RNG state can forge proofs.
    #[cfg(feature = "insecure-setup")]
    TestOnly(&'a mut dyn RngCore),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub variant: ProtocolVariant,
}

#[derive(Debug, Clone)]
pub struct CompiledCircuit<C: SupportedCurve> {
    pk: ProvingKey<C>,
    vk: VerifyingKey<C>,
}

/// A proof that already passed [`verify_offchain`], with the witness it was
/// made from.
#[derive(Debug, Clone)]
pub struct VerifiedProof<C: SupportedCurve> {
    pub proof: Proof<C>,
    pub witness: Witness<C::Fr>,
}

fn new_cs<C: SupportedCurve>(mode: SynthesisMode) -> ConstraintSystemRef<C::Fr> {
    let cs = ConstraintSystem::<C::Fr>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(mode);
    cs
}

/// Compiles `circuit` (any assignment it carries is ignored) for curve `C`.
pub fn compile<C, Circ>(
    circuit: Circ,
    setup: SetupMode<'_>,
    options: CompileOptions,
) -> Result<CompiledCircuit<C>, CompileError>
where
    C: SupportedCurve,
    Circ: ConstraintSynthesizer<C::Fr>,
{
    let cs = new_cs::<C>(SynthesisMode::Setup);
    circuit.generate_constraints(cs.clone())?;
    cs.finalize();
    let matrices = cs.to_matrices().ok_or(CompileError::MissingMatrices)?;
    let sparse = SparseCircuit::from_matrices(&matrices);
    debug!(
        r1cs = matrices.num_constraints,
        gates = sparse.gates.len(),
        public = sparse.nb_public,
        "lowered constraint system"
    );

    let size = srs_size(sparse.gates.len());
    let srs: Srs<C> = match setup {
        SetupMode::Trusted { store, id } => trusted_srs(store, id, size)?,
        #[cfg(feature = "insecure-setup")]
        SetupMode::TestOnly(rng) => ap_setup::insecure::generate(size, rng),
    };

    let (pk, vk) = keys::setup(sparse, &srs, options.variant)?;
    info!(curve = %C::CURVE, size = vk.size, variant = %vk.variant, "circuit compiled");
    Ok(CompiledCircuit { pk, vk })
}

impl<C: SupportedCurve> CompiledCircuit<C> {
    pub fn curve(&self) -> Curve {
        C::CURVE
    }

    pub fn verifying_key(&self) -> &VerifyingKey<C> {
        &self.vk
    }

    pub fn proving_key(&self) -> &ProvingKey<C> {
        &self.pk
    }

    pub fn constraint_system(&self) -> &SparseCircuit<C::Fr> {
        &self.pk.circuit
    }

    /// Lowered gate count, public-input rows excluded.
    pub fn constraint_count(&self) -> usize {
        self.pk.circuit.nb_constraints()
    }

    /// Proves `assignment` (the same circuit type, with values filled in).
    pub fn prove<Circ, R>(&self, assignment: Circ, rng: &mut R) -> Result<VerifiedProof<C>, ProveError>
    where
        Circ: ConstraintSynthesizer<C::Fr>,
        R: RngCore + ?Sized,
    {
        let cs = new_cs::<C>(SynthesisMode::Prove { construct_matrices: false });
        assignment.generate_constraints(cs.clone())?;
        let (instance, witness) = {
            let inner = cs.borrow().ok_or(ProveError::Synthesis(
                ark_relations::r1cs::SynthesisError::MissingCS,
            ))?;
            (inner.instance_assignment.clone(), inner.witness_assignment.clone())
        };

        let circuit = &self.pk.circuit;
        let values = circuit.solve(&instance, &witness)?;
        circuit.check(&values)?;

        let proof = prover::prove(&self.pk, &self.vk, &values, rng)?;
        let public = instance[1..].to_vec();
        if !verify_offchain(&self.vk, &proof, &public) {
            return Err(ProveError::SelfCheck);
        }
        Ok(VerifiedProof { proof, witness: Witness::new(public, witness) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_setup::insecure;
    use ark_ff::{Field, PrimeField};
    use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
    use ark_relations::r1cs::SynthesisError;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    /// `y = x² + x`, y public.
    #[derive(Clone)]
    struct Square<F> {
        x: Option<F>,
        y: Option<F>,
    }

    impl<F: PrimeField> Square<F> {
        fn with(x: u64) -> Self {
            let x = F::from(x);
            Self { x: Some(x), y: Some(x.square() + x) }
        }
    }

    impl<F: PrimeField> ConstraintSynthesizer<F> for Square<F> {
        fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
            let y = FpVar::new_input(cs.clone(), || self.y.ok_or(SynthesisError::AssignmentMissing))?;
            let x = FpVar::new_witness(cs, || self.x.ok_or(SynthesisError::AssignmentMissing))?;
            (&x * &x + &x).enforce_equal(&y)
        }
    }

    fn empty<F>() -> Square<F> {
        Square { x: None, y: None }
    }

    fn roundtrip<C: SupportedCurve>(variant: ProtocolVariant) {
        let mut rng = StdRng::seed_from_u64(42);
        let compiled: CompiledCircuit<C> =
            compile(empty(), SetupMode::TestOnly(&mut rng), CompileOptions { variant }).unwrap();
        assert_eq!(compiled.verifying_key().variant, variant);
        assert_eq!(compiled.verifying_key().nb_public_variables, 1);

        let verified = compiled.prove(Square::with(6), &mut rng).unwrap();
        assert_eq!(verified.proof.variant(), variant);
        assert_eq!(verified.witness.public_values(), &[C::Fr::from(42u64)]);
        assert!(verify_offchain(compiled.verifying_key(), &verified.proof, &[C::Fr::from(42u64)]));
        assert!(!verify_offchain(compiled.verifying_key(), &verified.proof, &[C::Fr::from(43u64)]));
    }

    #[test]
    fn test_prove_bn254() {
        roundtrip::<ark_bn254::Bn254>(ProtocolVariant::FoldedQuotient);
        roundtrip::<ark_bn254::Bn254>(ProtocolVariant::ExplicitQuotient);
    }

    #[test]
    fn test_prove_bls12_381() {
        roundtrip::<ark_bls12_381::Bls12_381>(ProtocolVariant::FoldedQuotient);
        roundtrip::<ark_bls12_381::Bls12_381>(ProtocolVariant::ExplicitQuotient);
    }

    #[test]
    fn test_unsatisfied_assignment() {
        let mut rng = StdRng::seed_from_u64(42);
        let compiled: CompiledCircuit<ark_bn254::Bn254> =
            compile(empty(), SetupMode::TestOnly(&mut rng), CompileOptions::default()).unwrap();
        let bad = Square { x: Some(ark_bn254::Fr::from(6u64)), y: Some(ark_bn254::Fr::from(41u64)) };
        assert!(matches!(compiled.prove(bad, &mut rng), Err(ProveError::Unsatisfied { .. })));
    }

    #[test]
    fn test_missing_assignment() {
        let mut rng = StdRng::seed_from_u64(42);
        let compiled: CompiledCircuit<ark_bn254::Bn254> =
            compile(empty(), SetupMode::TestOnly(&mut rng), CompileOptions::default()).unwrap();
        assert!(matches!(compiled.prove(empty(), &mut rng), Err(ProveError::Synthesis(_))));
    }

    #[test]
    fn test_trusted_setup_from_store() {
        let mut rng = StdRng::seed_from_u64(42);
        let srs = insecure::generate::<ark_bls12_381::Bls12_381, _>(16, &mut rng);
        let store = SetupStore::in_memory().with_blobs(SetupId::EthereumKzgBls12_381, srs.to_blobs().unwrap());

        let setup = SetupMode::Trusted { store: &store, id: SetupId::EthereumKzgBls12_381 };
        let compiled: CompiledCircuit<ark_bls12_381::Bls12_381> =
            compile(empty(), setup, CompileOptions::default()).unwrap();
        assert!(compiled.constraint_count() >= 1);
        compiled.prove(Square::with(3), &mut rng).unwrap();
    }

    #[test]
    fn test_trusted_setup_wrong_curve() {
        let store = SetupStore::in_memory();
        let setup = SetupMode::Trusted { store: &store, id: SetupId::DuskBls12_381 };
        let result = compile::<ark_bn254::Bn254, _>(empty(), setup, CompileOptions::default());
        assert!(matches!(result, Err(CompileError::Setup(_))));
    }

    #[test]
    fn test_trusted_setup_too_small() {
        let mut rng = StdRng::seed_from_u64(42);
        let srs = insecure::generate::<ark_bn254::Bn254, _>(4, &mut rng);
        let store = SetupStore::in_memory()
            .with_blobs(SetupId::PerpetualPowersOfTauBn254, srs.to_blobs().unwrap());
        let setup = SetupMode::Trusted { store: &store, id: SetupId::PerpetualPowersOfTauBn254 };
        let result = compile::<ark_bn254::Bn254, _>(empty(), setup, CompileOptions::default());
        assert!(matches!(result, Err(CompileError::Setup(_))));
    }
}
