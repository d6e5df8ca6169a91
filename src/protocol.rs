use log::info;
use num_bigint::BigUint;

use crate::toolbox::group::CyclicGroup;
use crate::toolbox::prover::Prover;
use crate::toolbox::sampler::{CryptoSampler, RandomSampler};
use crate::toolbox::util::is_canonical;
use crate::toolbox::verifier::Verifier;
use crate::ProofError;

/// Run one complete proof that the caller knows `secret1` with
/// `a1 ^ secret1 = b1` or some secret for `b2` to base `a2`, and return
/// whether it verified.  Both roles draw from the thread-local RNG.
pub fn run<G: CyclicGroup>(
    group: &G,
    secret1: &BigUint,
    a1: &G::Element,
    a2: &G::Element,
    b2: &G::Element,
) -> Result<bool, ProofError> {
    run_with_samplers(
        group,
        CryptoSampler::new_without_rng(),
        CryptoSampler::new_without_rng(),
        secret1,
        a1,
        a2,
        b2,
    )
}

/// Like [`run`], with the prover's and verifier's randomness supplied by the caller.
pub fn run_with_samplers<G, P, V>(
    group: &G,
    prover_sampler: P,
    verifier_sampler: V,
    secret1: &BigUint,
    a1: &G::Element,
    a2: &G::Element,
    b2: &G::Element,
) -> Result<bool, ProofError>
where
    G: CyclicGroup,
    P: RandomSampler,
    V: RandomSampler,
{
    if !is_canonical(secret1, group.subgroup_order()) {
        return Err(ProofError::InvalidParameter("secret must be below the subgroup order"));
    }
    if !group.contains(a1) {
        return Err(ProofError::InvalidParameter("statement element is outside the subgroup"));
    }

    let b1 = group.exponentiate(a1, secret1)?;
    prove_and_verify(group, prover_sampler, verifier_sampler, secret1, a1, &b1, a2, b2)
}

/// Drive the four messages for an explicit statement `(a1, b1, a2, b2)`.
///
/// Unlike [`run`], `b1` is taken as given, so a prover whose secret doesn't
/// match it produces a proof that fails verification.
#[allow(clippy::too_many_arguments)]
pub fn prove_and_verify<G, P, V>(
    group: &G,
    prover_sampler: P,
    verifier_sampler: V,
    secret1: &BigUint,
    a1: &G::Element,
    b1: &G::Element,
    a2: &G::Element,
    b2: &G::Element,
) -> Result<bool, ProofError>
where
    G: CyclicGroup,
    P: RandomSampler,
    V: RandomSampler,
{
    let mut prover = Prover::new(group, prover_sampler);
    let mut verifier = Verifier::new(group, verifier_sampler);

    let (triple1, triple2) = prover.initiate(secret1, a1, b1, a2, b2)?;
    verifier.receive_commitments(triple1, triple2)?;
    let challenge = verifier.challenge()?;
    let responses = prover.respond(&challenge)?;
    let verified = verifier.verify(&responses)?;

    info!("Partial discrete log proof verified: {}", verified);
    Ok(verified)
}
