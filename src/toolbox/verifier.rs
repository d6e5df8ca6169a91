use log::{debug, trace};
use num_bigint::BigUint;

use crate::toolbox::group::CyclicGroup;
use crate::toolbox::sampler::RandomSampler;
use crate::toolbox::util::is_canonical;
use crate::toolbox::xor::xor_challenges;
use crate::toolbox::{Responses, Triple};
use crate::ProofError;

/// Used to produce verification results.
///
/// To use a [`Verifier`], first construct one using [`Verifier::new()`],
/// supplying the group and a [`RandomSampler`].
///
/// Then hand it the prover's triples with [`Verifier::receive_commitments`],
/// send the prover the value of [`Verifier::challenge`], and check the answer
/// with [`Verifier::verify`].  The verifier never learns which triple belongs
/// to the branch the prover actually knows.
pub struct Verifier<'a, G: CyclicGroup, S: RandomSampler> {
    group: &'a G,
    sampler: S,
    triples: Option<(Triple<G::Element>, Triple<G::Element>)>,
    challenge: Option<BigUint>,
}

impl<'a, G, S> Verifier<'a, G, S> where G: CyclicGroup, S: RandomSampler {
    /// Construct a verifier bound to `group`, drawing its challenge from `sampler`.
    pub fn new(group: &'a G, sampler: S) -> Self {
        Verifier {
            group,
            sampler,
            triples: None,
            challenge: None,
        }
    }

    /// Store the prover's two triples, in the order received.
    pub fn receive_commitments(
        &mut self,
        triple1: Triple<G::Element>,
        triple2: Triple<G::Element>,
    ) -> Result<(), ProofError> {
        if self.triples.is_some() {
            return Err(ProofError::InvalidState("commitments already received"));
        }

        let group = self.group;
        let valid = [&triple1, &triple2].iter().all(|t| {
            group.contains(t.commitment()) && group.contains(t.base()) && group.contains(t.target())
        });
        if !valid {
            return Err(ProofError::InvalidParameter("triple element is outside the subgroup"));
        }

        trace!("Verifier received commitments");
        self.triples = Some((triple1, triple2));
        Ok(())
    }

    /// Draw, store and return the challenge.  Must be called exactly once,
    /// after [`Verifier::receive_commitments`].
    pub fn challenge(&mut self) -> Result<BigUint, ProofError> {
        if self.triples.is_none() {
            return Err(ProofError::InvalidState("challenge requested before commitments"));
        }
        if self.challenge.is_some() {
            return Err(ProofError::InvalidState("challenge already issued"));
        }

        let challenge = self.sampler.uniform_below(self.group.subgroup_order())?;
        debug!("Verifier issued challenge {}", challenge);
        self.challenge = Some(challenge.clone());
        Ok(challenge)
    }

    /// Check the prover's responses.
    ///
    /// Returns `Ok(false)` for a proof that doesn't verify: the challenge split
    /// doesn't reconstruct the issued challenge, a response isn't a canonical
    /// residue, or either triple fails `base ^ z = commitment * target ^ c`.
    /// Verification reads but never changes the verifier's state.
    pub fn verify(&self, responses: &Responses) -> Result<bool, ProofError> {
        let (triple1, triple2) = self
            .triples
            .as_ref()
            .ok_or(ProofError::InvalidState("verify called before commitments"))?;
        let challenge = self
            .challenge
            .as_ref()
            .ok_or(ProofError::InvalidState("verify called before challenge"))?;

        let q = self.group.subgroup_order();
        let reconstructed = match xor_challenges(&responses.c1, &responses.c2, q) {
            Ok(c) => c,
            Err(_) => {
                debug!("Challenge share wider than the challenge width");
                return Ok(false);
            }
        };
        if reconstructed != *challenge {
            debug!("Challenge shares do not reconstruct the issued challenge");
            return Ok(false);
        }
        if !is_canonical(&responses.z1, q) || !is_canonical(&responses.z2, q) {
            debug!("Response is not reduced modulo the subgroup order");
            return Ok(false);
        }

        let verified1 = self.verify_triple(triple1, &responses.c1, &responses.z1)?;
        let verified2 = self.verify_triple(triple2, &responses.c2, &responses.z2)?;
        debug!("Verifier checked triples: {} {}", verified1, verified2);
        Ok(verified1 && verified2)
    }

    fn verify_triple(
        &self,
        triple: &Triple<G::Element>,
        challenge: &BigUint,
        response: &BigUint,
    ) -> Result<bool, ProofError> {
        let left = self.group.exponentiate(triple.base(), response)?;
        let target_to_c = self.group.exponentiate(triple.target(), challenge)?;
        let right = self.group.multiply(&target_to_c, triple.commitment())?;
        trace!("Triple check: {:?} == {:?}", left, right);
        Ok(left == right)
    }
}
