use log::debug;
use num_bigint::BigUint;

use crate::toolbox::group::CyclicGroup;
use crate::toolbox::sampler::RandomSampler;
use crate::toolbox::util::is_canonical;
use crate::toolbox::xor::xor_challenges;
use crate::toolbox::{Responses, Triple};
use crate::ProofError;

/// Used to create proofs.
///
/// To use a [`Prover`], first construct one using [`Prover::new()`],
/// supplying the group and a [`RandomSampler`].
///
/// Then call [`Prover::initiate`] with the known secret and both branches'
/// public values to obtain the two commitment triples, and finally
/// [`Prover::respond`] with the verifier's challenge.
///
/// A prover is single use: its nonce and simulated challenge must never
/// answer two challenges, so any call after `respond` fails.
pub struct Prover<'a, G: CyclicGroup, S: RandomSampler> {
    group: &'a G,
    sampler: S,
    state: ProverState,
}

enum ProverState {
    Fresh,
    Committed(Witness),
    Spent,
}

/// Everything `respond` needs, drawn once in `initiate`.
struct Witness {
    secret: BigUint,
    nonce: BigUint,
    simulated_challenge: BigUint,
    simulated_response: BigUint,
    order: BranchOrder,
}

/// Position of the real branch in the pair of triples sent to the verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BranchOrder {
    RealFirst,
    RealSecond,
}

impl BranchOrder {
    fn from_bit(bit: &BigUint) -> Self {
        if *bit == BigUint::from(0u8) {
            BranchOrder::RealFirst
        } else {
            BranchOrder::RealSecond
        }
    }

    fn arrange<T>(self, real: T, simulated: T) -> (T, T) {
        match self {
            BranchOrder::RealFirst => (real, simulated),
            BranchOrder::RealSecond => (simulated, real),
        }
    }
}

impl<'a, G, S> Prover<'a, G, S> where G: CyclicGroup, S: RandomSampler {
    /// Construct a new prover bound to `group`, drawing its randomness from `sampler`.
    pub fn new(group: &'a G, sampler: S) -> Self {
        Prover {
            group,
            sampler,
            state: ProverState::Fresh,
        }
    }

    /// Commit to both branches.
    ///
    /// `secret1` must satisfy `a1 ^ secret1 = b1`; nothing is known about the
    /// discrete log of `b2`, so that branch is simulated by picking its
    /// challenge and response first and solving for the commitment.  The two
    /// triples come back in random order.
    pub fn initiate(
        &mut self,
        secret1: &BigUint,
        a1: &G::Element,
        b1: &G::Element,
        a2: &G::Element,
        b2: &G::Element,
    ) -> Result<(Triple<G::Element>, Triple<G::Element>), ProofError> {
        match self.state {
            ProverState::Fresh => {}
            ProverState::Committed(_) => return Err(ProofError::InvalidState("proof already initiated")),
            ProverState::Spent => return Err(ProofError::InvalidState("prover already spent")),
        }

        let group = self.group;
        let q = group.subgroup_order();
        if !is_canonical(secret1, q) {
            return Err(ProofError::InvalidParameter("secret must be below the subgroup order"));
        }
        if ![a1, b1, a2, b2].iter().all(|x| group.contains(x)) {
            return Err(ProofError::InvalidParameter("statement element is outside the subgroup"));
        }

        let nonce = self.sampler.uniform_below(q)?;
        let simulated_challenge = self.sampler.uniform_below(q)?;
        let simulated_response = self.sampler.uniform_below(q)?;

        let x1 = group.exponentiate(a1, &nonce)?;

        // x2 = a2^z2 * (b2^c2)^-1, so that a2^z2 = x2 * b2^c2
        let b2_to_c2 = group.exponentiate(b2, &simulated_challenge)?;
        let x2 = group.multiply(
            &group.exponentiate(a2, &simulated_response)?,
            &group.inverse(&b2_to_c2)?,
        )?;

        let order = BranchOrder::from_bit(&self.sampler.uniform_below(&BigUint::from(2u8))?);

        self.state = ProverState::Committed(Witness {
            secret: secret1.clone(),
            nonce,
            simulated_challenge,
            simulated_response,
            order,
        });
        debug!("Prover committed to both branches");

        Ok(order.arrange(
            Triple::new(x1, a1.clone(), b1.clone()),
            Triple::new(x2, a2.clone(), b2.clone()),
        ))
    }

    /// Answer the verifier's challenge, consuming the prover's state.
    ///
    /// The real branch gets `c1 = challenge ^ c2` and `z1 = r1 + c1 * secret1 mod q`;
    /// the simulated branch gets the pair drawn in [`Prover::initiate`].  Pairs
    /// are returned in the same order as the triples.
    pub fn respond(&mut self, challenge: &BigUint) -> Result<Responses, ProofError> {
        let witness = match std::mem::replace(&mut self.state, ProverState::Spent) {
            ProverState::Committed(witness) => witness,
            ProverState::Fresh => {
                self.state = ProverState::Fresh;
                return Err(ProofError::InvalidState("respond called before initiate"));
            }
            ProverState::Spent => return Err(ProofError::InvalidState("prover already spent")),
        };

        let q = self.group.subgroup_order();
        if !is_canonical(challenge, q) {
            return Err(ProofError::InvalidParameter("challenge must be below the subgroup order"));
        }

        let real_challenge = xor_challenges(challenge, &witness.simulated_challenge, q)?;
        let real_response = (&witness.nonce + &real_challenge * &witness.secret) % q;
        debug!("Prover answered the challenge");

        let ((c1, z1), (c2, z2)) = witness.order.arrange(
            (real_challenge, real_response),
            (witness.simulated_challenge, witness.simulated_response),
        );
        Ok(Responses { c1, z1, c2, z2 })
    }
}
