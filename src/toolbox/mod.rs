//! The building blocks of the partial discrete log proof.
//!
//! A [`Prover`](prover::Prover) that knows `secret1` with `a1 ^ secret1 = b1`
//! convinces a [`Verifier`](verifier::Verifier) that it knows the discrete log
//! of `b1` to base `a1` *or* of `b2` to base `a2`, without revealing which.
//! The unknown branch is simulated, and the verifier's challenge is split
//! between the two branches with a fixed-width XOR.

use num_bigint::BigUint;
use serde_derive::{Deserialize, Serialize};

pub mod group;
pub mod prover;
pub mod ristretto;
pub mod sampler;
pub mod util;
pub mod verifier;
pub mod xor;

/// One branch of the statement together with the prover's commitment for it.
///
/// A genuine proof for this branch satisfies `base ^ z = commitment * target ^ c`
/// for its challenge `c` and response `z`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple<E> {
    commitment: E,
    base: E,
    target: E,
}

impl<E> Triple<E> {
    /// Build a triple from the prover's commitment and the branch's public base and target.
    pub fn new(commitment: E, base: E, target: E) -> Self {
        Triple { commitment, base, target }
    }

    /// The prover's first message for this branch.
    pub fn commitment(&self) -> &E {
        &self.commitment
    }

    /// The public base.
    pub fn base(&self) -> &E {
        &self.base
    }

    /// The public target.
    pub fn target(&self) -> &E {
        &self.target
    }
}

/// The prover's answer to a challenge: a (challenge, response) pair for each
/// triple, in the order the triples were sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responses {
    pub c1: BigUint,
    pub z1: BigUint,
    pub c2: BigUint,
    pub z2: BigUint,
}
