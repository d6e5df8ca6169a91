// -*- coding: utf-8; mode: rust; -*-
//
// To the extent possible under law, the authors have waived all
// copyright and related or neighboring rights to partial_dlog,
// using the Creative Commons "CC0" public domain dedication.  See
// <http://creativecommons.org/publicdomain/zero/1.0/> for full
// details.

//! An interactive zero-knowledge proof of partial knowledge of a discrete
//! logarithm.
//!
//! The prover shows that it knows `x1` with `a1 ^ x1 = b1` *or* `x2` with
//! `a2 ^ x2 = b2`, without revealing which one.  This is the
//! Cramer–Damgård–Schoenmakers OR composition of two Schnorr proofs: the
//! branch whose secret is unknown is simulated, and the verifier's challenge
//! `c` is split as `c = c1 ^ c2` so that the prover may choose one half in
//! advance but not both.
//!
//! The challenge is chosen by the verifier, not derived from a transcript
//! hash, so a proof is a four-message exchange:
//!
//! ```rust,ignore
//! let mut prover = Prover::new(&group, CryptoSampler::new_without_rng());
//! let mut verifier = Verifier::new(&group, CryptoSampler::new_without_rng());
//!
//! let (t1, t2) = prover.initiate(&secret1, &a1, &b1, &a2, &b2)?;
//! verifier.receive_commitments(t1, t2)?;
//! let challenge = verifier.challenge()?;
//! let responses = prover.respond(&challenge)?;
//! assert!(verifier.verify(&responses)?);
//! ```
//!
//! [`run`] performs the same exchange in one call.  Groups plug in through
//! [`CyclicGroup`]; [`ZpGroup`] and [`RistrettoGroup`] are provided.

pub extern crate curve25519_dalek;
pub extern crate num_bigint;

mod errors;
mod protocol;
pub mod toolbox;

pub use crate::errors::{GroupError, ProofError};
pub use crate::protocol::{prove_and_verify, run, run_with_samplers};
pub use crate::toolbox::group::{CyclicGroup, ZpGroup};
pub use crate::toolbox::prover::Prover;
pub use crate::toolbox::ristretto::RistrettoGroup;
pub use crate::toolbox::sampler::{CryptoSampler, RandomSampler};
pub use crate::toolbox::verifier::Verifier;
pub use crate::toolbox::{Responses, Triple};
