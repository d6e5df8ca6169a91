#![allow(dead_code)]

use std::collections::VecDeque;

use partial_dlog::num_bigint::BigUint;
use partial_dlog::{CryptoSampler, CyclicGroup, ProofError, RandomSampler, ZpGroup};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

/// The order-11 subgroup of Z_23^*, generated by 4.
pub fn toy_group() -> ZpGroup {
    ZpGroup::new(big(23), big(11), big(4)).unwrap()
}

/// A 128-bit safe prime p = 2q + 1; 4 generates the order-q subgroup.
pub fn schnorr_group() -> ZpGroup {
    let p = BigUint::parse_bytes(b"a5480dcdc419be4e5518f18e17e93107", 16).unwrap();
    let q = BigUint::parse_bytes(b"52a406e6e20cdf272a8c78c70bf49883", 16).unwrap();
    ZpGroup::new(p, q, big(4)).unwrap()
}

pub fn seeded(seed: u64) -> CryptoSampler<StdRng> {
    CryptoSampler::new(StdRng::seed_from_u64(seed))
}

/// A random exponent below the subgroup order.
pub fn random_exponent<G: CyclicGroup>(group: &G, sampler: &mut CryptoSampler<StdRng>) -> BigUint {
    sampler.uniform_below(group.subgroup_order()).unwrap()
}

/// Hands out a fixed list of values, in order, so tests can force the prover's
/// nonce, its simulated pair, the branch order and the verifier's challenge.
pub struct ScriptedSampler {
    values: VecDeque<BigUint>,
}

impl ScriptedSampler {
    pub fn new(values: &[u64]) -> Self {
        ScriptedSampler {
            values: values.iter().map(|v| BigUint::from(*v)).collect(),
        }
    }

    pub fn from_values(values: Vec<BigUint>) -> Self {
        ScriptedSampler { values: values.into() }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSampler for ScriptedSampler {
    fn uniform_below(&mut self, bound: &BigUint) -> Result<BigUint, ProofError> {
        let value = self.values.pop_front().expect("sampler script exhausted");
        assert!(value < *bound, "scripted value {} not below {}", value, bound);
        Ok(value)
    }
}
