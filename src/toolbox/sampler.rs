use num_bigint::BigUint;
use rand::prelude::ThreadRng;
use rand::{CryptoRng, RngCore};

use crate::ProofError;

/// RandomSampler is the source of every random value the protocol draws: the
/// prover's nonce, its simulated challenge and response, the branch order bit,
/// and the verifier's challenge.
pub trait RandomSampler {
    /// Return a value drawn uniformly from `[0, bound)`.  Fails if `bound` is zero.
    fn uniform_below(&mut self, bound: &BigUint) -> Result<BigUint, ProofError>;
}

impl<'a, S: RandomSampler + ?Sized> RandomSampler for &'a mut S {
    fn uniform_below(&mut self, bound: &BigUint) -> Result<BigUint, ProofError> {
        (**self).uniform_below(bound)
    }
}

/// A RandomSampler backed by a cryptographically secure RNG, using rejection sampling
/// over big-endian bytes masked down to the bit length of the bound.
pub struct CryptoSampler<R: CryptoRng + RngCore> {
    rng: R,
}

impl<R> CryptoSampler<R> where R: RngCore + CryptoRng {
    /// Create a new CryptoSampler with the provided RNG implementation.
    pub fn new(rng: R) -> Self {
        CryptoSampler {
            rng
        }
    }
}

impl CryptoSampler<ThreadRng> {
    /// Create a new CryptoSampler with a default RNG.
    pub fn new_without_rng() -> Self {
        CryptoSampler { rng: rand::thread_rng() }
    }
}

impl<R> RandomSampler for CryptoSampler<R> where R: RngCore + CryptoRng {
    fn uniform_below(&mut self, bound: &BigUint) -> Result<BigUint, ProofError> {
        if *bound == BigUint::from(0u8) {
            return Err(ProofError::InvalidParameter("sampling bound must be positive"));
        }

        let bits = bound.bits();
        let len = ((bits + 7) / 8) as usize;
        let mask = 0xffu8 >> (len as u64 * 8 - bits);
        let mut buf = vec![0u8; len];
        loop {
            self.rng.fill_bytes(&mut buf);
            buf[0] &= mask;
            let candidate = BigUint::from_bytes_be(&buf);
            if candidate < *bound {
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_bound_is_rejected() {
        let mut sampler = CryptoSampler::new_without_rng();
        match sampler.uniform_below(&BigUint::from(0u8)) {
            Err(ProofError::InvalidParameter(_)) => {}
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn samples_stay_below_bound() {
        let mut sampler = CryptoSampler::new(StdRng::seed_from_u64(8675309));
        for bound in [1u32, 2, 11, 255, 256, 257, 65_537].iter() {
            let bound = BigUint::from(*bound);
            for _ in 0..200 {
                assert!(sampler.uniform_below(&bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn single_bit_takes_both_values() {
        let mut sampler = CryptoSampler::new(StdRng::seed_from_u64(5551212));
        let two = BigUint::from(2u8);
        let ones = (0..200)
            .filter(|_| sampler.uniform_below(&two).unwrap() == BigUint::from(1u8))
            .count();
        assert!(ones > 0 && ones < 200);
    }

    fn draw<S: RandomSampler>(mut sampler: S, bound: &BigUint) -> BigUint {
        sampler.uniform_below(bound).unwrap()
    }

    #[test]
    fn borrowed_sampler_draws_from_the_same_rng() {
        let mut sampler = CryptoSampler::new(StdRng::seed_from_u64(42));
        let mut twin = CryptoSampler::new(StdRng::seed_from_u64(42));
        let bound = BigUint::from(1_000_000u32);
        assert_eq!(twin.uniform_below(&bound).unwrap(), draw(&mut sampler, &bound));
        assert_eq!(twin.uniform_below(&bound).unwrap(), draw(&mut sampler, &bound));
    }
}
