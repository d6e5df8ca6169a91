use num_bigint::BigUint;
use log::trace;

use crate::toolbox::util::{from_fixed_bytes, to_fixed_bytes};
use crate::ProofError;

/// Number of bytes every challenge is encoded with before XOR-ing: the bit
/// length of the subgroup order, rounded up to whole bytes.
///
/// Prover and verifier both derive the width from the same `q`, so the split
/// `c = c1 ^ c2` always reconstructs to exactly the challenge the verifier issued.
pub fn challenge_len(order: &BigUint) -> usize {
    ((order.bits() + 7) / 8) as usize
}

/// Given two challenges, return the XOR of their fixed-width big-endian encodings.
///
/// Both operands must fit in [`challenge_len`] bytes; the result then fits too.
/// It isn't reduced modulo `order`, and mustn't be: reducing would break the
/// reconstruction of the original challenge.
pub fn xor_challenges(a: &BigUint, b: &BigUint, order: &BigUint) -> Result<BigUint, ProofError> {
    let len = challenge_len(order);
    let mut the_bytes = to_fixed_bytes(a, len)
        .ok_or(ProofError::InvalidParameter("challenge is wider than the subgroup order"))?;
    let other = to_fixed_bytes(b, len)
        .ok_or(ProofError::InvalidParameter("challenge is wider than the subgroup order"))?;
    for (x, y) in the_bytes.iter_mut().zip(other.iter()) {
        *x ^= y;
    }

    trace!("XOR over {} challenge bytes", len);
    Ok(from_fixed_bytes(&the_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn challenge_len_rounds_up() {
        assert_eq!(1, challenge_len(&big(11)));
        assert_eq!(1, challenge_len(&big(255)));
        assert_eq!(2, challenge_len(&big(256)));
        assert_eq!(32, challenge_len(&curve25519_dalek_order()));
    }

    fn curve25519_dalek_order() -> BigUint {
        BigUint::from_bytes_le(&curve25519_dalek::constants::BASEPOINT_ORDER.to_bytes())
    }

    #[test]
    fn xor_easy() {
        let q = big(11);
        assert_eq!(big(0), xor_challenges(&big(0), &big(0), &q).unwrap());
        assert_eq!(big(1), xor_challenges(&big(0), &big(1), &q).unwrap());
    }

    #[test]
    fn xor_medium() {
        let q = big(u32::MAX as u64);
        let res = xor_challenges(&big(8675309), &big(5551212), &q).unwrap();
        assert_eq!(big(13691777), res);
    }

    #[test]
    fn xor_may_leave_the_residue_range() {
        // 10 ^ 5 = 15, which is >= 11 but still within one byte
        let q = big(11);
        let c1 = xor_challenges(&big(10), &big(5), &q).unwrap();
        assert_eq!(big(15), c1);
        assert_eq!(big(10), xor_challenges(&c1, &big(5), &q).unwrap());
    }

    #[test]
    fn xor_rejects_wide_operands() {
        let q = big(11);
        match xor_challenges(&big(256), &big(1), &q) {
            Err(ProofError::InvalidParameter(_)) => {}
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }
}
