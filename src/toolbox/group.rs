use std::fmt::Debug;

use num_bigint::BigUint;

use crate::GroupError;

/// The cyclic group both protocol roles compute in.
///
/// Implementations work inside a subgroup of prime order `q`; every exponent
/// the protocol produces is either a residue modulo `q` or a fixed-width XOR of
/// two such residues, so exponentiation must accept any non-negative exponent.
pub trait CyclicGroup {
    /// A group element.
    type Element: Clone + PartialEq + Debug;

    /// Compute `base ^ exponent`.  Fails if `base` is not a group element.
    fn exponentiate(&self, base: &Self::Element, exponent: &BigUint) -> Result<Self::Element, GroupError>;

    /// Compute the group operation `x * y`.
    fn multiply(&self, x: &Self::Element, y: &Self::Element) -> Result<Self::Element, GroupError>;

    /// Compute `x ^ -1`.  Fails if `x` is not invertible.
    fn inverse(&self, x: &Self::Element) -> Result<Self::Element, GroupError>;

    /// The prime order `q` of the subgroup.
    fn subgroup_order(&self) -> &BigUint;

    /// Whether `x` lies in the prime-order subgroup.
    fn contains(&self, x: &Self::Element) -> bool;
}

// RFC 3526, section 3: 2048-bit MODP group.  (p - 1) / 2 is prime and 2 generates that subgroup.
const RFC3526_2048_PRIME: &str = "\
    FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
    020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
    4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
    EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
    98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
    9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
    E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718\
    3995497CEA956AE515D2261898FA051015728E5A8AACAA68FFFFFFFFFFFFFFFF";

/// A Schnorr group: the subgroup of prime order `q` inside `Z_p^*`, generated by `g`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZpGroup {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl ZpGroup {
    /// Construct the group from its parameters.
    ///
    /// Checks that `q` divides `p - 1` and that `g` is a non-trivial element of
    /// order `q`.  The primality of `p` and `q` is not checked; generating and
    /// vetting parameters is the caller's job.
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Result<Self, GroupError> {
        let zero = BigUint::from(0u8);
        let one = BigUint::from(1u8);

        if p <= BigUint::from(3u8) || &p % 2u8 == zero {
            return Err(GroupError::InvalidParameters("modulus must be an odd prime greater than 3"));
        }
        if q <= one || (&p - &one) % &q != zero {
            return Err(GroupError::InvalidParameters("subgroup order must divide p - 1"));
        }
        if g <= one || g >= p {
            return Err(GroupError::InvalidParameters("generator must lie strictly between 1 and p"));
        }
        if g.modpow(&q, &p) != one {
            return Err(GroupError::InvalidParameters("generator does not have order q"));
        }

        Ok(ZpGroup { p, q, g })
    }

    /// The 2048-bit MODP group from RFC 3526 with `q = (p - 1) / 2` and `g = 2`.
    pub fn rfc3526_2048() -> Result<Self, GroupError> {
        let p = BigUint::parse_bytes(RFC3526_2048_PRIME.as_bytes(), 16)
            .ok_or(GroupError::InvalidParameters("malformed RFC 3526 modulus"))?;
        let q = (&p - 1u8) >> 1u32;
        ZpGroup::new(p, q, BigUint::from(2u8))
    }

    /// The prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// The generator `g` of the order-`q` subgroup.
    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    fn check_range(&self, x: &BigUint) -> Result<(), GroupError> {
        if *x == BigUint::from(0u8) || *x >= self.p {
            return Err(GroupError::NotAnElement);
        }
        Ok(())
    }
}

impl CyclicGroup for ZpGroup {
    type Element = BigUint;

    fn exponentiate(&self, base: &BigUint, exponent: &BigUint) -> Result<BigUint, GroupError> {
        self.check_range(base)?;
        Ok(base.modpow(exponent, &self.p))
    }

    fn multiply(&self, x: &BigUint, y: &BigUint) -> Result<BigUint, GroupError> {
        self.check_range(x)?;
        self.check_range(y)?;
        Ok((x * y) % &self.p)
    }

    fn inverse(&self, x: &BigUint) -> Result<BigUint, GroupError> {
        self.check_range(x).map_err(|_| GroupError::NotInvertible)?;
        // Fermat: x^(p-2) is the inverse when p is prime
        let candidate = x.modpow(&(&self.p - 2u8), &self.p);
        if (x * &candidate) % &self.p != BigUint::from(1u8) {
            return Err(GroupError::NotInvertible);
        }
        Ok(candidate)
    }

    fn subgroup_order(&self) -> &BigUint {
        &self.q
    }

    fn contains(&self, x: &BigUint) -> bool {
        self.check_range(x).is_ok() && x.modpow(&self.q, &self.p) == BigUint::from(1u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u32) -> BigUint {
        BigUint::from(v)
    }

    fn toy() -> ZpGroup {
        ZpGroup::new(big(23), big(11), big(4)).unwrap()
    }

    #[test]
    fn toy_group_parameters() {
        let group = toy();
        assert_eq!(&big(23), group.modulus());
        assert_eq!(&big(11), group.subgroup_order());
        assert_eq!(&big(4), group.generator());
    }

    #[test]
    fn rejects_bad_parameters() {
        // 5 is a quadratic non-residue mod 23, so its order is 22
        assert_eq!(
            Err(GroupError::InvalidParameters("generator does not have order q")),
            ZpGroup::new(big(23), big(11), big(5))
        );
        assert!(ZpGroup::new(big(23), big(7), big(4)).is_err());
        assert!(ZpGroup::new(big(22), big(11), big(4)).is_err());
        assert!(ZpGroup::new(big(23), big(11), big(1)).is_err());
        assert!(ZpGroup::new(big(23), big(11), big(23)).is_err());
    }

    #[test]
    fn subgroup_membership() {
        let group = toy();
        let members = [1u32, 2, 3, 4, 6, 8, 9, 12, 13, 16, 18];
        for x in 0..30u32 {
            assert_eq!(members.contains(&x), group.contains(&big(x)), "membership of {}", x);
        }
    }

    #[test]
    fn arithmetic() {
        let group = toy();
        assert_eq!(big(18), group.exponentiate(&big(4), &big(3)).unwrap());
        // exponents are effectively reduced modulo q
        assert_eq!(big(18), group.exponentiate(&big(4), &big(14)).unwrap());
        assert_eq!(big(1), group.exponentiate(&big(4), &big(0)).unwrap());
        assert_eq!(big(4), group.multiply(&big(18), &big(13)).unwrap());
        let inv = group.inverse(&big(18)).unwrap();
        assert_eq!(big(1), group.multiply(&big(18), &inv).unwrap());
    }

    #[test]
    fn arithmetic_rejects_non_elements() {
        let group = toy();
        assert_eq!(Err(GroupError::NotAnElement), group.exponentiate(&big(0), &big(3)));
        assert_eq!(Err(GroupError::NotAnElement), group.multiply(&big(23), &big(4)));
        assert_eq!(Err(GroupError::NotInvertible), group.inverse(&big(0)));
    }

    #[test]
    fn rfc3526_preset() {
        let group = ZpGroup::rfc3526_2048().unwrap();
        assert_eq!(2048, group.modulus().bits());
        assert_eq!(2047, group.subgroup_order().bits());
        assert!(group.contains(group.generator()));
    }
}
