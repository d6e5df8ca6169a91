use curve25519_dalek::constants as dalek_constants;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use num_bigint::BigUint;

use crate::toolbox::group::CyclicGroup;
use crate::GroupError;

/// The Ristretto255 group, written multiplicatively to match [`CyclicGroup`]:
/// exponentiation is scalar multiplication, the group operation is point addition.
///
/// Every `RistrettoPoint` is an element of the prime-order group, so
/// [`CyclicGroup::contains`] always holds and no operation fails.
#[derive(Clone, Debug)]
pub struct RistrettoGroup {
    order: BigUint,
}

impl RistrettoGroup {
    /// Create the group; its order is the basepoint order `l`.
    pub fn new() -> Self {
        RistrettoGroup {
            order: BigUint::from_bytes_le(&dalek_constants::BASEPOINT_ORDER.to_bytes()),
        }
    }

    /// The Ristretto basepoint.
    pub fn generator(&self) -> RistrettoPoint {
        dalek_constants::RISTRETTO_BASEPOINT_POINT
    }

    /// Reduce an exponent modulo `l` into a `Scalar`.
    pub fn to_scalar(&self, exponent: &BigUint) -> Scalar {
        let reduced = (exponent % &self.order).to_bytes_le();
        let mut the_bytes = [0u8; 32];
        the_bytes[..reduced.len()].copy_from_slice(&reduced);
        Scalar::from_bytes_mod_order(the_bytes)
    }
}

impl Default for RistrettoGroup {
    fn default() -> Self {
        RistrettoGroup::new()
    }
}

impl CyclicGroup for RistrettoGroup {
    type Element = RistrettoPoint;

    fn exponentiate(&self, base: &RistrettoPoint, exponent: &BigUint) -> Result<RistrettoPoint, GroupError> {
        Ok(base * self.to_scalar(exponent))
    }

    fn multiply(&self, x: &RistrettoPoint, y: &RistrettoPoint) -> Result<RistrettoPoint, GroupError> {
        Ok(x + y)
    }

    fn inverse(&self, x: &RistrettoPoint) -> Result<RistrettoPoint, GroupError> {
        Ok(-x)
    }

    fn subgroup_order(&self) -> &BigUint {
        &self.order
    }

    fn contains(&self, _x: &RistrettoPoint) -> bool {
        true
    }
}
