use num_bigint::BigUint;

/// Encode `value` as exactly `len` big-endian bytes, left-padded with zeroes.
/// Returns `None` if the value needs more than `len` bytes.
pub fn to_fixed_bytes(value: &BigUint, len: usize) -> Option<Vec<u8>> {
    let raw = value.to_bytes_be();
    let start = raw.iter().position(|b| *b != 0).unwrap_or(raw.len());
    let significant = &raw[start..];
    if significant.len() > len {
        return None;
    }

    let mut the_bytes = vec![0u8; len];
    the_bytes[len - significant.len()..].copy_from_slice(significant);
    Some(the_bytes)
}

/// Decode a big-endian byte string produced by [`to_fixed_bytes`].
pub fn from_fixed_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Whether `value` is a canonical residue modulo `order`, i.e. `value < order`.
pub fn is_canonical(value: &BigUint, order: &BigUint) -> bool {
    value < order
}
