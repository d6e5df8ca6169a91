use thiserror::Error;

/// An error raised by a group implementation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// The value is not an element of the prime-order subgroup.
    #[error("Value is not an element of the group.")]
    NotAnElement,

    /// The element has no multiplicative inverse modulo the group prime.
    #[error("Element is not invertible.")]
    NotInvertible,

    /// Occurs when constructing a group from parameters that don't describe a prime-order subgroup.
    #[error("Invalid group parameters: {0}")]
    InvalidParameters(&'static str),
}

/// A structural error during proving or verification.
///
/// A proof that simply fails to verify is not an error: `Verifier::verify`
/// reports it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum ProofError {
    /// An operation was called out of the commit, challenge, respond, verify sequence.
    #[error("Operation called out of sequence: {0}")]
    InvalidState(&'static str),

    /// A supplied exponent or element is out of range.
    #[error("Parameter out of range: {0}")]
    InvalidParameter(&'static str),

    /// The group implementation failed.
    #[error("Group arithmetic failed: {0}")]
    Group(#[from] GroupError),
}
