// Error Types
// Crate-wide error taxonomy for the public-key primitives

/// Errors that can occur during key generation, encryption, signing or decoding.
///
/// Signature verification failure is deliberately not represented here: `verify`
/// functions return `bool` and callers decide whether a mismatch is fatal.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The message integer is not smaller than the modulus it must live under.
    #[error("message ({message_bits} bits) must be smaller than the modulus ({modulus_bits} bits)")]
    MessageTooLarge { message_bits: u64, modulus_bits: u64 },

    /// A modular inverse was required but the operands are not coprime.
    #[error("no modular inverse exists: operands are not coprime")]
    NotInvertible,

    /// A bounded retry loop (prime search, exponent search, ephemeral sampling)
    /// ran out of attempts.
    #[error("key generation failed: {0}")]
    KeyGenerationFailure(String),

    /// An integer could not be decoded back into bytes or text.
    #[error("decoding failed: {0}")]
    DecodingError(String),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;
