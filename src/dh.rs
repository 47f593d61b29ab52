// Diffie-Hellman Key Exchange
// Two-stage secret sampling, shared-secret derivation and the AES key hook

use num_bigint::BigUint;
use rand::{thread_rng, Rng};
use sha2::{Digest, Sha256};

use crate::bigint::{mod_pow, random_in_range, to_bytes};

/// Smallest bit length a private exponent may get
pub const MIN_SECRET_BITS: u64 = 256;

/// Largest bit length a private exponent may get (further capped by p)
pub const MAX_SECRET_BITS: u64 = 512;

/// Result of one complete exchange between two parties.
///
/// Every value of the protocol run is kept as an inspectable field; the
/// private exponents stay in the record because the whole exchange is run
/// locally.
#[derive(Debug, Clone)]
pub struct DhExchange {
    /// First party's private exponent
    pub a: BigUint,
    /// Second party's private exponent
    pub b: BigUint,
    /// First party's public value g^a mod p
    pub public_a: BigUint,
    /// Second party's public value g^b mod p
    pub public_b: BigUint,
    /// The secret both parties derived; equality of the two derivations is
    /// asserted before this record is built
    pub shared_secret: BigUint,
}

/// Draw a Diffie-Hellman private exponent.
///
/// Two-stage policy: first the bit length is drawn uniformly from
/// [256, min(bits(p)-1, 512)], then the value uniformly from
/// [2^(bits-1), min(2^bits - 1, p-2)]. Not equivalent to a single uniform
/// draw over the full range.
pub fn generate_secret(p: &BigUint) -> BigUint {
    let min_bits = MIN_SECRET_BITS;
    let max_bits = (p.bits() - 1).min(MAX_SECRET_BITS);

    let secret_bits = thread_rng().gen_range(min_bits..=max_bits);

    let low = BigUint::from(1u8) << (secret_bits - 1);
    let mut high = (BigUint::from(1u8) << secret_bits) - 1u8;
    let p_minus_two = p - 2u8;
    if high > p_minus_two {
        high = p_minus_two;
    }

    random_in_range(&low, &high)
}

/// Run a complete exchange: both parties draw a secret, publish g^secret,
/// and raise the peer's public value to their own secret.
///
/// The two derived secrets must be bit-identical; a mismatch is an
/// implementation defect, so it is asserted rather than returned.
pub fn exchange(p: &BigUint, g: &BigUint) -> DhExchange {
    let a = generate_secret(p);
    let b = generate_secret(p);

    let public_a = mod_pow(g, &a, p);
    let public_b = mod_pow(g, &b, p);

    let secret_a = mod_pow(&public_b, &a, p);
    let secret_b = mod_pow(&public_a, &b, p);
    assert_eq!(secret_a, secret_b, "shared secrets diverged");

    DhExchange {
        a,
        b,
        public_a,
        public_b,
        shared_secret: secret_a,
    }
}

/// Derive AES-256 key material from a shared secret: SHA-256 over its
/// big-endian bytes
pub fn derive_key(shared_secret: &BigUint) -> [u8; 32] {
    Sha256::digest(to_bytes(shared_secret)).into()
}
