// RSA Digital Signatures
// Hash-then-exponent signing: s = H(m)^d mod n

use num_bigint::BigUint;

use crate::bigint::mod_pow;
use crate::hash::HashAlgorithm;

use super::keygen::{RsaPrivateKey, RsaPublicKey};

/// A generated RSA signature together with the reduced hash it covers
#[derive(Debug, Clone, PartialEq)]
pub struct RsaSignature {
    /// The signature value, in [0, n)
    pub s: BigUint,
    /// H(m) after reduction mod n; this is the value actually signed
    pub hash: BigUint,
}

/// Sign a message: s = H(m)^d mod n.
///
/// A digest wider than the modulus is reduced mod n before signing; on small
/// moduli this can equate distinct digests.
pub fn sign(message: &[u8], private_key: &RsaPrivateKey, algorithm: HashAlgorithm) -> RsaSignature {
    let mut hash = algorithm.digest_to_integer(message);
    if hash >= private_key.n {
        hash %= &private_key.n;
    }

    let s = mod_pow(&hash, &private_key.d, &private_key.n);

    RsaSignature { s, hash }
}

/// Verify a signature: recompute H(m) mod n and compare against s^e mod n.
///
/// A mismatch is a normal boolean outcome, never an error.
pub fn verify(
    message: &[u8],
    signature: &BigUint,
    public_key: &RsaPublicKey,
    algorithm: HashAlgorithm,
) -> bool {
    let hash = algorithm.digest_to_integer(message) % &public_key.n;
    let recovered = mod_pow(signature, &public_key.e, &public_key.n);

    recovered == hash
}
