// RSA Decryption Implementation
// Textbook RSA: m = c^d mod n

use num_bigint::BigUint;

use crate::bigint::mod_pow;
use crate::codec::integer_to_text;
use crate::error::Result;

use super::keygen::RsaPrivateKey;

/// Decrypt a ciphertext integer using an RSA private key.
///
/// Assumes 0 <= c < n; no further validation is performed.
pub fn decrypt(c: &BigUint, private_key: &RsaPrivateKey) -> BigUint {
    mod_pow(c, &private_key.d, &private_key.n)
}

/// Decrypt a ciphertext and decode the result back into text
pub fn decrypt_to_text(c: &BigUint, private_key: &RsaPrivateKey) -> Result<String> {
    integer_to_text(&decrypt(c, private_key))
}
