// RSA Encryption Implementation
// Textbook RSA: c = m^e mod n over codec-encoded messages

use num_bigint::BigUint;

use crate::bigint::mod_pow;
use crate::codec::text_to_integer;
use crate::error::{Error, Result};

use super::keygen::RsaPublicKey;

/// Encrypt a message integer using an RSA public key.
///
/// The message must be smaller than the modulus; anything larger would wrap
/// and decrypt incorrectly, so it is rejected before exponentiation.
pub fn encrypt(m: &BigUint, public_key: &RsaPublicKey) -> Result<BigUint> {
    if m >= &public_key.n {
        return Err(Error::MessageTooLarge {
            message_bits: m.bits(),
            modulus_bits: public_key.n.bits(),
        });
    }

    Ok(mod_pow(m, &public_key.e, &public_key.n))
}

/// Encrypt a text message, encoding it through the integer codec first
pub fn encrypt_text(plaintext: &str, public_key: &RsaPublicKey) -> Result<BigUint> {
    encrypt(&text_to_integer(plaintext), public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::from_u64;

    // Textbook vector: p=61, q=53 -> n=3233, φ=3120, e=17
    fn toy_public_key() -> RsaPublicKey {
        RsaPublicKey {
            n: from_u64(3233),
            e: from_u64(17),
        }
    }

    #[test]
    fn test_encrypt_textbook_vector() {
        let c = encrypt(&from_u64(65), &toy_public_key()).unwrap();
        assert_eq!(c, from_u64(2790));
    }

    #[test]
    fn test_encrypt_message_too_large() {
        let result = encrypt(&from_u64(3233), &toy_public_key());
        assert!(matches!(result, Err(Error::MessageTooLarge { .. })));

        let result = encrypt(&from_u64(4000), &toy_public_key());
        assert!(matches!(result, Err(Error::MessageTooLarge { .. })));
    }

    #[test]
    fn test_encrypt_boundary_message() {
        // m = n - 1 is still valid
        let c = encrypt(&from_u64(3232), &toy_public_key()).unwrap();
        assert!(c < from_u64(3233));
    }

    #[test]
    fn test_encrypt_text() {
        let keypair = super::super::keygen::generate_keypair(512).unwrap();
        let c = encrypt_text("Hi", &keypair.public_key).unwrap();
        assert!(c < keypair.public_key.n);
    }
}
