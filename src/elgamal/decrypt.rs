// ElGamal Decryption Implementation
// m = c2 * (c1^x)^(-1) mod p

use num_bigint::BigUint;

use crate::bigint::{mod_inverse, mod_pow};
use crate::error::Result;

use super::encrypt::ElGamalCiphertext;
use super::keygen::ElGamalPrivateKey;

/// Decrypt an ElGamal ciphertext pair.
///
/// s = c1^x mod p is inverted explicitly; the inverse only fails for s = 0,
/// which a valid c1 can never produce.
pub fn decrypt(ciphertext: &ElGamalCiphertext, private_key: &ElGamalPrivateKey) -> Result<BigUint> {
    let s = mod_pow(&ciphertext.c1, &private_key.x, &private_key.p);
    let s_inv = mod_inverse(&s, &private_key.p)?;

    Ok((&ciphertext.c2 * s_inv) % &private_key.p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::from_u64;
    use crate::elgamal::encrypt::encrypt;
    use crate::elgamal::keygen::generate_keypair;

    #[test]
    fn test_roundtrip_small_prime() {
        let p = from_u64(2579);
        let keypair = generate_keypair(&p, &from_u64(2));

        for m in [0u64, 1, 2, 100, 1299, 2578] {
            let m = from_u64(m);
            let encryption = encrypt(&m, &keypair.public_key).unwrap();
            assert_eq!(decrypt(&encryption.ciphertext, &keypair.private_key).unwrap(), m);
        }
    }

    #[test]
    fn test_roundtrip_larger_prime() {
        let p = from_u64(1_000_000_007);
        let keypair = generate_keypair(&p, &from_u64(5));

        let m = from_u64(123_456_789);
        let encryption = encrypt(&m, &keypair.public_key).unwrap();
        assert_eq!(decrypt(&encryption.ciphertext, &keypair.private_key).unwrap(), m);
    }

    #[test]
    fn test_wrong_key_garbles_message() {
        let p = from_u64(1_000_000_007);
        let keypair = generate_keypair(&p, &from_u64(5));
        let other = generate_keypair(&p, &from_u64(5));

        let m = from_u64(424_242);
        let encryption = encrypt(&m, &keypair.public_key).unwrap();
        let garbled = decrypt(&encryption.ciphertext, &other.private_key).unwrap();
        assert_ne!(garbled, m);
    }
}
