// ElGamal Digital Signatures
// r = g^k mod p, s = k^(-1) * (H(m) - x*r) mod (p-1)

use num_bigint::BigUint;

use crate::bigint::{mod_inverse, mod_pow};
use crate::error::Result;
use crate::hash::HashAlgorithm;

use super::keygen::{ElGamalPrivateKey, ElGamalPublicKey};
use super::sample_ephemeral;

/// An ElGamal signature pair: r reduced mod p, s reduced mod p-1
#[derive(Debug, Clone, PartialEq)]
pub struct ElGamalSignature {
    pub r: BigUint,
    pub s: BigUint,
}

/// Result of a signing operation, with the reduced hash and ephemeral
/// exponent exposed for inspection
#[derive(Debug, Clone)]
pub struct ElGamalSigning {
    pub signature: ElGamalSignature,
    /// H(m) mod (p-1); the value the signature actually covers
    pub hash: BigUint,
    /// The ephemeral exponent drawn for this signature; never reused
    pub k: BigUint,
}

/// Sign a message under an ElGamal private key.
///
/// The hash is reduced mod (p-1) by plain modular reduction. The subtraction
/// H(m) - x*r is kept in [0, p-1) both before and after the multiply by
/// k^(-1); a negative intermediate would corrupt the signature.
pub fn sign(
    message: &[u8],
    private_key: &ElGamalPrivateKey,
    algorithm: HashAlgorithm,
) -> Result<ElGamalSigning> {
    let p_minus_one = &private_key.p - 1u8;

    let hash = algorithm.digest_to_integer(message) % &p_minus_one;

    let k = sample_ephemeral(&private_key.p)?;

    // r = g^k mod p
    let r = mod_pow(&private_key.g, &k, &private_key.p);

    // s = k^(-1) * (H(m) - x*r) mod (p-1)
    let k_inv = mod_inverse(&k, &p_minus_one)?;
    let x_times_r = (&private_key.x * &r) % &p_minus_one;
    let diff = if hash >= x_times_r {
        &hash - &x_times_r
    } else {
        &hash + &p_minus_one - &x_times_r
    };
    let s = (k_inv * diff) % &p_minus_one;

    Ok(ElGamalSigning {
        signature: ElGamalSignature { r, s },
        hash,
        k,
    })
}

/// Verify an ElGamal signature: g^H(m) ≡ y^r * r^s (mod p).
///
/// A mismatch is a normal boolean outcome, never an error.
pub fn verify(
    message: &[u8],
    signature: &ElGamalSignature,
    public_key: &ElGamalPublicKey,
    algorithm: HashAlgorithm,
) -> bool {
    let p_minus_one = &public_key.p - 1u8;
    let hash = algorithm.digest_to_integer(message) % &p_minus_one;

    let left = mod_pow(&public_key.g, &hash, &public_key.p);

    let y_power_r = mod_pow(&public_key.y, &signature.r, &public_key.p);
    let r_power_s = mod_pow(&signature.r, &signature.s, &public_key.p);
    let right = (y_power_r * r_power_s) % &public_key.p;

    left == right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::{from_u64, gcd};
    use crate::elgamal::keygen::generate_keypair;
    use num_traits::One;

    fn test_keypair() -> crate::elgamal::keygen::ElGamalKeyPair {
        generate_keypair(&from_u64(1_000_000_007), &from_u64(5))
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let keypair = test_keypair();
        let message = b"Nume Prenume";

        let signing = sign(message, &keypair.private_key, HashAlgorithm::Sha256).unwrap();
        assert!(verify(
            message,
            &signing.signature,
            &keypair.public_key,
            HashAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_signature_components_in_range() {
        let keypair = test_keypair();
        let p = &keypair.public_key.p;

        let signing = sign(b"ranges", &keypair.private_key, HashAlgorithm::Sha256).unwrap();
        assert!(&signing.signature.r < p);
        assert!(signing.signature.s < p - 1u8);
        assert!(signing.hash < p - 1u8);
        assert!(gcd(&signing.k, &(p - 1u8)).is_one());
    }

    #[test]
    fn test_tampered_message_fails() {
        let keypair = test_keypair();

        let signing = sign(b"original", &keypair.private_key, HashAlgorithm::Sha256).unwrap();
        assert!(!verify(
            b"Original",
            &signing.signature,
            &keypair.public_key,
            HashAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_wrong_key_fails() {
        let keypair = test_keypair();
        let other = test_keypair();

        let signing = sign(b"message", &keypair.private_key, HashAlgorithm::Sha256).unwrap();
        assert!(!verify(
            b"message",
            &signing.signature,
            &other.public_key,
            HashAlgorithm::Sha256
        ));
    }

    #[test]
    fn test_fresh_k_per_signature() {
        let keypair = test_keypair();

        let first = sign(b"same", &keypair.private_key, HashAlgorithm::Sha1).unwrap();
        let second = sign(b"same", &keypair.private_key, HashAlgorithm::Sha1).unwrap();
        assert_ne!(first.k, second.k);
    }

    #[test]
    fn test_verification_is_idempotent() {
        let keypair = test_keypair();
        let signing = sign(b"again", &keypair.private_key, HashAlgorithm::Md5).unwrap();

        for _ in 0..3 {
            assert!(verify(
                b"again",
                &signing.signature,
                &keypair.public_key,
                HashAlgorithm::Md5
            ));
        }
    }
}
