// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use num_bigint::BigUint;
use num_traits::One;

use crate::bigint::{from_u64, gcd, mod_inverse, random_in_range, random_prime};
use crate::error::{Error, Result};

/// Fixed public-exponent candidates, tried in priority order
const E_CANDIDATES: [u64; 4] = [65537, 3, 17, 257];

/// How many fresh prime pairs to try before giving up on the bit target
const MAX_PRIME_ATTEMPTS: u32 = 32;

/// How many random exponents to try when no fixed candidate is coprime to φ(n)
const MAX_EXPONENT_ATTEMPTS: u32 = 4096;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub n: BigUint, // Modulus
    pub e: BigUint, // Public exponent
}

/// RSA Private Key
///
/// The prime factors p and q are retained for diagnostic display only; every
/// operation after key generation uses (d, n).
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    pub n: BigUint, // Modulus (same as public)
    pub d: BigUint, // Private exponent
    pub p: BigUint, // First prime factor
    pub q: BigUint, // Second prime factor
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub bit_length: u64,
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

impl RsaPrivateKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

impl RsaKeyPair {
    /// Get the bit length of the key
    pub fn bit_length(&self) -> u64 {
        self.public_key.bit_length()
    }
}

/// Generate RSA key pair with specified bit length
/// bit_length: Minimum size of the modulus in bits (2048, 3072, 4096, etc.)
///
/// The primes are bit_length/2 each; a pair whose product misses the bit
/// target is discarded and redrawn, up to MAX_PRIME_ATTEMPTS.
pub fn generate_keypair(bit_length: u64) -> Result<RsaKeyPair> {
    if bit_length < 16 {
        return Err(Error::KeyGenerationFailure(format!(
            "bit length {} is too small for two distinct primes",
            bit_length
        )));
    }

    let p_bits = bit_length / 2;
    let q_bits = bit_length - p_bits;

    // Step 1: Generate primes p and q until n = p * q reaches the bit target
    let mut attempts = 0u32;
    let (p, q, n) = loop {
        if attempts >= MAX_PRIME_ATTEMPTS {
            return Err(Error::KeyGenerationFailure(format!(
                "no {}-bit modulus after {} prime pairs",
                bit_length, MAX_PRIME_ATTEMPTS
            )));
        }
        attempts += 1;

        let p = random_prime(p_bits);
        let q = random_prime(q_bits);
        if p == q {
            continue;
        }

        let n = &p * &q;
        if n.bits() >= bit_length {
            break (p, q, n);
        }
    };

    // Step 2: Compute φ(n) = (p-1)(q-1)
    let phi_n = (&p - 1u8) * (&q - 1u8);

    // Step 3: Choose public exponent e with gcd(e, φ(n)) = 1
    let e = select_public_exponent(&phi_n)?;

    // Step 4: Compute d = e^(-1) mod φ(n)
    let d = mod_inverse(&e, &phi_n)?;

    let public_key = RsaPublicKey { n: n.clone(), e };
    let private_key = RsaPrivateKey { n, d, p, q };

    Ok(RsaKeyPair {
        public_key,
        private_key,
        bit_length,
    })
}

/// Pick the public exponent: first fixed candidate below φ(n) and coprime to
/// it, falling back to a bounded uniform search over [3, φ(n))
fn select_public_exponent(phi_n: &BigUint) -> Result<BigUint> {
    for candidate in E_CANDIDATES {
        let candidate = from_u64(candidate);
        if &candidate < phi_n && gcd(&candidate, phi_n).is_one() {
            return Ok(candidate);
        }
    }

    let low = from_u64(3);
    let high = phi_n - 1u8;
    for _ in 0..MAX_EXPONENT_ATTEMPTS {
        let candidate = random_in_range(&low, &high);
        if gcd(&candidate, phi_n).is_one() {
            return Ok(candidate);
        }
    }

    Err(Error::KeyGenerationFailure(format!(
        "no public exponent coprime to φ(n) after {} random draws",
        MAX_EXPONENT_ATTEMPTS
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        let keypair = generate_keypair(512).unwrap();

        assert!(keypair.bit_length() >= 512);
        assert!(keypair.public_key.n > from_u64(0));
        assert!(keypair.private_key.d > from_u64(0));
    }

    #[test]
    fn test_key_properties() {
        let keypair = generate_keypair(512).unwrap();

        // Verify n = p * q
        assert_eq!(
            keypair.private_key.n,
            &keypair.private_key.p * &keypair.private_key.q
        );

        // Verify e * d ≡ 1 (mod φ(n))
        let phi_n = (&keypair.private_key.p - 1u8) * (&keypair.private_key.q - 1u8);
        let product = &keypair.public_key.e * &keypair.private_key.d;
        assert_eq!(product % &phi_n, from_u64(1));

        // Verify gcd(e, φ(n)) = 1
        assert!(gcd(&keypair.public_key.e, &phi_n).is_one());
    }

    #[test]
    fn test_preferred_exponent_is_65537() {
        // φ(n) of a 512-bit key is practically never divisible by 65537
        let keypair = generate_keypair(512).unwrap();
        assert_eq!(keypair.public_key.e, from_u64(65537));
    }

    #[test]
    fn test_exponent_candidate_priority() {
        // φ = 65537 * 2: the first candidate divides φ, the next coprime one is 3
        let phi = from_u64(65537 * 2);
        assert_eq!(select_public_exponent(&phi).unwrap(), from_u64(3));
    }

    #[test]
    fn test_too_small_bit_length_fails() {
        assert!(matches!(
            generate_keypair(8),
            Err(Error::KeyGenerationFailure(_))
        ));
    }
}
