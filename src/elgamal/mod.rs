// ElGamal Module - Main module file
// Exports all ElGamal-related functionality and holds the shared
// exponent-sampling policy

use num_bigint::BigUint;
use num_traits::One;

use crate::bigint::{from_u64, gcd, random_in_range};
use crate::error::{Error, Result};

pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod sign;

pub use decrypt::decrypt;
pub use encrypt::{encrypt, ElGamalCiphertext, ElGamalEncryption};
pub use keygen::{generate_keypair, ElGamalKeyPair, ElGamalPrivateKey, ElGamalPublicKey};
pub use sign::{sign, verify, ElGamalSignature, ElGamalSigning};

/// How many draws the ephemeral-exponent rejection sampler gets before the
/// almost-certainly-terminating loop is declared exhausted
const MAX_SAMPLING_ATTEMPTS: u32 = 4096;

/// Upper bound applied to drawn exponents: min(p-2, 2^256)
fn exponent_upper_bound(p: &BigUint) -> BigUint {
    let cap = BigUint::one() << 256u32;
    let p_minus_two = p - 2u8;
    if p_minus_two < cap {
        p_minus_two
    } else {
        cap
    }
}

/// Draw an exponent uniformly from [2, min(p-2, 2^256)]
pub(crate) fn random_exponent(p: &BigUint) -> BigUint {
    random_in_range(&from_u64(2), &exponent_upper_bound(p))
}

/// Draw a fresh ephemeral exponent k with gcd(k, p-1) = 1 by rejection
/// sampling. Never cached: every encryption and signature draws its own.
pub(crate) fn sample_ephemeral(p: &BigUint) -> Result<BigUint> {
    let p_minus_one = p - 1u8;

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let k = random_exponent(p);
        if gcd(&k, &p_minus_one).is_one() {
            return Ok(k);
        }
    }

    Err(Error::KeyGenerationFailure(format!(
        "no ephemeral exponent coprime to p-1 after {} draws",
        MAX_SAMPLING_ATTEMPTS
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_exponent_range() {
        let p = from_u64(2579);
        for _ in 0..50 {
            let x = random_exponent(&p);
            assert!(x >= from_u64(2));
            assert!(x <= from_u64(2577));
        }
    }

    #[test]
    fn test_ephemeral_is_coprime() {
        let p = from_u64(2579);
        let p_minus_one = &p - 1u8;
        for _ in 0..20 {
            let k = sample_ephemeral(&p).unwrap();
            assert!(gcd(&k, &p_minus_one).is_one());
        }
    }

    #[test]
    fn test_exponent_upper_bound_small_prime() {
        assert_eq!(exponent_upper_bound(&from_u64(2579)), from_u64(2577));
    }
}
