// ElGamal Encryption Implementation
// c1 = g^k mod p, c2 = y^k * m mod p with a fresh ephemeral k per message

use num_bigint::BigUint;

use crate::bigint::mod_pow;
use crate::error::{Error, Result};

use super::keygen::ElGamalPublicKey;
use super::sample_ephemeral;

/// An ElGamal ciphertext pair, each component in [0, p)
#[derive(Debug, Clone, PartialEq)]
pub struct ElGamalCiphertext {
    pub c1: BigUint,
    pub c2: BigUint,
}

/// Result of an encryption: the ciphertext plus the ephemeral exponent that
/// produced it, exposed for inspection rather than printed
#[derive(Debug, Clone)]
pub struct ElGamalEncryption {
    pub ciphertext: ElGamalCiphertext,
    /// The ephemeral exponent drawn for this message; never reused
    pub k: BigUint,
}

/// Encrypt a message integer under an ElGamal public key.
///
/// The message must be smaller than p. Every call draws a fresh k with
/// gcd(k, p-1) = 1; reusing k across messages breaks confidentiality.
pub fn encrypt(m: &BigUint, public_key: &ElGamalPublicKey) -> Result<ElGamalEncryption> {
    if m >= &public_key.p {
        return Err(Error::MessageTooLarge {
            message_bits: m.bits(),
            modulus_bits: public_key.p.bits(),
        });
    }

    let k = sample_ephemeral(&public_key.p)?;

    // c1 = g^k mod p
    let c1 = mod_pow(&public_key.g, &k, &public_key.p);

    // c2 = (y^k * m) mod p
    let y_power_k = mod_pow(&public_key.y, &k, &public_key.p);
    let c2 = (y_power_k * m) % &public_key.p;

    Ok(ElGamalEncryption {
        ciphertext: ElGamalCiphertext { c1, c2 },
        k,
    })
}
