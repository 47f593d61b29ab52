// ElGamal Key Generation
// Builds key pairs from caller-supplied domain parameters (p, g)

use num_bigint::BigUint;

use crate::bigint::mod_pow;

use super::random_exponent;

/// ElGamal Public Key: the domain parameters plus y = g^x mod p
#[derive(Debug, Clone, PartialEq)]
pub struct ElGamalPublicKey {
    pub p: BigUint, // Prime modulus
    pub g: BigUint, // Generator
    pub y: BigUint, // Public value g^x mod p
}

/// ElGamal Private Key
///
/// Carries the domain parameters alongside the secret exponent so that
/// signing and decryption need nothing beyond the key itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ElGamalPrivateKey {
    pub p: BigUint, // Prime modulus
    pub g: BigUint, // Generator
    pub x: BigUint, // Secret exponent
}

/// ElGamal Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct ElGamalKeyPair {
    pub public_key: ElGamalPublicKey,
    pub private_key: ElGamalPrivateKey,
}

impl ElGamalPublicKey {
    /// Get the bit length of the prime modulus
    pub fn bit_length(&self) -> u64 {
        self.p.bits()
    }
}

/// Generate an ElGamal key pair from domain parameters.
///
/// p is trusted to be prime and g to be a usable generator; neither is
/// re-validated here. The secret exponent x is drawn uniformly from
/// [2, min(p-2, 2^256)], and y = g^x mod p.
pub fn generate_keypair(p: &BigUint, g: &BigUint) -> ElGamalKeyPair {
    let x = random_exponent(p);
    let y = mod_pow(g, &x, p);

    let public_key = ElGamalPublicKey {
        p: p.clone(),
        g: g.clone(),
        y,
    };
    let private_key = ElGamalPrivateKey {
        p: p.clone(),
        g: g.clone(),
        x,
    };

    ElGamalKeyPair {
        public_key,
        private_key,
    }
}
