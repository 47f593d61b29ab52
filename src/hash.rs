// Hash Registry
// Named digest algorithms for the signature engines, with the documented
// unsupported-name fallback

use md4::Md4;
use md5::Md5;
use num_bigint::BigUint;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::codec::bytes_to_integer;

/// The full algorithm name table. Names without an implementation below
/// resolve through the fallback in [`HashAlgorithm::from_name`].
pub const ALGORITHM_NAMES: [&str; 24] = [
    "MD4", "MD5", "MD2", "MD6-128", "MD6-256", "MD6-512",
    "SHA-1", "SHA-224", "SHA-256", "SHA-384", "SHA-512",
    "SHA3-224", "SHA3-256", "SHA3-384", "SHA3-512",
    "RipeMD-128", "RipeMD-160", "RipeMD-256", "RipeMD-320",
    "Whirlpool", "NTLM", "Haval192,3", "Haval224,4", "Haval256,4",
];

/// Implemented digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md4,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Resolve an algorithm name from the table.
    ///
    /// Unknown or unimplemented names fall back to SHA-256 with a warning,
    /// never a hard failure; "NTLM" resolves to MD4.
    pub fn from_name(name: &str) -> HashAlgorithm {
        match name {
            "MD4" | "NTLM" => HashAlgorithm::Md4,
            "MD5" => HashAlgorithm::Md5,
            "SHA-1" => HashAlgorithm::Sha1,
            "SHA-224" => HashAlgorithm::Sha224,
            "SHA-256" => HashAlgorithm::Sha256,
            "SHA-384" => HashAlgorithm::Sha384,
            "SHA-512" => HashAlgorithm::Sha512,
            other => {
                tracing::warn!("{} not supported, using SHA-256", other);
                HashAlgorithm::Sha256
            }
        }
    }

    /// Compute the digest of a byte sequence
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md4 => Md4::digest(data).to_vec(),
            HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// Compute the digest and read it as a big-endian integer
    pub fn digest_to_integer(&self, data: &[u8]) -> BigUint {
        bytes_to_integer(&self.digest(data))
    }
}
