// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod sign;

pub use decrypt::{decrypt, decrypt_to_text};
pub use encrypt::{encrypt, encrypt_text};
pub use keygen::{generate_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use sign::{sign, verify, RsaSignature};
