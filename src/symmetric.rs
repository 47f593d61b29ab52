// Symmetric Cipher Collaborator
// AES-256-CBC with PKCS#7 padding, consuming Diffie-Hellman key material

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::{thread_rng, RngCore};

use crate::error::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256 key size in bytes
pub const KEY_SIZE: usize = 32;

/// CBC initialization vector size in bytes
pub const IV_SIZE: usize = 16;

/// Encrypt plaintext with AES-256-CBC and PKCS#7 padding
pub fn encrypt(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE], plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Encrypt with a freshly random IV, returned alongside the ciphertext for
/// transmission. The IV is never reused across encryptions.
pub fn encrypt_with_fresh_iv(key: &[u8; KEY_SIZE], plaintext: &[u8]) -> (Vec<u8>, [u8; IV_SIZE]) {
    let mut iv = [0u8; IV_SIZE];
    thread_rng().fill_bytes(&mut iv);

    (encrypt(key, &iv, plaintext), iv)
}

/// Decrypt AES-256-CBC ciphertext and strip the PKCS#7 padding
pub fn decrypt(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::DecodingError("invalid AES-CBC padding".to_string()))
}
