// Public-Key Cryptographic Primitives
// RSA, ElGamal and Diffie-Hellman over arbitrary-precision integers

pub mod bigint;
pub mod codec;
pub mod dh;
pub mod elgamal;
pub mod error;
pub mod hash;
pub mod rsa;
pub mod symmetric;

pub use codec::{integer_to_text, text_to_integer};
pub use error::{Error, Result};
pub use hash::HashAlgorithm;
