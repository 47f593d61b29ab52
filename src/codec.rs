// Integer Codec
// Text to arbitrary-precision integer encoding used as the message representation

use num_bigint::BigUint;

use crate::bigint::from_bytes;
use crate::error::{Error, Result};

/// Interpret a byte sequence as a big-endian integer.
///
/// Equivalent to hex-encoding the bytes and reading the digits as one number.
pub fn bytes_to_integer(bytes: &[u8]) -> BigUint {
    from_bytes(bytes)
}

/// Encode text as the big-endian integer of its bytes
pub fn text_to_integer(text: &str) -> BigUint {
    bytes_to_integer(text.as_bytes())
}

/// Decode an integer back into the byte sequence it came from.
///
/// The hex digits of the value are left-padded to an even count and decoded
/// pairwise. Leading zero bytes of the original input are absorbed by the
/// integer representation and cannot be restored; round-tripping is only
/// guaranteed for integers produced by [`bytes_to_integer`] from input without
/// leading zeros.
pub fn integer_to_bytes(value: &BigUint) -> Result<Vec<u8>> {
    let mut hex_string = value.to_str_radix(16);
    if hex_string.len() % 2 != 0 {
        hex_string.insert(0, '0');
    }

    hex::decode(&hex_string).map_err(|e| Error::DecodingError(e.to_string()))
}

/// Decode an integer back into text
pub fn integer_to_text(value: &BigUint) -> Result<String> {
    let bytes = integer_to_bytes(value)?;
    String::from_utf8(bytes).map_err(|e| Error::DecodingError(e.to_string()))
}
