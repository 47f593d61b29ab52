// Big Integer Operations
// Modular arithmetic kernel shared by the RSA, ElGamal and Diffie-Hellman engines

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::thread_rng;

use crate::error::{Error, Result};

/// Create a big integer from u64
pub fn from_u64(n: u64) -> BigUint {
    BigUint::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &BigUint) -> Vec<u8> {
    n.to_bytes_be()
}

/// Greatest common divisor; non-negative for any inputs
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply; exp = 0 yields 1 mod modulus
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Compute the modular inverse: a^(-1) mod m, with the result in [0, m).
///
/// Iterative extended Euclidean algorithm. The intermediate coefficients are
/// signed, so the result needs a final correction back into [0, m) before it
/// is returned.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_one() {
        return Ok(BigUint::zero());
    }
    if gcd(a, m) != BigUint::one() {
        return Err(Error::NotInvertible);
    }

    let m0 = BigInt::from(m.clone());
    let mut a = BigInt::from(a.clone());
    let mut m = m0.clone();
    let mut x0 = BigInt::zero();
    let mut x1 = BigInt::one();

    while a > BigInt::one() {
        let q = &a / &m;
        let r = &a % &m;
        a = std::mem::replace(&mut m, r);

        let next_x0 = &x1 - &q * &x0;
        x1 = std::mem::replace(&mut x0, next_x0);
    }

    if x1.is_negative() {
        x1 += &m0;
    }

    // gcd(a, m) = 1 guarantees x1 landed in [0, m0)
    Ok(x1.magnitude().clone())
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime(n: &BigUint, iterations: u32) -> bool {
    if n < &BigUint::from(2u8) {
        return false;
    }
    if n == &BigUint::from(2u8) || n == &BigUint::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let mut d = n.clone() - 1u8;
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    // Witness loop
    let mut rng = thread_rng();
    let two = BigUint::from(2u8);
    let n_minus_two = n - BigUint::from(2u8);

    for _ in 0..iterations {
        // Pick random witness a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_two);

        // Compute x = a^d mod n
        let mut x = mod_pow(&a, &d, n);

        if x == BigUint::one() || x == n - 1u8 {
            continue;
        }

        let mut continue_outer = false;
        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n - 1u8 {
                continue_outer = true;
                break;
            }
        }

        if continue_outer {
            continue;
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Generate a random prime of specified bit length
pub fn random_prime(bit_length: u64) -> BigUint {
    let mut rng = thread_rng();
    let mut prime;

    loop {
        // Generate random number with specified bit length
        let lower = BigUint::from(1u8) << (bit_length - 1);
        let upper = (BigUint::from(1u8) << bit_length) - 1u8;

        prime = rng.gen_biguint_range(&lower, &upper);

        // Make it odd
        if prime.is_even() {
            prime += 1u8;
        }

        // Check primality
        if is_probable_prime(&prime, 10) {
            break;
        }
    }

    prime
}

/// Draw a random integer from the inclusive range [low, high]
pub fn random_in_range(low: &BigUint, high: &BigUint) -> BigUint {
    let mut rng = thread_rng();
    rng.gen_biguint_range(low, &(high + 1u8))
}
