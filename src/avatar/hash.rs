//! Seed derivation and the digit helpers every descriptor field is built from.

/// Rolling hash over the UTF-16 code units of `name`.
///
/// Each step is `hash * 31 + c`, wrapped to 32-bit two's complement, so long names
/// overflow the same way on every platform.
pub fn name_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Absolute value of the hash. `i32::MIN` has no positive counterpart in `i32`, its
/// magnitude is `2^31`.
pub fn seed_from_hash(hash: i32) -> u32 {
    hash.unsigned_abs()
}

pub fn seed(name: &str) -> u32 {
    seed_from_hash(name_hash(name))
}

/// Base-10 digit of `n` at `position`, counting from the least significant digit.
pub fn digit(n: u32, position: u32) -> u32 {
    match 10u32.checked_pow(position) {
        Some(divisor) => (n / divisor) % 10,
        None => 0,
    }
}

pub fn bool_at(n: u32, position: u32) -> bool {
    digit(n, position) % 2 == 0
}

/// `n mod range`, negated when the digit at `sign_position` is even.
pub fn unit(n: u32, range: u32, sign_position: Option<u32>) -> i32 {
    // range is always a small positive constant, so the remainder fits in i32
    let value = (n % range) as i32;

    match sign_position {
        Some(position) if digit(n, position) % 2 == 0 => -value,
        _ => value,
    }
}
