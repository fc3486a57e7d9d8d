//! Weighted modulus-11 check character ("módulo 11").
//!
//! ```text
//! sum = Σ digit[i] * [2,3,4,5,6,7][i mod 6]   (i = 0 is the least-significant digit)
//! r   = 11 - (sum mod 11)
//! r == 11 -> '0', r == 10 -> 'k', else the digit r
//! ```

use crate::limits::{CHECK_MODULUS, CHECK_WEIGHTS};

/// Computes the expected check character for a body.
///
/// Zero is not a RUT body; callers reject it before getting here. For zero
/// the digit sum is empty and the result is `'0'`.
pub fn compute_check_character(body: u32) -> char {
    let mut rest = body;
    let mut sum = 0u32;
    let mut i = 0;
    while rest > 0 {
        sum += CHECK_WEIGHTS[i % CHECK_WEIGHTS.len()] * (rest % 10);
        rest /= 10;
        i += 1;
    }
    check_character_from_remainder(CHECK_MODULUS - sum % CHECK_MODULUS)
}

fn check_character_from_remainder(r: u32) -> char {
    match r {
        11 => '0',
        10 => 'k',
        // r is in 1..=9 here
        _ => char::from_digit(r, 10).unwrap_or('0'),
    }
}

/// Returns true if `c` is a check character as stored (`0-9` or lowercase `k`).
#[inline]
pub fn is_check_character(c: char) -> bool {
    c.is_ascii_digit() || c == 'k'
}
