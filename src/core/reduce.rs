//! Digit reduction and the Pythagorean letter table shared by the
//! numerology calculations.

/// Numbers that stay unreduced when `keep_master` is set.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Sums decimal digits until the value is at most 9.
///
/// With `keep_master`, the current value is checked against
/// [`MASTER_NUMBERS`] before every pass, so a value that reaches 11, 22 or
/// 33 partway through is returned as is.
pub fn reduce(mut n: u32, keep_master: bool) -> u32 {
    while n > 9 {
        if keep_master && MASTER_NUMBERS.contains(&n) {
            return n;
        }
        n = digit_sum(n);
    }
    n
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8. Other alphabetic characters (kana,
/// kanji, accented letters) follow the same formula over their uppercase
/// code point. Non-alphabetic characters are worth 0.
pub fn letter_value(c: char) -> u32 {
    if !c.is_alphabetic() {
        return 0;
    }
    let upper = c.to_uppercase().next().unwrap_or(c);
    let index = i64::from(u32::from(upper)) - i64::from(u32::from('A'));
    // rem_euclid(9) + 1 is always 1..=9
    (index.rem_euclid(9) + 1) as u32
}

pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}
