use crate::core::reduce::{is_vowel, letter_value, reduce};
use crate::domain::model::NumerologyProfile;

/// Year, month and day are reduced on their own first, then their sum is
/// reduced again. Reducing the raw sum in one go gives different answers
/// once master numbers are involved.
pub fn life_path(year: i32, month: u32, day: u32) -> u32 {
    let total = reduce(year.unsigned_abs(), true) + reduce(month, true) + reduce(day, true);
    reduce(total, true)
}

pub fn destiny(name: &str) -> u32 {
    letter_total(name.chars())
}

pub fn soul(name: &str) -> u32 {
    letter_total(name.chars().filter(|c| is_vowel(*c)))
}

// 以 u64 累加，超長名字也不會溢位
fn letter_total(letters: impl Iterator<Item = char>) -> u32 {
    let mut total: u64 = letters.map(|c| u64::from(letter_value(c))).sum();
    while total > u64::from(u32::MAX) {
        total = digit_sum_u64(total);
    }
    reduce(total as u32, true)
}

fn digit_sum_u64(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

pub fn personal_year(month: u32, day: u32, evaluation_year: i32) -> u32 {
    let total =
        reduce(month, true) + reduce(day, true) + reduce(evaluation_year.unsigned_abs(), true);
    reduce(total, true)
}

pub fn profile(
    year: i32,
    month: u32,
    day: u32,
    name: &str,
    evaluation_year: i32,
) -> NumerologyProfile {
    let profile = NumerologyProfile {
        life_path: life_path(year, month, day),
        destiny: destiny(name),
        soul: soul(name),
        personal_year: personal_year(month, day, evaluation_year),
    };
    tracing::debug!(?profile, "numerology profile computed");
    profile
}
