use crate::core::catalog;
use crate::domain::model::KigakuProfile;

/// 1901 is a 九紫火星 year; the birth star steps back by one each year.
const STAR_BASE_YEAR: i32 = 1901;
const STAR_BASE: i32 = 9;

/// 2026 has 七赤金星 in the center of the yearly board.
const CENTER_BASE_YEAR: i32 = 2026;
const CENTER_BASE: i32 = 7;

/// Steps `base` back one star per year away from `base_year`, landing in 1..=9.
fn cycle_back(year: i32, base_year: i32, base: i32) -> i32 {
    let diff = i64::from(year) - i64::from(base_year);
    // rem_euclid keeps the offset in 0..9 for years before the base
    let mut star = base - diff.rem_euclid(9) as i32;
    if star <= 0 {
        star += 9;
    }
    star
}

/// Birth star for a date. January and February 1-3 count toward the
/// previous year (a fixed stand-in for the 立春 boundary).
pub fn honmei_star(year: i32, month: u32, day: u32) -> u8 {
    let year = if month == 1 || (month == 2 && day <= 3) {
        year.saturating_sub(1)
    } else {
        year
    };
    cycle_back(year, STAR_BASE_YEAR, STAR_BASE) as u8
}

/// Star sitting in the center of the board for `evaluation_year`.
pub fn center_star(evaluation_year: i32) -> u8 {
    cycle_back(evaluation_year, CENTER_BASE_YEAR, CENTER_BASE) as u8
}

pub fn current_position(honmei_star: u8, evaluation_year: i32) -> u8 {
    let center = center_star(evaluation_year);
    let offset = (i32::from(honmei_star) - i32::from(center)).rem_euclid(9) as u32;
    catalog::palace_for_offset(offset)
}

pub fn position_description(position: u8) -> &'static str {
    catalog::palace_description(position).unwrap_or_default()
}

pub fn profile(year: i32, month: u32, day: u32, evaluation_year: i32) -> KigakuProfile {
    let honmei = honmei_star(year, month, day);
    let position = current_position(honmei, evaluation_year);
    tracing::debug!(honmei, position, evaluation_year, "kigaku profile computed");

    KigakuProfile {
        honmei_star: honmei,
        honmei_name: catalog::star_name(honmei).unwrap_or_default().to_string(),
        current_position: position,
        position_name: catalog::palace_name(position).unwrap_or_default().to_string(),
        position_description: position_description(position).to_string(),
    }
}
