use natal_profile::core::{kigaku, numerology, reduce::reduce};
use natal_profile::{compute_kigaku, compute_numerology, BirthDate, NumerologyProfile};

#[test]
fn test_numerology_golden_case() {
    let profile = compute_numerology(1960, 12, 23, "WASSHI", 2026);
    assert_eq!(
        profile,
        NumerologyProfile {
            life_path: 6,
            destiny: 7,
            soul: 1,
            personal_year: 9,
        }
    );
}

#[test]
fn test_kigaku_golden_case() {
    let profile = compute_kigaku(1960, 12, 23, 2026);
    assert_eq!(profile.honmei_star, 4);
    assert_eq!(profile.honmei_name, "四緑木星");
    assert_eq!(profile.current_position, 8);
    assert_eq!(profile.position_name, "艮宮（北東）");
    assert_eq!(
        profile.position_description,
        "艮宮（山・変化）- 転換期、新しい方向性を模索する時"
    );
}

#[test]
fn test_reduce_documented_values() {
    for n in 0..=9 {
        assert_eq!(reduce(n, true), n);
    }
    assert_eq!(reduce(11, true), 11);
    assert_eq!(reduce(11, false), 2);
    assert_eq!(reduce(29, false), 2);
    assert_eq!(reduce(29, true), 11);
}

#[test]
fn test_numbers_stay_in_domain_over_many_dates() {
    let allowed = |n: u32| (1..=9).contains(&n) || [11, 22, 33].contains(&n);
    for year in [1900, 1945, 1960, 1984, 1999, 2000, 2024] {
        for month in 1..=12 {
            for day in [1, 9, 11, 19, 22, 29, 31] {
                let profile = compute_numerology(year, month, day, "Yamada Taro", 2026);
                assert!(allowed(profile.life_path), "{year}-{month}-{day}");
                assert!(allowed(profile.destiny));
                assert!(allowed(profile.soul));
                assert!(allowed(profile.personal_year), "{year}-{month}-{day}");
            }
        }
    }
}

#[test]
fn test_name_without_letters() {
    let profile = compute_numerology(1990, 4, 1, "", 2026);
    assert_eq!(profile.destiny, 0);
    assert_eq!(profile.soul, 0);
    assert_eq!(numerology::destiny("abc"), numerology::destiny("ABC"));
}

#[test]
fn test_february_cutoff() {
    assert_ne!(
        kigaku::honmei_star(2026, 1, 15),
        kigaku::honmei_star(2026, 3, 15)
    );
}

#[test]
fn test_position_cycle_and_range() {
    for year in 1920..2040 {
        let date = BirthDate::new(year, 7, 7);
        for evaluation_year in 2000..2020 {
            let now = compute_kigaku(date.year, date.month, date.day, evaluation_year);
            let later = compute_kigaku(date.year, date.month, date.day, evaluation_year + 9);
            assert!((1..=9).contains(&now.current_position));
            assert_eq!(now.current_position, later.current_position);
            assert!(!now.position_name.is_empty());
        }
    }
}

#[test]
fn test_engines_are_total_on_odd_input() {
    // day 31 in a 30-day month, year 0
    let numerology = compute_numerology(0, 4, 31, "!!", 0);
    let kigaku = compute_kigaku(0, 4, 31, 0);
    assert_eq!(numerology.destiny, 0);
    assert!((1..=9).contains(&kigaku.honmei_star));
    assert!((1..=9).contains(&kigaku.current_position));
}
