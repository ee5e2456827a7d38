//! Fixed nine-star tables. Index 0 holds entry 1.

pub const STAR_NAMES: [&str; 9] = [
    "一白水星",
    "二黒土星",
    "三碧木星",
    "四緑木星",
    "五黄土星",
    "六白金星",
    "七赤金星",
    "八白土星",
    "九紫火星",
];

pub const PALACE_NAMES: [&str; 9] = [
    "坎宮（北）",
    "坤宮（南西）",
    "震宮（東）",
    "巽宮（南東）",
    "中宮（中央）",
    "乾宮（北西）",
    "兌宮（西）",
    "艮宮（北東）",
    "離宮（南）",
];

pub const PALACE_DESCRIPTIONS: [&str; 9] = [
    "坎宮（冬・水の時期）- 静かに力を蓄える、内省と準備の時",
    "坤宮（大地・母性）- 周囲をサポート、基盤を固める時",
    "震宮（春・雷）- 新しい挑戦を始める、行動開始の時",
    "巽宮（風・調整）- 人間関係を広げ、情報を集める時",
    "中宮（中心・停滞）- 慎重に行動、自己を見つめ直す時",
    "乾宮（天・権威）- リーダーシップを発揮、目標達成の時",
    "兌宮（秋・収穫）- 成果を楽しむ、コミュニケーションの時",
    "艮宮（山・変化）- 転換期、新しい方向性を模索する時",
    "離宮（夏・頂点）- 最も運気が高まる、表舞台に立つ時",
];

/// Palace reached by a star sitting `offset` steps from the yearly center
/// star, following the magic-square flight order. Not derivable by formula.
pub const POSITION_OFFSETS: [u8; 9] = [5, 6, 2, 4, 9, 1, 8, 3, 7];

/// The center palace, also the fallback for offsets outside the table.
pub const CENTER_PALACE: u8 = 5;

fn lookup(table: &[&'static str; 9], number: u8) -> Option<&'static str> {
    let index = usize::from(number).checked_sub(1)?;
    table.get(index).copied()
}

pub fn star_name(star: u8) -> Option<&'static str> {
    lookup(&STAR_NAMES, star)
}

pub fn palace_name(palace: u8) -> Option<&'static str> {
    lookup(&PALACE_NAMES, palace)
}

pub fn palace_description(palace: u8) -> Option<&'static str> {
    lookup(&PALACE_DESCRIPTIONS, palace)
}

pub fn palace_for_offset(offset: u32) -> u8 {
    usize::try_from(offset)
        .ok()
        .and_then(|i| POSITION_OFFSETS.get(i).copied())
        .unwrap_or(CENTER_PALACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_cover_one_to_nine() {
        for n in 1..=9u8 {
            assert!(star_name(n).is_some());
            assert!(palace_name(n).is_some());
            assert!(palace_description(n).is_some());
        }
        assert_eq!(star_name(0), None);
        assert_eq!(palace_name(10), None);
        assert_eq!(palace_description(0), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(star_name(1), Some("一白水星"));
        assert_eq!(star_name(9), Some("九紫火星"));
        assert_eq!(palace_name(5), Some("中宮（中央）"));
        assert_eq!(palace_name(8), Some("艮宮（北東）"));
    }

    #[test]
    fn test_offset_table_is_a_permutation() {
        let mut palaces = POSITION_OFFSETS.to_vec();
        palaces.sort_unstable();
        assert_eq!(palaces, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_offset_fallback() {
        assert_eq!(palace_for_offset(0), 5);
        assert_eq!(palace_for_offset(4), 9);
        assert_eq!(palace_for_offset(8), 7);
        assert_eq!(palace_for_offset(9), CENTER_PALACE);
        assert_eq!(palace_for_offset(u32::MAX), CENTER_PALACE);
    }
}
