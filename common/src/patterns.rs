//! ファンシーパターンの判定関数
//!
//! 各判定は8桁の数字配列に対する独立した関数。判定は排他的ではなく、
//! 1つのシリアルが複数のパターンに同時に該当する。
//!
//! `PatternKind::DETECTION_ORDER` の順序は、評価額が同じマッチ同士の並び順を決める。

use crate::serial::Digits;

/// 判定可能なパターン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Solid,
    LadderAscending,
    LadderDescending,
    LowSingleDigit,
    HighSevenNines,
    Million,
    LowTwoDigit,
    HighSixNines,
    SuperRepeater,
    SevenInARow,
    LowThreeDigit,
    HighFiveNines,
    DoubleQuad,
    TrueBinary,
    Binary,
    Repeater,
    Radar,
    Anniversary,
    Trinary,
}

impl PatternKind {
    /// 判定順
    pub const DETECTION_ORDER: [PatternKind; 19] = [
        PatternKind::Solid,
        PatternKind::LadderAscending,
        PatternKind::LadderDescending,
        PatternKind::LowSingleDigit,
        PatternKind::HighSevenNines,
        PatternKind::Million,
        PatternKind::LowTwoDigit,
        PatternKind::HighSixNines,
        PatternKind::SuperRepeater,
        PatternKind::SevenInARow,
        PatternKind::LowThreeDigit,
        PatternKind::HighFiveNines,
        PatternKind::DoubleQuad,
        PatternKind::TrueBinary,
        PatternKind::Binary,
        PatternKind::Repeater,
        PatternKind::Radar,
        PatternKind::Anniversary,
        PatternKind::Trinary,
    ];

    /// カタログ上の名前（参照キー）
    pub fn catalog_name(self) -> &'static str {
        match self {
            PatternKind::Solid => "Solid Serial Numbers",
            PatternKind::LadderAscending | PatternKind::LadderDescending => {
                "Perfect Ladder Serial Numbers"
            }
            PatternKind::LowSingleDigit => "Low Serial Numbers (00000001-00000009)",
            PatternKind::HighSevenNines => "High Serial Numbers (9999999X)",
            PatternKind::Million => "Million Serial Numbers",
            PatternKind::LowTwoDigit => "Low Serial Numbers (000000XX)",
            PatternKind::HighSixNines => "High Serial Numbers (999999XX)",
            PatternKind::SuperRepeater => "Super Repeater Serial Numbers",
            PatternKind::SevenInARow => "Seven-In-A-Row Serial Numbers",
            PatternKind::LowThreeDigit => "Low Serial Numbers (00000XXX)",
            PatternKind::HighFiveNines => "High Serial Numbers (99999XXX)",
            PatternKind::DoubleQuad => "Double Quad Serial Numbers",
            PatternKind::TrueBinary => "True Binary Serial Numbers",
            PatternKind::Binary => "Binary Serial Numbers",
            PatternKind::Repeater => "Repeater Serial Numbers",
            PatternKind::Radar => "Radar Serial Numbers",
            PatternKind::Anniversary => "Anniversary/Birthday Serial Numbers",
            PatternKind::Trinary => "Trinary Serial Numbers",
        }
    }

    /// 表示名に付ける接尾辞
    pub fn display_suffix(self) -> Option<&'static str> {
        match self {
            PatternKind::LadderAscending => Some(" (Ascending)"),
            PatternKind::LadderDescending => Some(" (Descending)"),
            _ => None,
        }
    }

    pub fn display_name(self) -> String {
        match self.display_suffix() {
            Some(suffix) => format!("{}{}", self.catalog_name(), suffix),
            None => self.catalog_name().to_string(),
        }
    }

    pub fn matches(self, d: &Digits) -> bool {
        let d = d.as_array();
        match self {
            PatternKind::Solid => is_solid(d),
            PatternKind::LadderAscending => is_ascending_ladder(d),
            PatternKind::LadderDescending => is_descending_ladder(d),
            PatternKind::LowSingleDigit => is_low_single_digit(d),
            PatternKind::HighSevenNines => is_high_seven_nines(d),
            PatternKind::Million => is_million(d),
            PatternKind::LowTwoDigit => is_low_two_digit(d),
            PatternKind::HighSixNines => is_high_six_nines(d),
            PatternKind::SuperRepeater => is_super_repeater(d),
            PatternKind::SevenInARow => is_seven_in_a_row(d),
            PatternKind::LowThreeDigit => is_low_three_digit(d),
            PatternKind::HighFiveNines => is_high_five_nines(d),
            PatternKind::DoubleQuad => is_double_quad(d),
            PatternKind::TrueBinary => is_true_binary(d),
            PatternKind::Binary => is_binary(d),
            PatternKind::Repeater => is_repeater(d),
            PatternKind::Radar => is_radar(d),
            PatternKind::Anniversary => is_anniversary(d),
            PatternKind::Trinary => is_trinary(d),
        }
    }

    /// パターン固有の補正係数（基本式に掛ける）
    pub fn adjustment(self, d: &Digits) -> f64 {
        match self {
            // 降順ラダーの方が希少
            PatternKind::LadderDescending => 1.2,
            // 末尾が小さいほど高い
            PatternKind::LowSingleDigit => 1.0 - (f64::from(d.last()) - 1.0) * 0.1,
            // 末尾が大きいほど高い
            PatternKind::HighSevenNines => 0.9 + f64::from(d.last()) * 0.01,
            PatternKind::Million => 0.8 + f64::from(d.first()) * 0.02,
            _ => 1.0,
        }
    }
}

/// 全パターンを判定順に評価し、該当したものを返す
pub fn detect(digits: &Digits) -> Vec<PatternKind> {
    PatternKind::DETECTION_ORDER
        .into_iter()
        .filter(|kind| kind.matches(digits))
        .collect()
}

fn all_equal(d: &[u8]) -> bool {
    d.windows(2).all(|w| w[0] == w[1])
}

fn all_equal_to(d: &[u8], value: u8) -> bool {
    d.iter().all(|&x| x == value)
}

fn distinct_count(d: &[u8; 8]) -> usize {
    let mut seen = [false; 10];
    for &x in d {
        if let Some(slot) = seen.get_mut(usize::from(x)) {
            *slot = true;
        }
    }
    seen.iter().filter(|&&s| s).count()
}

pub fn is_solid(d: &[u8; 8]) -> bool {
    all_equal(d)
}

pub fn is_ascending_ladder(d: &[u8; 8]) -> bool {
    *d == [1, 2, 3, 4, 5, 6, 7, 8]
}

pub fn is_descending_ladder(d: &[u8; 8]) -> bool {
    *d == [9, 8, 7, 6, 5, 4, 3, 2]
}

/// 00000001〜00000009
pub fn is_low_single_digit(d: &[u8; 8]) -> bool {
    all_equal_to(&d[..7], 0) && (1..=9).contains(&d[7])
}

/// 9999999X
pub fn is_high_seven_nines(d: &[u8; 8]) -> bool {
    all_equal_to(&d[..7], 9)
}

/// 先頭1〜9 + ゼロ7桁
pub fn is_million(d: &[u8; 8]) -> bool {
    (1..=9).contains(&d[0]) && all_equal_to(&d[1..], 0)
}

/// 000000XX
pub fn is_low_two_digit(d: &[u8; 8]) -> bool {
    all_equal_to(&d[..6], 0)
}

/// 999999XX
pub fn is_high_six_nines(d: &[u8; 8]) -> bool {
    all_equal_to(&d[..6], 9)
}

/// ABABABAB
pub fn is_super_repeater(d: &[u8; 8]) -> bool {
    d.chunks(2).all(|pair| pair == &d[..2])
}

/// 同じ数字7連続 + 異なる1桁（先頭側・末尾側どちらでも）
pub fn is_seven_in_a_row(d: &[u8; 8]) -> bool {
    let leading = all_equal(&d[..7]) && d[7] != d[0];
    let trailing = all_equal(&d[1..]) && d[0] != d[1];
    leading || trailing
}

/// 00000XXX
pub fn is_low_three_digit(d: &[u8; 8]) -> bool {
    all_equal_to(&d[..5], 0)
}

/// 99999XXX
pub fn is_high_five_nines(d: &[u8; 8]) -> bool {
    all_equal_to(&d[..5], 9)
}

/// AAAABBBB（A == B も該当）
pub fn is_double_quad(d: &[u8; 8]) -> bool {
    all_equal(&d[..4]) && all_equal(&d[4..])
}

pub fn is_true_binary(d: &[u8; 8]) -> bool {
    d.iter().all(|&x| x <= 1)
}

/// ちょうど2種類の数字
pub fn is_binary(d: &[u8; 8]) -> bool {
    distinct_count(d) == 2
}

/// 前半4桁 == 後半4桁
pub fn is_repeater(d: &[u8; 8]) -> bool {
    d[..4] == d[4..]
}

/// 回文
pub fn is_radar(d: &[u8; 8]) -> bool {
    d.iter().eq(d.iter().rev())
}

/// 先頭4桁が MMDD として成立（月1〜12、日1〜31）
pub fn is_anniversary(d: &[u8; 8]) -> bool {
    let month = u16::from(d[0]) * 10 + u16::from(d[1]);
    let day = u16::from(d[2]) * 10 + u16::from(d[3]);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// ちょうど3種類の数字
pub fn is_trinary(d: &[u8; 8]) -> bool {
    distinct_count(d) == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> [u8; 8] {
        *Digits::parse(s).expect("8桁の数字").as_array()
    }

    fn detected(s: &str) -> Vec<PatternKind> {
        detect(&Digits::parse(s).unwrap())
    }

    // =============================================
    // 個別判定テスト
    // =============================================

    #[test]
    fn test_solid() {
        assert!(is_solid(&digits("11111111")));
        assert!(is_solid(&digits("00000000")));
        assert!(!is_solid(&digits("11111112")));
    }

    #[test]
    fn test_ladders() {
        assert!(is_ascending_ladder(&digits("12345678")));
        assert!(!is_ascending_ladder(&digits("23456789")));
        assert!(is_descending_ladder(&digits("98765432")));
        assert!(!is_descending_ladder(&digits("87654321")));
    }

    #[test]
    fn test_low_single_digit() {
        assert!(is_low_single_digit(&digits("00000001")));
        assert!(is_low_single_digit(&digits("00000009")));
        assert!(!is_low_single_digit(&digits("00000000")));
        assert!(!is_low_single_digit(&digits("00000010")));
    }

    #[test]
    fn test_high_seven_nines() {
        assert!(is_high_seven_nines(&digits("99999990")));
        assert!(is_high_seven_nines(&digits("99999999")));
        assert!(!is_high_seven_nines(&digits("99999989")));
    }

    #[test]
    fn test_million() {
        assert!(is_million(&digits("10000000")));
        assert!(is_million(&digits("90000000")));
        assert!(!is_million(&digits("00000000")));
        assert!(!is_million(&digits("10000001")));
    }

    #[test]
    fn test_low_and_high_blocks() {
        assert!(is_low_two_digit(&digits("00000042")));
        assert!(!is_low_two_digit(&digits("00000142")));
        assert!(is_low_three_digit(&digits("00000142")));
        assert!(!is_low_three_digit(&digits("00001142")));

        assert!(is_high_six_nines(&digits("99999912")));
        assert!(!is_high_six_nines(&digits("99999812")));
        assert!(is_high_five_nines(&digits("99999812")));
        assert!(!is_high_five_nines(&digits("99998812")));
    }

    #[test]
    fn test_super_repeater() {
        assert!(is_super_repeater(&digits("12121212")));
        assert!(is_super_repeater(&digits("55555555")));
        assert!(!is_super_repeater(&digits("12121213")));
        assert!(!is_super_repeater(&digits("12211221")));
    }

    #[test]
    fn test_seven_in_a_row_leading_form() {
        assert!(is_seven_in_a_row(&digits("77777771")));
        assert!(is_seven_in_a_row(&digits("00000001")));
    }

    #[test]
    fn test_seven_in_a_row_trailing_form() {
        assert!(is_seven_in_a_row(&digits("28888888")));
        assert!(is_seven_in_a_row(&digits("10000000")));
    }

    #[test]
    fn test_seven_in_a_row_rejects_solid_and_six() {
        assert!(!is_seven_in_a_row(&digits("77777777")));
        assert!(!is_seven_in_a_row(&digits("77777711")));
        assert!(!is_seven_in_a_row(&digits("17777771")));
    }

    #[test]
    fn test_double_quad() {
        assert!(is_double_quad(&digits("11112222")));
        assert!(is_double_quad(&digits("33333333")));
        assert!(!is_double_quad(&digits("11122222")));
    }

    #[test]
    fn test_binary_family() {
        assert!(is_true_binary(&digits("10110010")));
        assert!(is_true_binary(&digits("11111111")));
        assert!(!is_true_binary(&digits("10110012")));

        assert!(is_binary(&digits("38833383")));
        assert!(is_binary(&digits("10110010")));
        assert!(!is_binary(&digits("11111111")));
        assert!(!is_binary(&digits("12312312")));
    }

    #[test]
    fn test_repeater() {
        assert!(is_repeater(&digits("12341234")));
        assert!(!is_repeater(&digits("12344321")));
    }

    #[test]
    fn test_radar() {
        assert!(is_radar(&digits("12344321")));
        assert!(!is_radar(&digits("12345678")));
    }

    #[test]
    fn test_anniversary() {
        assert!(is_anniversary(&digits("07041776")));
        assert!(is_anniversary(&digits("12311999")));
        assert!(is_anniversary(&digits("01010000")));
        assert!(!is_anniversary(&digits("00151999")));
        assert!(!is_anniversary(&digits("13011999")));
        assert!(!is_anniversary(&digits("12321999")));
        assert!(!is_anniversary(&digits("12001999")));
    }

    #[test]
    fn test_trinary() {
        assert!(is_trinary(&digits("12312312")));
        assert!(!is_trinary(&digits("12341234")));
    }

    #[test]
    fn test_binary_and_trinary_exclusive() {
        for s in ["38833383", "10110010", "12312312", "70170707", "55225252"] {
            let d = digits(s);
            assert!(!(is_binary(&d) && is_trinary(&d)), "{} matched both", s);
        }
    }

    // =============================================
    // 補正係数テスト
    // =============================================

    #[test]
    fn test_adjustment_low_single_digit() {
        let one = Digits::parse("00000001").unwrap();
        let nine = Digits::parse("00000009").unwrap();
        assert_eq!(PatternKind::LowSingleDigit.adjustment(&one), 1.0);
        assert!((PatternKind::LowSingleDigit.adjustment(&nine) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_adjustment_high_and_million() {
        let high = Digits::parse("99999999").unwrap();
        assert!((PatternKind::HighSevenNines.adjustment(&high) - 0.99).abs() < 1e-12);

        let million = Digits::parse("50000000").unwrap();
        assert!((PatternKind::Million.adjustment(&million) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_adjustment_ladders() {
        let d = Digits::parse("12345678").unwrap();
        assert_eq!(PatternKind::LadderAscending.adjustment(&d), 1.0);
        assert_eq!(PatternKind::LadderDescending.adjustment(&d), 1.2);
        assert_eq!(PatternKind::Radar.adjustment(&d), 1.0);
    }

    // =============================================
    // detect テスト
    // =============================================

    #[test]
    fn test_detect_keeps_table_order() {
        let kinds = detected("11111111");
        assert_eq!(
            kinds,
            vec![
                PatternKind::Solid,
                PatternKind::SuperRepeater,
                PatternKind::DoubleQuad,
                PatternKind::TrueBinary,
                PatternKind::Repeater,
                PatternKind::Radar,
                PatternKind::Anniversary,
            ]
        );
    }

    #[test]
    fn test_detect_low_serial_one() {
        let kinds = detected("00000001");
        assert_eq!(
            kinds,
            vec![
                PatternKind::LowSingleDigit,
                PatternKind::LowTwoDigit,
                PatternKind::SevenInARow,
                PatternKind::LowThreeDigit,
                PatternKind::TrueBinary,
                PatternKind::Binary,
            ]
        );
    }

    #[test]
    fn test_detect_nothing() {
        assert!(detected("12345670").is_empty());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            PatternKind::LadderAscending.display_name(),
            "Perfect Ladder Serial Numbers (Ascending)"
        );
        assert_eq!(
            PatternKind::LadderDescending.display_name(),
            "Perfect Ladder Serial Numbers (Descending)"
        );
        assert_eq!(PatternKind::Radar.display_name(), "Radar Serial Numbers");
    }

    /// 0〜9以外の値を含む配列でもパニックしない
    #[test]
    fn test_predicates_total_on_out_of_range_values() {
        assert!(!is_binary(&[1, 2, 3, 4, 5, 6, 7, 42]));
        assert!(!is_trinary(&[255; 8]));
        assert!(!is_anniversary(&[42, 42, 1, 1, 0, 0, 0, 0]));
        assert!(!is_anniversary(&[255; 8]));
    }
}
