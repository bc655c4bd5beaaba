//! 入力メタデータの型定義
//!
//! CLIと将来のWebシェルで共有される型:
//! - Denomination: 額面（$1〜$100）
//! - Condition: 紙幣の状態

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// 額面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Denomination {
    #[default]
    One,
    Two,
    Five,
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl Denomination {
    pub const ALL: [Denomination; 7] = [
        Denomination::One,
        Denomination::Two,
        Denomination::Five,
        Denomination::Ten,
        Denomination::Twenty,
        Denomination::Fifty,
        Denomination::Hundred,
    ];

    /// ドル額面
    pub fn face_value(self) -> u32 {
        match self {
            Denomination::One => 1,
            Denomination::Two => 2,
            Denomination::Five => 5,
            Denomination::Ten => 10,
            Denomination::Twenty => 20,
            Denomination::Fifty => 50,
            Denomination::Hundred => 100,
        }
    }

    pub fn from_face_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.face_value() == value)
    }

    /// 評価係数（$2/$50/$100はプレミアム、$20は流通量が多く割引）
    pub fn factor(self) -> f64 {
        match self {
            Denomination::One => 1.0,
            Denomination::Two => 1.2,
            Denomination::Five => 1.1,
            Denomination::Ten => 1.0,
            Denomination::Twenty => 0.9,
            Denomination::Fifty => 1.2,
            Denomination::Hundred => 1.3,
        }
    }
}

impl TryFrom<u32> for Denomination {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_face_value(value).ok_or_else(|| Error::UnknownDenomination(value.to_string()))
    }
}

impl From<Denomination> for u32 {
    fn from(value: Denomination) -> Self {
        value.face_value()
    }
}

impl std::str::FromStr for Denomination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('$');
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::from_face_value)
            .ok_or_else(|| Error::UnknownDenomination(s.to_string()))
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.face_value())
    }
}

/// 紙幣の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    Uncirculated,
    Excellent,
    Fine,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Uncirculated,
        Condition::Excellent,
        Condition::Fine,
        Condition::Fair,
        Condition::Poor,
    ];

    /// 評価係数（未使用品 = 1.0）
    pub fn factor(self) -> f64 {
        match self {
            Condition::Uncirculated => 1.0,
            Condition::Excellent => 0.7,
            Condition::Fine => 0.5,
            Condition::Fair => 0.3,
            Condition::Poor => 0.1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Uncirculated => "uncirculated",
            Condition::Excellent => "excellent",
            Condition::Fine => "fine",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uncirculated" | "unc" => Ok(Condition::Uncirculated),
            "excellent" | "xf" => Ok(Condition::Excellent),
            "fine" | "f" => Ok(Condition::Fine),
            "fair" => Ok(Condition::Fair),
            "poor" => Ok(Condition::Poor),
            _ => Err(Error::UnknownCondition(s.to_string())),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Denomination テスト
    // =============================================

    #[test]
    fn test_denomination_parse() {
        assert_eq!("1".parse::<Denomination>().unwrap(), Denomination::One);
        assert_eq!("$2".parse::<Denomination>().unwrap(), Denomination::Two);
        assert_eq!(" 100 ".parse::<Denomination>().unwrap(), Denomination::Hundred);
    }

    #[test]
    fn test_denomination_parse_unknown() {
        assert!(matches!(
            "3".parse::<Denomination>(),
            Err(Error::UnknownDenomination(_))
        ));
        assert!("abc".parse::<Denomination>().is_err());
    }

    #[test]
    fn test_denomination_factor_table() {
        let factors: Vec<f64> = Denomination::ALL.iter().map(|d| d.factor()).collect();
        assert_eq!(factors, vec![1.0, 1.2, 1.1, 1.0, 0.9, 1.2, 1.3]);
    }

    #[test]
    fn test_denomination_serde() {
        let json = serde_json::to_string(&Denomination::Fifty).unwrap();
        assert_eq!(json, "50");

        let parsed: Denomination = serde_json::from_str("20").unwrap();
        assert_eq!(parsed, Denomination::Twenty);

        assert!(serde_json::from_str::<Denomination>("3").is_err());
    }

    #[test]
    fn test_denomination_display() {
        assert_eq!(Denomination::Hundred.to_string(), "$100");
    }

    // =============================================
    // Condition テスト
    // =============================================

    #[test]
    fn test_condition_parse() {
        assert_eq!("Uncirculated".parse::<Condition>().unwrap(), Condition::Uncirculated);
        assert_eq!("fine".parse::<Condition>().unwrap(), Condition::Fine);
        assert!(matches!(
            "mint".parse::<Condition>(),
            Err(Error::UnknownCondition(_))
        ));
    }

    #[test]
    fn test_condition_factor_strictly_decreasing() {
        let factors: Vec<f64> = Condition::ALL.iter().map(|c| c.factor()).collect();
        assert_eq!(factors, vec![1.0, 0.7, 0.5, 0.3, 0.1]);
        assert!(factors.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_condition_serde() {
        let json = serde_json::to_string(&Condition::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
        let parsed: Condition = serde_json::from_str("\"poor\"").unwrap();
        assert_eq!(parsed, Condition::Poor);
    }
}
