//! シリアル番号の検証と分解
//!
//! 形式: 英字1文字 + 数字8桁 + 英字1文字または `*`（スターノート）
//!
//! 先頭文字はA〜L（連邦準備銀行コード）に限定せず、A〜Zを受け付ける。

use crate::error::{Error, Result};
use crate::types::{Condition, Denomination};
use regex::Regex;

lazy_static::lazy_static! {
    static ref SERIAL_RE: Regex = Regex::new(r"^[A-Z][0-9]{8}[A-Z*]$").unwrap();
}

/// シリアル番号の形式チェック
///
/// # Examples
/// ```
/// use fancy_serial_common::is_valid_serial;
///
/// assert!(is_valid_serial("A12345678B"));
/// assert!(is_valid_serial("A12345678*"));
/// assert!(!is_valid_serial("a12345678b"));
/// ```
pub fn is_valid_serial(raw: &str) -> bool {
    SERIAL_RE.is_match(raw)
}

/// 数字8桁（各要素0〜9）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits([u8; 8]);

impl Digits {
    /// 8桁の数字文字列から生成（形式不正ならNone）
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let mut digits = [0u8; 8];
        for (slot, b) in digits.iter_mut().zip(bytes) {
            *slot = b - b'0';
        }
        Some(Self(digits))
    }

    pub fn as_array(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn first(&self) -> u8 {
        self.0[0]
    }

    pub fn last(&self) -> u8 {
        self.0[7]
    }
}

impl std::fmt::Display for Digits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// 1回の判定リクエスト
///
/// `parse` / `parse_lenient` でのみ生成し、変更しない。denomination/conditionが
/// Noneの場合は既定の係数（額面1.0、状態0.5）で評価する。
#[derive(Debug, Clone, PartialEq)]
pub struct SerialQuery {
    raw_serial: String,
    digits: Digits,
    denomination: Option<Denomination>,
    condition: Option<Condition>,
    is_star: bool,
}

impl SerialQuery {
    pub fn parse(
        raw: &str,
        denomination: Denomination,
        condition: Condition,
    ) -> Result<Self> {
        Self::parse_with(raw, Some(denomination), Some(condition))
    }

    /// 未知の額面・状態ラベルを許容する版（既定係数にフォールバック）
    pub fn parse_lenient(raw: &str, denomination: &str, condition: &str) -> Result<Self> {
        Self::parse_with(raw, denomination.parse().ok(), condition.parse().ok())
    }

    fn parse_with(
        raw: &str,
        denomination: Option<Denomination>,
        condition: Option<Condition>,
    ) -> Result<Self> {
        if !is_valid_serial(raw) {
            return Err(Error::InvalidFormat(raw.to_string()));
        }

        let digits = Digits::parse(&raw[1..9]).ok_or_else(|| Error::InvalidFormat(raw.to_string()))?;

        Ok(Self {
            raw_serial: raw.to_string(),
            digits,
            denomination,
            condition,
            is_star: raw.ends_with('*'),
        })
    }

    pub fn raw_serial(&self) -> &str {
        &self.raw_serial
    }

    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    pub fn denomination(&self) -> Option<Denomination> {
        self.denomination
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub fn is_star(&self) -> bool {
        self.is_star
    }

    pub fn prefix(&self) -> char {
        self.raw_serial.chars().next().unwrap_or_default()
    }

    pub fn suffix(&self) -> char {
        self.raw_serial.chars().last().unwrap_or_default()
    }
}
