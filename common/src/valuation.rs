//! 評価額の計算
//!
//! 基本式:
//! `(min + max) / 2 × 状態係数 × 額面係数 × スター係数 × パターン補正`

use crate::catalog::PatternDefinition;
use crate::types::{Condition, Denomination};

/// スターノートのプレミアム
pub const STAR_FACTOR: f64 = 1.5;

/// 状態が不明な場合の係数（fine相当）
pub const DEFAULT_CONDITION_FACTOR: f64 = 0.5;

/// 額面が不明な場合の係数
pub const DEFAULT_DENOMINATION_FACTOR: f64 = 1.0;

pub fn condition_factor(condition: Option<Condition>) -> f64 {
    condition.map_or(DEFAULT_CONDITION_FACTOR, Condition::factor)
}

pub fn denomination_factor(denomination: Option<Denomination>) -> f64 {
    denomination.map_or(DEFAULT_DENOMINATION_FACTOR, Denomination::factor)
}

pub fn star_factor(is_star: bool) -> f64 {
    if is_star {
        STAR_FACTOR
    } else {
        1.0
    }
}

/// パターン補正前の評価額
pub fn pattern_value(
    pattern: &PatternDefinition,
    denomination: Option<Denomination>,
    condition: Option<Condition>,
    is_star: bool,
) -> f64 {
    pattern.value_range.midpoint()
        * condition_factor(condition)
        * denomination_factor(denomination)
        * star_factor(is_star)
}
