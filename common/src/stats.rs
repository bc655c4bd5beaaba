//! カタログ統計
//!
//! 価格比較・希少度別・ティア別の集計値。描画は呼び出し側の責務。

use crate::catalog::{PatternDefinition, TierInfo};
use serde::Serialize;

/// 希少度の表示順
pub const RARITY_LEVELS: [&str; 6] = [
    "Extremely Rare",
    "Very Rare",
    "Rare",
    "Uncommon",
    "Somewhat Common",
    "Common",
];

/// 価格比較で表示する件数の既定値
pub const DEFAULT_COMPARISON_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    pub name: String,
    pub min: u64,
    pub average: f64,
    pub max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RarityGroup {
    pub level: String,
    /// 希少度の指標（0〜100）
    pub score: u8,
    pub count: usize,
    pub average_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBucket {
    pub tier: u8,
    pub name: String,
    pub count: usize,
    pub average_value: f64,
}

/// 希少度の指標（0〜100）
pub fn rarity_score(level: &str) -> u8 {
    match level {
        "Extremely Rare" => 95,
        "Very Rare" => 80,
        "Rare" => 65,
        "Uncommon" => 45,
        "Somewhat Common" => 25,
        "Common" | "Common (specific dates can be rare)" => 10,
        _ => 50,
    }
}

/// 先頭 `limit` 件の最低・平均・最高値
pub fn value_comparison(patterns: &[&PatternDefinition], limit: usize) -> Vec<ValuePoint> {
    patterns
        .iter()
        .take(limit)
        .map(|p| ValuePoint {
            name: p.name.clone(),
            min: p.value_range.min,
            average: p.value_range.midpoint(),
            max: p.value_range.max,
        })
        .collect()
}

/// 希少度ごとの件数と平均値（該当なしは0）
pub fn rarity_breakdown(patterns: &[&PatternDefinition]) -> Vec<RarityGroup> {
    RARITY_LEVELS
        .iter()
        .map(|&level| {
            let group: Vec<&PatternDefinition> = patterns
                .iter()
                .copied()
                .filter(|p| p.rarity.level == level)
                .collect();
            RarityGroup {
                level: level.to_string(),
                score: rarity_score(level),
                count: group.len(),
                average_value: average_midpoint(&group),
            }
        })
        .collect()
}

/// ティアごとの件数と平均値
pub fn tier_distribution(patterns: &[&PatternDefinition], tiers: &[TierInfo]) -> Vec<TierBucket> {
    tiers
        .iter()
        .map(|tier| {
            let group: Vec<&PatternDefinition> = patterns
                .iter()
                .copied()
                .filter(|p| p.tier == tier.tier)
                .collect();
            TierBucket {
                tier: tier.tier,
                name: tier.name.clone(),
                count: group.len(),
                average_value: average_midpoint(&group),
            }
        })
        .collect()
}

fn average_midpoint(patterns: &[&PatternDefinition]) -> f64 {
    if patterns.is_empty() {
        return 0.0;
    }
    let total: f64 = patterns.iter().map(|p| p.value_range.midpoint()).sum();
    total / patterns.len() as f64
}
