//! パターン・ティアのリファレンスカタログ
//!
//! 起動時に一度だけ読み込み、以降は読み取り専用で共有する。
//! 読み込み時にティア範囲・価格帯・名前の重複を検証する。

use crate::error::{Error, Result};
use crate::patterns::PatternKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 組み込みデータセット
const BUILTIN_CATALOG: &str = include_str!("../data/patterns.json");

pub const MIN_TIER: u8 = 1;
pub const MAX_TIER: u8 = 6;

/// 価格帯の上限（米ドル）。これを超えるカタログは読み込み時に拒否する
pub const MAX_VALUE: u64 = 1_000_000_000;

/// 価格帯（米ドル、整数）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u64,
    pub max: u64,
}

impl ValueRange {
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }

    /// [lo, hi] と重なるか
    pub fn overlaps(&self, lo: u64, hi: u64) -> bool {
        self.min <= hi && self.max >= lo
    }
}

/// 希少度
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rarity {
    pub level: String,
    pub statistical_chance: String,
}

/// パターン定義
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternDefinition {
    pub name: String,
    pub tier: u8,
    pub value_range: ValueRange,
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub examples: Vec<String>,

    #[serde(default)]
    pub search_terms: Vec<String>,

    #[serde(default)]
    pub rarity: Rarity,

    #[serde(default)]
    pub rarity_factors: Vec<String>,
}

/// ティア情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierInfo {
    pub tier: u8,
    pub name: String,
    /// 表示用の価格帯（例: "$1,000+"）
    #[serde(default)]
    pub value_range: String,
    #[serde(default)]
    pub description: String,
}

/// 評価要因の説明
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueFactor {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tiers: Vec<TierInfo>,
    patterns: Vec<PatternDefinition>,
    #[serde(default)]
    value_factors: Vec<ValueFactor>,
}

/// 検証済みカタログ
#[derive(Debug, Clone)]
pub struct Catalog {
    patterns: Vec<PatternDefinition>,
    tiers: Vec<TierInfo>,
    value_factors: Vec<ValueFactor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// 組み込みカタログを読み込み
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.patterns, file.tiers, file.value_factors)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn new(
        patterns: Vec<PatternDefinition>,
        tiers: Vec<TierInfo>,
        value_factors: Vec<ValueFactor>,
    ) -> Result<Self> {
        let mut index = HashMap::with_capacity(patterns.len());

        for (i, pattern) in patterns.iter().enumerate() {
            check_tier(pattern.tier, &pattern.name)?;

            if pattern.value_range.min > pattern.value_range.max {
                return Err(Error::InvalidCatalog(format!(
                    "{}: value_range.min ({}) > value_range.max ({})",
                    pattern.name, pattern.value_range.min, pattern.value_range.max
                )));
            }

            if pattern.value_range.max > MAX_VALUE {
                return Err(Error::InvalidCatalog(format!(
                    "{}: value_range.max ({}) exceeds {}",
                    pattern.name, pattern.value_range.max, MAX_VALUE
                )));
            }

            if index.insert(pattern.name.clone(), i).is_some() {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate pattern name: {}",
                    pattern.name
                )));
            }
        }

        for tier in &tiers {
            check_tier(tier.tier, &tier.name)?;
        }

        tracing::debug!(
            patterns = patterns.len(),
            tiers = tiers.len(),
            "catalog loaded"
        );

        Ok(Self {
            patterns,
            tiers,
            value_factors,
            index,
        })
    }

    /// 名前で完全一致検索
    pub fn get(&self, name: &str) -> Option<&PatternDefinition> {
        self.index.get(name).map(|&i| &self.patterns[i])
    }

    pub fn patterns(&self) -> &[PatternDefinition] {
        &self.patterns
    }

    pub fn tiers(&self) -> &[TierInfo] {
        &self.tiers
    }

    pub fn tier(&self, tier: u8) -> Option<&TierInfo> {
        self.tiers.iter().find(|t| t.tier == tier)
    }

    pub fn value_factors(&self) -> &[ValueFactor] {
        &self.value_factors
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// 判定器が参照するのにカタログに存在しない名前
    pub fn missing_classifier_patterns(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = PatternKind::DETECTION_ORDER
            .iter()
            .map(|kind| kind.catalog_name())
            .filter(|name| self.get(name).is_none())
            .collect();
        missing.dedup();
        missing
    }

    /// 判定器が参照する全パターンが揃っているか検証
    pub fn ensure_complete(&self) -> Result<()> {
        let missing = self.missing_classifier_patterns();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingPattern(
                missing.into_iter().map(String::from).collect(),
            ))
        }
    }
}

fn check_tier(tier: u8, name: &str) -> Result<()> {
    if (MIN_TIER..=MAX_TIER).contains(&tier) {
        Ok(())
    } else {
        Err(Error::InvalidCatalog(format!(
            "{}: tier {} is outside {}..={}",
            name, tier, MIN_TIER, MAX_TIER
        )))
    }
}
