//! シリアル番号の判定と評価額の集計
//!
//! 処理フロー:
//! 1. 形式チェック（`SerialQuery::parse`）
//! 2. 全パターンを判定順に評価し、該当ごとに評価額を計算
//! 3. 評価額の降順に安定ソートし、2件目以降は逓減ボーナスとして加算

use crate::catalog::Catalog;
use crate::error::Result;
use crate::patterns::{self, PatternKind};
use crate::serial::SerialQuery;
use crate::types::{Condition, Denomination};
use crate::valuation;
use serde::Serialize;

/// 2件目以降のマッチに掛けるボーナス率
pub const ADDITIONAL_MATCH_RATE: f64 = 0.1;

/// 該当パターン1件
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMatch {
    #[serde(skip)]
    pub kind: PatternKind,
    /// 表示名（ラダーは "(Ascending)" / "(Descending)" 付き）
    pub pattern_name: String,
    pub tier: u8,
    pub description: String,
    pub base_value: f64,
}

/// 判定結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// 数字8桁
    pub serial: String,
    pub denomination: Option<Denomination>,
    pub condition: Option<Condition>,
    pub is_star: bool,
    pub condition_factor: f64,
    /// 評価額の降順
    pub matched_patterns: Vec<PatternMatch>,
    /// 推定評価額（ドル、整数）
    pub estimated_value: u64,
}

impl ClassificationResult {
    /// どのパターンにも該当しない（額面どおりの価値）
    pub fn is_face_value(&self) -> bool {
        self.matched_patterns.is_empty()
    }

    pub fn contains(&self, kind: PatternKind) -> bool {
        self.matched_patterns.iter().any(|m| m.kind == kind)
    }
}

/// 判定器
///
/// カタログは構築後に変更しないため、複数スレッドから `&Classifier` を共有できる。
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Catalog,
}

impl Classifier {
    /// `strict` が true の場合、判定器が参照するパターンが欠けていれば構築時にエラー。
    /// false の場合は判定時に該当パターンを読み飛ばす。
    pub fn new(catalog: Catalog, strict: bool) -> Result<Self> {
        if strict {
            catalog.ensure_complete()?;
        } else {
            for name in catalog.missing_classifier_patterns() {
                tracing::warn!(pattern = name, "catalog has no entry; matches will be skipped");
            }
        }
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// シリアル文字列を検証してから判定
    pub fn check(
        &self,
        raw_serial: &str,
        denomination: Denomination,
        condition: Condition,
    ) -> Result<ClassificationResult> {
        let query = SerialQuery::parse(raw_serial, denomination, condition)?;
        Ok(self.classify(&query))
    }

    /// 検証済みクエリを判定
    pub fn classify(&self, query: &SerialQuery) -> ClassificationResult {
        let mut matches = self.detect_matches(query);
        let estimated_value = aggregate(&mut matches);

        ClassificationResult {
            serial: query.digits().to_string(),
            denomination: query.denomination(),
            condition: query.condition(),
            is_star: query.is_star(),
            condition_factor: valuation::condition_factor(query.condition()),
            matched_patterns: matches,
            estimated_value,
        }
    }

    /// 判定順に該当パターンを評価（未ソート）
    fn detect_matches(&self, query: &SerialQuery) -> Vec<PatternMatch> {
        patterns::detect(query.digits())
            .into_iter()
            .filter_map(|kind| {
                let Some(definition) = self.catalog.get(kind.catalog_name()) else {
                    tracing::warn!(
                        pattern = kind.catalog_name(),
                        serial = %query.digits(),
                        "pattern matched but is missing from catalog, skipped"
                    );
                    return None;
                };

                let base_value = valuation::pattern_value(
                    definition,
                    query.denomination(),
                    query.condition(),
                    query.is_star(),
                ) * kind.adjustment(query.digits());

                tracing::debug!(pattern = %kind.display_name(), base_value, "pattern matched");

                Some(PatternMatch {
                    kind,
                    pattern_name: kind.display_name(),
                    tier: definition.tier,
                    description: definition.description.clone(),
                    base_value,
                })
            })
            .collect()
    }
}

/// マッチを評価額の降順に並べ替え、推定評価額を返す
///
/// 1件目は評価額そのまま、i件目（i ≥ 1）は `round(base_value × 0.1 / i)` を加算。
/// 評価額が同じ場合は判定順を保つ（安定ソート）。
pub fn aggregate(matches: &mut [PatternMatch]) -> u64 {
    matches.sort_by(|a, b| b.base_value.total_cmp(&a.base_value));

    let Some((first, rest)) = matches.split_first() else {
        return 0;
    };

    let mut total = round_dollars(first.base_value);
    for (i, m) in rest.iter().enumerate() {
        let position = (i + 1) as f64;
        let bonus = round_dollars(m.base_value * ADDITIONAL_MATCH_RATE / position);
        total = total.saturating_add(bonus);
    }
    total
}

/// 0未満は0として丸める
fn round_dollars(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
