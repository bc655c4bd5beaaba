//! テキスト出力の整形
//!
//! 通貨表記（桁区切り）はここでのみ行う。判定器は数値だけを返す。

use fancy_serial_common::catalog::{PatternDefinition, TierInfo, ValueFactor};
use fancy_serial_common::stats::{RarityGroup, TierBucket, ValuePoint};
use fancy_serial_common::{valuation, ClassificationResult};
use std::fmt::Write;

/// 1234567 → "$1,234,567"
pub fn format_dollars(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// 小数の金額（評価額の内訳用）
pub fn format_dollars_f64(value: f64) -> String {
    let whole = value.max(0.0).round() as u64;
    format_dollars(whole)
}

/// 価格帯の表示（ティア1で上限が10,000超なら "$min+"）
pub fn format_value_range(pattern: &PatternDefinition) -> String {
    let range = pattern.value_range;
    if range.min == range.max {
        format_dollars(range.min)
    } else if range.max > 10_000 && pattern.tier == 1 {
        format!("{}+", format_dollars(range.min))
    } else {
        format!("{} - {}", format_dollars(range.min), format_dollars(range.max))
    }
}

pub fn render_result(result: &ClassificationResult) -> String {
    let mut out = String::new();

    let denomination = result
        .denomination
        .map(|d| d.to_string())
        .unwrap_or_else(|| "不明".to_string());
    let condition = result
        .condition
        .map(|c| c.to_string())
        .unwrap_or_else(|| "不明".to_string());

    writeln!(out, "シリアル: {}{}", result.serial, if result.is_star { " ★スターノート" } else { "" }).ok();
    writeln!(
        out,
        "額面: {}  状態: {} (係数 {:.1})  額面係数: {:.1}",
        denomination,
        condition,
        result.condition_factor,
        valuation::denomination_factor(result.denomination)
    )
    .ok();
    writeln!(out).ok();

    if result.is_face_value() {
        writeln!(out, "該当するパターンはありません（額面どおりの価値）").ok();
        return out;
    }

    writeln!(out, "該当パターン: {}件", result.matched_patterns.len()).ok();
    for (i, m) in result.matched_patterns.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} [Tier {}] {}",
            i + 1,
            m.pattern_name,
            m.tier,
            format_dollars_f64(m.base_value)
        )
        .ok();
        if !m.description.is_empty() {
            writeln!(out, "     {}", m.description).ok();
        }
    }
    writeln!(out).ok();
    writeln!(out, "推定評価額: {}", format_dollars(result.estimated_value)).ok();

    out
}

pub fn render_patterns(patterns: &[&PatternDefinition]) -> String {
    let mut out = String::new();

    if patterns.is_empty() {
        writeln!(out, "条件に一致するパターンはありません").ok();
        return out;
    }

    for p in patterns {
        writeln!(out, "[Tier {}] {}  {}", p.tier, p.name, format_value_range(p)).ok();
        if !p.description.is_empty() {
            writeln!(out, "    {}", p.description).ok();
        }
        if !p.rarity.level.is_empty() {
            writeln!(out, "    希少度: {} ({})", p.rarity.level, p.rarity.statistical_chance).ok();
        }
        if !p.examples.is_empty() {
            writeln!(out, "    例: {}", p.examples.join(", ")).ok();
        }
    }
    writeln!(out, "\n{}件", patterns.len()).ok();

    out
}

pub fn render_tier(tier: &TierInfo, members: &[&PatternDefinition]) -> String {
    let mut out = String::new();
    writeln!(out, "Tier {}: {} ({})", tier.tier, tier.name, tier.value_range).ok();
    if !tier.description.is_empty() {
        writeln!(out, "  {}", tier.description).ok();
    }
    for p in members {
        writeln!(out, "  - {}  {}", p.name, format_value_range(p)).ok();
    }
    out
}

pub fn render_value_factors(factors: &[ValueFactor]) -> String {
    let mut out = String::new();
    if factors.is_empty() {
        return out;
    }
    writeln!(out, "評価要因:").ok();
    for f in factors {
        writeln!(out, "  - {}: {}", f.name, f.description).ok();
    }
    out
}

pub fn render_stats(values: &[ValuePoint], rarity: &[RarityGroup], tiers: &[TierBucket]) -> String {
    let mut out = String::new();

    writeln!(out, "価格比較（最低 / 平均 / 最高）:").ok();
    for v in values {
        writeln!(
            out,
            "  {}: {} / {} / {}",
            v.name,
            format_dollars(v.min),
            format_dollars_f64(v.average),
            format_dollars(v.max)
        )
        .ok();
    }

    writeln!(out, "\n希少度別（指標 / 件数 / 平均値）:").ok();
    for g in rarity {
        writeln!(
            out,
            "  {} ({}): {}件 / {}",
            g.level,
            g.score,
            g.count,
            format_dollars_f64(g.average_value)
        )
        .ok();
    }

    writeln!(out, "\nティア別（件数 / 平均値）:").ok();
    for t in tiers {
        writeln!(
            out,
            "  Tier {} {}: {}件 / {}",
            t.tier,
            t.name,
            t.count,
            format_dollars_f64(t.average_value)
        )
        .ok();
    }

    out
}
