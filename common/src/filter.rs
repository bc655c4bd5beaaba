//! カタログの絞り込み・並べ替え
//!
//! 検索語・ティア・価格帯・パターン種別・希少度で絞り込む。
//! 条件を指定しない項目は絞り込みに使わない。

use crate::catalog::PatternDefinition;
use serde::{Deserialize, Serialize};

/// 絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// 名前・説明・例・検索タグに対する部分一致（大文字小文字を区別しない）
    pub search: Option<String>,
    pub tier: Option<u8>,
    /// 価格帯 [lo, hi] と重なるもの
    pub value_range: Option<(u64, u64)>,
    /// 検索タグのいずれかを含むもの（solid, ladder, binary など）
    pub pattern_types: Vec<String>,
    /// 希少度スラッグ（"extremely-rare" など、"all" は指定なし扱い）
    pub rarity: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.tier.is_none()
            && self.value_range.is_none()
            && self.pattern_types.is_empty()
            && self.rarity.as_deref().map_or(true, |r| r == "all")
    }

    pub fn matches(&self, pattern: &PatternDefinition) -> bool {
        if let Some(search) = self.search.as_deref() {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !matches_search(pattern, &needle) {
                return false;
            }
        }

        if let Some(tier) = self.tier {
            if pattern.tier != tier {
                return false;
            }
        }

        if let Some((lo, hi)) = self.value_range {
            if !pattern.value_range.overlaps(lo, hi) {
                return false;
            }
        }

        if !self.pattern_types.is_empty()
            && !self
                .pattern_types
                .iter()
                .any(|t| pattern.search_terms.iter().any(|term| term == t))
        {
            return false;
        }

        if let Some(rarity) = self.rarity.as_deref() {
            if rarity != "all" && rarity_slug(&pattern.rarity.level) != rarity {
                return false;
            }
        }

        true
    }
}

fn matches_search(pattern: &PatternDefinition, needle: &str) -> bool {
    pattern.name.to_lowercase().contains(needle)
        || pattern.description.to_lowercase().contains(needle)
        || pattern
            .examples
            .iter()
            .any(|ex| ex.to_lowercase().contains(needle))
        || pattern
            .search_terms
            .iter()
            .any(|term| term.to_lowercase().contains(needle))
}

/// "Extremely Rare" → "extremely-rare"
pub fn rarity_slug(level: &str) -> String {
    level
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// 条件に一致するパターンを返す（元の順序を保持）
pub fn filter_patterns<'a>(
    patterns: &'a [PatternDefinition],
    criteria: &FilterCriteria,
) -> Vec<&'a PatternDefinition> {
    patterns.iter().filter(|p| criteria.matches(p)).collect()
}

/// 表示順: ティア昇順 → 最高値降順
pub fn sort_for_display(patterns: &mut [&PatternDefinition]) {
    patterns.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| b.value_range.max.cmp(&a.value_range.max))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(patterns: &[&PatternDefinition]) -> Vec<String> {
        patterns.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(filter_patterns(catalog.patterns(), &criteria).len(), catalog.len());
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria {
            search: Some("RADAR".to_string()),
            ..Default::default()
        };
        let result = filter_patterns(catalog.patterns(), &criteria);
        assert!(names(&result).contains(&"Radar Serial Numbers".to_string()));
        assert!(!names(&result).contains(&"Solid Serial Numbers".to_string()));
    }

    #[test]
    fn test_search_examples() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria {
            search: Some("a12344321b".to_string()),
            ..Default::default()
        };
        let result = filter_patterns(catalog.patterns(), &criteria);
        assert_eq!(names(&result), vec!["Radar Serial Numbers".to_string()]);
    }

    #[test]
    fn test_blank_search_ignored() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(filter_patterns(catalog.patterns(), &criteria).len(), catalog.len());
    }

    #[test]
    fn test_filter_by_tier() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria {
            tier: Some(1),
            ..Default::default()
        };
        let result = filter_patterns(catalog.patterns(), &criteria);
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.tier == 1));
    }

    #[test]
    fn test_filter_by_value_range() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria {
            value_range: Some((0, 10)),
            ..Default::default()
        };
        let result = filter_patterns(catalog.patterns(), &criteria);
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.value_range.min <= 10));
    }

    #[test]
    fn test_filter_by_pattern_types() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria {
            pattern_types: vec!["ladder".to_string(), "radar".to_string()],
            ..Default::default()
        };
        let result = filter_patterns(catalog.patterns(), &criteria);
        let result_names = names(&result);
        assert!(result_names.contains(&"Perfect Ladder Serial Numbers".to_string()));
        assert!(result_names.contains(&"Radar Serial Numbers".to_string()));
        assert!(!result_names.contains(&"Solid Serial Numbers".to_string()));
    }

    #[test]
    fn test_filter_by_rarity() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria {
            rarity: Some("extremely-rare".to_string()),
            ..Default::default()
        };
        let result = filter_patterns(catalog.patterns(), &criteria);
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.rarity.level == "Extremely Rare"));

        let all = FilterCriteria {
            rarity: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_patterns(catalog.patterns(), &all).len(), catalog.len());
    }

    #[test]
    fn test_combined_criteria() {
        let catalog = Catalog::builtin().unwrap();
        let criteria = FilterCriteria {
            tier: Some(2),
            pattern_types: vec!["repeater".to_string()],
            ..Default::default()
        };
        let result = filter_patterns(catalog.patterns(), &criteria);
        assert_eq!(names(&result), vec!["Super Repeater Serial Numbers".to_string()]);
    }

    #[test]
    fn test_rarity_slug() {
        assert_eq!(rarity_slug("Extremely Rare"), "extremely-rare");
        assert_eq!(rarity_slug("Somewhat Common"), "somewhat-common");
        assert_eq!(rarity_slug("Common"), "common");
    }

    #[test]
    fn test_sort_for_display() {
        let catalog = Catalog::builtin().unwrap();
        let mut patterns: Vec<&PatternDefinition> = catalog.patterns().iter().rev().collect();
        sort_for_display(&mut patterns);

        assert!(patterns.windows(2).all(|w| {
            w[0].tier < w[1].tier
                || (w[0].tier == w[1].tier && w[0].value_range.max >= w[1].value_range.max)
        }));
        // ティア1で最高値が最大のもの
        assert_eq!(patterns[0].name, "Low Serial Numbers (00000001-00000009)");
    }
}
