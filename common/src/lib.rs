//! Fancy Serial Common Library
//!
//! 米国紙幣シリアル番号のファンシーパターン判定・評価額計算と、
//! パターンカタログの参照・絞り込み・集計。

pub mod types;
pub mod error;
pub mod serial;
pub mod catalog;
pub mod patterns;
pub mod valuation;
pub mod classifier;
pub mod filter;
pub mod stats;

pub use types::{Condition, Denomination};
pub use error::{Error, Result};
pub use serial::{is_valid_serial, Digits, SerialQuery};
pub use catalog::{Catalog, PatternDefinition, Rarity, TierInfo, ValueFactor, ValueRange};
pub use patterns::PatternKind;
pub use classifier::{aggregate, ClassificationResult, Classifier, PatternMatch};
pub use filter::{filter_patterns, sort_for_display, FilterCriteria};
