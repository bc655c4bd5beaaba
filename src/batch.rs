//! シリアル番号の一括判定
//!
//! 入力ファイルは1行1件。空行と `#` で始まる行は無視する。
//! 判定は rayon で並列化し、出力は入力順を保つ。

use crate::checker::check_serial;
use crate::error::{FancySerialError, Result};
use fancy_serial_common::{ClassificationResult, Classifier, Condition, Denomination};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// 1行分の判定結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    /// 入力ファイルの行番号（1始まり）
    pub line: usize,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ClassificationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn is_fancy(&self) -> bool {
        self.result
            .as_ref()
            .map(|r| !r.is_face_value())
            .unwrap_or(false)
    }
}

/// 集計
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub invalid: usize,
    pub fancy: usize,
    pub total_estimated_value: u64,
}

/// 入力テキストから判定対象の行を抽出（行番号付き）
pub fn parse_lines(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| (n, line.to_string()))
        .collect()
}

pub fn check_lines(
    classifier: &Classifier,
    lines: &[(usize, String)],
    denomination: Denomination,
    condition: Condition,
) -> Vec<BatchEntry> {
    lines
        .par_iter()
        .map(|(line, input)| match check_serial(classifier, input, denomination, condition) {
            Ok(result) => BatchEntry {
                line: *line,
                input: input.clone(),
                result: Some(result),
                error: None,
            },
            Err(e) => {
                tracing::debug!(line, input = %input, error = %e, "invalid serial in batch");
                BatchEntry {
                    line: *line,
                    input: input.clone(),
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

pub fn check_file(
    classifier: &Classifier,
    path: &Path,
    denomination: Denomination,
    condition: Condition,
) -> Result<Vec<BatchEntry>> {
    if !path.exists() {
        return Err(FancySerialError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let lines = parse_lines(&content);
    tracing::debug!(count = lines.len(), path = %path.display(), "batch input loaded");

    Ok(check_lines(classifier, &lines, denomination, condition))
}

pub fn summarize(entries: &[BatchEntry]) -> BatchSummary {
    entries.iter().fold(
        BatchSummary {
            total: entries.len(),
            ..Default::default()
        },
        |mut summary, entry| {
            match &entry.result {
                Some(result) => {
                    if !result.is_face_value() {
                        summary.fancy += 1;
                    }
                    summary.total_estimated_value = summary
                        .total_estimated_value
                        .saturating_add(result.estimated_value);
                }
                None => summary.invalid += 1,
            }
            summary
        },
    )
}
