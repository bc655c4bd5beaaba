//! 入力文字列からの判定
//!
//! 前後の空白を除去してから判定器に渡す。形式エラーはCLI用のエラーに変換する。

use crate::error::{FancySerialError, Result};
use fancy_serial_common::{ClassificationResult, Classifier, Condition, Denomination, Error, SerialQuery};

pub fn check_serial(
    classifier: &Classifier,
    input: &str,
    denomination: Denomination,
    condition: Condition,
) -> Result<ClassificationResult> {
    let query = SerialQuery::parse(input.trim(), denomination, condition).map_err(|e| match e {
        Error::InvalidFormat(raw) => FancySerialError::InvalidSerial(raw),
        other => other.into(),
    })?;
    tracing::debug!(
        prefix = %query.prefix(),
        suffix = %query.suffix(),
        star = query.is_star(),
        "serial parsed"
    );
    Ok(classifier.classify(&query))
}
