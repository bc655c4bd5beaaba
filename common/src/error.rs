//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid serial number format: {0:?} (expected e.g. A12345678B or A12345678*)")]
    InvalidFormat(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Catalog is missing pattern(s): {}", .0.join(", "))]
    MissingPattern(Vec<String>),

    #[error("Unknown denomination: {0} (use 1, 2, 5, 10, 20, 50 or 100)")]
    UnknownDenomination(String),

    #[error("Unknown condition: {0} (use uncirculated, excellent, fine, fair or poor)")]
    UnknownCondition(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
