use thiserror::Error;

#[derive(Error, Debug)]
pub enum FancySerialError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("シリアル番号の形式が不正です: {0}（例: A12345678B / A12345678*）")]
    InvalidSerial(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] fancy_serial_common::Error),
}

pub type Result<T> = std::result::Result<T, FancySerialError>;
