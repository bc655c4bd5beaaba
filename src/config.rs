use crate::error::{FancySerialError, Result};
use fancy_serial_common::{Catalog, Classifier, Condition, Denomination};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログファイルを指定する環境変数（設定ファイルより優先）
pub const CATALOG_ENV: &str = "FANCY_SERIAL_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// カスタムカタログ（未指定なら組み込みカタログ）
    pub catalog_path: Option<PathBuf>,
    /// 判定器が参照するパターンがカタログに無ければ起動時にエラー
    pub strict_catalog: bool,
    pub default_denomination: Denomination,
    pub default_condition: Condition,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            strict_catalog: false,
            default_denomination: Denomination::One,
            default_condition: Condition::Uncirculated,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FancySerialError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("fancy-serial").join("config.json"))
    }

    /// 使用するカタログのパス（環境変数を優先）
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        match std::env::var(CATALOG_ENV) {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => self.catalog_path.clone(),
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.resolved_catalog_path() {
            Some(path) => {
                if !path.exists() {
                    return Err(FancySerialError::FileNotFound(path.display().to_string()));
                }
                tracing::debug!(path = %path.display(), "loading custom catalog");
                Ok(Catalog::from_file(&path)?)
            }
            None => Ok(Catalog::builtin()?),
        }
    }

    /// カタログを読み込み、判定器を構築（起動時に一度だけ）
    pub fn build_classifier(&self) -> Result<Classifier> {
        let catalog = self.load_catalog()?;
        Ok(Classifier::new(catalog, self.strict_catalog)?)
    }

    /// カタログのパスを設定（絶対パスに正規化して保存）
    pub fn set_catalog(&mut self, path: Option<PathBuf>) -> Result<()> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(FancySerialError::FileNotFound(p.display().to_string()));
                }
                let absolute = std::fs::canonicalize(&p)?;
                // 保存前に読み込めることを確認
                Catalog::from_file(&absolute)?;
                Some(absolute)
            }
            None => None,
        };
        self.catalog_path = path;
        Ok(())
    }
}
