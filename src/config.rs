use crate::error::{BiasAuditError, Result};
use bias_audit_common::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "BIAS_AUDIT_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    /// 未設定ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// 読み込めなければ警告を出してデフォルトを使う
    ///
    /// 壊れた設定ファイルでも `config --set-endpoint` で上書きできるようにする。
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "config path unavailable; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to load config; using defaults");
            Self::default()
        })
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
            .ok_or_else(|| BiasAuditError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("bias-audit").join("config.json"))
    }

    /// 使用するエンドポイント（環境変数を優先）
    pub fn get_endpoint(&self) -> String {
        self.resolve_endpoint(std::env::var(ENDPOINT_ENV).ok().as_deref())
    }

    /// 上書き値が空白のみなら保存済みの値を使う
    pub fn resolve_endpoint(&self, override_value: Option<&str>) -> String {
        match override_value {
            Some(endpoint) if !endpoint.trim().is_empty() => endpoint.to_string(),
            _ => self.endpoint.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        validate_endpoint(&endpoint)?;
        self.endpoint = endpoint;
        Ok(())
    }
}

/// エンドポイントがhttp(s)のURLか確認
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(BiasAuditError::Config(format!(
            "エンドポイントはhttp(s)のURLで指定してください: {}",
            endpoint
        )));
    }
    Ok(())
}
