use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiasAuditError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("監査に失敗しました: {0}")]
    Audit(#[from] bias_audit_common::AuditError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] bias_audit_common::Error),
}

pub type Result<T> = std::result::Result<T, BiasAuditError>;
