//! エラー型定義
//!
//! - `Error`: レスポンス解析の失敗
//! - `AuditError`: 送信1回分の失敗（UIに出すのは `user_message()` のみ）

use thiserror::Error;

/// ファイル未選択時のメッセージ
pub const NO_FILE_MESSAGE: &str = "Please upload an image.";

/// 通信・解析失敗時の共通メッセージ
pub const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 送信失敗の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 送信前の入力チェックで弾いたもの
    Validation,
    /// HTTPステータス・通信・レスポンス解析の失敗
    Transport,
}

/// 送信1回分の失敗
///
/// 詳細はログ/オブザーバ向け。画面には `user_message()` だけを出す。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuditError {
    #[error("no image selected")]
    NoFileSelected,

    #[error("server returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl AuditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuditError::NoFileSelected => ErrorKind::Validation,
            AuditError::Status(_) | AuditError::Transport(_) | AuditError::Parse(_) => {
                ErrorKind::Transport
            }
        }
    }

    /// 画面表示用メッセージ
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => NO_FILE_MESSAGE,
            ErrorKind::Transport => ANALYZE_FAILED_MESSAGE,
        }
    }
}

impl From<Error> for AuditError {
    fn from(err: Error) -> Self {
        AuditError::Parse(err.to_string())
    }
}
