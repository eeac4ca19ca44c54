//! アップロード画面の状態とその遷移
//!
//! 状態は `AuditState` 1つにまとめ、UIイベントごとに `apply` で遷移させる。
//! 通信はここでは行わず、必要なときだけ `Command::Upload` を返す。

use crate::error::AuditError;
use crate::types::AuditResult;

/// 送信のライフサイクル
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded(AuditResult),
    Failed(AuditError),
}

/// UIイベント
#[derive(Debug, Clone)]
pub enum AuditEvent<F> {
    /// 選択キャンセル・空のファイル一覧では `None`
    FileSelected(Option<F>),
    SubmitRequested,
    UploadSucceeded(AuditResult),
    UploadFailed(AuditError),
}

/// 呼び出し側が実行すべき処理
#[derive(Debug, Clone, PartialEq)]
pub enum Command<F> {
    Upload(F),
}

/// 画面状態
///
/// `F` はファイルハンドル（CLIでは読み込み済み画像、Webでは `web_sys::File`）
#[derive(Debug, Clone)]
pub struct AuditState<F> {
    file: Option<F>,
    phase: Phase,
}

impl<F> Default for AuditState<F> {
    fn default() -> Self {
        Self {
            file: None,
            phase: Phase::Idle,
        }
    }
}

impl<F: Clone> AuditState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを適用して状態を進める
    pub fn apply(&mut self, event: AuditEvent<F>) -> Option<Command<F>> {
        match event {
            AuditEvent::FileSelected(file) => {
                self.file = file;
                // 送信中の結果はそのまま受け取る
                if !self.is_loading() {
                    self.phase = Phase::Idle;
                }
                None
            }
            AuditEvent::SubmitRequested => {
                if self.is_loading() {
                    return None;
                }
                match &self.file {
                    None => {
                        self.phase = Phase::Failed(AuditError::NoFileSelected);
                        None
                    }
                    Some(file) => {
                        self.phase = Phase::Submitting;
                        Some(Command::Upload(file.clone()))
                    }
                }
            }
            AuditEvent::UploadSucceeded(result) => {
                if self.is_loading() {
                    self.phase = Phase::Succeeded(result);
                }
                None
            }
            AuditEvent::UploadFailed(error) => {
                if self.is_loading() {
                    self.phase = Phase::Failed(error);
                }
                None
            }
        }
    }
}

impl<F> AuditState<F> {
    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn result(&self) -> Option<&AuditResult> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AuditError> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// 画面に出すエラーメッセージ
    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(AuditError::user_message)
    }
}
