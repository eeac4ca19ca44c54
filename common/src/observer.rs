//! 送信結果の通知フック
//!
//! 画面には汎用メッセージしか出さないため、失敗の詳細はここで受け取ってログ等に流す。

use crate::error::AuditError;
use crate::types::AuditResult;

pub trait AuditObserver {
    /// 送信開始
    fn on_submit(&self, _file_name: &str) {}

    fn on_success(&self, _result: &AuditResult) {}

    fn on_failure(&self, error: &AuditError);
}

/// 何もしないオブザーバ
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AuditObserver for NoopObserver {
    fn on_failure(&self, _error: &AuditError) {}
}
