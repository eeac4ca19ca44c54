mod client;

pub use client::AuditClient;

use crate::scanner::ImageFile;
use async_trait::async_trait;
use bias_audit_common::{
    AuditError, AuditEvent, AuditObserver, AuditResult, AuditState, Command,
};

/// 画像を監査APIに送る
#[async_trait]
pub trait Uploader {
    async fn upload(&self, image: &ImageFile) -> Result<AuditResult, AuditError>;
}

/// アップロード画面1つ分の状態と送信処理
pub struct AuditSession<U, O> {
    state: AuditState<ImageFile>,
    uploader: U,
    observer: O,
}

impl<U: Uploader, O: AuditObserver> AuditSession<U, O> {
    pub fn new(uploader: U, observer: O) -> Self {
        Self {
            state: AuditState::new(),
            uploader,
            observer,
        }
    }

    pub fn state(&self) -> &AuditState<ImageFile> {
        &self.state
    }

    pub fn select_file(&mut self, image: ImageFile) {
        self.state.apply(AuditEvent::FileSelected(Some(image)));
    }

    /// 送信して結果を状態に反映する
    ///
    /// ファイル未選択ならAPIを呼ばずにエラー状態になる。
    pub async fn submit(&mut self) -> &AuditState<ImageFile> {
        match self.state.apply(AuditEvent::SubmitRequested) {
            Some(Command::Upload(image)) => {
                self.observer.on_submit(&image.file_name);

                let event = match self.uploader.upload(&image).await {
                    Ok(result) => {
                        self.observer.on_success(&result);
                        AuditEvent::UploadSucceeded(result)
                    }
                    Err(error) => {
                        self.observer.on_failure(&error);
                        AuditEvent::UploadFailed(error)
                    }
                };
                self.state.apply(event);
            }
            None => {
                if let Some(error) = self.state.error() {
                    self.observer.on_failure(error);
                }
            }
        }

        &self.state
    }
}

/// tracingに流すオブザーバ
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AuditObserver for TracingObserver {
    fn on_submit(&self, file_name: &str) {
        tracing::info!(file = file_name, "submitting image for audit");
    }

    fn on_success(&self, result: &AuditResult) {
        tracing::debug!(result = %result.to_value(), "audit result received");
    }

    fn on_failure(&self, error: &AuditError) {
        tracing::error!(kind = ?error.kind(), %error, "audit failed");
    }
}
