//! 監査APIクライアント（multipart送信）

use super::Uploader;
use crate::scanner::ImageFile;
use async_trait::async_trait;
use bias_audit_common::{parse_audit_response, AuditError, AuditResult, FILE_FIELD};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct AuditClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AuditClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AuditError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AuditError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(image: &ImageFile) -> Result<Form, AuditError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| AuditError::Transport(format!("invalid mime type: {}", e)))?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

#[async_trait]
impl Uploader for AuditClient {
    async fn upload(&self, image: &ImageFile) -> Result<AuditResult, AuditError> {
        let form = Self::build_form(image)?;

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AuditError::Transport(e.to_string()))?;

        // 失敗ステータスは本文を見ない
        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuditError::Transport(e.to_string()))?;

        tracing::debug!(bytes = body.len(), "received audit response");

        Ok(parse_audit_response(&body)?)
    }
}
