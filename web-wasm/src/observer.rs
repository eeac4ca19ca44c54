//! ブラウザコンソールへの通知

use bias_audit_common::{AuditError, AuditObserver, AuditResult};
use gloo::console;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl AuditObserver for ConsoleObserver {
    fn on_submit(&self, file_name: &str) {
        console::log!(format!("Submitting {} for audit", file_name));
    }

    fn on_success(&self, result: &AuditResult) {
        console::log!("Result from backend:", result.to_value().to_string());
    }

    fn on_failure(&self, error: &AuditError) {
        console::error!(format!("Audit failed ({:?}): {}", error.kind(), error));
    }
}
