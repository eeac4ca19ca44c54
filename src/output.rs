//! ターミナル表示

use bias_audit_common::view::{AuditView, ERROR_PREFIX, RESULT_HEADING, SUBMITTING_LABEL};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 表示モデルを端末向けの文字列にする
pub fn format_view(view: &AuditView) -> String {
    if let Some(error) = view.error {
        return format!("{} {}", ERROR_PREFIX, error);
    }

    match &view.result {
        Some(summary) => {
            let mut lines = vec![RESULT_HEADING.to_string()];
            lines.extend(summary.to_lines());
            lines.join("\n")
        }
        None => String::new(),
    }
}

/// 送信中スピナー
pub fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(SUBMITTING_LABEL);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
