//! 表示モデル
//!
//! 状態から画面に出す内容を組み立てる（副作用なし）。CLIとWebで同じ文言を使う。

use crate::state::AuditState;
use crate::types::{format_score, AuditResult, GroupScore};
use std::fmt;

pub const APP_TITLE: &str = "Facial Bias Auditor";
pub const RESULT_HEADING: &str = "📊 Audit Result";
pub const ERROR_PREFIX: &str = "⚠️";
pub const SUBMIT_LABEL: &str = "Audit Image";
pub const SUBMITTING_LABEL: &str = "Analyzing...";

/// スコア1行（`label: value`）
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLine {
    pub label: String,
    pub value: String,
}

impl fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// 結果表示
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub closest_group: Option<String>,
    pub lines: Vec<ScoreLine>,
}

impl ResultSummary {
    pub fn from_result(result: &AuditResult) -> Self {
        match result {
            AuditResult::GroupScores(groups) => {
                let lines = groups
                    .iter()
                    .flat_map(|(group, score)| match score {
                        GroupScore::Flat(value) => vec![ScoreLine {
                            label: group.clone(),
                            value: format_score(*value),
                        }],
                        GroupScore::Nested(entries) => entries
                            .iter()
                            .map(|(subgroup, score)| ScoreLine {
                                label: subgroup.clone(),
                                value: score.display(),
                            })
                            .collect(),
                    })
                    .collect();
                Self {
                    closest_group: None,
                    lines,
                }
            }
            AuditResult::ClosestGroup { closest_group, distances } => Self {
                closest_group: Some(closest_group.clone()),
                lines: distances
                    .iter()
                    .map(|(group, score)| ScoreLine {
                        label: group.clone(),
                        value: score.display(),
                    })
                    .collect(),
            },
        }
    }

    /// 見出し行（ClosestGroup形式のみ）
    pub fn headline(&self) -> Option<String> {
        self.closest_group
            .as_ref()
            .map(|group| format!("Closest Group: {}", group))
    }

    /// 表示行をすべて返す（見出し → スコア行）
    pub fn to_lines(&self) -> Vec<String> {
        self.headline()
            .into_iter()
            .chain(self.lines.iter().map(ToString::to_string))
            .collect()
    }
}

/// 画面全体の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct AuditView {
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub error: Option<&'static str>,
    pub result: Option<ResultSummary>,
}

impl<F> AuditState<F> {
    pub fn view(&self) -> AuditView {
        let loading = self.is_loading();
        let error = self.error_message();
        AuditView {
            button_label: button_label(loading),
            button_disabled: loading,
            error,
            // エラー表示中は結果を出さない
            result: match error {
                Some(_) => None,
                None => self.result().map(ResultSummary::from_result),
            },
        }
    }
}

pub fn button_label(loading: bool) -> &'static str {
    if loading {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    }
}
