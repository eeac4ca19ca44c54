//! 監査結果表示コンポーネント

use bias_audit_common::view::RESULT_HEADING;
use bias_audit_common::ResultSummary;
use leptos::prelude::*;

#[component]
pub fn AuditResultView(summary: ResultSummary) -> impl IntoView {
    let headline = summary.headline();

    view! {
        <div class="result">
            <h2>{RESULT_HEADING}</h2>
            {headline.map(|headline| view! { <p class="closest-group">{headline}</p> })}
            {summary
                .lines
                .into_iter()
                .map(|line| {
                    view! {
                        <p class="score-line">
                            <span class="score-label">{line.label}":"</span>
                            " "
                            {line.value}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}
