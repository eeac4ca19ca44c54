//! 画像アップロード・監査コンポーネント

use crate::api::audit::submit_image;
use crate::components::audit_result::AuditResultView;
use crate::observer::ConsoleObserver;
use bias_audit_common::view::ERROR_PREFIX;
use bias_audit_common::{AuditEvent, AuditObserver, AuditState, Command, ACCEPT_FILTER};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, HtmlInputElement};

#[component]
pub fn UploadAuditView() -> impl IntoView {
    // web_sys::File は Send でないためローカルシグナル
    let state = RwSignal::new_local(AuditState::<File>::new());

    let on_change = move |ev: Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        // キャンセル時も選択を解除して結果・エラーを消す
        state.update(|s| {
            s.apply(AuditEvent::FileSelected(file));
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let command = state
            .try_update(|s| s.apply(AuditEvent::SubmitRequested))
            .flatten();

        match command {
            Some(Command::Upload(file)) => {
                ConsoleObserver.on_submit(&file.name());
                spawn_local(async move {
                    let event = match submit_image(&file).await {
                        Ok(result) => {
                            ConsoleObserver.on_success(&result);
                            AuditEvent::UploadSucceeded(result)
                        }
                        Err(error) => {
                            ConsoleObserver.on_failure(&error);
                            AuditEvent::UploadFailed(error)
                        }
                    };
                    state.update(|s| {
                        s.apply(event);
                    });
                });
            }
            None => {
                if let Some(error) = state.with_untracked(|s| s.error().cloned()) {
                    ConsoleObserver.on_failure(&error);
                }
            }
        }
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <input
                type="file"
                accept=ACCEPT_FILTER
                class="file-input"
                on:change=on_change
            />

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || state.with(|s| s.view().button_disabled)
            >
                {move || state.with(|s| s.view().button_label)}
            </button>
        </form>

        {move || {
            state
                .with(|s| s.view().error)
                .map(|error| view! { <div class="error">{ERROR_PREFIX}" "{error}</div> })
        }}

        {move || {
            state
                .with(|s| s.view().result)
                .map(|summary| view! { <AuditResultView summary=summary /> })
        }}
    }
}
