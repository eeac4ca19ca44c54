//! ヘッダーコンポーネント

use bias_audit_common::view::APP_TITLE;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{APP_TITLE}</h1>
        </header>
    }
}
