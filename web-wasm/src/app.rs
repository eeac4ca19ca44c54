//! メインアプリケーションコンポーネント

use crate::components::{header::Header, upload_audit_view::UploadAuditView};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <div class="card">
                <Header />
                <UploadAuditView />
            </div>
        </div>
    }
}
