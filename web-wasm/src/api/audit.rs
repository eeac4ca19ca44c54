//! 監査API連携（fetch + FormData）

use bias_audit_common::{
    parse_audit_response, AuditError, AuditResult, DEFAULT_ENDPOINT, FILE_FIELD,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FormData, Request, RequestInit, RequestMode, Response};

/// `file` フィールドに画像を入れたフォームを作る
pub fn build_form_data(blob: &Blob, file_name: &str) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, blob, file_name)?;
    Ok(form)
}

/// 画像を送信して監査結果を受け取る
///
/// 失敗ステータスの本文は読まない。
pub async fn submit_image(file: &File) -> Result<AuditResult, AuditError> {
    let form = build_form_data(file, &file.name()).map_err(transport_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(DEFAULT_ENDPOINT, &opts).map_err(transport_error)?;

    let window = web_sys::window().ok_or_else(|| AuditError::Transport("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_value.dyn_into().map_err(transport_error)?;

    if !resp.ok() {
        return Err(AuditError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| AuditError::Parse("response body is not text".into()))?;

    Ok(parse_audit_response(&body)?)
}

fn transport_error(err: JsValue) -> AuditError {
    AuditError::Transport(format!("{:?}", err))
}
