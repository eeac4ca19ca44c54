//! 監査APIの送信仕様

/// 監査APIのエンドポイント
pub const DEFAULT_ENDPOINT: &str = "https://bias-audit-api-2-production.up.railway.app/audit/";

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

/// ファイル選択ダイアログの受付フィルタ（参考値。強制はしない）
pub const ACCEPT_FILTER: &str = "image/*";

/// MIMEタイプが画像か
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .split_once('/')
        .is_some_and(|(top, _)| top.eq_ignore_ascii_case("image"))
}
