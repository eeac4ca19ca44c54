//! 画像ファイルの読み込み

use crate::error::{BiasAuditError, Result};
use bias_audit_common::is_image_mime;
use std::path::{Path, PathBuf};

const FALLBACK_MIME: &str = "application/octet-stream";

/// 送信用に読み込んだ画像
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }
}

/// 画像ファイルを読み込む
///
/// MIMEタイプはファイル内容から判定する。画像でなくてもエラーにはしない。
pub fn load_image(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(BiasAuditError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let mime_type = infer::get(&bytes)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string());

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let image = ImageFile {
        path: path.to_path_buf(),
        file_name,
        mime_type,
        bytes,
    };

    if !image.is_image() {
        tracing::warn!(
            file = %image.file_name,
            mime = %image.mime_type,
            "selected file does not look like an image; uploading anyway"
        );
    }

    Ok(image)
}
