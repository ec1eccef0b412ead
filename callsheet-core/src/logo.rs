//! Production logo import: read an image file and encode it as a data URI so
//! the sheet stays a single self-contained JSON document.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("could not read logo: {0}")]
    Io(#[from] std::io::Error),
    #[error("logo file is empty")]
    Empty,
}

/// MIME type guessed from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, B64.encode(bytes))
}

/// Read `path` and return `data:<mime>;base64,<payload>`.
pub fn load_logo(path: &Path) -> Result<String, LogoError> {
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(LogoError::Empty);
    }
    log::debug!(target: "logo", "loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(encode_data_uri(mime_for(path), &bytes))
}
