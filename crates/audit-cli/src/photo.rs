//! Photo attachment as an inline `data:` URI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use infer::MatcherType;

/// Reads an image file into a `data:<mime>;base64,...` URI.
pub fn photo_data_uri(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read photo {}", path.display()))?;
    encode_photo(&bytes).with_context(|| format!("encode photo {}", path.display()))
}

/// Encodes image bytes, sniffing the MIME type from their content.
pub fn encode_photo(bytes: &[u8]) -> Result<String> {
    let kind = infer::get(bytes)
        .filter(|kind| kind.matcher_type() == MatcherType::Image)
        .ok_or_else(|| anyhow!("not a recognised image format"))?;
    Ok(format!(
        "data:{};base64,{}",
        kind.mime_type(),
        STANDARD.encode(bytes)
    ))
}
