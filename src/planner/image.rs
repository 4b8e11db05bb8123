use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// 5MB source-file limit, checked before the file is read.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image too large: {0} bytes (max 5MB)")]
    TooLarge(u64),
    #[error("Not a supported image file")]
    WrongType,
    #[error("Could not read image: {0}")]
    Io(#[from] std::io::Error),
}

/// An image encoded for embedding in an event.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub data_url: String,
    pub mime: &'static str,
    pub source_len: usize,
}

/// Encode image bytes as a `data:<mime>;base64,…` URL. The MIME type is
/// sniffed from the file's magic bytes; unrecognized formats are rejected
/// rather than guessed from the file name.
pub fn encode_image(bytes: &[u8]) -> Result<EncodedImage, ImageError> {
    if bytes.len() as u64 > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge(bytes.len() as u64));
    }
    let mime = sniff_mime(bytes).ok_or(ImageError::WrongType)?;
    Ok(EncodedImage {
        data_url: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        mime,
        source_len: bytes.len(),
    })
}

/// Load and encode an image file. The size limit is enforced from metadata
/// before the contents are read.
pub fn load_image(path: &Path) -> Result<EncodedImage, ImageError> {
    let len = fs::metadata(path)?.len();
    if len > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge(len));
    }
    encode_image(&fs::read(path)?)
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(b"\xff\xd8\xff") {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"BM") {
        Some("image/bmp")
    } else {
        None
    }
}
