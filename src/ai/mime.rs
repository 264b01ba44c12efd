pub const FALLBACK_IMAGE_MIME: &str = "image/png";

pub fn detect_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x47, 0x49, 0x46, 0x38, ..] => "image/gif",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), falling back to {}",
                &bytes[..bytes.len().min(4)],
                FALLBACK_IMAGE_MIME
            );
            FALLBACK_IMAGE_MIME
        }
    }
}

/// MIME type to show for a saved attachment: the declared one when present,
/// otherwise sniffed from the bytes.
pub fn display_mime<'a>(declared: &'a str, bytes: &[u8]) -> &'a str {
    if declared.trim().is_empty() {
        detect_image_mime(bytes)
    } else {
        declared
    }
}
