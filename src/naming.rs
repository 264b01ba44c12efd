//! Output file naming
//!
//! Names are deterministic: the first attachment of a response takes the bare
//! base name, later ones get `_{n}`. Nothing here looks at the disk, so a
//! second run with the same base name into the same directory overwrites.

/// Extension used when a MIME type has no known mapping.
pub const DEFAULT_EXTENSION: &str = ".png";

/// Preferred extensions for image types where the MIME database lists several.
const PREFERRED: &[(&str, &str)] = &[
    ("image/jpeg", ".jpg"),
    ("image/jpg", ".jpg"),
    ("image/pjpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/webp", ".webp"),
    ("image/gif", ".gif"),
    ("image/bmp", ".bmp"),
    ("image/tiff", ".tiff"),
    ("image/svg+xml", ".svg"),
    ("image/heic", ".heic"),
    ("image/heif", ".heif"),
    ("image/avif", ".avif"),
];

/// File name for the attachment at `ordinal` within one response.
pub fn file_name(base_name: &str, ordinal: usize, mime_type: &str) -> String {
    let extension = extension_for_mime(mime_type);
    if ordinal == 0 {
        format!("{}{}", base_name, extension)
    } else {
        format!("{}_{}{}", base_name, ordinal, extension)
    }
}

/// Map a MIME type to a dotted extension, defaulting to `.png`.
pub fn extension_for_mime(mime_type: &str) -> String {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence.is_empty() {
        return DEFAULT_EXTENSION.to_string();
    }

    if let Some((_, ext)) = PREFERRED.iter().find(|(mime, _)| *mime == essence) {
        return ext.to_string();
    }

    match mime_guess::get_mime_extensions_str(&essence).and_then(|exts| exts.first()) {
        Some(ext) => format!(".{}", ext),
        None => {
            tracing::debug!("No extension known for {:?}, using {}", mime_type, DEFAULT_EXTENSION);
            DEFAULT_EXTENSION.to_string()
        }
    }
}
