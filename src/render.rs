//! Terminal rendering of a finished generation.

use crate::ai::mime::display_mime;
use crate::models::{GenerationOutcome, SavedFile};
use crate::{storage, Result};
use std::io::Cursor;

pub const NO_IMAGE_NOTICE: &str = "No image returned from model.";

/// Pixel dimensions of an encoded image, if the bytes decode as one.
pub fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// Re-read each saved file and format the report shown to the user.
pub fn render_outcome(outcome: &GenerationOutcome) -> Result<String> {
    let mut out = String::new();

    if !outcome.transcript.is_empty() {
        out.push_str(&format!("Model Response Text\n{}\n\n", outcome.transcript));
    }

    if outcome.saved.is_empty() {
        out.push_str(&format!("Warning: {}\n", NO_IMAGE_NOTICE));
        return Ok(out);
    }

    out.push_str("Generated Images\n");
    for saved in &outcome.saved {
        out.push_str(&render_saved(saved)?);
    }
    Ok(out)
}

fn render_saved(saved: &SavedFile) -> Result<String> {
    let bytes = storage::read_back(&saved.path)?;
    if bytes.len() != saved.size {
        tracing::warn!(
            "{} holds {} bytes, {} were written",
            saved.path.display(),
            bytes.len(),
            saved.size
        );
    }

    let dimensions = image_dimensions(&bytes)
        .map(|(w, h)| format!(", {}x{}", w, h))
        .unwrap_or_default();

    Ok(format!(
        "  Saved -> {} ({}, {} bytes{})\n    {}\n",
        saved.file_name(),
        display_mime(&saved.mime_type, &bytes),
        saved.size,
        dimensions,
        saved.path.display()
    ))
}
