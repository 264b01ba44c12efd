//! Data models and structures
//!
//! Defines the request handed to the generation service, the attachments and
//! transcript decoded from its response, and the files written to disk.

use crate::ai::gemini::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Output kinds requested from the model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseModality {
    Image,
    Text,
}

/// One generation request: a prompt and the modalities asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_modalities: Vec<ResponseModality>,
}

impl GenerationRequest {
    /// Request both image and text output for `prompt`.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_modalities: vec![ResponseModality::Image, ResponseModality::Text],
        }
    }
}

/// Binary payload pulled out of a response part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Attachments and transcript extracted from one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedResponse {
    pub attachments: Vec<Attachment>,
    pub transcript: String,
}

/// A written attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub mime_type: String,
    pub size: usize,
}

impl SavedFile {
    /// File name component of the saved path, for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Result of one full pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub saved: Vec<SavedFile>,
    pub transcript: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub image_model: String,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Overlay optional CLI/environment values on the defaults.
    pub fn resolve(image_model: Option<String>, base_url: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            image_model: image_model
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.image_model),
            base_url: base_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(defaults.base_url),
        }
    }
}
