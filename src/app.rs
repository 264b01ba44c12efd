//! Pipeline orchestration: request, decode, name, persist.

use crate::ai::{GeminiImageClient, ImageGenerationService};
use crate::models::{Config, GenerationOutcome, GenerationRequest, SavedFile};
use crate::{decode, naming, storage, Error, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything the user supplies for one generation.
#[derive(Debug, Clone)]
pub struct GenerationInputs {
    pub api_key: String,
    pub prompt: String,
    pub output_dir: PathBuf,
    pub file_base_name: String,
}

impl GenerationInputs {
    /// Check required fields in order, returning the first one missing.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        if self.prompt.trim().is_empty() {
            return Err(Error::MissingPrompt);
        }
        if self.file_base_name.trim().is_empty() {
            return Err(Error::MissingFileName);
        }
        Ok(())
    }
}

/// Runs one generation end to end against an injected service.
pub struct App {
    image_gen: Box<dyn ImageGenerationService>,
}

impl App {
    /// Build an app from a concrete service, typically a mock in tests.
    pub fn with_service(image_gen: Box<dyn ImageGenerationService>) -> Self {
        Self { image_gen }
    }

    /// Build an app backed by the Gemini REST API.
    pub fn new(api_key: String, config: &Config) -> Self {
        info!("Image provider: Gemini (model: {})", config.image_model);
        let client = GeminiImageClient::new(api_key, config.image_model.clone())
            .with_base_url(config.base_url.clone());
        Self::with_service(Box::new(client))
    }

    /// Validate `inputs`, then run the pipeline. Nothing is sent when
    /// validation fails.
    pub async fn generate(&self, inputs: &GenerationInputs) -> Result<GenerationOutcome> {
        inputs.validate()?;
        self.run(&inputs.prompt, &inputs.output_dir, &inputs.file_base_name)
            .await
    }

    /// Issue one request and write every returned attachment under
    /// `output_dir`. Files written before a later failure stay on disk.
    pub async fn run(
        &self,
        prompt: &str,
        output_dir: &Path,
        base_name: &str,
    ) -> Result<GenerationOutcome> {
        let request = GenerationRequest::new(prompt);
        let response = self.image_gen.generate(&request).await?;
        let decoded = decode::decode(&response)?;

        if decoded.attachments.is_empty() {
            warn!("No image returned from model");
        }

        let mut saved = Vec::with_capacity(decoded.attachments.len());
        for (ordinal, attachment) in decoded.attachments.iter().enumerate() {
            let file_name = naming::file_name(base_name, ordinal, &attachment.mime_type);
            let path = storage::persist(output_dir, &file_name, &attachment.bytes)?;
            saved.push(SavedFile {
                path,
                mime_type: attachment.mime_type.clone(),
                size: attachment.bytes.len(),
            });
        }

        info!(
            "Generation finished: {} file(s), {} transcript chars",
            saved.len(),
            decoded.transcript.len()
        );

        Ok(GenerationOutcome {
            saved,
            transcript: decoded.transcript,
        })
    }
}
