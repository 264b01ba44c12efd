//! AI service integration for image generation
//!
//! Provides the Gemini `generateContent` client used to turn a prompt into a
//! response carrying inline images and text, plus a mock for tests.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{GeminiImageClient, GenerateContentResponse};
pub use mock::MockImageGenerationClient;

use crate::models::GenerationRequest;
use crate::Result;
use async_trait::async_trait;

/// Issues exactly one generation call and hands back the raw response.
#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateContentResponse>;
}
