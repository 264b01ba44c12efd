use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::ai::ImageGenerationService;
use crate::models::GenerationRequest;
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

const IMAGE_TIMEOUT: Duration = Duration::from_secs(120);

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(request.prompt.clone())],
            }],
            generation_config: GenerationConfig {
                response_modalities: request.response_modalities.clone(),
            },
        }
    }
}

pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: GeminiHttpClient::new(api_key, &model, IMAGE_TIMEOUT),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn model(&self) -> &str {
        self.http.model()
    }
}

#[async_trait]
impl ImageGenerationService for GeminiImageClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateContentResponse> {
        tracing::debug!(
            "Requesting {:?} from Gemini model {}",
            request.response_modalities,
            self.model()
        );

        let body = GenerateContentRequest::from(request);
        let response = self.http.generate_content(&body).await?;

        tracing::debug!(
            "Gemini returned {} candidate(s)",
            response.candidates.len()
        );
        Ok(response)
    }
}
