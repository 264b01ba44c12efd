use super::gemini::{Candidate, Content, GenerateContentResponse, InlinePayload, Part};
use super::ImageGenerationService;
use crate::models::GenerationRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockImageGenerationClient {
    responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Queue a single-candidate response built from `parts`.
    pub fn with_parts(self, parts: Vec<Part>) -> Self {
        self.with_response(GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts,
                }),
            }],
        })
    }

    pub fn with_failure(self, should_fail: bool) -> Self {
        *self.should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateContentResponse> {
        let call_index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len() - 1
        };

        if *self.should_fail.lock().unwrap() {
            return Err(Error::AiProvider("Mock failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default: one tiny PNG signature and an echo of the prompt
            Ok(GenerateContentResponse {
                candidates: vec![Candidate {
                    content: Some(Content {
                        role: Some("model".to_string()),
                        parts: vec![
                            Part::text(format!("Generated: {}", request.prompt)),
                            Part::inline(
                                "image/png",
                                InlinePayload::Bytes(vec![
                                    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
                                ]),
                            ),
                        ],
                    }),
                }],
            })
        } else {
            Ok(responses[call_index % responses.len()].clone())
        }
    }
}
