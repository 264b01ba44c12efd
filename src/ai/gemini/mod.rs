pub mod client;
pub mod image;
pub mod types;

pub use image::GeminiImageClient;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, InlineData,
    InlinePayload, Part,
};
