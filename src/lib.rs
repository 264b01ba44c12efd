//! Gemini image generation from the command line
//!
//! Sends a prompt to Gemini asking for image and text output, writes every
//! returned inline image under a chosen base name, and reports the saved
//! files together with the model's text.

pub mod ai;
pub mod app;
pub mod decode;
pub mod error;
pub mod models;
pub mod naming;
pub mod render;
pub mod storage;

pub use error::{Error, Result};
