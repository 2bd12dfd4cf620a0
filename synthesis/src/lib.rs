pub mod analysis_service;
pub mod config;
pub mod document_processor;
pub mod error;
pub mod gemini_service;
pub mod models;
pub mod prompt;
pub mod response_parser;

pub use analysis_service::AnalysisService;
pub use config::Config;
pub use document_processor::DocumentProcessor;
pub use error::AnalysisError;
pub use gemini_service::{GeminiService, GenerativeModel};
pub use models::*;
