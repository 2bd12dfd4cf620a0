use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("at least {required} papers are required, received {received}")]
    TooFewPapers { required: usize, received: usize },

    #[error("failed to extract text from {filename}: {reason}")]
    Ingestion { filename: String, reason: String },

    #[error("extraction task failed: {0}")]
    Task(String),

    #[error("request to Gemini failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {body}")]
    ModelApi { status: u16, body: String },

    #[error("Gemini returned no candidate text")]
    EmptyResponse,

    #[error("no JSON object in model response. RAW: {raw}")]
    NoJsonFound { raw: String },

    #[error("model response is not valid JSON ({source}). RAW: {raw}")]
    InvalidJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AnalysisError {
    /// True when the caller can fix the request themselves.
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::TooFewPapers { .. })
    }
}
