use crate::config::Config;
use crate::error::AnalysisError;
use crate::models::*;
use async_trait::async_trait;
use reqwest::Client;

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// A text-in, text-out generative model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;
}

pub struct GeminiService {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    pub fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category: category.to_string(),
                    threshold: "BLOCK_NONE".to_string(),
                })
                .collect(),
        }
    }

    pub fn response_text(response: GeminiResponse) -> Result<String, AnalysisError> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl GenerativeModel for GeminiService {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let request = Self::build_request(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| AnalysisError::Http(e.without_url()))?;
            return Err(AnalysisError::ModelApi {
                status: status.as_u16(),
                body,
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Http(e.without_url()))?;
        Self::response_text(gemini_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_generate_content_shape() {
        let body = serde_json::to_value(GeminiService::build_request("hi")).unwrap();

        assert_eq!(body["contents"], json!([{ "parts": [{ "text": "hi" }] }]));
        let settings = body["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        for (setting, category) in settings.iter().zip(HARM_CATEGORIES) {
            assert_eq!(setting["category"], category);
            assert_eq!(setting["threshold"], "BLOCK_NONE");
        }
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn text_parts_of_first_candidate_are_joined() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }], "role": "model" } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "totalTokenCount": 12 }
        }))
        .unwrap();

        assert_eq!(GeminiService::response_text(response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn blocked_prompt_yields_empty_response_error() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "OTHER" }
        }))
        .unwrap();

        assert!(matches!(
            GeminiService::response_text(response),
            Err(AnalysisError::EmptyResponse)
        ));
    }

    #[test]
    fn candidate_without_content_is_empty() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();

        assert!(GeminiService::response_text(response).is_err());
    }

    #[test]
    fn endpoint_uses_configured_model_and_base() {
        let config = Config::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("k".to_string()),
            "GEMINI_API_BASE" => Some("http://localhost:1234/v1beta".to_string()),
            _ => None,
        })
        .unwrap();
        let service = GeminiService::new(&config);
        assert_eq!(
            service.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(service.model(), "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn network_errors_do_not_expose_the_api_key() {
        let config = Config::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("SECRET-KEY-123".to_string()),
            "GEMINI_API_BASE" => Some("http://127.0.0.1:1/v1beta".to_string()),
            _ => None,
        })
        .unwrap();
        let service = GeminiService::new(&config);

        let err = service.generate("hi").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Http(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"));
        assert!(!format!("{err:?}").contains("SECRET-KEY-123"));
    }
}
