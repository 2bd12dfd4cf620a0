use crate::document_processor::DocumentProcessor;
use crate::error::AnalysisError;
use crate::gemini_service::GenerativeModel;
use crate::models::*;
use crate::prompt::build_prompt;
use crate::response_parser::clean_and_parse_json;
use std::sync::Arc;
use uuid::Uuid;

pub struct AnalysisService {
    document_processor: Arc<DocumentProcessor>,
    model: Arc<dyn GenerativeModel>,
}

impl AnalysisService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            document_processor: Arc::new(DocumentProcessor::new()),
            model,
        }
    }

    pub async fn analyze(
        &self,
        documents: Vec<UploadedDocument>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let request_id = Uuid::new_v4();
        let start_time = std::time::Instant::now();
        log::info!("[{}] Received analysis request for {} papers", request_id, documents.len());

        // Checked up front so a short upload never reaches the model.
        self.document_processor.validate_count(&documents)?;

        let processor = self.document_processor.clone();
        let extracts = tokio::task::spawn_blocking(move || processor.process_documents(&documents))
            .await
            .map_err(|e| AnalysisError::Task(e.to_string()))??;

        let combined_text = self.document_processor.combine(&extracts);
        let prompt = build_prompt(&combined_text);

        log::info!(
            "[{}] Sending prompt to model ({} characters)",
            request_id,
            prompt.chars().count()
        );
        let raw = self.model.generate(&prompt).await?;

        let report = clean_and_parse_json(&raw)?;
        let missing: Vec<&str> = REPORT_SECTIONS
            .iter()
            .copied()
            .filter(|section| !report.contains_key(*section))
            .collect();
        if !missing.is_empty() {
            log::warn!("[{}] Report is missing sections: {}", request_id, missing.join(", "));
        }

        log::info!(
            "[{}] Analysis finished in {} ms",
            request_id,
            start_time.elapsed().as_millis()
        );
        Ok(report)
    }
}
