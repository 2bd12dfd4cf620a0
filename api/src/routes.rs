use crate::api_error::ApiError;
use crate::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Html,
    Json,
};
use paper_synthesis::{AnalysisReport, UploadedDocument};
use serde_json::{json, Value};

pub const PAPERS_FIELD: &str = "papers";

static INDEX_HTML: &str = include_str!("../static/index.html");

pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn analyze_documents(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    log::info!("Received intelligence analysis request");

    let documents = read_papers(multipart?).await?;
    let report = state.analysis.analyze(documents).await?;

    log::info!("Successfully returned intelligence report");
    Ok(Json(report))
}

/// Collects every `papers` file part in upload order. Plain form values and
/// other fields are ignored.
async fn read_papers(mut multipart: Multipart) -> Result<Vec<UploadedDocument>, ApiError> {
    let mut documents = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PAPERS_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await?;
        documents.push(UploadedDocument::new(filename, bytes.to_vec()));
    }

    Ok(documents)
}
