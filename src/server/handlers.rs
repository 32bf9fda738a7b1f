use super::types::{DilutionOutcome, DilutionRequest, ModelResponse, ProtocolRequest, StatusResponse};
use crate::{
    Error, Result, dilution,
    llm::LlmClient,
    pdf::TextExtractor,
    prompts::{self, PromptKind},
};
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Multipart field carrying the uploaded PDF.
pub const FILE_FIELD: &str = "file";

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
    pub extractor: Arc<dyn TextExtractor>,
}

pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "BioScribe API is running".to_string(),
    })
}

pub async fn clean_protocol(
    State(state): State<AppState>,
    Json(request): Json<ProtocolRequest>,
) -> Json<ModelResponse> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        "Received clean-protocol request with {} characters of notes",
        request.text.chars().count()
    );

    let prompt = prompts::build(PromptKind::CleanProtocol, &request.text);
    let result = state.llm.generate(&prompt).await;

    Json(respond(request_id, PromptKind::CleanProtocol, result))
}

pub async fn simplify_paper(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Json<ModelResponse> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "Received simplify-paper upload");

    let result = summarize_paper(&state, multipart).await;

    Json(respond(request_id, PromptKind::SimplifyPaper, result))
}

pub async fn calculate_dilution(Json(request): Json<DilutionRequest>) -> Json<DilutionOutcome> {
    debug!("Solving dilution for {:?}", request);
    Json(dilution::solve(&request))
}

async fn summarize_paper(state: &AppState, mut multipart: Multipart) -> Result<String> {
    let bytes = read_file_field(&mut multipart).await?;
    debug!("Read {} bytes of PDF upload", bytes.len());

    let extractor = Arc::clone(&state.extractor);
    let text = tokio::task::spawn_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(|e| Error::internal(format!("PDF extraction task panicked: {}", e)))??;
    debug!("Extracted {} characters from PDF", text.chars().count());

    let prompt = prompts::build(PromptKind::SimplifyPaper, &text);
    state.llm.generate(&prompt).await
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            return Ok(field.bytes().await?);
        }
    }
    Err(Error::upload(format!(
        "No file uploaded; expected a multipart field named '{}'",
        FILE_FIELD
    )))
}

fn respond(request_id: Uuid, kind: PromptKind, result: Result<String>) -> ModelResponse {
    match &result {
        Ok(markdown) => info!(
            %request_id,
            "{:?} request succeeded with {} bytes of markdown",
            kind,
            markdown.len()
        ),
        Err(e) => error!(%request_id, "{:?} request failed: {}", kind, e),
    }
    result.into()
}
