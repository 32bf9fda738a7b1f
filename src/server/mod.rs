pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::{LlmClient, OpenAiClient},
    pdf::{PdfiumExtractor, TextExtractor},
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/clean-protocol", post(handlers::clean_protocol))
        .route("/simplify-paper", post(handlers::simplify_paper))
        .route("/calculate/dilution", post(handlers::calculate_dilution))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm = OpenAiClient::new(config.llm.clone());
    info!(
        "Model gateway using {} (configured: {})",
        config.llm.model,
        llm.is_configured()
    );

    let llm: Arc<dyn LlmClient> = Arc::new(llm);
    let extractor: Arc<dyn TextExtractor> = Arc::new(PdfiumExtractor::new(&config.pdf));

    let app = router(AppState { llm, extractor }, config.server.max_upload_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
