pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::OpenAiClient,
    ocr::{HttpOcrClient, UploadSpool},
    quiz::QuizGenerator,
};
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub async fn run(config: Config) -> Result<()> {
    if config.ocr.api_key.is_empty() {
        warn!("OCR_API_KEY is not set; uploads will be rejected by the provider");
    }
    if config.llm.api_key.is_empty() {
        warn!("CHATGPT_API_KEY is not set; generation will be rejected by the provider");
    }

    let spool = UploadSpool::new(&config.server.upload_dir).await?;

    let app_state = AppState {
        ocr: Arc::new(HttpOcrClient::new(config.ocr.clone())),
        quiz: Arc::new(QuizGenerator::new(Arc::new(OpenAiClient::new(
            config.llm.clone(),
        )))),
        spool: Arc::new(spool),
    };

    let app = router(app_state, &config.server.public_dir);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/upload", post(handlers::upload))
        .route("/generate", post(handlers::generate))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
