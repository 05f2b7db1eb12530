use super::types::{ErrorResponse, GenerateResponse, UploadResponse};
use crate::{
    Error,
    ocr::{OcrEngine, UploadSpool},
    quiz::{GenerationRequest, QuizGenerator},
};
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub ocr: Arc<dyn OcrEngine>,
    pub quiz: Arc<QuizGenerator>,
    pub spool: Arc<UploadSpool>,
}

pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, Json<ErrorResponse>)> {
    match process_upload(&state, multipart).await {
        Ok(text) => Ok(Json(UploadResponse { text })),
        Err(Error::Validation(message)) => {
            warn!("Rejected upload: {}", message);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            ))
        }
        Err(e) => {
            error!("OCR upload failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "OCR 실패".to_string(),
                }),
            ))
        }
    }
}

async fn process_upload(state: &AppState, mut multipart: Multipart) -> crate::Result<String> {
    let Some((file_name, data)) = next_file_field(&mut multipart).await? else {
        return Err(Error::validation("파일이 첨부되지 않았습니다."));
    };

    info!("Received upload: {}", file_name);

    // Spooled to disk first; the guard removes the file on every exit path.
    let upload = state.spool.store(&file_name, &data).await?;

    if !upload.is_pdf() {
        return Err(Error::validation("업로드된 파일이 PDF 형식이 아닙니다."));
    }

    let document = upload.read().await?;
    let text = state
        .ocr
        .extract_text(&document, upload.original_name())
        .await?;

    upload.remove().await?;

    Ok(text)
}

async fn next_file_field(multipart: &mut Multipart) -> crate::Result<Option<(String, Bytes)>> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!("Failed to read multipart body: {}", e);
                return Err(Error::validation("파일이 첨부되지 않았습니다."));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let data = field.bytes().await.map_err(|e| {
            warn!("Failed to read upload body: {}", e);
            Error::validation("파일이 첨부되지 않았습니다.")
        })?;

        return Ok(Some((file_name, data)));
    }
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        question_type = %request.question_type,
        question_count = request.question_count,
        language = %request.language,
        "Received generation request"
    );

    match state.quiz.generate(&request).await {
        Ok(questions) => Ok(Json(GenerateResponse { questions })),
        Err(e) => {
            error!("Question generation failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "문제 생성 실패".to_string(),
                }),
            ))
        }
    }
}
