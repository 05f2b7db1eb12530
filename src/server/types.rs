use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
