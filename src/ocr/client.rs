use crate::{Error, Result, config::OcrConfig};
use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use tracing::{debug, info};

#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn extract_text(&self, data: &[u8], file_name: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    text: String,
}

pub struct HttpOcrClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpOcrClient {
    pub fn new(config: OcrConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }
}

#[async_trait]
impl OcrEngine for HttpOcrClient {
    async fn extract_text(&self, data: &[u8], file_name: &str) -> Result<String> {
        let url = format!("{}/parse", self.base_url);

        let file_part = multipart::Part::bytes(data.to_vec())
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;

        let form = multipart::Form::new().part("file", file_part);

        debug!(file_name, bytes = data.len(), "Sending document to OCR provider");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::ocr(format!("status {}: {}", status, body)));
        }

        let parsed: ParseResponse = response.json().await?;

        info!(chars = parsed.text.len(), "OCR provider returned extracted text");

        Ok(parsed.text)
    }
}
