use super::prompt;
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

const MAX_COMPLETION_TOKENS: u32 = 1500;
const SAMPLING_TEMPERATURE: f32 = 0.7;

/// Parameters accepted by the generation endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub question_type: String,
    pub question_count: u32,
    pub text_input: String,
    pub language: String,
}

pub struct QuizGenerator {
    llm: Arc<dyn LlmClient>,
}

impl QuizGenerator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Builds the instruction for the request and asks the chat-completion
    /// provider to write the questions.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>> {
        let prompt = prompt::build_prompt(
            &request.language,
            &request.question_type,
            request.question_count,
        );

        let completion = self
            .llm
            .create_chat_completion(ChatCompletionRequest {
                messages: vec![
                    ChatMessage::system(prompt),
                    ChatMessage::user(request.text_input.clone()),
                ],
                max_tokens: Some(MAX_COMPLETION_TOKENS),
                temperature: Some(SAMPLING_TEMPERATURE),
            })
            .await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::generation("chat completion returned no choices"))?;

        debug!(chars = content.len(), "Chat-completion provider returned content");

        Ok(non_empty_lines(&content))
    }
}

/// The provider's reply is treated as plain text: one entry per line,
/// lines that are blank after trimming are discarded, the rest are kept
/// untouched and in order.
fn non_empty_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
