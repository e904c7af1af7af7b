//! AI expansion of a catalog question: one request, one displayable result.

use thiserror::Error;
use tracing::{debug, warn};

use crate::llm::{LlmClient, Message};
use crate::prompts;

/// Why an expansion produced no generated text. The `Display` strings are the
/// exact messages shown to patients, so callers can surface an error without
/// any further mapping.
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("No se ha encontrado la clave de OpenAI. Revisa la configuración de OPENAI_API_KEY.")]
    MissingCredential,
    #[error("Error al conectar con OpenAI: {0}")]
    Service(String),
}

pub struct Expander {
    llm: LlmClient,
}

impl Expander {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Request a slightly more detailed, jargon-free explanation of a catalog
    /// question. Exactly one service call per invocation; no retries, no
    /// caching. Without a credential no call is made at all.
    pub async fn expand(&self, question: &str) -> Result<String, ExpandError> {
        if !self.llm.has_credential() {
            return Err(ExpandError::MissingCredential);
        }

        let messages = [
            Message::system(prompts::SYSTEM_PROMPT),
            Message::user(prompts::user_prompt(question)),
        ];

        match self.llm.chat(&messages).await {
            Ok(text) => {
                debug!(question, len = text.len(), "expansion generated");
                Ok(text.trim().to_string())
            }
            Err(e) => {
                let detail = format!("{e:#}");
                warn!(question, error = %detail, "expansion failed");
                Err(ExpandError::Service(detail))
            }
        }
    }

    /// Like [`expand`](Self::expand), flattened into the single string the
    /// presentation layer displays. Never fails.
    pub async fn expand_text(&self, question: &str) -> String {
        match self.expand(question).await {
            Ok(text) => text,
            Err(e) => e.to_string(),
        }
    }
}
