use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Model used for every expansion request.
pub const MODEL: &str = "gpt-3.5-turbo";
/// Low sampling temperature, kept fixed for consistent patient-facing tone.
pub const TEMPERATURE: f64 = 0.4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Connection settings for the generation service, passed in explicitly so
/// callers (and tests) control them instead of reading ambient state.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl LlmConfig {
    /// Read settings from the environment (`OPENAI_API_KEY`,
    /// `OPENAI_BASE_URL`). A missing key is not an error here: it becomes a
    /// user-visible message at call time.
    pub fn from_env() -> Self {
        let base_url = dotenv::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let api_key = dotenv::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        Self { base_url, api_key }
    }
}

pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Self {
        // No timeout override: the call blocks until the service responds or
        // the network stack gives up on its own.
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Resolve the chat completions endpoint from the base URL.
    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    /// Non-streaming chat completion with the fixed model and temperature.
    pub async fn chat(&self, messages: &[Message]) -> Result<String> {
        let body = serde_json::json!({
            "model": MODEL,
            "messages": messages,
            "temperature": TEMPERATURE,
        });

        let mut req = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let resp = req
            .send()
            .await
            .context("no se pudo enviar la petición al servicio")?
            .error_for_status()
            .context("el servicio devolvió un error")?;
        let text = resp
            .text()
            .await
            .context("no se pudo leer la respuesta del servicio")?;
        let json: serde_json::Value =
            serde_json::from_str(&text).context("la respuesta del servicio no es JSON válido")?;

        // One generated choice is expected; anything else is a failure.
        let content = json["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .ok_or_else(|| anyhow!("la respuesta del servicio no contiene texto generado"))?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base_url: &str) -> LlmClient {
        LlmClient::new(LlmConfig { base_url: base_url.to_string(), api_key: None })
    }

    #[test]
    fn endpoint_appends_chat_completions_to_v1() {
        let client = client_with_base("https://api.openai.com/v1");
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn endpoint_keeps_full_path() {
        let client = client_with_base("http://localhost:1234/v1/chat/completions/");
        assert_eq!(client.endpoint(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn endpoint_inserts_v1_when_missing() {
        let client = client_with_base("http://localhost:1234");
        assert_eq!(client.endpoint(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn message_constructors_tag_roles() {
        assert_eq!(Message::system("a").role, "system");
        assert_eq!(Message::user("b").role, "user");
    }
}
