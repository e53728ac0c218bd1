use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client for the Ollama server that produces next-workout suggestions.
pub struct Suggester {
    base_url: String,
    model: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize, Default)]
struct ChatMessage {
    role: String,
    content: String,
}

// Chat responses arrive as a stream of JSON objects; the content field is
// accumulated until `done`.
#[derive(Deserialize)]
struct OllamaChatResponse {
    #[serde(default)]
    message: ChatMessage,
    #[serde(default)]
    done: bool,
}

#[derive(Deserialize)]
struct OllamaPullStatus {
    #[serde(default)]
    status: String,
}

#[derive(Error, Debug)]
pub enum SuggesterError {
    #[error("ollama request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Suggester {
    pub fn new(base_url: &str, model: &str) -> Self {
        Suggester {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Pull the configured model if the server does not have it yet. Blocks
    /// until the pull stream ends.
    pub async fn ensure_model(&self) -> Result<(), SuggesterError> {
        let body = serde_json::json!({ "name": self.model });
        let text = self
            .http
            .post(format!("{}/api/pull", self.base_url))
            .json(&body)
            .send()
            .await?
            .text()
            .await?;

        for chunk in serde_json::Deserializer::from_str(&text).into_iter::<OllamaPullStatus>() {
            let Ok(chunk) = chunk else { break };
            match chunk.status.as_str() {
                "success" | "exists" | "complete" | "already exists" => return Ok(()),
                _ => {}
            }
        }
        // Stream ended without an explicit status; assume success.
        Ok(())
    }

    /// Ask the model for a next-workout suggestion based on a textual
    /// history description.
    pub async fn suggest(&self, history: &str) -> Result<String, SuggesterError> {
        let request = OllamaChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: format!(
                    "Based on this workout history, suggest the next workout: {}",
                    history
                ),
            }],
        };

        let text = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        let mut suggestion = String::new();
        for chunk in serde_json::Deserializer::from_str(&text).into_iter::<OllamaChatResponse>() {
            let Ok(chunk) = chunk else { break };
            suggestion.push_str(&chunk.message.content);
            if chunk.done {
                break;
            }
        }
        Ok(suggestion)
    }
}
