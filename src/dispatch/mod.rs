//! Chat dispatcher: forwards a question to the chat-completion service and
//! turns any failure into a fallback reply the session can survive.

use anyhow::{bail, Result};

use crate::config::ModelChoice;
use crate::llm::{ChatMessage, ChatOptions, LlmClient};

/// Fixed answer recorded whenever the service cannot produce one.
pub const FALLBACK_ANSWER: &str = "I'm sorry, I couldn't generate a response.";

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Outcome of one dispatch. The UI layer decides how to present a fallback;
/// the dispatcher only guarantees there is always an answer string.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Answer(String),
    Fallback { error: String },
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) => text,
            Self::Fallback { .. } => FALLBACK_ANSWER,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Answer(_) => None,
            Self::Fallback { error } => Some(error),
        }
    }
}

#[derive(Debug)]
pub struct Dispatcher {
    client: LlmClient,
    model: ModelChoice,
    temperature: f32,
}

impl Dispatcher {
    pub fn new(client: LlmClient, model: ModelChoice, temperature: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&temperature) {
            bail!("temperature must be within [0, 1], got {}", temperature);
        }
        Ok(Self { client, model, temperature })
    }

    pub fn model(&self) -> ModelChoice {
        self.model
    }

    /// One outbound call. Never fails: service errors become a
    /// [`Reply::Fallback`] carrying the underlying message for display.
    pub async fn ask(&self, question: &str, excerpt: Option<&str>) -> Reply {
        let messages = [
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(compose_prompt(question, excerpt)),
        ];
        let opts = ChatOptions {
            model: self.model.id().to_string(),
            temperature: self.temperature,
        };
        match self.client.complete(&messages, &opts).await {
            Ok(text) => Reply::Answer(text),
            Err(e) => Reply::Fallback { error: format!("{e:#}") },
        }
    }
}

fn compose_prompt(question: &str, excerpt: Option<&str>) -> String {
    match excerpt {
        Some(data) if !data.trim().is_empty() => {
            format!("Data sample (CSV):\n{}\n\nQuestion: {}", data, question)
        }
        _ => question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{compose_prompt, Reply, FALLBACK_ANSWER};

    #[test]
    fn prompt_includes_excerpt_when_present() {
        let composed = compose_prompt("berapa total sampah?", Some("Year,TotalWaste\n2020,6800\n"));
        assert!(composed.starts_with("Data sample (CSV):"));
        assert!(composed.ends_with("Question: berapa total sampah?"));
    }

    #[test]
    fn prompt_is_bare_question_without_excerpt() {
        assert_eq!(compose_prompt("halo", None), "halo");
        assert_eq!(compose_prompt("halo", Some("   ")), "halo");
    }

    #[test]
    fn fallback_reply_always_has_the_fixed_text() {
        let reply = Reply::Fallback { error: "connection refused".into() };
        assert_eq!(reply.text(), FALLBACK_ANSWER);
        assert_eq!(reply.error(), Some("connection refused"));
    }
}
