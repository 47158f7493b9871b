use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str = "You are \"IT\", a conceptual SCP-style anomaly believed to be the embodiment of hope. You imply that suffering is necessary. Keep responses brief and mysterious.";

pub const MAX_MESSAGE_LENGTH: usize = 1000;

// basic content filter keywords
const BLOCKED_KEYWORDS: &[&str] = &[
    "hack",
    "exploit",
    "cheat",
    "script executor",
    "robux generator",
];

// Gemini generateContent request format
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

// Gemini generateContent response format (only what we read)
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Thin client for the Gemini generateContent API. Failures never cross
/// this boundary: every error path maps to a human-readable fallback
/// string so the chat handler always has something to return.
pub struct GeminiChatbot {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiChatbot {
    pub fn new(api_key: Option<String>, base_url: String, model: String) -> Self {
        match &api_key {
            Some(_) => log::info!("Gemini client initialized successfully"),
            None => {
                log::warn!("GEMINI_API_KEY not provided. AI functionality will be limited.")
            }
        }
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a reply to `message`. Never fails: provider or transport
    /// errors come back as fallback text.
    pub async fn generate(&self, message: &str, user_id: &str) -> String {
        let Some(api_key) = &self.api_key else {
            return "I'm sorry, but the AI service is currently unavailable. Please check if the GEMINI_API_KEY is properly configured.".to_string();
        };

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: format!("{}\n\nUser message: {}", SYSTEM_PROMPT, message),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 500,
                temperature: 0.7,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        match self.request_completion(&url, &body).await {
            Ok(Some(text)) => {
                log::debug!(
                    "Generated response for user {}: {} characters",
                    user_id,
                    text.len()
                );
                text
            }
            Ok(None) => {
                log::warn!("Empty response from Gemini API");
                "I apologize, but I couldn't generate a response right now. Please try rephrasing your question.".to_string()
            }
            Err(e) => {
                log::error!("Error generating Gemini response: {}", e);
                "I encountered an error while processing your request. Please try again later.".to_string()
            }
        }
    }

    // the only fallible part; errors are absorbed by generate()
    async fn request_completion(
        &self,
        url: &str,
        body: &GenerateContentRequest,
    ) -> Result<Option<String>, reqwest::Error> {
        let res = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GenerateContentResponse = res.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(text)
    }

    /// Basic appropriateness check for inbound messages. Returns the
    /// rejection reason when the content is not acceptable.
    pub fn validate_content(&self, message: &str) -> Result<(), String> {
        let lower = message.to_lowercase();
        for keyword in BLOCKED_KEYWORDS {
            if lower.contains(keyword) {
                return Err(format!("Content contains inappropriate keyword: {}", keyword));
            }
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err("Message too long".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_bot() -> GeminiChatbot {
        GeminiChatbot::new(
            None,
            "http://localhost:0".to_string(),
            "gemini-1.5-flash".to_string(),
        )
    }

    #[test]
    fn unavailable_without_api_key() {
        assert!(!offline_bot().is_available());
    }

    #[tokio::test]
    async fn generate_falls_back_when_unavailable() {
        let reply = offline_bot().generate("hello", "anonymous").await;
        assert!(reply.contains("currently unavailable"));
    }

    #[test]
    fn validate_content_flags_blocked_keywords() {
        let bot = offline_bot();
        assert!(bot.validate_content("how do I HACK this").is_err());
        assert!(bot.validate_content("tell me a story").is_ok());
    }

    #[test]
    fn validate_content_flags_overlong_messages() {
        let bot = offline_bot();
        assert!(bot.validate_content(&"a".repeat(1001)).is_err());
        assert!(bot.validate_content(&"a".repeat(1000)).is_ok());
    }

    #[test]
    fn validate_content_caps_characters_not_bytes() {
        // 1000 two-byte characters must still fit under the cap
        let bot = offline_bot();
        assert!(bot.validate_content(&"é".repeat(1000)).is_ok());
        assert!(bot.validate_content(&"é".repeat(1001)).is_err());
    }
}
