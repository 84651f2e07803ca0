use serde::{Deserialize, Serialize};

/// Default model served by the completion provider
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Low temperature keeps the assistant's tone steady between calls
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

pub const DEFAULT_MAX_TOKENS: u32 = 7000;

/// Role tag of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged turn sent to (or received from) the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Model selection and decoding parameters, fixed for the process lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Request body of the OpenAI-compatible chat completions endpoint
#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

impl ChatCompletionRequest {
    pub fn new(turns: &[ChatMessage], params: &CompletionParams) -> Self {
        Self {
            model: params.model.clone(),
            messages: turns.to_vec(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            stream: false,
        }
    }
}

/// Response body of the chat completions endpoint
#[derive(Deserialize, Debug, Serialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// Candidate completion in the response
#[derive(Deserialize, Debug, Serialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: Option<ChoiceMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Message carried by a choice; content may be null
#[derive(Deserialize, Debug, Serialize)]
pub struct ChoiceMessage {
    pub role: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_roles_lowercase() {
        let turns = vec![ChatMessage::system("be nice"), ChatMessage::user("hi")];
        let request = ChatCompletionRequest::new(&turns, &CompletionParams::default());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "llama-3.3-70b-versatile");
        assert_eq!(value["max_tokens"], 7000);
        assert_eq!(value["stream"], false);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_response_tolerates_null_content_and_missing_choices() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":null}}]}"#,
        )
        .unwrap();
        assert!(parsed.choices[0].message.as_ref().unwrap().content.is_none());

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(empty.choices.is_empty());
    }
}
