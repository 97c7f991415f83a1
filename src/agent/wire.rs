//! Request and response shapes of the Gemini `generateContent` REST call.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ConversationTurn, MessageRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole {
    User,
    Model,
}

impl From<MessageRole> for WireRole {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => WireRole::User,
            MessageRole::Assistant => WireRole::Model,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<WireRole>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn system(text: &str) -> Self {
        Self { role: None, parts: vec![Part { text: text.to_string() }] }
    }
}

/// Converts turns to wire contents, merging consecutive turns of the same
/// role into one content with several parts so roles alternate.
pub fn to_contents(turns: &[ConversationTurn]) -> Vec<Content> {
    let mut contents: Vec<Content> = Vec::with_capacity(turns.len());
    for turn in turns {
        let role = WireRole::from(turn.role);
        let part = Part { text: turn.content.clone() };
        match contents.last_mut() {
            Some(last) if last.role == Some(role) => last.parts.push(part),
            _ => contents.push(Content { role: Some(role), parts: vec![part] }),
        }
    }
    contents
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { temperature: 0.9, top_p: 1.0, top_k: 1, max_output_tokens: 8192 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockMediumAndAbove,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

pub fn default_safety_settings() -> Vec<SafetySetting> {
    vec![
        SafetySetting {
            category: HarmCategory::Harassment,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
        SafetySetting {
            category: HarmCategory::HateSpeech,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_settings: Option<Vec<SafetySetting>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn into_first_text(self) -> Result<String, AppError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => AppError::PromptBlocked { reason },
                None => AppError::MalformedResponse { message: "no candidates returned".to_string() },
            });
        };

        candidate
            .content
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AppError::MalformedResponse {
                message: format!(
                    "first candidate has no text (finish reason: {})",
                    candidate.finish_reason.as_deref().unwrap_or("unknown")
                ),
            })
    }
}

/// Error envelope returned by the API on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
}

/// Best-effort extraction of the upstream error message.
pub fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .and_then(|env| env.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serializes_with_api_field_names() {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::system("be helpful")),
            contents: to_contents(&[ConversationTurn::user("hi")]),
            generation_config: GenerationConfig::default(),
            safety_settings: Some(default_safety_settings()),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "systemInstruction": { "parts": [{ "text": "be helpful" }] },
                "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }],
                "generationConfig": {
                    "temperature": 0.9,
                    "topP": 1.0,
                    "topK": 1,
                    "maxOutputTokens": 8192
                },
                "safetySettings": [
                    { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                    { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE" }
                ]
            })
        );
    }

    #[test]
    fn safety_settings_are_omitted_when_disabled() {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![],
            generation_config: GenerationConfig::default(),
            safety_settings: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("safetySettings").is_none());
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn consecutive_turns_of_one_role_are_merged() {
        let contents = to_contents(&[
            ConversationTurn::user("a"),
            ConversationTurn::assistant("b"),
            ConversationTurn::assistant("c"),
            ConversationTurn::user("d"),
            ConversationTurn::user("e"),
        ]);

        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role, Some(WireRole::User));
        assert_eq!(contents[1].role, Some(WireRole::Model));
        assert_eq!(contents[1].parts.len(), 2);
        assert_eq!(contents[2].parts[1].text, "e");
    }

    #[test]
    fn first_text_is_extracted() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "OK" }, { "text": "ignored" }] },
                  "finishReason": "STOP" },
                { "content": { "role": "model", "parts": [{ "text": "second" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.into_first_text().unwrap(), "OK");
    }

    #[test]
    fn missing_candidates_are_reported() {
        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
        assert!(matches!(
            blocked.into_first_text(),
            Err(AppError::PromptBlocked { ref reason }) if reason == "SAFETY"
        ));

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(empty.into_first_text(), Err(AppError::MalformedResponse { .. })));

        let no_parts: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();
        let err = no_parts.into_first_text().unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn upstream_error_message_falls_back() {
        assert_eq!(
            upstream_error_message(r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#),
            "API key not valid"
        );
        assert_eq!(upstream_error_message("<html>bad gateway</html>"), "Unknown error");
    }
}
