use serde::{Deserialize, Serialize};

/// Matches the backend `ConversationTurn` model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_string(), content: content.into() }
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Request body for the relay endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct RelayRequest {
    pub prompt: String,
    pub conversation: Vec<ConversationTurn>,
}

/// Successful relay response.
#[derive(Clone, Debug, Deserialize)]
pub struct RelayResponse {
    pub response: String,
}

/// Error body returned by the relay on 4xx/5xx.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
