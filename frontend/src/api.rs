use gloo_net::http::Request;

use crate::models::{ConversationTurn, ErrorBody, RelayRequest, RelayResponse};

/// Relay endpoint, relative to the page origin.
const RELAY_URL: &str = "/api/gemini";

/// Sends the prompt together with the conversation so far.
pub async fn send_prompt(
    prompt: &str,
    conversation: Vec<ConversationTurn>,
) -> Result<String, String> {
    let body = RelayRequest {
        prompt: prompt.to_string(),
        conversation,
    };

    let resp = Request::post(RELAY_URL)
        .json(&body)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        let status = resp.status();
        return Err(match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("Server error: {status}"),
        });
    }

    resp.json::<RelayResponse>()
        .await
        .map(|r| r.response)
        .map_err(|e| format!("Parse error: {e}"))
}
