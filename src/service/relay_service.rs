use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::agent::wire::{
    default_safety_settings, to_contents, Content, GenerateContentRequest, GenerationConfig,
};
use crate::agent::ModelClient;
use crate::errors::AppError;
use crate::models::{ConversationTurn, MessageRole, RelayRequest, RelayResponse};
use crate::prompts::SYSTEM_INSTRUCTION;
use crate::seed::SeedHistoryProvider;

/// Assembles the full chat payload.
///
/// Order: system instruction (out of band), seed turns, prior turns, prompt.
/// When the prior turns already end with the prompt as a user turn (the
/// browser sends its history including the message being sent) that turn is
/// not repeated.
pub fn assemble_payload(
    seed: &[ConversationTurn],
    prior: &[ConversationTurn],
    prompt: &str,
    safety_settings: bool,
) -> GenerateContentRequest {
    let prior = match prior.split_last() {
        Some((last, rest)) if last.role == MessageRole::User && last.content == prompt => rest,
        _ => prior,
    };

    let mut turns = Vec::with_capacity(seed.len() + prior.len() + 1);
    turns.extend_from_slice(seed);
    turns.extend_from_slice(prior);
    turns.push(ConversationTurn::user(prompt));

    GenerateContentRequest {
        system_instruction: Some(Content::system(SYSTEM_INSTRUCTION)),
        contents: to_contents(&turns),
        generation_config: GenerationConfig::default(),
        safety_settings: safety_settings.then(default_safety_settings),
    }
}

#[derive(Clone)]
pub struct RelayService {
    seeds: SeedHistoryProvider,
    client: Arc<dyn ModelClient>,
    safety_settings: bool,
}

impl RelayService {
    pub fn new(seeds: SeedHistoryProvider, client: Arc<dyn ModelClient>, safety_settings: bool) -> Self {
        Self { seeds, client, safety_settings }
    }

    pub fn seeds(&self) -> &SeedHistoryProvider {
        &self.seeds
    }

    pub async fn relay(&self, request: RelayRequest) -> Result<RelayResponse, AppError> {
        // ── Validation ────────────────────────────────────────────────────────
        let RelayRequest { prompt, conversation } = request;
        let prompt = prompt.unwrap_or_default();
        if prompt.trim().is_empty() {
            return Err(AppError::EmptyField { field_name: "prompt".to_string() });
        }

        let span = info_span!("relay", request_id = %Uuid::new_v4());
        async move {
            // ── Seed history + payload ────────────────────────────────────────
            let seed = self.seeds.seed_history().await;
            let payload = assemble_payload(
                &seed.turns,
                &conversation,
                &prompt,
                self.safety_settings,
            );
            info!(
                "Relaying prompt ({} chars) with {} seed turn(s) and {} prior turn(s)",
                prompt.chars().count(),
                seed.turns.len(),
                conversation.len()
            );

            // ── Call the model ────────────────────────────────────────────────
            let response = self.client.generate(&payload).await?;
            info!("Model answered with {} chars", response.chars().count());

            Ok(RelayResponse { response })
        }
        .instrument(span)
        .await
    }
}
