use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::ConversationTurn;

/// Shown in the response panel when a request fails.
pub const APOLOGY: &str = "Sorry, there was an error processing your request.";

/// Whether the send action is available: not while a request is in flight,
/// and never for a blank prompt.
pub fn can_send(input: &str, is_loading: bool) -> bool {
    !is_loading && !input.trim().is_empty()
}

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub conversation: ReadSignal<Vec<ConversationTurn>>,
    pub output: ReadSignal<String>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,

    // --- Write signals (for mutating state) ---
    pub set_conversation: WriteSignal<Vec<ConversationTurn>>,
    pub set_output: WriteSignal<String>,
    pub set_is_loading: WriteSignal<bool>,
    pub set_error: WriteSignal<Option<String>>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (conversation, set_conversation) = signal(Vec::<ConversationTurn>::new());
        let (output, set_output) = signal(String::new());
        let (is_loading, set_is_loading) = signal(false);
        let (error, set_error) = signal(None::<String>);

        let state = Self {
            conversation,
            output,
            is_loading,
            error,
            set_conversation,
            set_output,
            set_is_loading,
            set_error,
        };

        provide_context(state);
        state
    }

    /// Append the prompt to the conversation and relay it to the backend.
    pub fn send_prompt(&self, text: String) {
        if !can_send(&text, self.is_loading.get_untracked()) {
            return;
        }

        self.set_is_loading.set(true);
        self.set_error.set(None);
        self.set_conversation
            .update(|turns| turns.push(ConversationTurn::user(text.clone())));
        let conversation = self.conversation.get_untracked();

        let state = *self;
        spawn_local(async move {
            match api::send_prompt(&text, conversation).await {
                Ok(answer) => {
                    state
                        .set_conversation
                        .update(|turns| turns.push(ConversationTurn::assistant(answer.clone())));
                    state.set_output.set(answer);
                }
                Err(e) => {
                    log::error!("Relay request failed: {e}");
                    state.set_error.set(Some(e));
                    state.set_output.set(APOLOGY.to_string());
                }
            }
            state.set_is_loading.set(false);
        });
    }
}
