use leptos::ev;
use leptos::prelude::*;

use crate::models::ConversationTurn;
use crate::state::{can_send, AppState};

/// Two panels: conversation and input on the left, latest response on the right.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="chat-area">
            <div class="left-panel">
                <div class="conversation">
                    <h2>"Conversation:"</h2>
                    <For
                        each=move || state.conversation.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        let:entry
                    >
                        <TurnBubble turn=entry.1 />
                    </For>
                </div>
                <ChatInput />
                // Error area
                {move || {
                    state.error.get().map(|err| {
                        view! { <div class="error-text">{err}</div> }
                    })
                }}
            </div>

            <div class="response-panel">
                <h2>"Response:"</h2>
                {move || {
                    if state.is_loading.get() {
                        view! { <div class="loading">"Processing…"</div> }.into_any()
                    } else {
                        let output = state.output.get();
                        let text = if output.is_empty() {
                            "Awaiting your query...".to_string()
                        } else {
                            output
                        };
                        view! { <p class="response-text">{text}</p> }.into_any()
                    }
                }}
            </div>
        </main>
    }
}

/// A single conversation entry.
#[component]
fn TurnBubble(turn: ConversationTurn) -> impl IntoView {
    let (css_class, label) = if turn.is_user() {
        ("message user", "You:")
    } else {
        ("message assistant", "AI:")
    };

    view! {
        <div class=css_class>
            <div class="role-label">{label}</div>
            <div class="message-text">{turn.content}</div>
        </div>
    }
}

/// Prompt textarea with send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let is_loading = move || state.is_loading.get();

    let send = move || {
        let text = input.get_untracked();
        if !can_send(&text, state.is_loading.get_untracked()) {
            return;
        }
        set_input.set(String::new());
        state.send_prompt(text);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    let on_submit = move |_| {
        send();
    };

    view! {
        <div class="input-area">
            <textarea
                rows="5"
                placeholder="Ask a question about the Hopper's Hub data..."
                prop:value=input
                on:input=move |ev| {
                    set_input.set(event_target_value(&ev));
                }
                on:keydown=on_keydown
                disabled=is_loading
            />
            <button
                class="send-btn"
                on:click=on_submit
                disabled=move || !can_send(&input.get(), is_loading())
            >
                {move || if is_loading() { "Processing..." } else { "Send" }}
            </button>
        </div>
    }
}
