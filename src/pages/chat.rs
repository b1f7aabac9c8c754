//! Chat Page
//!
//! Conversation with the medical adviser backend.

use leptos::*;

use crate::api;

/// Who produced a transcript entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Adviser,
}

/// One entry of the chat transcript
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub is_error: bool,
}

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let messages = create_rw_signal(Vec::<ChatMessage>::new());
    let (draft, set_draft) = create_signal(String::new());
    let (pending, set_pending) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = draft.get().trim().to_string();
        if text.is_empty() || pending.get() {
            return;
        }

        messages.update(|m| m.push(ChatMessage {
            role: Role::User,
            text: text.clone(),
            is_error: false,
        }));
        set_draft.set(String::new());
        set_pending.set(true);

        spawn_local(async move {
            match api::send_chat(&text).await {
                Ok(reply) => {
                    messages.update(|m| m.push(ChatMessage {
                        role: Role::Adviser,
                        text: reply,
                        is_error: false,
                    }));
                }
                Err(e) => {
                    messages.update(|m| m.push(ChatMessage {
                        role: Role::Adviser,
                        text: format!("Unable to get an answer: {}", e),
                        is_error: true,
                    }));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Adviser Chat"</h1>
                <p class="text-gray-400 mt-1">
                    "Describe your symptoms to find matching conditions and medications"
                </p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                // Transcript
                <div class="space-y-3 min-h-[16rem]">
                    {move || {
                        if messages.get().is_empty() && !pending.get() {
                            view! {
                                <p class="text-gray-400 py-10 text-center">
                                    "Ask something like \"persistent dry cough and fever\"."
                                </p>
                            }.into_view()
                        } else {
                            messages.get().into_iter().map(|message| view! {
                                <MessageBubble message=message />
                            }).collect_view()
                        }
                    }}

                    // Pending indicator
                    {move || pending.get().then(|| view! {
                        <div class="flex justify-start">
                            <div class="bg-gray-700 rounded-lg px-4 py-3 text-gray-400 animate-pulse">
                                "Thinking..."
                            </div>
                        </div>
                    })}
                </div>

                // Input form
                <form on:submit=on_submit class="flex space-x-3">
                    <input
                        type="text"
                        placeholder="Describe your symptoms..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        disabled=move || pending.get() || draft.get().trim().is_empty()
                        class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        "Send"
                    </button>
                </form>
            </section>

            <p class="text-xs text-gray-500">
                "Answers are generated from open data and are not medical advice."
            </p>
        </div>
    }
}

/// Single transcript entry
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (wrapper, bubble) = match (message.role, message.is_error) {
        (Role::User, _) => ("flex justify-end", "bg-primary-600 text-white"),
        (Role::Adviser, false) => ("flex justify-start", "bg-gray-700 text-gray-200"),
        (Role::Adviser, true) => ("flex justify-start", "bg-red-900/40 text-red-200"),
    };

    view! {
        <div class=wrapper>
            <div class=format!("max-w-[75%] rounded-lg px-4 py-3 whitespace-pre-wrap {}", bubble)>
                {message.text}
            </div>
        </div>
    }
}
