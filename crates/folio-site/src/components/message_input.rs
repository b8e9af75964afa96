//! Chat compose bar with send button.

use dioxus::prelude::*;

use crate::content::chat;

/// Message input component.
///
/// The draft lives in the session; this component only reports edits and
/// submit requests (Enter or the send button).
#[component]
pub fn MessageInput(
    draft: String,
    busy: bool,
    on_draft_change: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let can_send = !busy && !draft.trim().is_empty();

    rsx! {
        div { class: "chat-input-bar",
            input {
                class: "chat-input",
                r#type: "text",
                placeholder: chat::INPUT_PLACEHOLDER,
                value: "{draft}",
                oninput: move |evt| on_draft_change.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().shift() {
                        evt.prevent_default();
                        on_submit.call(());
                    }
                },
            }
            button {
                class: "send-button",
                disabled: !can_send,
                onclick: move |_| on_submit.call(()),
                "➤"
            }
        }
    }
}
