//! Chat bridge: connects the widget to the remote chat relay.

use std::sync::Arc;

use folio_chat::{ChatConfig, ChatError, ChatTransport, HttpChatTransport};

/// Handle to the chat relay used by the widget.
#[derive(Clone)]
pub struct ChatHandle {
    pub transport: Arc<dyn ChatTransport>,
    pub config: ChatConfig,
}

impl std::fmt::Debug for ChatHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatHandle")
            .field("endpoint", &self.config.endpoint)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ChatHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.transport, &other.transport)
    }
}

/// Build the HTTP relay for `config`.
pub fn connect(config: ChatConfig) -> Result<ChatHandle, ChatError> {
    let transport = HttpChatTransport::new(&config)?;
    tracing::info!(endpoint = %config.endpoint, "Chat relay ready");
    Ok(ChatHandle {
        transport: Arc::new(transport),
        config,
    })
}
