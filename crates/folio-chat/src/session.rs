//! Chat widget session state.
//!
//! A [`ChatSession`] is created empty when the widget first renders and lives
//! for one page view. It is mutated only through the operations below.

use tracing::{debug, error};

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::message::ChatMessage;
use crate::transport::ChatReply;

/// An exchange that has been started but not yet settled.
///
/// Returned by [`ChatSession::begin_submit`] and handed back to
/// [`ChatSession::settle`] or [`ChatSession::abandon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    message: String,
    generation: u64,
}

impl PendingExchange {
    /// Trimmed text to send on the wire.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Empty draft or a request already in flight; nothing changed.
    Ignored,
    /// Reply (or the default apology) appended.
    Delivered,
    /// Exchange failed; the fallback message was appended.
    Failed,
    /// The widget was closed while the request was in flight; reply dropped.
    Discarded,
    /// The exchange was dropped before producing an outcome.
    Abandoned,
}

/// In-memory state of the chat widget.
#[derive(Debug, Clone)]
pub struct ChatSession {
    is_open: bool,
    messages: Vec<ChatMessage>,
    draft: String,
    is_loading: bool,
    /// Bumped by every `close()`; pending exchanges from an older generation
    /// no longer own the transcript.
    generation: u64,
    default_reply: String,
    fallback_reply: String,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

impl ChatSession {
    /// Create an empty, closed session using the reply texts from `config`.
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            is_open: false,
            messages: Vec::new(),
            draft: String::new(),
            is_loading: false,
            generation: 0,
            default_reply: config.default_reply.clone(),
            fallback_reply: config.fallback_reply.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the transcript has no messages yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Show the widget. The transcript is left as is.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the widget and reset the transcript and draft.
    ///
    /// A request still in flight keeps the loading flag until it settles, and
    /// its reply is then discarded.
    pub fn close(&mut self) {
        self.is_open = false;
        self.messages.clear();
        self.draft.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Replace the draft input.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Start a submission from the current draft.
    ///
    /// Returns `None` without touching state if the trimmed draft is empty or
    /// a request is already in flight. Otherwise the draft is moved into the
    /// transcript as a user message and the loading flag is raised.
    pub fn begin_submit(&mut self) -> Option<PendingExchange> {
        if self.is_loading {
            debug!("Submit ignored, request already in flight");
            return None;
        }
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        let message = trimmed.to_string();

        let content = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::user(content));
        self.is_loading = true;

        Some(PendingExchange {
            message,
            generation: self.generation,
        })
    }

    /// Finish a submission with the transport outcome.
    ///
    /// Always clears the loading flag. Appends exactly one assistant message
    /// unless the widget was closed in the meantime.
    pub fn settle(
        &mut self,
        pending: PendingExchange,
        outcome: Result<ChatReply, ChatError>,
    ) -> SubmitResult {
        self.is_loading = false;

        let (content, result) = match outcome {
            Ok(reply) => (
                reply
                    .response
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| self.default_reply.clone()),
                SubmitResult::Delivered,
            ),
            Err(e) => {
                error!(error = %e, "Chat error");
                (self.fallback_reply.clone(), SubmitResult::Failed)
            }
        };

        if pending.generation != self.generation {
            debug!(
                pending = pending.generation,
                current = self.generation,
                "Discarding reply for closed session"
            );
            return SubmitResult::Discarded;
        }

        self.messages.push(ChatMessage::assistant(content));
        result
    }

    /// Drop a pending exchange without an outcome. Only clears loading.
    pub fn abandon(&mut self, pending: PendingExchange) -> SubmitResult {
        debug!(generation = pending.generation, "Chat exchange abandoned");
        self.is_loading = false;
        SubmitResult::Abandoned
    }
}
