//! Outbound relay to the remote chat endpoint.
//!
//! Wire contract:
//! - `POST <endpoint>` with `Content-Type: application/json`
//! - request body `{"message": "<trimmed text>"}`
//! - 2xx reply: JSON object with an optional field `response`. Strings are
//!   shown as-is, numbers and `true` are shown as text; `null`, `""`, `0`,
//!   `false`, arrays and objects count as no reply.
//!
//! Any non-2xx status, transport failure or undecodable body is an error.
//! No timeout and no retry are applied.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ChatConfig;
use crate::error::ChatError;

/// Request body sent to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Reply body from the chat endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "reply_text")]
    pub response: Option<String>,
}

fn reply_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    };
    Ok(text)
}

/// Something that can carry one visitor message to the assistant.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send `message` and wait for the reply.
    async fn send(&self, message: &str) -> Result<ChatReply, ChatError>;
}

/// [`ChatTransport`] over HTTP.
///
/// Cheaply cloneable (shares the reqwest client internally).
#[derive(Clone)]
pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl std::fmt::Debug for HttpChatTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatTransport")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl HttpChatTransport {
    /// Build a transport for the endpoint in `config`.
    pub fn new(config: &ChatConfig) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("folio-chat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ChatError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, ChatError> {
        debug!(endpoint = %self.endpoint, len = message.len(), "Sending chat message");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(ChatError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<ChatReply>().await.map_err(ChatError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&ChatRequest { message: "Merhaba" }).unwrap();
        assert_eq!(body, r#"{"message":"Merhaba"}"#);
    }

    #[test]
    fn test_reply_tolerates_missing_and_extra_fields() {
        let empty: ChatReply = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.response, None);

        let extra: ChatReply =
            serde_json::from_str(r#"{"response":"Selam!","model":"x"}"#).unwrap();
        assert_eq!(extra.response.as_deref(), Some("Selam!"));
    }

    #[test]
    fn test_reply_scalars_render_as_text() {
        let number: ChatReply = serde_json::from_str(r#"{"response":42}"#).unwrap();
        assert_eq!(number.response.as_deref(), Some("42"));

        let float: ChatReply = serde_json::from_str(r#"{"response":1.5}"#).unwrap();
        assert_eq!(float.response.as_deref(), Some("1.5"));

        let flag: ChatReply = serde_json::from_str(r#"{"response":true}"#).unwrap();
        assert_eq!(flag.response.as_deref(), Some("true"));
    }

    #[test]
    fn test_reply_falsy_values_count_as_missing() {
        for body in [
            r#"{"response":null}"#,
            r#"{"response":""}"#,
            r#"{"response":0}"#,
            r#"{"response":false}"#,
            r#"{"response":["a"]}"#,
            r#"{"response":{"text":"a"}}"#,
        ] {
            let reply: ChatReply = serde_json::from_str(body).unwrap();
            assert_eq!(reply.response, None, "{body}");
        }
    }

    #[test]
    fn test_transport_uses_configured_endpoint() {
        let config = ChatConfig::default().with_endpoint("http://localhost:1/api/chat");
        let transport = HttpChatTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:1/api/chat");
    }
}
