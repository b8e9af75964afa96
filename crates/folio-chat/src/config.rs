//! Configuration for the chat relay.

use serde::{Deserialize, Serialize};

/// Remote chat endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://9yhyi3c8zg05.manus.space/api/chat";

/// Assistant text used when a 2xx reply carries no `response` field.
pub const DEFAULT_REPLY: &str = "Üzgünüm, bir hata oluştu.";

/// Assistant text used when the exchange fails (transport, status, or decode).
pub const FALLBACK_REPLY: &str =
    "Üzgünüm, şu anda bir teknik sorun yaşıyorum. Lütfen daha sonra tekrar deneyin.";

/// Environment variable that overrides the endpoint.
pub const ENDPOINT_ENV: &str = "FOLIO_CHAT_ENDPOINT";

/// Chat relay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Absolute URL the visitor's message is POSTed to
    pub endpoint: String,
    /// Reply shown when the server answers without a `response` field
    pub default_reply: String,
    /// Reply shown when the exchange fails
    pub fallback_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_reply: DEFAULT_REPLY.to_string(),
            fallback_reply: FALLBACK_REPLY.to_string(),
        }
    }
}

impl ChatConfig {
    /// Create config from environment variables.
    ///
    /// An unset or blank `FOLIO_CHAT_ENDPOINT` keeps the default endpoint.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => config.with_endpoint(endpoint.trim()),
            _ => config,
        }
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.default_reply, "Üzgünüm, bir hata oluştu.");
        assert!(config.fallback_reply.contains("teknik sorun"));
    }

    #[test]
    fn test_with_endpoint() {
        let config = ChatConfig::default().with_endpoint("http://127.0.0.1:9000/api/chat");
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/api/chat");
        assert_eq!(config.default_reply, DEFAULT_REPLY);
    }

    #[test]
    fn test_from_env_has_endpoint() {
        let config = ChatConfig::from_env();
        assert!(!config.endpoint.is_empty());
    }
}
