//! Chat Model

use serde::{Deserialize, Serialize};

/// Chat request payload
///
/// `llm_name` is the caller-facing alias, not the concrete model
/// identifier; the server resolves it through a fixed table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: Option<String>,
    pub llm_name: Option<String>,
}

/// Chat response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_tolerates_missing_fields() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.prompt.is_none());
        assert!(req.llm_name.is_none());
    }

    #[test]
    fn test_chat_response_shape() {
        let value = serde_json::to_value(ChatResponse {
            response: "ok".to_string(),
        })
        .unwrap();
        assert_eq!(value["response"], "ok");
    }
}
