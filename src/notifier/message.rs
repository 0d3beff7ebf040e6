//! Webhook payload

use serde::Serialize;

/// Body of one webhook POST
///
/// Serializes to exactly `{"text": "..."}`. Built per call and dropped once
/// the request has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutboundMessage<'a> {
    /// Message text shown in the channel
    pub text: &'a str,
}

impl<'a> OutboundMessage<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Encode the payload as a JSON request body
    pub fn to_body(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    #[test]
    fn test_body_has_single_text_field() {
        let body = OutboundMessage::new("hello").to_body().unwrap();
        assert_eq!(body, br#"{"text":"hello"}"#);
    }

    #[test]
    fn test_quotes_are_escaped() {
        let original = "a \"quoted\" string";
        let body = OutboundMessage::new(original).to_body().unwrap();

        let decoded: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded, json!({ "text": original }));
        assert_eq!(decoded["text"].as_str(), Some(original));
    }

    #[test]
    fn test_empty_text_is_still_a_payload() {
        let body = OutboundMessage::new("").to_body().unwrap();
        assert_eq!(body, br#"{"text":""}"#);
    }

    proptest! {
        #[test]
        fn prop_text_survives_json_encoding(text in any::<String>()) {
            let body = OutboundMessage::new(&text).to_body().unwrap();
            let decoded: Value = serde_json::from_slice(&body).unwrap();

            let object = decoded.as_object().unwrap();
            prop_assert_eq!(object.len(), 1);
            prop_assert_eq!(object["text"].as_str(), Some(text.as_str()));
        }
    }
}
