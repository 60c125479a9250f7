use serde::{Deserialize, Serialize};

/// Markup dialect Telegram should use when rendering `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "MarkdownV2")]
    MarkdownV2,
}

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: bool,
}

/// Envelope wrapping every Bot API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

/// The subset of a sent message we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
    pub date: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_request_serializes_bot_api_fields() {
        let request = SendMessageRequest {
            chat_id: "-100123",
            text: "<b>hi</b>",
            parse_mode: Some(ParseMode::Html),
            disable_web_page_preview: true,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "chat_id": "-100123",
                "text": "<b>hi</b>",
                "parse_mode": "HTML",
                "disable_web_page_preview": true,
            })
        );
    }

    #[test]
    fn parse_mode_is_omitted_when_unset() {
        let request = SendMessageRequest {
            chat_id: "1",
            text: "plain",
            parse_mode: None,
            disable_web_page_preview: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("parse_mode").is_none());
    }

    #[test]
    fn error_envelope_deserializes() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        let resp: ApiResponse<SentMessage> = serde_json::from_str(body).unwrap();

        assert!(!resp.ok);
        assert!(resp.result.is_none());
        assert_eq!(resp.error_code, Some(400));
        assert_eq!(
            resp.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }
}
