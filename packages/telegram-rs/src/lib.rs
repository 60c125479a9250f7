//! Pure Telegram Bot API client.
//!
//! Only what a notifier needs: posting a message to one chat.
//!
//! # Example
//!
//! ```rust,ignore
//! use telegram::{TelegramOptions, TelegramService};
//!
//! let service = TelegramService::new(TelegramOptions::new("123:abc", "-1001"))?;
//! service.send_html("<b>Hello</b>").await?;
//! ```

pub mod error;
pub mod models;

use std::time::Duration;

pub use error::{Result, TelegramError};
pub use models::{ApiResponse, ParseMode, SendMessageRequest, SentMessage};

const BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramOptions {
    pub bot_token: String,
    pub chat_id: String,
    pub timeout: Duration,
}

impl TelegramOptions {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct TelegramService {
    client: reqwest::Client,
    options: TelegramOptions,
    base_url: String,
}

impl TelegramService {
    pub fn new(options: TelegramOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            client,
            options,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API host (e.g. a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn chat_id(&self) -> &str {
        &self.options.chat_id
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url, self.options.bot_token, method
        )
    }

    /// Send an HTML-formatted message with link previews disabled.
    pub async fn send_html(&self, text: &str) -> Result<SentMessage> {
        self.send_message(&SendMessageRequest {
            chat_id: &self.options.chat_id,
            text,
            parse_mode: Some(ParseMode::Html),
            disable_web_page_preview: true,
        })
        .await
    }

    pub async fn send_message(&self, request: &SendMessageRequest<'_>) -> Result<SentMessage> {
        let resp = self
            .client
            .post(self.method_url("sendMessage"))
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TelegramError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: ApiResponse<SentMessage> = resp.json().await?;
        match api_resp.result {
            Some(message) if api_resp.ok => {
                tracing::debug!(message_id = message.message_id, "Telegram message sent");
                Ok(message)
            }
            _ => Err(TelegramError::Rejected(
                api_resp
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            )),
        }
    }
}
