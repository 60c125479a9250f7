use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("request to Telegram failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Telegram rejected the call: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, TelegramError>;
