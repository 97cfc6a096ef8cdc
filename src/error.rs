use thiserror::Error;

/// Errors surfaced to callers of the bot.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{message}")]
    Exchange { message: String },
}

impl BotError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        BotError::Configuration(msg.into())
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        BotError::Validation(msg.into())
    }
}

impl From<ExchangeFault> for BotError {
    fn from(fault: ExchangeFault) -> Self {
        BotError::Exchange {
            message: format!("Binance API error: {}", fault),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

/// Failure raised by an exchange gateway.
///
/// This is the only fault type an [`OrderGateway`](crate::OrderGateway) may
/// return; the submitter folds every variant into [`BotError::Exchange`].
#[derive(Error, Debug)]
pub enum ExchangeFault {
    /// The exchange answered with its `{"code", "msg"}` error body.
    #[error("APIError(code={code}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    #[error("Invalid response (HTTP {status}): {body}")]
    InvalidResponse { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

impl From<reqwest::Error> for ExchangeFault {
    fn from(err: reqwest::Error) -> Self {
        ExchangeFault::Transport(err.to_string())
    }
}
