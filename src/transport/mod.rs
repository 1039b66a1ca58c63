//! Chat front-ends feeding the dispatcher.

mod console;
mod telegram;

pub use console::{format_outbound, ConsoleTransport};
pub use telegram::{markup_json, TelegramTransport};

use thiserror::Error;

use crate::dispatch::DispatchError;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bot API call {method} failed: {description}")]
    Api {
        method: &'static str,
        description: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
