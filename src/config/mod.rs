//! Configuration loading and types.

mod loader;
mod types;

pub use loader::{ConfigError, TOKEN_ENV_VAR};
pub use types::{BotConfig, Config, MatchesConfig, TelegramConfig};
