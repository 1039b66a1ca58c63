use serde::{Deserialize, Serialize};

use crate::render::Locale;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub matches: MatchesConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

/// Bot identity and global commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot API token. `BOT_TOKEN` in the environment takes precedence.
    #[serde(default)]
    pub token: Option<String>,
    /// Public bot username, used in referral links (e.g. "playqbot").
    #[serde(default = "default_username")]
    pub username: String,
    /// Word that interrupts any running flow, with or without a leading "/".
    #[serde(default = "default_interrupt_keyword")]
    pub interrupt_keyword: String,
    /// Fixed reply to the interrupt command.
    #[serde(default = "default_interrupt_reply")]
    pub interrupt_reply: String,
}

/// Defaults for matches created through the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesConfig {
    /// Total places of a new match (default: 10).
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Places taken by the organizer at creation (default: 1).
    #[serde(default = "default_organizer_seats")]
    pub organizer_seats: u32,
    /// Skill level shown for new matches.
    #[serde(default = "default_level")]
    pub default_level: String,
    /// Mock payment page opened by the booking screen.
    #[serde(default = "default_payment_url")]
    pub payment_url: String,
    /// Wording of free-slot counts.
    #[serde(default)]
    pub locale: Locale,
}

/// Telegram Bot API transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// API root without the `/bot<token>` part.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Long-polling timeout for `getUpdates` in seconds (default: 30).
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_seconds: u32,
}

fn default_username() -> String {
    "playqbot".to_string()
}

fn default_interrupt_keyword() -> String {
    "nurlan".to_string()
}

fn default_interrupt_reply() -> String {
    "Люблю тебя, пусанай!".to_string()
}

fn default_capacity() -> u32 {
    10
}

fn default_organizer_seats() -> u32 {
    1
}

fn default_level() -> String {
    "любители".to_string()
}

fn default_payment_url() -> String {
    "https://pay.kaspi.kz/pay/df3xuh5c".to_string()
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout() -> u32 {
    30
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            username: default_username(),
            interrupt_keyword: default_interrupt_keyword(),
            interrupt_reply: default_interrupt_reply(),
        }
    }
}

impl Default for MatchesConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            organizer_seats: default_organizer_seats(),
            default_level: default_level(),
            payment_url: default_payment_url(),
            locale: Locale::default(),
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            poll_timeout_seconds: default_poll_timeout(),
        }
    }
}
