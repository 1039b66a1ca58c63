//! Presentation: text templates, button layouts and render instructions.
//!
//! Everything here is pure. [`Renderer`] only carries the few settings
//! that templates need (slot wording, payment link, bot username).

mod keyboards;
mod phrasing;
mod screen;
mod text;

pub use keyboards::{details_actions, MENU_CREATE_GAME, MENU_FIND_TEAM, MENU_HOW_IT_WORKS};
pub use phrasing::{free_slots_text, EnglishSlots, Locale, RussianSlots, SlotPhrasing};
pub use screen::{Ack, ButtonTarget, InlineButton, Markup, Outbound, Screen};
pub use text::{escape_html, Reaction};

use crate::config::Config;

pub struct Renderer {
    phrasing: Box<dyn SlotPhrasing>,
    payment_url: String,
    bot_username: String,
}

impl Renderer {
    pub fn new(
        phrasing: Box<dyn SlotPhrasing>,
        payment_url: impl Into<String>,
        bot_username: impl Into<String>,
    ) -> Self {
        Self {
            phrasing,
            payment_url: payment_url.into(),
            bot_username: bot_username.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.matches.locale.slot_phrasing(),
            config.matches.payment_url.clone(),
            config.bot.username.clone(),
        )
    }

    /// Wording for the free places of a match.
    pub fn free_slots(&self, free: u32) -> String {
        free_slots_text(self.phrasing.as_ref(), free)
    }
}
