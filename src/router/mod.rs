//! Intent router: turns inbound events into store/session updates and
//! render instructions.
//!
//! Handlers never fail outward: problems are answered in-chat, and every
//! button press is acknowledged exactly once.

mod callbacks;
mod commands;
mod event;
mod wizard_flow;

pub use commands::{classify, TextCommand};
pub use event::{InboundEvent, InboundKind, Sender};

use std::sync::Arc;

use crate::catalog::{MatchRepository, Sport};
use crate::config::Config;
use crate::render::{Outbound, Renderer, Screen};
use crate::session::{SessionId, SessionStore};
use crate::wizard::WizardIntent;

/// Values stamped onto matches created through the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatchDefaults {
    pub capacity: u32,
    pub organizer_seats: u32,
    pub level: String,
}

/// Global interrupt command and its fixed reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterruptCommand {
    pub keyword: String,
    pub reply: String,
}

pub struct Router {
    store: Arc<dyn MatchRepository>,
    sessions: SessionStore,
    renderer: Renderer,
    defaults: NewMatchDefaults,
    interrupt: InterruptCommand,
}

impl Router {
    pub fn new(
        store: Arc<dyn MatchRepository>,
        renderer: Renderer,
        defaults: NewMatchDefaults,
        interrupt: InterruptCommand,
    ) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
            renderer,
            defaults,
            interrupt,
        }
    }

    pub fn from_config(config: &Config, store: Arc<dyn MatchRepository>) -> Self {
        Self::new(
            store,
            Renderer::from_config(config),
            NewMatchDefaults {
                capacity: config.matches.capacity,
                organizer_seats: config.matches.organizer_seats,
                level: config.matches.default_level.clone(),
            },
            InterruptCommand {
                keyword: config.bot.interrupt_keyword.clone(),
                reply: config.bot.interrupt_reply.clone(),
            },
        )
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one event to completion.
    pub fn handle(&self, event: &InboundEvent) -> Vec<Outbound> {
        match &event.kind {
            InboundKind::Text(text) => self.handle_text(event.session, &event.sender, text),
            InboundKind::Callback(token) => self.handle_callback(event.session, token),
        }
    }

    pub fn handle_text(&self, session: SessionId, sender: &Sender, text: &str) -> Vec<Outbound> {
        let wizard_active = self.sessions.get(session).is_collecting();
        let command = classify(text, &self.interrupt.keyword, wizard_active);
        tracing::debug!(%session, ?command, "Text routed");

        let r = &self.renderer;
        match command {
            TextCommand::Interrupt => {
                self.sessions.dispatch(session, WizardIntent::Interrupt);
                if wizard_active {
                    tracing::info!(%session, "Wizard interrupted");
                }
                vec![Outbound::Send(Screen::text(self.interrupt.reply.clone()))]
            }
            TextCommand::Start { payload } => {
                let referrer = payload
                    .and_then(|p| p.strip_prefix("ref_"))
                    .filter(|name| !name.is_empty());
                vec![Outbound::Send(Screen::with_markup(
                    r.welcome(referrer),
                    r.main_menu(),
                ))]
            }
            TextCommand::FindTeam => vec![Outbound::Send(Screen::with_markup(
                r.find_team_prompt(),
                r.sport_choice(),
            ))],
            TextCommand::CreateGame => self.start_wizard(session, WizardIntent::Start),
            TextCommand::WizardInput => self.wizard_input(session, sender, text),
            TextCommand::HowItWorks => vec![Outbound::Send(Screen::with_markup(
                r.how_it_works(),
                r.main_menu(),
            ))],
            TextCommand::Referral => {
                vec![Outbound::Send(Screen::text(r.referral(&sender.handle())))]
            }
            TextCommand::Feedback => vec![Outbound::Send(Screen::text(r.feedback()))],
            TextCommand::Reaction(reaction) => {
                vec![Outbound::Reply(Screen::text(r.reaction(reaction)))]
            }
            TextCommand::Unrouted => Vec::new(),
        }
    }

    /// Intro plus match list for a sport, or the "nothing yet" note.
    fn list_screen(&self, sport: Sport) -> Screen {
        let matches = self.store.all_by_sport(sport);
        if matches.is_empty() {
            return Screen::text(self.renderer.no_matches(sport));
        }
        Screen::with_markup(
            self.renderer.matches_intro(sport),
            self.renderer.matches_list(sport, &matches),
        )
    }
}
