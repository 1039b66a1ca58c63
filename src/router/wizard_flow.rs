//! Create-match wizard: prompts, re-prompts and turning the finished draft
//! into a stored match.

use reqwest::Url;

use crate::catalog::{refund_policy_for, MatchStatus, NewMatch};
use crate::render::{Markup, Outbound, Screen};
use crate::session::SessionId;
use crate::wizard::{
    split_schedule, CompletedDraft, ValidationError, WizardIntent, WizardState, WizardStep,
};

use super::{Router, Sender};

const DEFAULT_RULES: &str = "Правила договоримся на месте 😉";
const MAPS_SEARCH: &str = "https://maps.google.com/";

impl Router {
    /// Start (or restart) the wizard and ask the first question.
    pub(super) fn start_wizard(&self, session: SessionId, intent: WizardIntent) -> Vec<Outbound> {
        let state = self.sessions.dispatch(session, intent);
        tracing::info!(%session, step = ?state.step(), "Wizard started");
        match state.step() {
            Some(step) => vec![Outbound::Send(self.prompt(step))],
            None => Vec::new(),
        }
    }

    pub(super) fn wizard_input(
        &self,
        session: SessionId,
        sender: &Sender,
        text: &str,
    ) -> Vec<Outbound> {
        let before = self.sessions.get(session).step();
        let state = self
            .sessions
            .dispatch(session, WizardIntent::Input(text.to_string()));

        match state {
            WizardState::Collecting {
                step,
                rejected: Some(error),
                ..
            } => {
                tracing::debug!(%session, ?step, ?error, "Wizard input rejected");
                vec![Outbound::Send(self.rejection(&error))]
            }
            WizardState::Collecting { step, .. } => {
                let mut screen = self.prompt(step);
                if before == Some(WizardStep::SelectSport) {
                    screen.markup = Some(Markup::RemoveReply);
                }
                vec![Outbound::Send(screen)]
            }
            WizardState::Completed(draft) => self.complete_wizard(session, sender, draft),
            WizardState::Idle => Vec::new(),
        }
    }

    fn prompt(&self, step: WizardStep) -> Screen {
        let text = self.renderer.step_prompt(step);
        match step {
            WizardStep::SelectSport => {
                Screen::with_markup(text, self.renderer.wizard_sport_keyboard())
            }
            _ => Screen::text(text),
        }
    }

    fn rejection(&self, error: &ValidationError) -> Screen {
        let text = self.renderer.validation_message(error);
        match error {
            ValidationError::UnknownSport => {
                Screen::with_markup(text, self.renderer.wizard_sport_keyboard())
            }
            _ => Screen::text(text),
        }
    }

    fn complete_wizard(
        &self,
        session: SessionId,
        sender: &Sender,
        draft: CompletedDraft,
    ) -> Vec<Outbound> {
        let stored = match self.store.append(self.new_match(sender, &draft)) {
            Ok(stored) => stored,
            Err(error) => {
                tracing::error!(%session, %error, "Failed to store wizard match");
                return vec![Outbound::Send(Screen::with_markup(
                    self.renderer.creation_failed(),
                    self.renderer.main_menu(),
                ))];
            }
        };
        tracing::info!(%session, match_id = stored.id, "Wizard completed");

        vec![
            Outbound::Send(Screen::with_markup(
                self.renderer.wizard_summary(&draft),
                self.renderer.main_menu(),
            )),
            Outbound::Send(self.list_screen(stored.sport)),
        ]
    }

    fn new_match(&self, sender: &Sender, draft: &CompletedDraft) -> NewMatch {
        let (date_human, time_human) = split_schedule(&draft.schedule);
        let total = self.defaults.capacity;
        let current = self.defaults.organizer_seats.min(total);

        NewMatch {
            sport: draft.sport,
            title: draft.title.clone(),
            location: draft.location.clone(),
            date_human,
            time_human,
            maps_url: maps_search_url(&draft.location),
            players_current: current,
            players_total: total,
            deposit: draft.deposit,
            level: self.defaults.level.clone(),
            organizer: sender.handle(),
            rules: DEFAULT_RULES.to_string(),
            refund_policy: refund_policy_for(draft.deposit).to_string(),
            status: MatchStatus::from_free_slots(total - current),
        }
    }
}

/// Google Maps search link for a free-text location (query form-encoded).
fn maps_search_url(location: &str) -> String {
    Url::parse_with_params(MAPS_SEARCH, &[("q", location.trim())])
        .map(String::from)
        .unwrap_or_else(|_| MAPS_SEARCH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_url_encodes_query() {
        assert_eq!(
            maps_search_url("City Arena"),
            "https://maps.google.com/?q=City+Arena"
        );
        assert_eq!(maps_search_url("A&B"), "https://maps.google.com/?q=A%26B");
        assert_eq!(
            maps_search_url(" Юг "),
            "https://maps.google.com/?q=%D0%AE%D0%B3"
        );
    }
}
