//! Inline button handlers.

use crate::callback::{BookingAction, CallbackIntent, PaymentAction};
use crate::catalog::{Match, MatchId};
use crate::render::{Ack, Outbound, Screen};
use crate::session::SessionId;
use crate::wizard::WizardIntent;

use super::Router;

const NOT_FOUND: &str = "Матч не найден.";
const NOT_FOUND_DETAILS: &str = "Матч не найден. Возможно, он был удалён.";

/// Acknowledgment plus whatever else the press produced.
struct Handled {
    ack: Ack,
    messages: Vec<Outbound>,
}

impl Handled {
    fn ack(ack: Ack) -> Self {
        Self {
            ack,
            messages: Vec::new(),
        }
    }

    fn with(ack: Ack, messages: Vec<Outbound>) -> Self {
        Self { ack, messages }
    }
}

impl Router {
    /// Decode and dispatch a button press. The acknowledgment always comes first.
    pub fn handle_callback(&self, session: SessionId, token: &str) -> Vec<Outbound> {
        let handled = match CallbackIntent::decode(token) {
            Ok(intent) => {
                tracing::debug!(%session, ?intent, "Callback routed");
                self.on_intent(session, intent)
            }
            Err(error) => {
                tracing::warn!(%session, token, %error, "Undecodable callback token");
                Handled::ack(Ack::silent())
            }
        };

        let mut out = Vec::with_capacity(handled.messages.len() + 1);
        out.push(Outbound::Ack(handled.ack));
        out.extend(handled.messages);
        out
    }

    fn on_intent(&self, session: SessionId, intent: CallbackIntent) -> Handled {
        match intent {
            CallbackIntent::SelectSport(sport) => {
                Handled::with(Ack::silent(), vec![Outbound::Edit(self.list_screen(sport))])
            }
            CallbackIntent::SelectMatch(id) => match self.store.by_id(id) {
                Ok(m) => Handled::with(
                    Ack::silent(),
                    vec![Outbound::Edit(Screen::with_markup(
                        self.renderer.match_details(&m),
                        self.renderer.match_details_keyboard(&m),
                    ))],
                ),
                Err(_) => Handled::ack(Ack::alert(NOT_FOUND_DETAILS)),
            },
            CallbackIntent::Booking { match_id, action } => self.on_booking(match_id, action),
            CallbackIntent::Payment { match_id, action } => self.on_payment(match_id, action),
            CallbackIntent::CreateFromList(sport) => Handled::with(
                Ack::silent(),
                self.start_wizard(session, WizardIntent::StartWithSport(sport)),
            ),
        }
    }

    fn on_booking(&self, id: MatchId, action: BookingAction) -> Handled {
        let m = match self.store.by_id(id) {
            Ok(m) => m,
            Err(_) => return Handled::ack(Ack::alert(NOT_FOUND)),
        };
        let r = &self.renderer;

        match action {
            BookingAction::Confirm => {
                self.join(&m);
                Handled::with(
                    Ack::toast("Участие подтверждено ✅"),
                    vec![Outbound::Send(Screen::text(r.participation_confirmed()))],
                )
            }
            BookingAction::Deposit => Handled::with(
                Ack::silent(),
                vec![Outbound::Send(Screen::with_markup(
                    r.booking_prompt(&m),
                    r.booking_keyboard(&m),
                ))],
            ),
            BookingAction::Contact => Handled::with(
                Ack::silent(),
                vec![Outbound::Send(Screen::text(r.contact_organizer(&m)))],
            ),
            BookingAction::Waitlist | BookingAction::Notify => {
                tracing::info!(
                    match_id = id,
                    action = action.code(),
                    "Notification requested"
                );
                Handled::ack(Ack::alert("Мы отправим уведомление, когда появятся места 🔔"))
            }
            BookingAction::BackToList => Handled::with(
                Ack::silent(),
                vec![Outbound::Edit(self.list_screen(m.sport))],
            ),
        }
    }

    fn on_payment(&self, id: MatchId, action: PaymentAction) -> Handled {
        let m = match self.store.by_id(id) {
            Ok(m) => m,
            Err(_) => return Handled::ack(Ack::alert(NOT_FOUND)),
        };

        match action {
            PaymentAction::Pay => {
                self.join(&m);
                Handled::with(
                    Ack::alert("Оплата через Kaspi отмечена 💸"),
                    vec![Outbound::Send(Screen::text(self.renderer.booked(&m)))],
                )
            }
            PaymentAction::Cancel => Handled::ack(Ack::alert("Оплата отменена.")),
        }
    }

    /// Take a place if one is free. A full match is not an error.
    fn join(&self, m: &Match) {
        match self.store.increment_participant(m.id) {
            Ok(true) => {}
            Ok(false) => tracing::debug!(match_id = m.id, "Join on a full match ignored"),
            Err(error) => tracing::warn!(match_id = m.id, %error, "Match vanished while joining"),
        }
    }
}
