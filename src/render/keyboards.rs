//! Button layouts.

use crate::callback::{BookingAction, CallbackIntent, PaymentAction};
use crate::catalog::{Match, MatchStatus, Sport};

use super::screen::{InlineButton, Markup};
use super::Renderer;

pub const MENU_FIND_TEAM: &str = "🧑‍🤝‍🧑 Найти команду";
pub const MENU_CREATE_GAME: &str = "⚡ Создать игру";
pub const MENU_HOW_IT_WORKS: &str = "💬 Узнать, как это работает";

const CREATE_FROM_LIST: &str = "➕ Создать свой матч";

/// Actions offered on the details screen for a status, in display order.
pub fn details_actions(status: MatchStatus) -> &'static [BookingAction] {
    match status {
        MatchStatus::Open => &[
            BookingAction::Confirm,
            BookingAction::Deposit,
            BookingAction::Contact,
            BookingAction::BackToList,
        ],
        MatchStatus::NearFull => &[
            BookingAction::Confirm,
            BookingAction::Deposit,
            BookingAction::Waitlist,
        ],
        MatchStatus::LowInterest => &[
            BookingAction::Notify,
            BookingAction::Contact,
            BookingAction::BackToList,
        ],
    }
}

fn action_label(m: &Match, action: BookingAction) -> String {
    let open = m.status == MatchStatus::Open;
    match action {
        BookingAction::Confirm if open => "✅ Подтвердить участие".to_string(),
        BookingAction::Confirm => "🚀 Подтвердить".to_string(),
        BookingAction::Deposit if open => {
            format!("💳 Забронировать место (депозит {} ₸)", m.deposit)
        }
        BookingAction::Deposit => "💳 Забронировать".to_string(),
        BookingAction::Contact => "💬 Написать организатору".to_string(),
        BookingAction::Waitlist => "🔔 Получить напоминание, если появится место".to_string(),
        BookingAction::Notify => "🔔 Уведомить".to_string(),
        BookingAction::BackToList if open => "↩ Назад к списку матчей".to_string(),
        BookingAction::BackToList => "↩ Назад".to_string(),
    }
}

fn single_column(buttons: Vec<InlineButton>) -> Markup {
    Markup::Inline(buttons.into_iter().map(|b| vec![b]).collect())
}

impl Renderer {
    pub fn main_menu(&self) -> Markup {
        Markup::Reply {
            rows: vec![
                vec![MENU_FIND_TEAM.to_string()],
                vec![MENU_CREATE_GAME.to_string()],
                vec![MENU_HOW_IT_WORKS.to_string()],
            ],
            placeholder: Some("Выбери действие…".to_string()),
        }
    }

    /// Inline sport picker for browsing.
    pub fn sport_choice(&self) -> Markup {
        single_column(
            Sport::ALL
                .into_iter()
                .map(|sport| {
                    InlineButton::callback(
                        sport.label(),
                        CallbackIntent::SelectSport(sport).encode(),
                    )
                })
                .collect(),
        )
    }

    /// Reply-keyboard sport picker for the wizard; answers come back as text.
    pub fn wizard_sport_keyboard(&self) -> Markup {
        Markup::Reply {
            rows: Sport::ALL.into_iter().map(|s| vec![s.label()]).collect(),
            placeholder: Some("Выбери вид спорта…".to_string()),
        }
    }

    /// One button per match, then "create your own".
    pub fn matches_list(&self, sport: Sport, matches: &[Match]) -> Markup {
        let mut buttons: Vec<InlineButton> = matches
            .iter()
            .enumerate()
            .map(|(i, m)| {
                InlineButton::callback(
                    self.list_item(m, i + 1),
                    CallbackIntent::SelectMatch(m.id).encode(),
                )
            })
            .collect();
        buttons.push(InlineButton::callback(
            CREATE_FROM_LIST,
            CallbackIntent::CreateFromList(sport).encode(),
        ));
        single_column(buttons)
    }

    pub fn match_details_keyboard(&self, m: &Match) -> Markup {
        single_column(
            details_actions(m.status)
                .iter()
                .map(|&action| {
                    InlineButton::callback(
                        action_label(m, action),
                        CallbackIntent::Booking {
                            match_id: m.id,
                            action,
                        }
                        .encode(),
                    )
                })
                .collect(),
        )
    }

    /// Payment link plus mock confirm/cancel.
    pub fn booking_keyboard(&self, m: &Match) -> Markup {
        single_column(vec![
            InlineButton::url("💳 Оплатить через Kaspi Pay", self.payment_url.clone()),
            InlineButton::callback(
                "✅ Я оплатил через Kaspi",
                CallbackIntent::Payment {
                    match_id: m.id,
                    action: PaymentAction::Pay,
                }
                .encode(),
            ),
            InlineButton::callback(
                "❌ Отмена",
                CallbackIntent::Payment {
                    match_id: m.id,
                    action: PaymentAction::Cancel,
                }
                .encode(),
            ),
        ])
    }
}
