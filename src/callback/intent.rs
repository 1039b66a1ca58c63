//! Structured actions carried by inline buttons.

use crate::catalog::{MatchId, Sport};

/// Actions offered on the match details screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingAction {
    /// Confirm participation without paying.
    Confirm,
    /// Reserve a place with a deposit (opens the payment screen).
    Deposit,
    /// Show the organizer's handle.
    Contact,
    /// Ask to be told when a place frees up.
    Waitlist,
    /// Ask to be told when enough players gather.
    Notify,
    /// Return to the list for the match's sport.
    BackToList,
}

impl BookingAction {
    pub const ALL: [BookingAction; 6] = [
        BookingAction::Confirm,
        BookingAction::Deposit,
        BookingAction::Contact,
        BookingAction::Waitlist,
        BookingAction::Notify,
        BookingAction::BackToList,
    ];

    pub fn code(self) -> &'static str {
        match self {
            BookingAction::Confirm => "confirm",
            BookingAction::Deposit => "deposit",
            BookingAction::Contact => "contact",
            BookingAction::Waitlist => "waitlist",
            BookingAction::Notify => "notify",
            BookingAction::BackToList => "back_list",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }
}

/// Actions on the mock payment screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentAction {
    Pay,
    Cancel,
}

impl PaymentAction {
    pub const ALL: [PaymentAction; 2] = [PaymentAction::Pay, PaymentAction::Cancel];

    pub fn code(self) -> &'static str {
        match self {
            PaymentAction::Pay => "pay",
            PaymentAction::Cancel => "cancel",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }
}

/// Decoded callback payload.
///
/// Constructed on decode and consumed by the router right away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackIntent {
    /// Sport picked in the "find a team" menu.
    SelectSport(Sport),
    /// Match picked from a list.
    SelectMatch(MatchId),
    /// Button on the details screen.
    Booking {
        match_id: MatchId,
        action: BookingAction,
    },
    /// Button on the payment screen.
    Payment {
        match_id: MatchId,
        action: PaymentAction,
    },
    /// "Create your own match" under a list, sport already known.
    CreateFromList(Sport),
}
