//! Intents for the create-match wizard.

use crate::catalog::Sport;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    /// "Create game" from the main menu: starts at sport selection.
    Start,
    /// "Create your own match" under a list: sport is known, starts at the title.
    StartWithSport(Sport),
    /// Free-form text typed by the user.
    Input(String),
    /// Out-of-band interrupt; always returns to idle.
    Interrupt,
}

impl Intent for WizardIntent {}
