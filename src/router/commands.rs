//! Text message classification.
//!
//! Matchers are tried in a fixed order and the first hit wins. The
//! interrupt comes first so it works in every state; menu entry points
//! come before wizard input so the menu stays usable mid-wizard.

use crate::render::{Reaction, MENU_CREATE_GAME, MENU_FIND_TEAM, MENU_HOW_IT_WORKS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand<'a> {
    Interrupt,
    Start { payload: Option<&'a str> },
    FindTeam,
    CreateGame,
    WizardInput,
    HowItWorks,
    Referral,
    Feedback,
    Reaction(Reaction),
    Unrouted,
}

/// Split "/cmd@bot args" into ("cmd", Some("args")).
fn parse_command(text: &str) -> Option<(&str, Option<&str>)> {
    let rest = text.trim().strip_prefix('/')?;
    let (head, args) = match rest.split_once(char::is_whitespace) {
        Some((head, args)) => (head, Some(args.trim()).filter(|a| !a.is_empty())),
        None => (rest, None),
    };
    let name = head.split('@').next().unwrap_or(head);
    Some((name, args))
}

fn is_interrupt(text: &str, keyword: &str) -> bool {
    let word = match parse_command(text) {
        Some((name, None)) => name,
        Some((_, Some(_))) => return false,
        None => text.trim(),
    };
    word.to_lowercase() == keyword.trim().to_lowercase()
}

pub fn classify<'a>(
    text: &'a str,
    interrupt_keyword: &str,
    wizard_active: bool,
) -> TextCommand<'a> {
    if is_interrupt(text, interrupt_keyword) {
        return TextCommand::Interrupt;
    }

    let command = parse_command(text);
    if let Some(("start", payload)) = command {
        return TextCommand::Start { payload };
    }

    let trimmed = text.trim();
    if trimmed == MENU_FIND_TEAM {
        return TextCommand::FindTeam;
    }
    if trimmed == MENU_CREATE_GAME {
        return TextCommand::CreateGame;
    }
    if wizard_active {
        return TextCommand::WizardInput;
    }
    if trimmed == MENU_HOW_IT_WORKS {
        return TextCommand::HowItWorks;
    }

    match command {
        Some(("referral", _)) => TextCommand::Referral,
        Some(("feedback", _)) => TextCommand::Feedback,
        _ => Reaction::from_text(trimmed)
            .map(TextCommand::Reaction)
            .unwrap_or(TextCommand::Unrouted),
    }
}
