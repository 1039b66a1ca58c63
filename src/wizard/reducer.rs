//! Reducer for the create-match wizard.

use crate::mvi::Reducer;

use super::intent::WizardIntent;
use super::state::{MatchDraft, WizardState, WizardStep};
use super::validate::{self, ValidationError};

/// Pure transitions of the wizard.
///
/// Storing the finished match and rendering prompts are done by the
/// router around the dispatch call.
pub struct WizardReducer;

impl Reducer for WizardReducer {
    type State = WizardState;
    type Intent = WizardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WizardIntent::Start => WizardState::Collecting {
                step: WizardStep::SelectSport,
                draft: MatchDraft::default(),
                rejected: None,
            },
            WizardIntent::StartWithSport(sport) => WizardState::Collecting {
                step: WizardStep::EnterTitle,
                draft: MatchDraft::with_sport(sport),
                rejected: None,
            },
            WizardIntent::Interrupt => WizardState::Idle,
            WizardIntent::Input(text) => match state {
                WizardState::Collecting { step, draft, .. } => accept(step, draft, &text),
                other => other,
            },
        }
    }
}

fn accept(step: WizardStep, mut draft: MatchDraft, text: &str) -> WizardState {
    let outcome = match step {
        WizardStep::SelectSport => validate::sport(text).map(|sport| draft.sport = Some(sport)),
        WizardStep::EnterTitle => validate::required(text, ValidationError::EmptyTitle)
            .map(|title| draft.title = Some(title)),
        WizardStep::EnterLocation => validate::required(text, ValidationError::EmptyLocation)
            .map(|location| draft.location = Some(location)),
        WizardStep::EnterSchedule => validate::required(text, ValidationError::EmptySchedule)
            .map(|schedule| draft.schedule = Some(schedule)),
        WizardStep::EnterDeposit => {
            validate::deposit(text).map(|deposit| draft.deposit = Some(deposit))
        }
    };

    if let Err(error) = outcome {
        return WizardState::Collecting {
            step,
            draft,
            rejected: Some(error),
        };
    }

    match step.next() {
        Some(next) => WizardState::Collecting {
            step: next,
            draft,
            rejected: None,
        },
        None => match draft.complete() {
            Some(completed) => WizardState::Completed(completed),
            None => {
                tracing::warn!(?draft, "Wizard finished with missing fields");
                WizardState::Idle
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Sport;

    fn input(text: &str) -> WizardIntent {
        WizardIntent::Input(text.to_string())
    }

    #[test]
    fn input_while_idle_is_noop() {
        let state = WizardReducer::reduce(WizardState::Idle, input("Футбол 5×5"));
        assert!(state.is_idle());
    }

    #[test]
    fn rejection_is_cleared_on_advance() {
        let state = WizardReducer::reduce(
            WizardState::Idle,
            WizardIntent::StartWithSport(Sport::Football),
        );
        let state = WizardReducer::reduce(state, input("   "));
        assert_eq!(state.rejection(), Some(&ValidationError::EmptyTitle));
        let state = WizardReducer::reduce(state, input("Футбол 5×5"));
        assert_eq!(state.rejection(), None);
        assert_eq!(state.step(), Some(WizardStep::EnterLocation));
    }
}
