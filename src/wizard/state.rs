//! State for the create-match wizard.

use crate::catalog::Sport;
use crate::mvi::FlowState;

use super::validate::ValidationError;

/// Wizard steps in the order they are asked.
///
/// `Ord` follows the declaration order, so a run of the wizard never
/// visits a smaller step after a larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    SelectSport,
    EnterTitle,
    EnterLocation,
    EnterSchedule,
    EnterDeposit,
}

impl WizardStep {
    /// Step after this one; `None` after the deposit.
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectSport => Some(WizardStep::EnterTitle),
            WizardStep::EnterTitle => Some(WizardStep::EnterLocation),
            WizardStep::EnterLocation => Some(WizardStep::EnterSchedule),
            WizardStep::EnterSchedule => Some(WizardStep::EnterDeposit),
            WizardStep::EnterDeposit => None,
        }
    }
}

/// Fields collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchDraft {
    pub sport: Option<Sport>,
    pub title: Option<String>,
    pub location: Option<String>,
    /// Raw "when" text, split into date and time on completion.
    pub schedule: Option<String>,
    pub deposit: Option<u32>,
}

impl MatchDraft {
    pub fn with_sport(sport: Sport) -> Self {
        Self {
            sport: Some(sport),
            ..Self::default()
        }
    }

    /// All fields, if every step has been answered.
    pub fn complete(&self) -> Option<CompletedDraft> {
        Some(CompletedDraft {
            sport: self.sport?,
            title: self.title.clone()?,
            location: self.location.clone()?,
            schedule: self.schedule.clone()?,
            deposit: self.deposit?,
        })
    }
}

/// Draft with every field present, ready to become a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedDraft {
    pub sport: Sport,
    pub title: String,
    pub location: String,
    pub schedule: String,
    pub deposit: u32,
}

/// Wizard state for one session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WizardState {
    /// No wizard running.
    #[default]
    Idle,
    /// Waiting for the answer to `step`.
    Collecting {
        step: WizardStep,
        draft: MatchDraft,
        /// Set when the last answer was rejected; cleared on the next advance.
        rejected: Option<ValidationError>,
    },
    /// Every field collected; the router turns this into a match and
    /// drops the session state.
    Completed(CompletedDraft),
}

impl FlowState for WizardState {}

impl WizardState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether text from the user should be fed to the wizard.
    pub fn is_collecting(&self) -> bool {
        matches!(self, Self::Collecting { .. })
    }

    pub fn step(&self) -> Option<WizardStep> {
        match self {
            Self::Collecting { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&MatchDraft> {
        match self {
            Self::Collecting { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&ValidationError> {
        match self {
            Self::Collecting { rejected, .. } => rejected.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert!(WizardState::default().is_idle());
        assert_eq!(WizardState::default().step(), None);
    }

    #[test]
    fn steps_are_ordered() {
        let mut step = WizardStep::SelectSport;
        while let Some(next) = step.next() {
            assert!(next > step);
            step = next;
        }
        assert_eq!(step, WizardStep::EnterDeposit);
    }

    #[test]
    fn incomplete_draft_does_not_complete() {
        let draft = MatchDraft {
            title: Some("Футбол".into()),
            ..MatchDraft::with_sport(Sport::Football)
        };
        assert!(draft.complete().is_none());
    }
}
