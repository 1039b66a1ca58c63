//! Multi-turn "create a match" wizard.
//!
//! Uses MVI:
//! - `state.rs` - steps and the accumulated draft
//! - `intent.rs` - entry points, text input, interrupt
//! - `reducer.rs` - transitions with per-step validation (pure)

mod intent;
mod reducer;
mod schedule;
mod state;
mod validate;

pub use intent::WizardIntent;
pub use reducer::WizardReducer;
pub use schedule::split_schedule;
pub use state::{CompletedDraft, MatchDraft, WizardState, WizardStep};
pub use validate::ValidationError;
