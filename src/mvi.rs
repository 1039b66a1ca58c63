//! Intent/reducer primitives for conversational flows.
//!
//! A flow keeps one state value per session. Each user turn becomes an
//! intent, and the reducer folds it into the next state. Store writes and
//! rendering stay outside the reducer, in the router.

/// A user turn or control event fed to a reducer.
pub trait Intent: Send + 'static {}

/// Per-session state of one flow. `Default` is the "not running" state.
pub trait FlowState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function of a flow.
pub trait Reducer {
    type State: FlowState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
