//! Centralized state store.

use crate::action::Action;
use crate::effect::DispatchResult;
use crate::reducer::reduce;
use crate::state::AppState;

/// Holds the application state; `dispatch` is the single mutation point.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the action through the reducer, logging what happened.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let summary = action.summary();
        let result = reduce(&mut self.state, action);
        tracing::debug!(
            action = %summary,
            changed = result.changed,
            effects = result.effects.len(),
            "dispatched"
        );
        result
    }
}
