//! Effects: side effects declared by the reducer.
//!
//! The reducer stays pure; it returns a [`DispatchResult`] describing
//! what changed and which async work should start. The runtime executes
//! the effects through the task manager.

use skycast_core::Coordinate;

/// Declarative description of async work.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// One-shot position fix for the current machine.
    FetchPosition,
    /// Fetch current weather for the position fix.
    FetchLiveWeather { coord: Coordinate },
    /// Debounce, then run a geocoding search. Only the most recently
    /// scheduled cycle fires; `seq` lets the reducer discard stragglers.
    ScheduleSuggest { query: String, seq: u64 },
    /// Abort any pending suggestion fetch.
    CancelSuggest,
    /// Fetch current weather for the selected city. Keyed: a new
    /// submission replaces an in-flight fetch for a stale selection.
    FetchCityWeather { coord: Coordinate },
}

/// What a dispatch produced: a change indicator plus effects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchResult {
    /// Whether the state was modified and the UI should re-render.
    pub changed: bool,
    /// Effects to hand to the runtime, in order.
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        assert!(!DispatchResult::unchanged().changed);
        assert!(DispatchResult::changed().changed);

        let r = DispatchResult::changed_with(Effect::FetchPosition);
        assert!(r.changed);
        assert!(r.has_effects());
        assert_eq!(r.effects, vec![Effect::FetchPosition]);
    }
}
