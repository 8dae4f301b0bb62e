use crate::{
    config::DF,
    domain::{AddMode, Params},
    models::{Curve, CurveStore},
};

use super::messages::Action;

/// Everything an interaction handler needs to remember between events.
#[derive(Debug, Clone, Default)]
pub struct CompareState {
    pub store: CurveStore,
    /// Params seen by the previous dispatch. None until the first event.
    pub previous: Option<Params>,
    pub add_mode: AddMode,
}

impl CompareState {
    pub fn new(add_mode: AddMode) -> Self {
        Self {
            add_mode,
            ..Default::default()
        }
    }

    /// Store the curve for `params` unless an identical one is already stored.
    /// Returns whether anything was inserted.
    fn add_current(&mut self, params: &Params) -> bool {
        if self.store.contains_params(params) {
            return false;
        }
        self.store.insert(Curve::from_params(*params));
        true
    }
}

/// Apply one action against the params current at the time of the event.
///
/// Clearing rule: a change of horizon or kind empties the store, since curves
/// over different x-ranges or of different kinds aren't comparable. A rate
/// change keeps the store.
pub fn dispatch(mut state: CompareState, params: Params, action: Action) -> CompareState {
    if DF.log_dispatch {
        log::info!(
            "dispatch {:?} @ {} (stored: {}, mode: {:?})",
            action,
            params,
            state.store.len(),
            state.add_mode
        );
    }

    match action {
        Action::ParamsChanged => {
            if let Some(prev) = state.previous {
                if !prev.same_axis(&params) {
                    state.store.clear();
                }
            }
            let changed = state.previous != Some(params);
            state.previous = Some(params);

            if changed && state.add_mode == AddMode::OnChange {
                state.add_current(&params);
            }
        }
        Action::AddCurrent => {
            // The button also works in OnChange mode: it re-adds a curve a reset dropped.
            if let Some(prev) = state.previous {
                if !prev.same_axis(&params) {
                    state.store.clear();
                }
            }
            state.previous = Some(params);
            state.add_current(&params);
        }
        Action::Reset => {
            state.store.clear();
            state.previous = Some(params);
        }
        // Takes effect from the next parameter change; the store is left alone.
        Action::SetAddMode(mode) => {
            state.add_mode = mode;
        }
    }

    state
}
