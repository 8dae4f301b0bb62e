// src/app/state.rs

use serde::{Deserialize, Serialize};

use crate::domain::{AddMode, CalcKind, Params};

/// The slice of the session that survives a restart. Curves are deliberately not in here:
/// every session starts with an empty comparison store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct PersistedSettings {
    pub(crate) kind: CalcKind,
    pub(crate) years: u32,
    pub(crate) rate_pct: u32,
    pub(crate) add_mode: AddMode,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self::from_parts(Params::default(), AddMode::default())
    }
}

impl PersistedSettings {
    pub(crate) fn from_parts(params: Params, add_mode: AddMode) -> Self {
        Self {
            kind: params.kind,
            years: params.years,
            rate_pct: params.rate_pct,
            add_mode,
        }
    }

    /// Stored values are clamped: a settings file may come from a build with wider sliders.
    pub(crate) fn params(&self) -> Params {
        Params::clamped(self.kind, self.years, self.rate_pct)
    }
}
