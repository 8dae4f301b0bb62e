//! Debugging feature flags.

/// Activate trace_time macro (for scope-level timing)
pub const LOG_PERFORMANCE: bool = false;

pub struct LogFlags {
    /// Every action handed to the dispatcher, with the params it ran against.
    pub log_dispatch: bool,

    /// Store mutations: inserts, evictions, clears.
    pub log_store: bool,

    /// Settings restored from / written to eframe storage
    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_dispatch: true,
    log_store: false,
    log_persistence: true,
};
