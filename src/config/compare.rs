//! Curve comparison store settings

pub struct CompareConfig {
    /// Hard cap on stored curves. Oldest curve is evicted once reached.
    pub max_stored_curves: usize,
    /// Appended to the legend label of the current curve while it is not stored
    pub unsaved_suffix: &'static str,
}

pub const COMPARE: CompareConfig = CompareConfig {
    max_stored_curves: 24,
    unsaved_suffix: " (unsaved)",
};
