/// Monotonic clock that also works on wasm32 (std::time::Instant panics there).
pub type AppInstant = web_time::Instant;
