mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::AppInstant;

pub use maths_utils::{padded_range, round_to};
