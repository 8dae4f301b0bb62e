mod core;
mod messages;
mod render;

pub use self::core::{CompareState, dispatch};
pub use messages::Action;
pub use render::{CurveRole, RenderModel, RenderedCurve, render_model};
