mod calc_kind;
mod params;

pub use calc_kind::{AddMode, CalcKind};
pub use params::Params;
