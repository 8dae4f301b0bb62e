pub mod curve;
pub mod curve_store;

pub use curve::{Curve, CurveKey};
pub use curve_store::{CurveStore, StorePhase};
