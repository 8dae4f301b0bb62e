/// Round half away from zero to `decimals` places.
///
/// Examples:
/// 162.889 -> 162.89 (2dp)
/// 95.238  -> 95.24  (2dp)
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Min/max of `values` widened by `pad_pct` of the span on each side.
/// A flat series (span 0) gets padded by `pad_pct` of its magnitude instead,
/// so the line doesn't sit on the plot border.
/// Returns None for an empty iterator.
pub fn padded_range(values: impl IntoIterator<Item = f64>, pad_pct: f64) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

    let span = max - min;
    let pad = if span > 0.0 {
        span * pad_pct
    } else {
        (max.abs() * pad_pct).max(1.0)
    };
    Some((min - pad, max + pad))
}
