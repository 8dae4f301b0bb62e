use crate::{
    analysis::{ValuePoint, valuation_series},
    config::COMPARE,
    domain::Params,
    models::CurveKey,
};

use super::core::CompareState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveRole {
    Stored(CurveKey),
    /// Curve for the live params. `saved` is true when an identical curve is already stored.
    Current { saved: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCurve {
    pub label: String,
    pub role: CurveRole,
    pub points: Vec<ValuePoint>,
}

impl RenderedCurve {
    pub fn is_unsaved_current(&self) -> bool {
        matches!(self.role, CurveRole::Current { saved: false })
    }
}

/// What one frame needs to draw: the table for the live params and the chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub heading: String,
    pub table: Vec<ValuePoint>,
    pub curves: Vec<RenderedCurve>,
    pub stored_count: usize,
}

/// Stored curves (oldest first) followed by the live one.
///
/// The live curve is only drawn separately while it isn't stored; once stored
/// it already appears among the stored curves and is flagged instead. With
/// nothing stored there's nothing to tell it apart from, so it keeps its plain label.
pub fn render_model(state: &CompareState, params: &Params) -> RenderModel {
    let table = valuation_series(params);
    let saved = state.store.contains_params(params);

    let mut curves: Vec<RenderedCurve> = state
        .store
        .iter()
        .map(|(key, curve)| RenderedCurve {
            label: curve.label.clone(),
            role: if curve.params == *params {
                CurveRole::Current { saved: true }
            } else {
                CurveRole::Stored(key)
            },
            points: curve.points.clone(),
        })
        .collect();

    if !saved {
        let label = if state.store.is_empty() {
            params.label()
        } else {
            format!("{}{}", params.label(), COMPARE.unsaved_suffix)
        };
        curves.push(RenderedCurve {
            label,
            role: CurveRole::Current { saved: false },
            points: table.clone(),
        });
    }

    RenderModel {
        heading: params.heading(),
        table,
        curves,
        stored_count: state.store.len(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::{AddMode, CalcKind},
        engine::{Action, dispatch},
    };

    fn p(years: u32, rate_pct: u32) -> Params {
        Params::clamped(CalcKind::FutureValue, years, rate_pct)
    }

    fn labels(model: &RenderModel) -> Vec<&str> {
        model.curves.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn empty_store_still_renders_current_curve() {
        let state = CompareState::new(AddMode::Manual);
        let model = render_model(&state, &p(10, 5));
        assert_eq!(labels(&model), vec!["FV 5% 10y"]);
        assert!(model.curves[0].is_unsaved_current());
        assert_eq!(model.curves[0].points.len(), 11);
        assert_eq!(model.stored_count, 0);
    }

    #[test]
    fn reset_then_render_yields_exactly_current() {
        let mut s = CompareState::new(AddMode::OnChange);
        for rate in [4, 5, 6] {
            s = dispatch(s, p(10, rate), Action::ParamsChanged);
        }
        s = dispatch(s, p(10, 6), Action::Reset);
        let model = render_model(&s, &p(10, 6));
        assert_eq!(labels(&model), vec!["FV 6% 10y"]);
        assert_eq!(model.curves[0].role, CurveRole::Current { saved: false });
    }

    #[test]
    fn unsaved_current_is_appended_after_stored() {
        let mut s = CompareState::new(AddMode::Manual);
        s = dispatch(s, p(10, 3), Action::AddCurrent);
        s = dispatch(s, p(10, 7), Action::AddCurrent);
        s = dispatch(s, p(10, 9), Action::ParamsChanged);

        let model = render_model(&s, &p(10, 9));
        assert_eq!(
            labels(&model),
            vec!["FV 3% 10y", "FV 7% 10y", "FV 9% 10y (unsaved)"]
        );
        assert!(matches!(model.curves[0].role, CurveRole::Stored(_)));
        assert_eq!(model.stored_count, 2);
    }

    #[test]
    fn stored_current_is_not_duplicated() {
        let mut s = CompareState::new(AddMode::OnChange);
        s = dispatch(s, p(10, 3), Action::ParamsChanged);
        s = dispatch(s, p(10, 7), Action::ParamsChanged);

        let model = render_model(&s, &p(10, 7));
        assert_eq!(labels(&model), vec!["FV 3% 10y", "FV 7% 10y"]);
        assert_eq!(model.curves[1].role, CurveRole::Current { saved: true });
    }

    #[test]
    fn table_and_heading_follow_params() {
        let state = CompareState::new(AddMode::Manual);
        let params = Params::clamped(CalcKind::PresentValue, 0, 12);
        let model = render_model(&state, &params);
        assert_eq!(model.heading, "Current PV at 12% for 0 year(s)");
        assert_eq!(model.table, vec![ValuePoint { year: 0, value: 100.0 }]);
    }
}
