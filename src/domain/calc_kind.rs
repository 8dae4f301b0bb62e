use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Which way the principal is compounded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    clap::ValueEnum,
)]
pub enum CalcKind {
    #[default]
    #[strum(to_string = "Future Value")]
    #[value(name = "fv")]
    FutureValue,
    #[strum(to_string = "Present Value")]
    #[value(name = "pv")]
    PresentValue,
}

impl CalcKind {
    /// Legend/table shorthand ("FV" / "PV")
    pub fn short_label(self) -> &'static str {
        match self {
            Self::FutureValue => "FV",
            Self::PresentValue => "PV",
        }
    }
}

/// When the current curve gets stored for comparison.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    clap::ValueEnum,
)]
pub enum AddMode {
    /// Every genuine parameter change stores the resulting curve
    #[default]
    #[strum(to_string = "Auto (on change)")]
    OnChange,
    /// Only the "Add to Chart" button stores a curve
    #[strum(to_string = "Manual")]
    Manual,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn short_labels() {
        assert_eq!(CalcKind::FutureValue.short_label(), "FV");
        assert_eq!(CalcKind::PresentValue.short_label(), "PV");
    }

    #[test]
    fn display_names_match_radio_text() {
        let names: Vec<String> = CalcKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["Future Value", "Present Value"]);
    }

    #[test]
    fn add_mode_defaults_to_on_change() {
        assert_eq!(AddMode::default(), AddMode::OnChange);
    }
}
