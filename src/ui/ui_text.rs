use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- Left panel ---
    pub lp_calc_type: String,
    pub lp_years: String,
    pub lp_rate: String,
    pub lp_comparison_controls: String,
    pub lp_add_mode: String,
    pub lp_add_to_chart: String,
    pub lp_reset_chart: String,
    pub lp_stored_curves: String,
    pub lp_hover_add_disabled: String,
    pub lp_hover_reset: String,

    // --- Table ---
    pub table_year: String,
    pub table_value: String,

    // --- PLOT LABELS ---
    pub plot_title: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub plot_empty_store_hint: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Future Value / Present Value Visualizer (Comparison Mode)".to_string(),

    lp_calc_type: "Select Calculation Type:".to_string(),
    lp_years: "Number of years".to_string(),
    lp_rate: "Interest/Discount rate (%)".to_string(),
    lp_comparison_controls: "Comparison Controls".to_string(),
    lp_add_mode: "Add curves".to_string(),
    lp_add_to_chart: "Add to Chart".to_string(),
    lp_reset_chart: "Reset Chart".to_string(),
    lp_stored_curves: "Stored curves".to_string(),
    lp_hover_add_disabled: "Already on the chart".to_string(),
    lp_hover_reset: "Remove every saved curve. Changing years or calculation type also does this."
        .to_string(),

    table_year: "Year".to_string(),
    table_value: "Value".to_string(),

    plot_title: "Comparison Chart".to_string(),
    plot_x_axis: "Year".to_string(),
    plot_y_axis: "Value".to_string(),
    plot_empty_store_hint: "No saved curves yet: showing the current calculation only.".to_string(),
});
