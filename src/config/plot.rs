//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Stored curves are coloured by sampling this gradient evenly (oldest -> newest)
    pub series_gradient_colors: &'static [&'static str],
    /// Colour of the live (current parameters) curve
    pub current_curve_color: Color32,
    pub stored_line_width: f32,
    pub current_line_width: f32,
    /// Dash length of the current curve while it is unsaved
    pub unsaved_dash_length: f32,
    /// Radius of the per-year markers (0.0 disables them)
    pub point_radius: f32,
    /// Markers are only drawn up to this many points per curve
    pub max_points_with_markers: usize,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_x_padding: f64,     // In years

    // --- SEMANTIC COLORS ---
    pub color_growth: Color32,
    pub color_discount: Color32,

    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // Viridis-ish: cool for old curves, warm for recent
    series_gradient_colors: &[
        "#440154", // Dark purple
        "#3b528b", // Blue
        "#21918c", // Teal
        "#5ec962", // Green
        "#fde725", // Yellow
    ],
    current_curve_color: Color32::from_rgb(255, 215, 0), // Gold

    stored_line_width: 2.0,
    current_line_width: 3.0,
    unsaved_dash_length: 8.0,
    point_radius: 2.5,
    max_points_with_markers: 25,

    plot_y_padding_pct: 0.05,
    plot_x_padding: 0.5,

    color_growth: Color32::from_rgb(100, 255, 100),
    color_discount: Color32::from_rgb(0, 191, 255),

    color_text_primary: Color32::WHITE,
    color_text_subdued: Color32::GRAY,
};
