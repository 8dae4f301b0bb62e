use eframe::egui::{Context, Visuals};

use crate::ui::ui_config::UI_CONFIG;

/// Two-decimal value, the precision every series is stored at.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_year(year: f64) -> String {
    format!("{:.0}", year)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_always_show_two_decimals() {
        assert_eq!(format_value(100.0), "100.00");
        assert_eq!(format_value(90.7), "90.70");
        assert_eq!(format_value(162.89), "162.89");
    }

    #[test]
    fn years_have_no_decimals() {
        assert_eq!(format_year(10.0), "10");
    }
}
