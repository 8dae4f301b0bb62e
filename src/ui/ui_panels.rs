use eframe::egui::{Align, Button, Layout, RichText, Slider, Ui};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::analysis::ValuePoint;
use crate::config::VALUATION;
use crate::domain::{AddMode, CalcKind, Params};
use crate::engine::Action;
use crate::ui::styles::{KindColor, UiStyleExt};
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::format_value;

/// Parameter widgets plus the comparison buttons.
///
/// Edits happen on copies; the caller learns about them through the returned
/// actions and the `params` getter, so nothing is mutated behind the
/// dispatcher's back.
pub struct ControlsPanel {
    params: Params,
    add_mode: AddMode,
    stored_count: usize,
    capacity: usize,
    current_saved: bool,
}

impl ControlsPanel {
    pub fn new(
        params: Params,
        add_mode: AddMode,
        stored_count: usize,
        capacity: usize,
        current_saved: bool,
    ) -> Self {
        Self {
            params,
            add_mode,
            stored_count,
            capacity,
            current_saved,
        }
    }

    pub fn params(&self) -> Params {
        self.params
    }

    /// Draws the widgets. Returns the actions triggered this frame, in input order.
    pub fn render(&mut self, ui: &mut Ui) -> Vec<Action> {
        let mut actions = Vec::new();
        let before = self.params;
        let before_mode = self.add_mode;

        ui.label_subheader(&UI_TEXT.lp_calc_type);
        ui.horizontal(|ui| {
            for kind in CalcKind::iter() {
                ui.radio_value(
                    &mut self.params.kind,
                    kind,
                    RichText::new(kind.to_string()).color(kind.color()),
                );
            }
        });
        ui.add_space(6.0);

        ui.add(
            Slider::new(&mut self.params.years, 0..=VALUATION.max_years)
                .text(&UI_TEXT.lp_years)
                .integer(),
        );
        ui.add(
            Slider::new(&mut self.params.rate_pct, 0..=VALUATION.max_rate_pct)
                .text(&UI_TEXT.lp_rate)
                .suffix("%")
                .integer(),
        );

        // Several widgets can move in one frame (e.g. keyboard focus hops); that's still one event.
        if self.params != before {
            actions.push(Action::ParamsChanged);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.heading(&UI_TEXT.lp_comparison_controls);

        ui.horizontal(|ui| {
            ui.label_subdued(&UI_TEXT.lp_add_mode);
            for mode in AddMode::iter() {
                if ui
                    .selectable_value(&mut self.add_mode, mode, mode.to_string())
                    .clicked()
                    && mode != before_mode
                {
                    actions.push(Action::SetAddMode(mode));
                }
            }
        });

        ui.horizontal(|ui| {
            let add_text = ui.button_text_primary(&UI_TEXT.lp_add_to_chart);
            let add = ui
                .add_enabled(!self.current_saved, Button::new(add_text))
                .on_disabled_hover_text(&UI_TEXT.lp_hover_add_disabled);
            if add.clicked() {
                actions.push(Action::AddCurrent);
            }

            let reset_text = ui.button_text_secondary(&UI_TEXT.lp_reset_chart);
            let reset = ui
                .button(reset_text)
                .on_hover_text(&UI_TEXT.lp_hover_reset);
            if reset.clicked() {
                actions.push(Action::Reset);
            }
        });

        ui.metric(
            &UI_TEXT.lp_stored_curves,
            &format!("{} / {}", self.stored_count, self.capacity),
            UI_CONFIG.colors.heading,
        );

        actions
    }
}

/// Year/value grid for the live params.
pub struct ValueTablePanel<'a> {
    heading: &'a str,
    rows: &'a [ValuePoint],
}

impl<'a> ValueTablePanel<'a> {
    pub fn new(heading: &'a str, rows: &'a [ValuePoint]) -> Self {
        Self { heading, rows }
    }

    pub fn render(&self, ui: &mut Ui) {
        ui.add_space(10.0);
        ui.separator();
        ui.label_subheader(self.heading);

        TableBuilder::new(ui)
            .id_salt("value_table")
            .striped(true)
            .cell_layout(Layout::right_to_left(Align::Center))
            .column(Column::exact(60.0))
            .column(Column::remainder())
            .max_scroll_height(UI_CONFIG.table_height)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong(&UI_TEXT.table_year);
                });
                header.col(|ui| {
                    ui.strong(&UI_TEXT.table_value);
                });
            })
            .body(|body| {
                body.rows(18.0, self.rows.len(), |mut row| {
                    let point = self.rows[row.index()];
                    row.col(|ui| {
                        ui.label(point.year.to_string());
                    });
                    row.col(|ui| {
                        ui.monospace(format_value(point.value));
                    });
                });
            });
    }
}
