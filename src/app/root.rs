use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, Key, ScrollArea, SidePanel, TopBottomPanel},
    },
    serde::{Deserialize, Serialize},
    std::mem,
};

use crate::{
    Cli,
    app::PersistedSettings,
    config::DF,
    domain::Params,
    engine::{Action, CompareState, RenderModel, dispatch, render_model},
    ui::{
        ControlsPanel, PlotView, UI_CONFIG, UI_TEXT, UiStyleExt, ValueTablePanel,
        setup_custom_visuals,
    },
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) settings: PersistedSettings, // persists across sessions.
    #[serde(skip)]
    pub(crate) params: Params,
    #[serde(skip)]
    pub(crate) state: CompareState,
    #[serde(skip)]
    pub(crate) plot_view: PlotView,
}

impl Default for App {
    fn default() -> Self {
        let settings = PersistedSettings::default();
        Self {
            params: settings.params(),
            state: CompareState::new(settings.add_mode),
            settings,
            plot_view: PlotView::new(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if DF.log_persistence {
            log::info!("Restored settings: {:?}", app.settings);
        }

        Self::from_settings(app.settings, &args)
    }

    /// Session start: restored settings, overridden by whatever the command line names.
    pub(crate) fn from_settings(settings: PersistedSettings, args: &Cli) -> Self {
        let params = match args.initial_params(settings.params()) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Ignoring command line parameters: {:#}", e);
                settings.params()
            }
        };
        let add_mode = args.add_mode.unwrap_or(settings.add_mode);

        let mut app = Self {
            settings: PersistedSettings::from_parts(params, add_mode),
            params,
            state: CompareState::new(add_mode),
            plot_view: PlotView::new(),
        };
        // First evaluation: records the starting params (and stores them in OnChange mode)
        app.handle_action(Action::ParamsChanged);
        app
    }

    pub(crate) fn handle_action(&mut self, action: Action) {
        let state = mem::take(&mut self.state);
        self.state = dispatch(state, self.params, action);
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user typing in a text box, don't trigger global hotkeys.
            return;
        }

        let (reset, add) = ctx.input(|i| (i.key_pressed(Key::R), i.key_pressed(Key::A)));
        if reset {
            self.handle_action(Action::Reset);
        }
        if add && !self.state.store.contains_params(&self.params) {
            self.handle_action(Action::AddCurrent);
        }
    }

    fn render_top_panel(&self, ctx: &Context) {
        TopBottomPanel::top("title_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.heading(&UI_TEXT.app_title);
            });
    }

    /// Controls first, dispatch, then the table: the table always reflects this frame's input.
    fn render_left_panel(&mut self, ctx: &Context) -> RenderModel {
        SidePanel::left("controls_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .resizable(false)
            .exact_width(UI_CONFIG.side_panel_width)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let current_saved = self.state.store.contains_params(&self.params);
                        let mut panel = ControlsPanel::new(
                            self.params,
                            self.state.add_mode,
                            self.state.store.len(),
                            self.state.store.capacity(),
                            current_saved,
                        );
                        let actions = panel.render(ui);

                        self.params = panel.params();
                        for action in actions {
                            self.handle_action(action);
                        }

                        let model = render_model(&self.state, &self.params);
                        ValueTablePanel::new(&model.heading, &model.table).render(ui);
                        model
                    })
                    .inner
            })
            .inner
    }

    fn render_central_panel(&mut self, ctx: &Context, model: &RenderModel) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.heading(&UI_TEXT.plot_title);
                if model.stored_count == 0 {
                    ui.label_subdued(&UI_TEXT.plot_empty_store_hint);
                }
                self.plot_view.show_comparison_plot(ui, &model.curves);
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        let model = self.render_left_panel(ctx);
        self.render_central_panel(ctx, &model);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.settings = PersistedSettings::from_parts(self.params, self.state.add_mode);
        if DF.log_persistence {
            log::info!("SAVE [App]: {:?}", self.settings);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AddMode, CalcKind};

    fn cli() -> Cli {
        Cli::default()
    }

    #[test]
    fn session_starts_with_current_curve_in_on_change_mode() {
        let app = App::from_settings(PersistedSettings::default(), &cli());
        assert_eq!(app.state.store.len(), 1);
        assert_eq!(app.state.previous, Some(app.params));
    }

    #[test]
    fn session_starts_empty_in_manual_mode() {
        let settings = PersistedSettings::from_parts(Params::default(), AddMode::Manual);
        let app = App::from_settings(settings, &cli());
        assert!(app.state.store.is_empty());
        assert_eq!(app.state.add_mode, AddMode::Manual);
    }

    #[test]
    fn command_line_overrides_restored_settings() {
        let args = Cli {
            kind: Some(CalcKind::PresentValue),
            years: Some(25),
            rate: None,
            add_mode: Some(AddMode::Manual),
        };
        let app = App::from_settings(PersistedSettings::default(), &args);
        assert_eq!(app.params, Params::clamped(CalcKind::PresentValue, 25, 5));
        assert_eq!(app.state.add_mode, AddMode::Manual);
    }

    #[test]
    fn invalid_command_line_falls_back_to_settings() {
        let args = Cli {
            years: Some(99),
            ..Cli::default()
        };
        let app = App::from_settings(PersistedSettings::default(), &args);
        assert_eq!(app.params, Params::default());
    }

    #[test]
    fn actions_flow_through_dispatcher() {
        let mut app = App::from_settings(PersistedSettings::default(), &cli());
        app.params = Params::clamped(CalcKind::FutureValue, 10, 8);
        app.handle_action(Action::ParamsChanged);
        assert_eq!(app.state.store.len(), 2);

        app.handle_action(Action::Reset);
        assert!(app.state.store.is_empty());
        let model = render_model(&app.state, &app.params);
        assert_eq!(model.curves.len(), 1);
    }

    #[test]
    fn add_mode_switch_stops_auto_add() {
        let mut app = App::from_settings(PersistedSettings::default(), &cli());
        app.handle_action(Action::SetAddMode(AddMode::Manual));
        assert_eq!(app.state.add_mode, AddMode::Manual);

        app.params = Params::clamped(CalcKind::FutureValue, 10, 8);
        app.handle_action(Action::ParamsChanged);
        assert_eq!(app.state.store.len(), 1);
    }
}
