use super::panels::{LeftPanel, MainPanel};
use super::services::{ConfigBridge, EvolutionRunner, RunnerEvent};
use super::state::{AppState, UiAction};
use crate::config::ConfigManager;
use crate::types::Color;

pub struct PhotogenicApp {
    state: AppState,
    config_manager: ConfigManager,
    runner: Option<EvolutionRunner>,
    target: Vec<Color>,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl PhotogenicApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config_manager: ConfigManager) -> Self {
        let mut state = AppState::new();
        ConfigBridge::apply_app_config(&mut state, config_manager.get());

        let mut app = Self {
            state,
            config_manager,
            runner: None,
            target: Vec::new(),
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
        };
        app.reset();
        app
    }

    /// Replace the running engine with a fresh one built from the current state
    fn reset(&mut self) {
        if let Some(mut runner) = self.runner.take() {
            runner.stop();
        }

        let config = ConfigBridge::to_evolution_config(&self.state);
        let started = ConfigBridge::to_target(&self.state).and_then(|target| {
            let colors = target.colors().to_vec();
            EvolutionRunner::start(config, target).map(|runner| (runner, colors))
        });

        match started {
            Ok((runner, colors)) => {
                self.runner = Some(runner);
                self.target = colors;
                self.state.paused = false;
                self.state.status_message = format!("Evolving {} colors", self.state.color_count);
            }
            Err(e) => {
                log::warn!("Reset failed: {}", e);
                self.state.status_message = format!("Error: {}", e);
            }
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::ApplyPopulationSize => {
                if let Some(runner) = &self.runner {
                    runner.set_population_size(self.state.population_size);
                }
            }
            UiAction::ApplyMutationRate => {
                if let Some(runner) = &self.runner {
                    runner.set_mutation_rate(self.state.mutation_rate);
                }
            }
            UiAction::Reset => self.reset(),
            UiAction::TogglePause => {
                if let Some(runner) = &self.runner {
                    if self.state.paused {
                        runner.resume();
                    } else {
                        runner.pause();
                    }
                }
            }
            UiAction::LoadConfig => self.load_config(),
            UiAction::SaveConfig => self.save_config(),
        }
    }

    fn poll_runner(&mut self) {
        let Some(runner) = &self.runner else {
            return;
        };

        for event in runner.poll_events() {
            match event {
                RunnerEvent::Rejected(message) => self.state.status_message = message,
                RunnerEvent::MutationRate(rate) => self.state.mutation_rate = rate,
                RunnerEvent::Paused => self.state.paused = true,
                RunnerEvent::Resumed => self.state.paused = false,
                RunnerEvent::Stopped { generation } => {
                    self.state.status_message = format!("Stopped at generation {}", generation);
                }
            }
        }
    }

    fn load_config(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };

        match self.config_manager.load_from_file(&path) {
            Ok(()) => {
                ConfigBridge::apply_app_config(&mut self.state, self.config_manager.get());
                self.state.status_message = "Settings loaded; reset to apply".to_string();
                self.state.config_path = Some(path);
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", path.display(), e);
                self.state.status_message = format!("Error: {}", e);
            }
        }
    }

    fn save_config(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("photogenic.toml")
            .save_file()
        else {
            return;
        };

        let config = ConfigBridge::to_app_config(&self.state);
        let saved = self
            .config_manager
            .update(|c| *c = config)
            .and_then(|()| self.config_manager.save_to_file(&path));

        match saved {
            Ok(()) => {
                self.state.status_message = format!("Settings saved to {}", path.display());
                self.state.config_path = Some(path);
            }
            Err(e) => {
                log::warn!("Failed to save {}: {}", path.display(), e);
                self.state.status_message = format!("Error: {}", e);
            }
        }
    }
}

impl eframe::App for PhotogenicApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_runner();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Photogenic - Palette Evolution");
        });

        // Left Panel - Configuration
        let actions = egui::SidePanel::left("left_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| self.left_panel.show(ui, &mut self.state))
                    .inner
            })
            .inner;

        for action in actions {
            self.handle_action(action);
        }

        // Central Panel - Best palette, read at frame rate
        let snapshot = self.runner.as_ref().map(|runner| runner.latest());
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel
                .show(ui, &self.state, snapshot.as_deref(), &self.target);
        });

        if !self.state.paused {
            ctx.request_repaint();
        }
    }
}
