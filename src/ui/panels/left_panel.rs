use crate::config::{
    ColorMetric, ConfigManifest, ConfigSection, CrossoverMethod, DisplayConfig, EvolutionConfig,
    SelectionMethod,
};
use crate::ui::state::{AppState, UiAction};

/// Settings panel; hover texts come from the config manifests
pub struct LeftPanel {
    evolution_manifest: ConfigManifest,
    display_manifest: ConfigManifest,
}

impl LeftPanel {
    pub fn new() -> Self {
        Self {
            evolution_manifest: EvolutionConfig::default().to_manifest(),
            display_manifest: DisplayConfig::default().to_manifest(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> Vec<UiAction> {
        let mut actions = Vec::new();

        ui.heading("Configuration");
        ui.separator();

        // 1. Live parameters
        egui::CollapsingHeader::new("Live")
            .default_open(true)
            .show(ui, |ui| {
                self.show_live_controls(ui, state, &mut actions);
            });

        ui.separator();

        // 2. Applied on reset
        ui.collapsing("Search (applies on reset)", |ui| {
            self.show_search_config(ui, state);
        });

        ui.separator();

        let display = &self.display_manifest;
        ui.collapsing("Display", |ui| {
            ui.horizontal(|ui| {
                ui.label("Bar width:");
                ui.add(egui::DragValue::new(&mut state.config.display.bar_width).range(1.0..=200.0))
                    .on_hover_text(display.describe("bar_width"));
            });
            ui.horizontal(|ui| {
                ui.label("Bar height:");
                ui.add(egui::DragValue::new(&mut state.config.display.bar_height).range(1.0..=1000.0))
                    .on_hover_text(display.describe("bar_height"));
            });
            ui.checkbox(&mut state.config.display.show_target, "Show target")
                .on_hover_text(display.describe("show_target"));
        });

        ui.separator();

        // 3. Control Buttons
        Self::show_control_buttons(ui, state, &mut actions);

        actions
    }

    fn show_live_controls(&self, ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<UiAction>) {
        let manifest = &self.evolution_manifest;

        ui.horizontal(|ui| {
            ui.label("Population:");
            if ui
                .add(egui::DragValue::new(&mut state.population_size).range(1..=5000))
                .on_hover_text(manifest.describe("population_size"))
                .changed()
            {
                actions.push(UiAction::ApplyPopulationSize);
            }
        });

        if ui
            .add(egui::Slider::new(&mut state.mutation_rate, 0.0..=1.0).text("Mutation rate"))
            .on_hover_text(manifest.describe("mutation_rate"))
            .changed()
        {
            actions.push(UiAction::ApplyMutationRate);
        }
    }

    fn show_search_config(&self, ui: &mut egui::Ui, state: &mut AppState) {
        let manifest = &self.evolution_manifest;
        let evolution = &mut state.config.evolution;

        ui.horizontal(|ui| {
            ui.label("Colors:");
            ui.add(egui::DragValue::new(&mut state.color_count).range(1..=512))
                .on_hover_text(manifest.describe("color_count"));
        });

        ui.horizontal(|ui| {
            ui.label("Crossover rate:");
            ui.add(egui::DragValue::new(&mut evolution.crossover_rate).speed(0.01).range(0.0..=1.0))
                .on_hover_text(manifest.describe("crossover_rate"));
        });

        ui.horizontal(|ui| {
            ui.label("Elitism rate:");
            ui.add(egui::DragValue::new(&mut evolution.elitism_rate).speed(0.01).range(0.0..=1.0))
                .on_hover_text(manifest.describe("elitism_rate"));
        });

        ui.horizontal(|ui| {
            ui.label("Tournament size:");
            ui.add(egui::DragValue::new(&mut evolution.tournament_size).range(1..=64))
                .on_hover_text(manifest.describe("tournament_size"));
        });

        ui.horizontal(|ui| {
            ui.label("Selection:");
            egui::ComboBox::from_id_salt("selection_method")
                .selected_text(format!("{:?}", evolution.selection_method))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut evolution.selection_method, SelectionMethod::Tournament, "Tournament");
                    ui.selectable_value(&mut evolution.selection_method, SelectionMethod::Roulette, "Roulette");
                    ui.selectable_value(&mut evolution.selection_method, SelectionMethod::Rank, "Rank");
                });
        });

        ui.horizontal(|ui| {
            ui.label("Crossover:");
            egui::ComboBox::from_id_salt("crossover_method")
                .selected_text(format!("{:?}", evolution.crossover_method))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut evolution.crossover_method, CrossoverMethod::SinglePoint, "Single point");
                    ui.selectable_value(&mut evolution.crossover_method, CrossoverMethod::Uniform, "Uniform");
                });
        });

        ui.horizontal(|ui| {
            ui.label("Metric:");
            egui::ComboBox::from_id_salt("color_metric")
                .selected_text(format!("{:?}", evolution.color_metric))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut evolution.color_metric, ColorMetric::SquaredRgb, "Squared RGB");
                    ui.selectable_value(&mut evolution.color_metric, ColorMetric::Cie2000, "CIEDE2000");
                });
        });
    }

    fn show_control_buttons(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                actions.push(UiAction::Reset);
            }
            let label = if state.paused { "Resume" } else { "Pause" };
            if ui.button(label).clicked() {
                actions.push(UiAction::TogglePause);
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Load settings…").clicked() {
                actions.push(UiAction::LoadConfig);
            }
            if ui.button("Save settings…").clicked() {
                actions.push(UiAction::SaveConfig);
            }
        });

        if let Some(path) = &state.config_path {
            ui.small(format!("Settings: {}", path.display()));
        }
    }
}
