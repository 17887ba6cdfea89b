use crate::config::DisplayConfig;
use crate::engines::generation::BestSnapshot;
use crate::types::Color;
use crate::ui::state::AppState;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        snapshot: Option<&BestSnapshot>,
        target: &[Color],
    ) {
        ui.heading("Best Palette");
        ui.separator();

        let Some(snapshot) = snapshot else {
            ui.centered_and_justified(|ui| {
                ui.label("No engine running. Click 'Reset' to start.");
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.label(format!("Fitness: {:.2}", snapshot.cost));
            ui.separator();
            ui.label(format!("Gen: {}", snapshot.generation));
            ui.separator();
            ui.label(format!("Population: {}", snapshot.population_size));
        });
        ui.label(&state.status_message);

        ui.separator();

        let display = &state.config.display;
        let rows = if display.show_target { 2.0 } else { 1.0 };
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        let row_gap = 8.0;
        let total_height = display.bar_height * rows + row_gap * (rows - 1.0);
        let top = rect.center().y - total_height / 2.0;

        Self::paint_bars(&painter, rect, top, display, snapshot.colors());
        if display.show_target {
            Self::paint_bars(&painter, rect, top + display.bar_height + row_gap, display, target);
        }
    }

    /// One vertical bar per color, centered horizontally in `rect`
    fn paint_bars(painter: &egui::Painter, rect: egui::Rect, top: f32, display: &DisplayConfig, colors: &[Color]) {
        let total_width = display.bar_width * colors.len() as f32;
        let left = rect.center().x - total_width / 2.0;

        for (index, color) in colors.iter().enumerate() {
            let min = egui::pos2(left + index as f32 * display.bar_width, top);
            let bar = egui::Rect::from_min_size(min, egui::vec2(display.bar_width, display.bar_height));
            painter.rect_filled(
                bar,
                egui::CornerRadius::ZERO,
                egui::Color32::from_rgb(color.r, color.g, color.b),
            );
        }
    }
}
