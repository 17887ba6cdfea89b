use anyhow::Context;
use eframe::NativeOptions;
use photogenic::config::ConfigManager;
use photogenic::ui::PhotogenicApp;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "photogenic.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Settings are optional; fall back to defaults when the file is absent
    let config_manager = ConfigManager::new();
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        config_manager
            .load_from_file(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("loading {}", DEFAULT_CONFIG_PATH))?;
    }

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Photogenic"),
        ..Default::default()
    };

    eframe::run_native(
        "Photogenic",
        native_options,
        Box::new(|cc| Ok(Box::new(PhotogenicApp::new(cc, config_manager)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {}", e))
}
