use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::PhotogenicError;
use serde::{Deserialize, Serialize};

/// How the front end paints the best palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub bar_width: f32,
    pub bar_height: f32,
    pub show_target: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: 10.0,
            bar_height: 100.0,
            show_target: true,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), PhotogenicError> {
        if !(self.bar_width > 0.0) || !(self.bar_height > 0.0) {
            return Err(PhotogenicError::InvalidConfiguration(
                "Bar dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Display".to_string(),
            fields: vec![
                FieldManifest::new(
                    "bar_width",
                    "float",
                    serde_json::json!(10.0),
                    Some((1.0, 200.0)),
                    "Width of each color bar in points",
                ),
                FieldManifest::new(
                    "bar_height",
                    "float",
                    serde_json::json!(100.0),
                    Some((1.0, 1000.0)),
                    "Height of the color bars in points",
                ),
                FieldManifest::new(
                    "show_target",
                    "bool",
                    serde_json::json!(true),
                    None,
                    "Paint the target palette under the best one",
                ),
            ],
        }
    }
}
