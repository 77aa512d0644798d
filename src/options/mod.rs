//! Centralized control options with TOML preset support.
//!
//! Interaction gains, gesture locks, distance limits, key bindings, and
//! the initial camera placement are consolidated here. Options serialize
//! to/from TOML so hosts can ship presets.

mod camera;
mod controls;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use keybindings::{ControlAction, KeybindingOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TrackballError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Interaction parameters.
    pub controls: ControlOptions,
    /// Initial camera placement and projection.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, TrackballError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Serialize options to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, TrackballError> {
        toml::to_string_pretty(self)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TrackballError> {
        let content =
            std::fs::read_to_string(path).map_err(TrackballError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("loaded control options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TrackballError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrackballError::Io)?;
        }
        std::fs::write(path, content).map_err(TrackballError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml_string().unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
        assert!(parsed.controls.max_distance.is_infinite());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
rotate_speed = 1.5
no_roll = true
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.controls.rotate_speed, 1.5);
        assert!(opts.controls.no_roll);
        // Everything else should be default
        assert_eq!(opts.controls.zoom_speed, 1.2);
        assert_eq!(opts.controls.pan_speed, 0.3);
        assert!(opts.controls.static_moving);
        assert_eq!(opts.camera.fovy, 45.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyA"), Some(ControlAction::Rotate));
        assert_eq!(opts.keybindings.lookup("KeyS"), Some(ControlAction::Zoom));
        assert_eq!(opts.keybindings.lookup("KeyD"), Some(ControlAction::Pan));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn loaded_keybindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
rotate = "KeyR"
zoom = "KeyZ"
pan = "KeyP"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(ControlAction::Rotate));
        assert_eq!(opts.keybindings.lookup("KeyP"), Some(ControlAction::Pan));
        assert_eq!(opts.keybindings.lookup("KeyA"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[controls\nrotate_speed = ").unwrap_err();
        assert!(matches!(err, TrackballError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("trackball-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.controls.pan_speed = 0.75;
        opts.save(&dir.join("slow_pan.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("slow_pan.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["slow_pan".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/trackball.toml"))
            .unwrap_err();
        assert!(matches!(err, TrackballError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("controls"));
        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let controls = &props["controls"]["properties"];
        assert!(controls.get("rotate_speed").is_some());
        assert!(controls.get("no_roll").is_some());
        assert!(controls.get("max_distance").is_none());
    }
}
