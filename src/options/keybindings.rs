use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Gestures that can be driven by holding a key.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// rotate = "KeyA"
/// pan = "KeyD"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlAction {
    /// Pointer drags rotate while held.
    Rotate,
    /// Pointer drags zoom while held.
    Zoom,
    /// Pointer drags pan while held.
    Pan,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping gestures to key codes.
///
/// Key strings are physical key codes as reported by both winit's
/// `KeyCode` debug format and DOM `KeyboardEvent.code` (`"KeyA"`).
pub struct KeybindingOptions {
    /// Maps gesture → key string (e.g. `Rotate` → `"KeyA"`).
    pub bindings: HashMap<ControlAction, String>,
    /// Reverse lookup cache (key string → gesture). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, ControlAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (ControlAction::Rotate, "KeyA".into()),
            (ControlAction::Zoom, "KeyS".into()),
            (ControlAction::Pan, "KeyD".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → gesture).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Rebind a gesture to a different key.
    pub fn bind(&mut self, action: ControlAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the gesture for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ControlAction> {
        self.key_to_action.get(key).copied()
    }
}
