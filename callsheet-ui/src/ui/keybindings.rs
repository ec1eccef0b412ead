use std::collections::HashMap;

use callsheet_core::paths::user_keybindings_path;
use serde::Deserialize;

use super::action_id::parse_action_id;
use super::keymap::{KeyBinding, KeyPattern, Keymap};
use super::layer::Layer;
use super::KeyCode;

#[derive(Deserialize)]
struct KeybindingConfig {
    #[allow(dead_code)]
    version: u32,
    layers: HashMap<String, LayerConfig>,
}

#[derive(Deserialize)]
struct LayerConfig {
    #[serde(default = "default_transparent")]
    transparent: bool,
    #[serde(default)]
    bindings: Vec<RawBinding>,
}

fn default_transparent() -> bool {
    true
}

#[derive(Deserialize)]
struct RawBinding {
    key: String,
    action: String,
    description: String,
}

/// Loaded once at startup and kept for the life of the process.
fn intern(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse key notation: `q`, `Space`, `Enter`, `F5`, `Ctrl+s`, `Alt+x`,
/// `Ctrl+Left`, `Shift+Tab`. Unknown names give `None`.
fn parse_key(s: &str) -> Option<KeyPattern> {
    if let Some(rest) = s.strip_prefix("Ctrl+") {
        match single_char(rest) {
            Some(c) => Some(KeyPattern::Ctrl(c)),
            None => parse_named_key(rest).map(KeyPattern::CtrlKey),
        }
    } else if let Some(rest) = s.strip_prefix("Alt+") {
        single_char(rest).map(KeyPattern::Alt)
    } else if let Some(rest) = s.strip_prefix("Shift+") {
        parse_named_key(rest).map(KeyPattern::ShiftKey)
    } else if s == "Space" {
        Some(KeyPattern::Char(' '))
    } else if let Some(c) = single_char(s) {
        Some(KeyPattern::Char(c))
    } else {
        parse_named_key(s).map(KeyPattern::Key)
    }
}

fn parse_named_key(s: &str) -> Option<KeyCode> {
    match s {
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        "Enter" => Some(KeyCode::Enter),
        "Escape" => Some(KeyCode::Escape),
        "Backspace" => Some(KeyCode::Backspace),
        "Tab" => Some(KeyCode::Tab),
        "Home" => Some(KeyCode::Home),
        "End" => Some(KeyCode::End),
        "PageUp" => Some(KeyCode::PageUp),
        "PageDown" => Some(KeyCode::PageDown),
        "Insert" => Some(KeyCode::Insert),
        "Delete" => Some(KeyCode::Delete),
        _ => s.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()).map(KeyCode::F),
    }
}

const DEFAULT_KEYBINDINGS: &str = include_str!("../../keybindings.toml");

/// Layers that never belong to a single pane
const MODE_LAYERS: &[&str] = &["global", "text_edit"];

/// Load the embedded bindings, then apply the user's override file if one
/// exists. Returns the layers for the `LayerStack` and the pane keymaps
/// shown in help.
pub fn load_keybindings() -> (Vec<Layer>, HashMap<String, Keymap>) {
    let mut config = match toml::from_str::<KeybindingConfig>(DEFAULT_KEYBINDINGS) {
        Ok(config) => config,
        Err(e) => {
            log::error!(target: "ui::keybindings", "embedded keybindings.toml is invalid: {}", e);
            KeybindingConfig { version: 0, layers: HashMap::new() }
        }
    };

    if let Some(path) = user_keybindings_path().filter(|p| p.exists()) {
        match std::fs::read_to_string(&path).map(|s| toml::from_str::<KeybindingConfig>(&s)) {
            Ok(Ok(user)) => {
                log::info!(target: "ui::keybindings", "loaded overrides from {}", path.display());
                merge_config(&mut config, user);
            }
            Ok(Err(e)) => log::warn!(target: "ui::keybindings", "ignoring {}: {}", path.display(), e),
            Err(e) => log::warn!(target: "ui::keybindings", "cannot read {}: {}", path.display(), e),
        }
    }

    (build_layers(&config.layers), build_pane_keymaps(&config.layers))
}

/// A layer in the user file replaces the default layer of the same name.
fn merge_config(base: &mut KeybindingConfig, user: KeybindingConfig) {
    for (layer_id, layer_config) in user.layers {
        base.layers.insert(layer_id, layer_config);
    }
}

fn build_bindings(layer_name: &str, raw: &[RawBinding]) -> Vec<KeyBinding> {
    raw.iter()
        .filter_map(|b| {
            let Some(pattern) = parse_key(&b.key) else {
                log::warn!(target: "ui::keybindings", "ignoring unknown key '{}' in keybindings", b.key);
                return None;
            };
            match parse_action_id(layer_name, &b.action) {
                Some(action) => Some(KeyBinding { pattern, action, description: intern(b.description.clone()) }),
                None => {
                    log::warn!(target: "ui::keybindings", "ignoring unknown action '{}' in layer '{}'", b.action, layer_name);
                    None
                }
            }
        })
        .collect()
}

fn build_layers(layers: &HashMap<String, LayerConfig>) -> Vec<Layer> {
    layers
        .iter()
        .map(|(name, config)| Layer {
            name: intern(name.clone()),
            keymap: Keymap::from_bindings(build_bindings(name, &config.bindings)),
            transparent: config.transparent,
        })
        .collect()
}

fn build_pane_keymaps(layers: &HashMap<String, LayerConfig>) -> HashMap<String, Keymap> {
    layers
        .iter()
        .filter(|(name, _)| !MODE_LAYERS.contains(&name.as_str()))
        .map(|(name, config)| (name.clone(), Keymap::from_bindings(build_bindings(name, &config.bindings))))
        .collect()
}
