//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigFile, ConfigLoadError,
    ResolvedConfig,
};

/// Reveal and text settings applied when a panel is built.
///
/// `row_height` and `line_height` are separate knobs but must be equal for the
/// reveal rows to line up with text lines; `commit_config` warns otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterSettings {
    /// Reveal distance per second.
    pub speed: f64,
    /// Height of one reveal row.
    pub row_height: f64,
    /// Advance of a single-column glyph.
    pub font_size: f64,
    /// Height of one text line.
    pub line_height: f64,
}

impl TypewriterSettings {
    /// Settings for terminal cells: one column per glyph, one row per line.
    pub fn terminal(speed: f64) -> Self {
        Self {
            speed,
            row_height: 1.0,
            font_size: 1.0,
            line_height: 1.0,
        }
    }
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            speed: 1000.0,
            row_height: 40.0,
            font_size: 40.0,
            line_height: 40.0,
        }
    }
}
