//! Shared configuration loader for the markshift toolchain.
//!
//! `defaults/markshift.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`MarkshiftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use markshift::editor::{self, Capability};
use markshift::error::ConvertError;
use markshift::{Format, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/markshift.default.toml");

/// Top-level configuration consumed by markshift applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkshiftConfig {
    pub convert: ConvertConfig,
    pub sync: SyncConfig,
    pub editor: EditorConfig,
}

/// Conversion-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub render: RenderConfig,
}

/// Mirrors the knobs exposed by the HTML renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub hardbreaks: bool,
    pub gfm: bool,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            hardbreaks: config.hardbreaks,
            gfm: config.gfm,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            hardbreaks: config.hardbreaks,
            gfm: config.gfm,
        }
    }
}

/// Initial mode selection for synchronized editing sessions.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    pub input_mode: String,
    pub output_mode: String,
}

impl SyncConfig {
    /// Resolve the configured input mode name.
    pub fn input_format(&self) -> Result<Format, ConvertError> {
        Format::from_name(&self.input_mode)
    }

    /// Resolve the configured output mode name.
    pub fn output_format(&self) -> Result<Format, ConvertError> {
        Format::from_name(&self.output_mode)
    }
}

/// Toolbar surface for host editors.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    pub toolbar: Vec<String>,
}

impl EditorConfig {
    /// Resolve the configured capability names. Unknown names are logged
    /// and skipped.
    pub fn resolved_toolbar(&self) -> Vec<Capability> {
        editor::toolbar_from_names(&self.toolbar)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MarkshiftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkshiftConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.convert.render.hardbreaks);
        assert!(config.convert.render.gfm);
        assert_eq!(config.sync.input_mode, "html");
        assert_eq!(config.sync.output_mode, "markdown");
        assert_eq!(config.editor.toolbar.len(), 14);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.render.hardbreaks", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.convert.render.hardbreaks);
    }

    #[test]
    fn render_config_converts_to_render_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options: RenderOptions = (&config.convert.render).into();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn sync_modes_resolve_to_formats() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.sync.input_format().expect("valid mode"), Format::Html);
        assert_eq!(
            config.sync.output_format().expect("valid mode"),
            Format::Markdown
        );
    }

    #[test]
    fn default_toolbar_resolves_every_capability() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.editor.resolved_toolbar(), editor::default_toolbar());
    }
}
