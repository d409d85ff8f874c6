use std::{fmt, sync::Arc};

use crate::hooks::{NoopHooks, SchemaGeneratorHooks};

/// Settings of a generation run, usually read from a TOML file.
///
/// ```toml
/// [directives]
/// duplicate_marker = "reject"
/// ```
#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    pub directives: DirectiveSettings,
}

impl GeneratorSettings {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }
}

#[derive(Debug, Default, serde::Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DirectiveSettings {
    pub duplicate_marker: DuplicateMarkerPolicy,
}

/// What to do with an annotation type carrying more than one directive marker.
#[derive(Debug, Default, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateMarkerPolicy {
    /// The first marker in declaration order is used, the others are ignored.
    #[default]
    FirstWins,
    /// The run fails.
    Reject,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid generator settings: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings and hooks shared by every builder of a generation run.
#[derive(Clone)]
pub struct SchemaGeneratorConfig {
    pub settings: GeneratorSettings,
    pub hooks: Arc<dyn SchemaGeneratorHooks>,
}

impl SchemaGeneratorConfig {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self {
            settings,
            hooks: Arc::new(NoopHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: impl SchemaGeneratorHooks + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }
}

impl Default for SchemaGeneratorConfig {
    fn default() -> Self {
        Self::new(GeneratorSettings::default())
    }
}

impl fmt::Debug for SchemaGeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaGeneratorConfig")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
