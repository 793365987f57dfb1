use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Fully qualified checker-framework purity marker.
pub const SIDE_EFFECT_FREE: &str = "org.checkerframework.dataflow.qual.SideEffectFree";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to parse generation config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid generation config: {0}")]
    Invalid(String),
}

///
/// GenerationConfig
///
/// Knobs that change how specifications are decorated and rendered; none of
/// them change which members are compared or how.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Mark generated parameters and locals `final`.
    pub final_params: bool,

    /// Prepend the checker-framework `@SideEffectFree` marker.
    pub side_effect_free: bool,

    /// Add `@java.lang.SuppressWarnings("all")`.
    pub suppress_warnings: bool,

    /// Extra marker added to every generated method, e.g. `lombok.Generated`.
    pub generated_annotation: Option<String>,

    /// Annotations copied onto the single parameter of `equals`/`canEqual`.
    pub param_annotations: Vec<String>,

    /// Static helper applied to the simple class name in the `toString`
    /// fallback, e.g. `com.acme.util.Strings.capitalize`.
    pub to_string_fallback: Option<String>,

    pub indent: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            final_params: true,
            side_effect_free: false,
            suppress_warnings: true,
            generated_annotation: None,
            param_annotations: Vec::new(),
            to_string_fallback: None,
            indent: "    ".to_string(),
        }
    }
}

impl GenerationConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(helper) = &self.to_string_fallback
            && helper.rsplit_once('.').is_none_or(|(owner, m)| owner.is_empty() || m.is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "to_string_fallback '{helper}' must be a qualified Type.method path"
            )));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::Invalid(
                "indent may only contain spaces or tabs".to_string(),
            ));
        }

        Ok(())
    }
}
