use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::colors::{ColorSpec, DEFAULT_ALPHA};
use crate::figure::LegendLoc;
use crate::labels::Fill;
use crate::render::VennOptions;

const FIGSIZE: (f32, f32) = (6.0, 6.0);
const DPI: f32 = 96.0;
const FONT_SIZE: f32 = 13.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document is not valid TOML ({toml}), YAML ({yaml}) or JSON ({json})")]
    Unrecognised {
        toml: toml::de::Error,
        yaml: serde_yaml::Error,
        json: serde_json::Error,
    },
}

/// Diagram settings, as read from a configuration file. Every field may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VennConfig {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub palette: Option<Vec<ColorSpec>>,
    #[serde(default)]
    pub shift: usize,
    #[serde(default = "default_alpha")]
    pub alpha: f32,
    #[serde(default = "default_figsize")]
    pub figsize: (f32, f32),
    #[serde(default = "default_dpi")]
    pub dpi: f32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_legend_loc")]
    pub legend_loc: Option<LegendLoc>,
    #[serde(default = "default_fill")]
    pub fill: Vec<Fill>,
}

fn default_alpha() -> f32 {
    DEFAULT_ALPHA
}
fn default_figsize() -> (f32, f32) {
    FIGSIZE
}
fn default_dpi() -> f32 {
    DPI
}
fn default_font_size() -> f32 {
    FONT_SIZE
}
fn default_legend_loc() -> Option<LegendLoc> {
    Some(LegendLoc::UpperRight)
}
fn default_fill() -> Vec<Fill> {
    vec![Fill::Number]
}

impl Default for VennConfig {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            palette: None,
            shift: 0,
            alpha: default_alpha(),
            figsize: default_figsize(),
            dpi: default_dpi(),
            font_size: default_font_size(),
            legend_loc: default_legend_loc(),
            fill: default_fill(),
        }
    }
}

impl VennConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Try TOML, then YAML, then JSON.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        parse_any(content)
    }

    pub fn to_options(&self) -> VennOptions {
        VennOptions {
            names: self.names.clone(),
            palette: self.palette.clone(),
            shift: self.shift,
            alpha: self.alpha,
            figsize: self.figsize,
            dpi: self.dpi,
            font_size: self.font_size,
            legend_loc: self.legend_loc,
        }
    }
}

/// A set member read from a document: integers and strings are kept
/// distinct, so `1` and `"1"` are different elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Int(i64),
    Text(String),
}

/// Input document for the command line: the sets, optionally with names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VennInput {
    pub sets: Vec<Vec<Element>>,
    #[serde(default)]
    pub names: Vec<String>,
}

impl VennInput {
    /// Try TOML, then YAML, then JSON.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        parse_any(content)
    }
}

fn parse_any<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T, ConfigError> {
    let toml = match toml::from_str(content) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };
    let yaml = match serde_yaml::from_str(content) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };
    let json = match serde_json::from_str(content) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };
    Err(ConfigError::Unrecognised { toml, yaml, json })
}
