//! YAML manifest types for Rateline rating widgets.

use crate::error::ParseError;
use rateline_core::{Color, Rounding, TooltipGranularity};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Manifest loaded from a `ratings.yaml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Rateline format version
    pub rateline: String,
    /// Manifest name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Rating widgets
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

/// Configuration of one rating widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Widget ID, unique within the manifest
    pub id: String,
    /// Initial committed value
    #[serde(default)]
    pub value: f32,
    /// Number of icons
    #[serde(default = "default_max")]
    pub max: u32,
    /// Keyboard arrow step
    #[serde(default = "default_step")]
    pub step: f32,
    /// Pointer snapping policy
    #[serde(default)]
    pub rounding: Rounding,
    /// Disable all interaction
    #[serde(default)]
    pub read_only: bool,
    /// Icon size in pixels
    #[serde(default = "default_size")]
    pub size: f32,
    /// Filled icon color (hex)
    #[serde(default = "default_full_color")]
    pub full_color: String,
    /// Empty icon color (hex)
    #[serde(default = "default_empty_color")]
    pub empty_color: String,
    /// Descriptive tooltip entries
    #[serde(default)]
    pub tooltips: Vec<String>,
    /// Tooltip lookup granularity
    #[serde(default)]
    pub tooltip_granularity: TooltipGranularity,
    /// Accessible label
    #[serde(default)]
    pub label: Option<String>,
    /// Star outline stroke width
    #[serde(default)]
    pub outline: Option<f32>,
}

const fn default_max() -> u32 {
    5
}

const fn default_step() -> f32 {
    0.5
}

const fn default_size() -> f32 {
    24.0
}

fn default_full_color() -> String {
    "#FFD700".to_string()
}

fn default_empty_color() -> String {
    "#E0E0E0".to_string()
}

impl WidgetConfig {
    /// Create a config with every field at its default.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: 0.0,
            max: default_max(),
            step: default_step(),
            rounding: Rounding::default(),
            read_only: false,
            size: default_size(),
            full_color: default_full_color(),
            empty_color: default_empty_color(),
            tooltips: Vec::new(),
            tooltip_granularity: TooltipGranularity::default(),
            label: None,
            outline: None,
        }
    }

    /// Parsed filled color.
    pub fn full_color(&self) -> Result<Color, ParseError> {
        self.parse_color("full_color", &self.full_color)
    }

    /// Parsed empty color.
    pub fn empty_color(&self) -> Result<Color, ParseError> {
        self.parse_color("empty_color", &self.empty_color)
    }

    fn parse_color(&self, field: &str, hex: &str) -> Result<Color, ParseError> {
        Color::from_hex(hex).map_err(|e| ParseError::invalid(self.field(field), e.to_string()))
    }

    fn field(&self, name: &str) -> String {
        format!("widgets[{}].{name}", self.id)
    }

    /// Check the invariants a widget needs to be built.
    ///
    /// Out-of-range `value`s are accepted: widgets clamp them at use.
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.id.trim().is_empty() {
            return Err(ParseError::MissingField("widgets[].id".to_string()));
        }
        if self.max == 0 {
            return Err(ParseError::invalid(self.field("max"), "must be at least 1"));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ParseError::invalid(
                self.field("step"),
                "must be a positive number",
            ));
        }
        if !self.value.is_finite() {
            return Err(ParseError::invalid(self.field("value"), "must be finite"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ParseError::invalid(
                self.field("size"),
                "must be a positive number",
            ));
        }
        if let Some(width) = self.outline {
            if !width.is_finite() || width < 0.0 {
                return Err(ParseError::invalid(
                    self.field("outline"),
                    "must be a non-negative number",
                ));
            }
        }
        self.full_color()?;
        self.empty_color()?;
        Ok(())
    }
}

impl Manifest {
    /// Parse a manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    /// Parse and validate in one step.
    pub fn load(yaml: &str) -> Result<Self, ParseError> {
        let manifest = Self::from_yaml(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate every widget and the uniqueness of their ids.
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.name.trim().is_empty() {
            return Err(ParseError::MissingField("name".to_string()));
        }
        if self.widgets.is_empty() {
            return Err(ParseError::Validation("no widgets declared".to_string()));
        }
        let mut seen = HashSet::new();
        for widget in &self.widgets {
            widget.validate()?;
            if !seen.insert(widget.id.as_str()) {
                return Err(ParseError::Validation(format!(
                    "duplicate widget id '{}'",
                    widget.id
                )));
            }
        }
        Ok(())
    }

    /// Look up a widget by id.
    #[must_use]
    pub fn widget(&self, id: &str) -> Option<&WidgetConfig> {
        self.widgets.iter().find(|w| w.id == id)
    }
}
