//! Immutable rating configuration shared by the resolvers and state machine.

use rateline_core::{Rounding, TooltipGranularity};
use serde::{Deserialize, Serialize};

/// Static configuration of a rating widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Number of icons, which is also the largest selectable value.
    pub max: u32,
    /// Keyboard arrow step.
    pub step: f32,
    /// Snapping policy for pointer input.
    pub rounding: Rounding,
    /// Ignore every input event.
    pub read_only: bool,
    /// Descriptions shown in the tooltip, looked up per `tooltip_granularity`.
    pub tooltips: Vec<String>,
    /// How a value indexes into `tooltips`.
    pub tooltip_granularity: TooltipGranularity,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            max: 5,
            step: 0.5,
            rounding: Rounding::Ceil,
            read_only: false,
            tooltips: Vec::new(),
            tooltip_granularity: TooltipGranularity::Whole,
        }
    }
}

impl RatingConfig {
    /// Largest selectable value.
    #[must_use]
    pub fn max_value(&self) -> f32 {
        self.max as f32
    }

    /// Clamp a value into `[0, max]`. NaN maps to 0.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        let clamped = value.clamp(0.0, self.max_value());
        // -0.0 would otherwise format as "-0"
        if clamped == 0.0 {
            0.0
        } else {
            clamped
        }
    }

    /// Whether `value` already lies inside `[0, max]`.
    #[must_use]
    pub fn in_range(&self, value: f32) -> bool {
        (0.0..=self.max_value()).contains(&value)
    }
}

/// Round to two decimals, the precision every resolved value is reported at.
pub(crate) fn normalize(value: f64) -> f32 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded as f32
    }
}
