//! Snapping and lookup policies shared by configuration and widgets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a raw pointer-derived value snaps onto the step grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Round to the nearest grid point (halves round up).
    Nearest,
    /// Round down.
    Floor,
    /// Round up.
    #[default]
    Ceil,
}

impl Rounding {
    /// Snap a value expressed in grid units to a whole grid unit.
    #[must_use]
    pub fn snap(self, units: f64) -> f64 {
        match self {
            // Half-up, matching DOM `Math.round` for the non-negative inputs we see.
            Self::Nearest => (units + 0.5).floor(),
            Self::Floor => units.floor(),
            Self::Ceil => units.ceil(),
        }
    }

    /// Lowercase policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
        }
    }
}

/// Which tooltip entry describes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipGranularity {
    /// One entry per icon: index `ceil(value) - 1`.
    #[default]
    Whole,
    /// One entry per half icon: index `round(value * 2 - 1)`.
    Half,
}

impl TooltipGranularity {
    /// Lowercase policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Half => "half",
        }
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}' (expected one of: {expected})")]
pub struct PolicyParseError {
    /// Policy kind ("rounding", "tooltip granularity")
    pub kind: &'static str,
    /// Rejected input
    pub name: String,
    /// Accepted names, comma separated
    pub expected: &'static str,
}

impl FromStr for Rounding {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "round" => Ok(Self::Nearest),
            "floor" => Ok(Self::Floor),
            "ceil" => Ok(Self::Ceil),
            _ => Err(PolicyParseError {
                kind: "rounding",
                name: s.to_string(),
                expected: "nearest, floor, ceil",
            }),
        }
    }
}

impl FromStr for TooltipGranularity {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole" => Ok(Self::Whole),
            "half" => Ok(Self::Half),
            _ => Err(PolicyParseError {
                kind: "tooltip granularity",
                name: s.to_string(),
                expected: "whole, half",
            }),
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TooltipGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
