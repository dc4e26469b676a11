//! Display resolution: effective value to icon fills and tooltip text.

use crate::config::RatingConfig;
use rateline_core::TooltipGranularity;
use serde::{Deserialize, Serialize};

/// Fill level of one icon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconFill {
    /// Zero-based icon index
    pub index: usize,
    /// Filled share of the icon in `[0, 100]`
    pub percent: f32,
}

/// Everything needed to render a rating for one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayResult {
    /// Effective value, clamped to `[0, max]`
    pub value: f32,
    /// One entry per icon, in order
    pub fills: Vec<IconFill>,
    /// Hover title / accessible value text
    pub tooltip: String,
}

/// Resolve fills and tooltip for an effective value.
#[must_use]
pub fn resolve_display(effective: f32, config: &RatingConfig) -> DisplayResult {
    let value = config.clamp(effective);
    let fills = (0..config.max as usize)
        .map(|index| IconFill {
            index,
            percent: fill_percent(value, index),
        })
        .collect();
    DisplayResult {
        value,
        fills,
        tooltip: tooltip_text(value, config),
    }
}

/// Filled percentage of icon `index` (zero-based) at `value`.
#[must_use]
pub fn fill_percent(value: f32, index: usize) -> f32 {
    let value = f64::from(value);
    let start = index as f64;
    if value >= start + 1.0 {
        100.0
    } else if value > start {
        (((value - start) * 10_000.0).round() / 100.0) as f32
    } else {
        0.0
    }
}

/// Whole values without decimals, everything else with one. Ties round
/// away from zero.
#[must_use]
pub fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let tenths = (f64::from(value) * 10.0).round() / 10.0;
        format!("{tenths:.1}")
    }
}

/// Tooltip for `value`: `"<v> - <description>"` when a description exists,
/// else `"<v> out of <max>"`.
#[must_use]
pub fn tooltip_text(value: f32, config: &RatingConfig) -> String {
    let formatted = format_value(value);
    match description(value, config) {
        Some(desc) => format!("{formatted} - {desc}"),
        None => format!("{formatted} out of {}", config.max),
    }
}

fn description(value: f32, config: &RatingConfig) -> Option<&str> {
    let value = f64::from(value);
    let index = match config.tooltip_granularity {
        TooltipGranularity::Whole => value.ceil() - 1.0,
        TooltipGranularity::Half => value.mul_add(2.0, -1.0).round(),
    };
    if index < 0.0 {
        return None;
    }
    config
        .tooltips
        .get(index as usize)
        .map(String::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config_with_tooltips(granularity: TooltipGranularity) -> RatingConfig {
        RatingConfig {
            tooltips: ["Poor", "Fair", "Good", "Great", "Excellent"]
                .map(String::from)
                .to_vec(),
            tooltip_granularity: granularity,
            ..RatingConfig::default()
        }
    }

    // =========================================================================
    // Fill Tests
    // =========================================================================

    #[test]
    fn test_fills_at_three_and_a_half() {
        let result = resolve_display(3.5, &RatingConfig::default());
        let percents: Vec<f32> = result.fills.iter().map(|f| f.percent).collect();
        assert_eq!(percents, vec![100.0, 100.0, 100.0, 50.0, 0.0]);
        assert_eq!(result.fills[3].index, 3);
    }

    #[test]
    fn test_fill_fractional() {
        assert_eq!(fill_percent(2.3, 2), 30.0);
        assert_eq!(fill_percent(0.25, 0), 25.0);
        assert_eq!(fill_percent(0.0, 0), 0.0);
        assert_eq!(fill_percent(5.0, 4), 100.0);
    }

    #[test]
    fn test_display_clamps() {
        let result = resolve_display(9.0, &RatingConfig::default());
        assert_eq!(result.value, 5.0);
        assert!(result.fills.iter().all(|f| f.percent == 100.0));

        let result = resolve_display(-2.0, &RatingConfig::default());
        assert_eq!(result.value, 0.0);
        assert!(result.fills.iter().all(|f| f.percent == 0.0));
    }

    #[test]
    fn test_fill_count_matches_max() {
        let config = RatingConfig {
            max: 10,
            ..RatingConfig::default()
        };
        assert_eq!(resolve_display(1.0, &config).fills.len(), 10);
    }

    // =========================================================================
    // Tooltip Tests
    // =========================================================================

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(3.5), "3.5");
        assert_eq!(format_value(4.8), "4.8");
        assert_eq!(format_value(0.25), "0.3");
        assert_eq!(format_value(2.25), "2.3");
        assert_eq!(format_value(4.96), "5.0");
    }

    #[test]
    fn test_numeric_tooltip() {
        let config = RatingConfig::default();
        assert_eq!(tooltip_text(3.0, &config), "3 out of 5");
        assert_eq!(tooltip_text(2.5, &config), "2.5 out of 5");
        assert_eq!(tooltip_text(0.0, &config), "0 out of 5");
    }

    #[test]
    fn test_whole_granularity_lookup() {
        let config = config_with_tooltips(TooltipGranularity::Whole);
        assert_eq!(tooltip_text(3.0, &config), "3 - Good");
        assert_eq!(tooltip_text(2.5, &config), "2.5 - Good");
        assert_eq!(tooltip_text(0.5, &config), "0.5 - Poor");
        assert_eq!(tooltip_text(0.0, &config), "0 out of 5");
    }

    #[test]
    fn test_half_granularity_lookup() {
        let mut config = config_with_tooltips(TooltipGranularity::Half);
        assert_eq!(tooltip_text(0.5, &config), "0.5 - Poor");
        assert_eq!(tooltip_text(1.0, &config), "1 - Fair");
        assert_eq!(tooltip_text(2.5, &config), "2.5 - Excellent");
        // Past the end of the list
        assert_eq!(tooltip_text(3.0, &config), "3 out of 5");
        config.tooltips[1] = String::new();
        assert_eq!(tooltip_text(1.0, &config), "1 out of 5");
    }

    #[test]
    fn test_short_tooltip_list_falls_back() {
        let config = RatingConfig {
            tooltips: vec!["Bad".to_string()],
            ..RatingConfig::default()
        };
        assert_eq!(tooltip_text(1.0, &config), "1 - Bad");
        assert_eq!(tooltip_text(4.0, &config), "4 out of 5");
    }

    proptest! {
        #[test]
        fn prop_fills_in_range_and_non_increasing(v in -2.0f32..12.0, max in 1u32..12) {
            let config = RatingConfig { max, ..RatingConfig::default() };
            let result = resolve_display(v, &config);
            prop_assert_eq!(result.fills.len(), max as usize);
            for pair in result.fills.windows(2) {
                prop_assert!(pair[0].percent >= pair[1].percent);
            }
            for fill in &result.fills {
                prop_assert!((0.0..=100.0).contains(&fill.percent));
            }
        }
    }
}
