//! Draw commands recorded by canvases.
//!
//! All icon rendering reduces to these primitives.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// A horizontal two-stop fill: `full` left of `split`, `empty` right of it.
///
/// `split` is a fraction of the shape's bounding width in `[0.0, 1.0]`.
/// The gradient and mask ids name the render-time resources a retained
/// backend (SVG, DOM) has to define; they must be unique per widget instance
/// and icon, and stable across repaints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitFill {
    /// Identifier of the gradient resource
    pub gradient_id: String,
    /// Identifier of the mask resource
    pub mask_id: String,
    /// Fraction of the width painted with `full`
    pub split: f32,
    /// Color of the filled portion
    pub full: Color,
    /// Color of the remaining portion
    pub empty: Color,
}

impl SplitFill {
    /// Split position as a percentage, clamped to `[0, 100]`.
    #[must_use]
    pub fn split_percent(&self) -> f32 {
        (self.split * 100.0).clamp(0.0, 100.0)
    }
}

/// A single draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle.
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Filled polygon.
    Polygon {
        /// Vertices, implicitly closed
        points: Vec<Point>,
        /// Fill color
        color: Color,
    },
    /// Stroked closed outline.
    Outline {
        /// Vertices, implicitly closed
        points: Vec<Point>,
        /// Stroke style
        stroke: StrokeStyle,
    },
    /// Polygon filled with a [`SplitFill`].
    SplitPolygon {
        /// Vertices, implicitly closed
        points: Vec<Point>,
        /// Split fill parameters
        fill: SplitFill,
    },
    /// Hover/tooltip title for the surface being painted.
    Title {
        /// Title text
        text: String,
    },
}

impl DrawCommand {
    /// Create a filled rectangle command.
    #[must_use]
    pub const fn rect(bounds: Rect, color: Color) -> Self {
        Self::Rect { bounds, color }
    }

    /// Split fill carried by this command, if any.
    #[must_use]
    pub const fn split_fill(&self) -> Option<&SplitFill> {
        match self {
            Self::SplitPolygon { fill, .. } => Some(fill),
            _ => None,
        }
    }
}

/// Axis-aligned bounding box of a point set (`None` when empty).
#[must_use]
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(split: f32) -> SplitFill {
        SplitFill {
            gradient_id: "grad-1-1".to_string(),
            mask_id: "mask-1-1".to_string(),
            split,
            full: Color::GOLD,
            empty: Color::LIGHT_GRAY,
        }
    }

    #[test]
    fn test_split_percent_clamped() {
        assert_eq!(fill(0.5).split_percent(), 50.0);
        assert_eq!(fill(1.5).split_percent(), 100.0);
        assert_eq!(fill(-0.2).split_percent(), 0.0);
    }

    #[test]
    fn test_split_fill_accessor() {
        let cmd = DrawCommand::SplitPolygon {
            points: vec![Point::ORIGIN],
            fill: fill(0.25),
        };
        assert_eq!(cmd.split_fill().map(|f| f.split), Some(0.25));
        assert!(DrawCommand::rect(Rect::default(), Color::BLACK)
            .split_fill()
            .is_none());
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(bounding_box(&[]), None);
        let pts = [
            Point::new(12.0, 0.5),
            Point::new(23.9, 9.2),
            Point::new(0.1, 9.2),
            Point::new(12.0, 23.2),
        ];
        let bb = bounding_box(&pts).unwrap();
        assert_eq!(bb.x, 0.1);
        assert_eq!(bb.y, 0.5);
        assert!((bb.width - 23.8).abs() < 1e-4);
        assert!((bb.height - 22.7).abs() < 1e-4);
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::Title {
            text: "3 out of 5".to_string(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("3 out of 5"));
    }
}
