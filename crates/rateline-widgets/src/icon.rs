//! Icon renderers.
//!
//! A rating widget never draws icon shapes itself. It hands each icon's cell,
//! fill percentage, colors and render-resource ids to an [`IconRenderer`],
//! which turns them into canvas operations.

use rateline_core::{Canvas, Color, Point, Rect, SplitFill};
use std::fmt;

/// Side length of the coordinate space icon outlines are authored in.
pub const ICON_VIEWBOX: f32 = 24.0;

/// Five-pointed star in the 24x24 icon space, clockwise from the top tip.
pub const STAR_OUTLINE: [Point; 10] = [
    Point::new(12.0, 0.587),
    Point::new(15.668, 8.016),
    Point::new(23.875, 9.208),
    Point::new(17.937, 14.995),
    Point::new(19.338, 23.165),
    Point::new(12.0, 18.897),
    Point::new(4.662, 22.753),
    Point::new(6.063, 14.583),
    Point::new(0.125, 9.208),
    Point::new(8.332, 8.016),
];

/// Paint parameters for one icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPaint {
    /// Cell the icon occupies
    pub bounds: Rect,
    /// Filled share in `[0, 100]`
    pub fill_percent: f32,
    /// Color of the filled portion
    pub full_color: Color,
    /// Color of the unfilled portion
    pub empty_color: Color,
    /// Per-instance gradient resource id
    pub gradient_id: String,
    /// Per-instance mask resource id
    pub mask_id: String,
}

impl IconPaint {
    /// Split fill for this icon.
    #[must_use]
    pub fn split_fill(&self) -> SplitFill {
        SplitFill {
            gradient_id: self.gradient_id.clone(),
            mask_id: self.mask_id.clone(),
            split: (self.fill_percent / 100.0).clamp(0.0, 1.0),
            full: self.full_color,
            empty: self.empty_color,
        }
    }

    /// Map an outline authored in the 24x24 icon space into this cell.
    #[must_use]
    pub fn place(&self, outline: &[Point]) -> Vec<Point> {
        let scale = self.bounds.width.min(self.bounds.height) / ICON_VIEWBOX;
        let origin = self.bounds.origin();
        outline.iter().map(|p| origin + p.scale(scale)).collect()
    }
}

/// Draws one icon of a rating row.
pub trait IconRenderer: Send + Sync {
    /// Paint the icon described by `paint`.
    fn render(&self, canvas: &mut dyn Canvas, paint: &IconPaint);
}

/// Built-in star icon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StarIcon {
    outline_width: Option<f32>,
}

impl StarIcon {
    /// Star without an outline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outline_width: None,
        }
    }

    /// Stroke the star edge in the full color.
    #[must_use]
    pub fn outline(mut self, width: f32) -> Self {
        self.outline_width = (width > 0.0).then_some(width);
        self
    }

    /// Outline stroke width, if any.
    #[must_use]
    pub const fn outline_width(&self) -> Option<f32> {
        self.outline_width
    }
}

impl IconRenderer for StarIcon {
    fn render(&self, canvas: &mut dyn Canvas, paint: &IconPaint) {
        let points = paint.place(&STAR_OUTLINE);
        canvas.fill_polygon_split(&points, &paint.split_fill());
        if let Some(width) = self.outline_width {
            canvas.stroke_polygon(&points, paint.full_color, width);
        }
    }
}

type PaintFn = dyn Fn(&mut dyn Canvas, &IconPaint) + Send + Sync;

/// Caller-supplied icon: either an outline in the 24x24 icon space or a
/// closure that paints the icon directly.
pub enum CustomIcon {
    /// Closed outline filled with the split fill.
    Outline(Vec<Point>),
    /// Arbitrary paint routine.
    Painter(Box<PaintFn>),
}

impl CustomIcon {
    /// Icon from an outline authored in the 24x24 icon space.
    #[must_use]
    pub fn from_outline(points: impl Into<Vec<Point>>) -> Self {
        Self::Outline(points.into())
    }

    /// Icon drawn by a closure.
    #[must_use]
    pub fn from_fn(paint: impl Fn(&mut dyn Canvas, &IconPaint) + Send + Sync + 'static) -> Self {
        Self::Painter(Box::new(paint))
    }
}

impl fmt::Debug for CustomIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline(points) => f.debug_tuple("Outline").field(&points.len()).finish(),
            Self::Painter(_) => f.write_str("Painter(..)"),
        }
    }
}

impl IconRenderer for CustomIcon {
    fn render(&self, canvas: &mut dyn Canvas, paint: &IconPaint) {
        match self {
            Self::Outline(points) => {
                canvas.fill_polygon_split(&paint.place(points), &paint.split_fill());
            }
            Self::Painter(f) => f(canvas, paint),
        }
    }
}
