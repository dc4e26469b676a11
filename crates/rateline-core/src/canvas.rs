//! Canvas implementations for rendering.

use crate::draw::{bounding_box, DrawCommand, SplitFill, StrokeStyle};
use crate::widget::Canvas;
use crate::{Color, Point, Rect, Size};
use std::fmt::Write as _;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to another renderer)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All split fills recorded so far, in paint order.
    pub fn split_fills(&self) -> impl Iterator<Item = &SplitFill> {
        self.commands.iter().filter_map(DrawCommand::split_fill)
    }

    /// The most recent title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Title { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::rect(rect, color));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f32) {
        self.commands.push(DrawCommand::Outline {
            points: points.to_vec(),
            stroke: StrokeStyle { color, width },
        });
    }

    fn fill_polygon_split(&mut self, points: &[Point], fill: &SplitFill) {
        self.commands.push(DrawCommand::SplitPolygon {
            points: points.to_vec(),
            fill: fill.clone(),
        });
    }

    fn set_title(&mut self, text: &str) {
        self.commands.push(DrawCommand::Title {
            text: text.to_string(),
        });
    }
}

/// A Canvas that renders to standalone SVG markup.
///
/// Split fills become a `<linearGradient>` with hard stops plus a `<mask>`
/// holding the shape, both keyed by the ids carried in [`SplitFill`].
#[derive(Debug)]
pub struct SvgCanvas {
    size: Size,
    title: Option<String>,
    defs: Vec<String>,
    body: Vec<String>,
}

impl SvgCanvas {
    /// Create an SVG canvas of the given pixel size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            title: None,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Finish rendering, attaching extra attributes to the root element.
    #[must_use]
    pub fn finish(self, attributes: &[(&str, String)]) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#,
            w = fmt_num(self.size.width),
            h = fmt_num(self.size.height),
        );
        for (name, value) in attributes {
            let _ = write!(out, r#" {name}="{}""#, escape(value));
        }
        out.push('>');
        if let Some(title) = &self.title {
            let _ = write!(out, "<title>{}</title>", escape(title));
        }
        if !self.defs.is_empty() {
            out.push_str("<defs>");
            for def in &self.defs {
                out.push_str(def);
            }
            out.push_str("</defs>");
        }
        for element in &self.body {
            out.push_str(element);
        }
        out.push_str("</svg>");
        out
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.body.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width),
            fmt_num(rect.height),
            color.to_hex()
        ));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.body.push(format!(
            r#"<polygon points="{}" fill="{}"/>"#,
            points_attr(points),
            color.to_hex()
        ));
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f32) {
        self.body.push(format!(
            r#"<polygon points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points_attr(points),
            color.to_hex(),
            fmt_num(width)
        ));
    }

    fn fill_polygon_split(&mut self, points: &[Point], fill: &SplitFill) {
        let Some(bb) = bounding_box(points) else {
            return;
        };
        let pct = fmt_num(fill.split_percent());
        let full = fill.full.to_hex();
        let empty = fill.empty.to_hex();
        self.defs.push(format!(
            r#"<linearGradient id="{id}"><stop offset="0%" stop-color="{full}"/><stop offset="{pct}%" stop-color="{full}"/><stop offset="{pct}%" stop-color="{empty}"/><stop offset="100%" stop-color="{empty}"/></linearGradient>"#,
            id = escape(&fill.gradient_id),
        ));
        self.defs.push(format!(
            r#"<mask id="{id}"><polygon points="{pts}" fill="white"/></mask>"#,
            id = escape(&fill.mask_id),
            pts = points_attr(points),
        ));
        self.body.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="url(#{})" mask="url(#{})"/>"#,
            fmt_num(bb.x),
            fmt_num(bb.y),
            fmt_num(bb.width),
            fmt_num(bb.height),
            escape(&fill.gradient_id),
            escape(&fill.mask_id)
        ));
    }

    fn set_title(&mut self, text: &str) {
        self.title = Some(text.to_string());
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn fmt_num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
