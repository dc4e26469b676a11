//! Core types and traits for the Rateline rating widget.
//!
//! This crate provides foundational types used throughout Rateline:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`Key`]
//! - Rendering: [`Canvas`], [`RecordingCanvas`], [`SvgCanvas`]
//! - Snapping policies: [`Rounding`], [`TooltipGranularity`]
//! - Instance identity: [`IdSource`], [`SequentialIds`]

pub mod accessibility;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod id;
mod policy;
pub mod widget;

pub use accessibility::AccessibleNode;
pub use canvas::{RecordingCanvas, SvgCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, SplitFill, StrokeStyle};
pub use event::{Event, Key, MouseButton, TouchId};
pub use geometry::{Point, Rect, Size};
pub use id::{global_ids, IdSource, SequentialIds};
pub use policy::{PolicyParseError, Rounding, TooltipGranularity};
pub use widget::{AccessibleRole, Canvas, LayoutResult, TypeId, Widget, WidgetId};
