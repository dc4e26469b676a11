//! Rating input widget for Rateline.
//!
//! The pieces compose in one direction:
//!
//! - [`resolve_rating`] turns a pointer coordinate into a snapped value,
//! - [`InteractionState`] turns events into previews and commits,
//! - [`resolve_display`] turns the displayed value into icon fills and a tooltip,
//! - an [`IconRenderer`] paints each icon.
//!
//! [`Rating`] wires them into a [`rateline_core::Widget`].

pub mod config;
pub mod display;
pub mod icon;
pub mod interaction;
pub mod position;
pub mod rating;

pub use config::RatingConfig;
pub use display::{fill_percent, format_value, resolve_display, tooltip_text, DisplayResult, IconFill};
pub use icon::{CustomIcon, IconPaint, IconRenderer, StarIcon, ICON_VIEWBOX, STAR_OUTLINE};
pub use interaction::{key_value, InteractionState, Outcome, Phase};
pub use position::{resolve_icon_half, resolve_rating};
pub use rating::{Rating, RatingChanged};
