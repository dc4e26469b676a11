//! YAML manifest parser for Rateline rating widgets.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{Manifest, WidgetConfig};
