//! Rating widget for selecting a fractional score on a row of icons.

use crate::config::RatingConfig;
use crate::display::{resolve_display, DisplayResult};
use crate::icon::{IconPaint, IconRenderer, StarIcon};
use crate::interaction::{InteractionState, Phase};
use rateline_core::{
    global_ids,
    widget::{AccessibleRole, LayoutResult},
    AccessibleNode, Canvas, Color, Constraints, Event, IdSource, Rect, Rounding, Size, SvgCanvas,
    TooltipGranularity, TypeId, Widget, WidgetId,
};
use rateline_yaml::{ParseError, WidgetConfig};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Message emitted when the user commits a rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingChanged {
    /// The selected value
    pub value: f32,
}

type ChangeCallback = Box<dyn Fn(f32) + Send + Sync>;

/// Interactive rating input.
///
/// The widget is controlled: it displays the value it was given and reports
/// selections through [`RatingChanged`] and the `on_rating_change` callback.
/// The host feeds the accepted value back with [`Rating::set_value`].
pub struct Rating {
    /// Instance id, source of the render resource ids
    id: WidgetId,
    /// Caller-owned committed value (clamped at use)
    value: f32,
    /// Behavior configuration
    config: RatingConfig,
    /// Icon size
    size: f32,
    /// Filled icon color
    full_color: Color,
    /// Empty icon color
    empty_color: Color,
    /// Icon renderer
    icon: Arc<dyn IconRenderer>,
    /// Commit callback
    on_change: Option<ChangeCallback>,
    /// Accessible name
    accessible_name_value: String,
    /// Test ID
    test_id_value: Option<String>,
    /// Bounds from the last layout
    bounds: Rect,
    /// Hover/drag state
    state: InteractionState,
}

impl Default for Rating {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rating")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("config", &self.config)
            .field("size", &self.size)
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Rating {
    /// Create a rating with an id from the process-wide sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_source(global_ids())
    }

    /// Create a rating taking its instance id from `ids`.
    #[must_use]
    pub fn with_id_source(ids: &dyn IdSource) -> Self {
        Self {
            id: ids.next_id(),
            value: 0.0,
            config: RatingConfig::default(),
            size: 24.0,
            full_color: Color::GOLD,
            empty_color: Color::LIGHT_GRAY,
            icon: Arc::new(StarIcon::new()),
            on_change: None,
            accessible_name_value: "Rating".to_string(),
            test_id_value: None,
            bounds: Rect::default(),
            state: InteractionState::new(),
        }
    }

    /// Build a rating from a manifest entry.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, ParseError> {
        Self::from_config_with(config, global_ids())
    }

    /// Build a rating from a manifest entry with an explicit id source.
    pub fn from_config_with(config: &WidgetConfig, ids: &dyn IdSource) -> Result<Self, ParseError> {
        config.validate()?;
        let mut rating = Self::with_id_source(ids)
            .max(config.max)
            .step(config.step)
            .rounding(config.rounding)
            .read_only(config.read_only)
            .size(config.size)
            .full_color(config.full_color()?)
            .empty_color(config.empty_color()?)
            .tooltips(config.tooltips.iter().cloned())
            .tooltip_granularity(config.tooltip_granularity)
            .value(config.value)
            .with_test_id(config.id.clone());
        if let Some(label) = &config.label {
            rating = rating.with_accessible_name(label.clone());
        }
        if let Some(width) = config.outline {
            rating = rating.icon(Arc::new(StarIcon::new().outline(width)));
        }
        Ok(rating)
    }

    /// Set the committed value.
    #[must_use]
    pub fn value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    /// Set the number of icons (at least 1).
    #[must_use]
    pub fn max(mut self, max: u32) -> Self {
        if max == 0 {
            log::warn!("rating max must be at least 1, using 1");
        }
        self.config.max = max.max(1);
        self
    }

    /// Set the commit callback.
    #[must_use]
    pub fn on_rating_change(mut self, callback: impl Fn(f32) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set read-only state.
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.set_read_only(read_only);
        self
    }

    /// Set icon size in pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        if size.is_finite() && size > 0.0 {
            self.size = size;
        } else {
            log::warn!("ignoring invalid rating icon size {size}");
        }
        self
    }

    /// Set filled icon color.
    #[must_use]
    pub const fn full_color(mut self, color: Color) -> Self {
        self.full_color = color;
        self
    }

    /// Set empty icon color.
    #[must_use]
    pub const fn empty_color(mut self, color: Color) -> Self {
        self.empty_color = color;
        self
    }

    /// Set the icon renderer.
    #[must_use]
    pub fn icon(mut self, icon: Arc<dyn IconRenderer>) -> Self {
        self.icon = icon;
        self
    }

    /// Set tooltip descriptions.
    #[must_use]
    pub fn tooltips<I, S>(mut self, tooltips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tooltips = tooltips.into_iter().map(Into::into).collect();
        self
    }

    /// Set pointer rounding policy.
    #[must_use]
    pub const fn rounding(mut self, rounding: Rounding) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Set keyboard arrow step.
    #[must_use]
    pub fn step(mut self, step: f32) -> Self {
        if step.is_finite() && step > 0.0 {
            self.config.step = step;
        } else {
            log::warn!("ignoring invalid rating step {step}");
        }
        self
    }

    /// Set tooltip lookup granularity.
    #[must_use]
    pub const fn tooltip_granularity(mut self, granularity: TooltipGranularity) -> Self {
        self.config.tooltip_granularity = granularity;
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = name.into();
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Instance id.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Committed value, clamped to `[0, max]`.
    #[must_use]
    pub fn get_value(&self) -> f32 {
        self.config.clamp(self.value)
    }

    /// Number of icons.
    #[must_use]
    pub const fn get_max(&self) -> u32 {
        self.config.max
    }

    /// Icon size in pixels.
    #[must_use]
    pub const fn get_size(&self) -> f32 {
        self.size
    }

    /// Behavior configuration.
    #[must_use]
    pub const fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Whether input is disabled.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    /// Current interaction phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Hover or drag preview, if one is showing.
    #[must_use]
    pub const fn preview(&self) -> Option<f32> {
        self.state.preview()
    }

    /// Value currently displayed.
    #[must_use]
    pub fn effective_value(&self) -> f32 {
        self.state.effective(self.value, &self.config)
    }

    /// Replace the committed value (controlled update from the host).
    pub fn set_value(&mut self, value: f32) {
        if !self.config.in_range(value) {
            log::warn!(
                "rating value {value} outside [0, {}], clamping at use",
                self.config.max
            );
        }
        self.value = value;
    }

    /// Enable or disable read-only mode. Entering read-only drops any preview.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.config.read_only = read_only;
        if read_only {
            self.state.reset();
        }
    }

    /// Fills and tooltip for the displayed value.
    #[must_use]
    pub fn display(&self) -> DisplayResult {
        resolve_display(self.effective_value(), &self.config)
    }

    /// Gradient and mask ids of icon `index` (zero-based).
    #[must_use]
    pub fn resource_ids(&self, index: usize) -> (String, String) {
        let n = index + 1;
        (
            format!("grad-{}-{n}", self.id),
            format!("mask-{}-{n}", self.id),
        )
    }

    /// Accessibility metadata for the displayed value.
    #[must_use]
    pub fn accessible_node(&self) -> AccessibleNode {
        let display = self.display();
        AccessibleNode::slider(
            &self.accessible_name_value,
            aria_number(display.value),
            0.0,
            f64::from(self.config.max),
            self.bounds,
        )
        .with_widget_id(self.id)
        .with_value_text(display.tooltip)
        .with_read_only(self.config.read_only)
    }

    /// Render the widget at its intrinsic size as standalone SVG.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let size = self.intrinsic_size();
        let mut canvas = SvgCanvas::new(size);
        self.paint_row(&mut canvas, Rect::new(0.0, 0.0, size.width, size.height));
        let mut attributes = self.accessible_node().aria_attributes();
        if let Some(id) = &self.test_id_value {
            attributes.push(("data-testid", id.clone()));
        }
        canvas.finish(&attributes)
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(self.size * self.config.max as f32, self.size)
    }

    fn paint_row(&self, canvas: &mut dyn Canvas, row: Rect) {
        let display = self.display();
        canvas.set_title(&display.tooltip);
        let cell = row.width / self.config.max as f32;
        for fill in &display.fills {
            let (gradient_id, mask_id) = self.resource_ids(fill.index);
            let paint = IconPaint {
                bounds: row.cell(fill.index, cell),
                fill_percent: fill.percent,
                full_color: self.full_color,
                empty_color: self.empty_color,
                gradient_id,
                mask_id,
            };
            self.icon.render(canvas, &paint);
        }
    }
}

/// Widen for ARIA output without exposing f32 noise ("4.8", not "4.800000190734863").
fn aria_number(value: f32) -> f64 {
    (f64::from(value) * 100.0).round() / 100.0
}

impl Widget for Rating {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.intrinsic_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let row = if self.bounds.is_measured() {
            self.bounds
        } else {
            let size = self.intrinsic_size();
            Rect::new(self.bounds.x, self.bounds.y, size.width, size.height)
        };
        self.paint_row(canvas, row);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let outcome = self
            .state
            .handle(event, self.value, self.bounds, &self.config);
        let value = outcome.committed()?;
        log::debug!("rating {} committed {value}", self.id);
        if let Some(callback) = &self.on_change {
            callback(value);
        }
        Some(Box::new(RatingChanged { value }))
    }

    fn is_interactive(&self) -> bool {
        !self.config.read_only
    }

    fn is_focusable(&self) -> bool {
        !self.config.read_only
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.accessible_name_value)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
