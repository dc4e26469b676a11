//! Input state machine for rating widgets.
//!
//! [`InteractionState`] owns only the transient preview. The committed value
//! belongs to the caller and is passed into every [`InteractionState::handle`]
//! call; a selection is reported back as [`Outcome::Commit`] and never
//! written anywhere by the machine itself.

use crate::config::{normalize, RatingConfig};
use crate::position::resolve_rating;
use rateline_core::{Event, Key, MouseButton, Point, Rect, TouchId};

/// Interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// Mouse is over the widget and a preview is shown.
    Hovering,
    /// A touch drag owns the pointer.
    Dragging,
}

/// Result of feeding one event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The event is not relevant to this widget.
    Ignored,
    /// The event was consumed without selecting a value.
    Handled,
    /// The user selected a value.
    Commit(f32),
}

impl Outcome {
    /// Committed value, if any.
    #[must_use]
    pub const fn committed(self) -> Option<f32> {
        match self {
            Self::Commit(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the event was consumed.
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Per-widget interaction state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    phase: Phase,
    preview: Option<f32>,
    /// Left button went down inside the widget and has not been released.
    pressed: bool,
    /// Touch point that owns the current drag.
    touch: Option<TouchId>,
}

impl InteractionState {
    /// Create an idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            preview: None,
            pressed: false,
            touch: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Transient preview value.
    #[must_use]
    pub const fn preview(&self) -> Option<f32> {
        self.preview
    }

    /// Whether a touch drag has captured the pointer.
    #[must_use]
    pub const fn is_pointer_captured(&self) -> bool {
        matches!(self.phase, Phase::Dragging)
    }

    /// The value to display: the preview while one is set, else `committed`.
    #[must_use]
    pub fn effective(&self, committed: f32, config: &RatingConfig) -> f32 {
        config.clamp(self.preview.unwrap_or(committed))
    }

    /// Drop any preview and return to [`Phase::Idle`].
    pub fn reset(&mut self) {
        if self.phase != Phase::Idle || self.preview.is_some() {
            log::debug!("rating interaction reset from {:?}", self.phase);
        }
        *self = Self::new();
    }

    /// Feed one event through the machine.
    pub fn handle(
        &mut self,
        event: &Event,
        committed: f32,
        bounds: Rect,
        config: &RatingConfig,
    ) -> Outcome {
        if config.read_only {
            self.reset();
            return Outcome::Ignored;
        }

        match event {
            Event::MouseMove { position } => self.mouse_move(*position, bounds, config),
            Event::MouseLeave => {
                self.pressed = false;
                self.leave()
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if !bounds.is_measured() || bounds.contains_point(position) => {
                self.pressed = true;
                Outcome::Handled
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = std::mem::take(&mut self.pressed);
                let inside = !bounds.is_measured() || bounds.contains_point(position);
                if was_pressed && inside {
                    let value = resolve_rating(position.x, bounds, config);
                    self.reset();
                    Outcome::Commit(value)
                } else {
                    Outcome::Ignored
                }
            }
            Event::TouchStart { id, position } => {
                if self.is_pointer_captured() {
                    return Outcome::Ignored;
                }
                self.phase = Phase::Dragging;
                self.touch = Some(*id);
                self.set_preview(resolve_rating(position.x, bounds, config));
                Outcome::Handled
            }
            Event::TouchMove { id, position } if self.owns_touch(*id) => {
                self.set_preview(resolve_rating(position.x, bounds, config));
                Outcome::Handled
            }
            Event::TouchEnd { id, .. } if self.owns_touch(*id) => {
                let preview = self.preview;
                self.reset();
                preview.map_or(Outcome::Handled, Outcome::Commit)
            }
            Event::TouchCancel { id } if self.owns_touch(*id) => {
                self.reset();
                Outcome::Handled
            }
            Event::KeyDown { key } => match key_value(*key, committed, config) {
                Some(value) => {
                    self.reset();
                    let current = normalize(f64::from(committed));
                    if value == current {
                        Outcome::Handled
                    } else {
                        Outcome::Commit(value)
                    }
                }
                None => Outcome::Ignored,
            },
            _ => Outcome::Ignored,
        }
    }

    fn mouse_move(&mut self, position: Point, bounds: Rect, config: &RatingConfig) -> Outcome {
        // Emulated mouse events must not disturb a touch drag.
        if self.is_pointer_captured() {
            return Outcome::Ignored;
        }
        if bounds.contains_point(&position) {
            self.phase = Phase::Hovering;
            self.set_preview(resolve_rating(position.x, bounds, config));
            Outcome::Handled
        } else {
            self.leave()
        }
    }

    fn leave(&mut self) -> Outcome {
        match self.phase {
            Phase::Hovering => {
                self.reset();
                Outcome::Handled
            }
            Phase::Idle | Phase::Dragging => Outcome::Ignored,
        }
    }

    fn set_preview(&mut self, value: f32) {
        if self.preview != Some(value) {
            log::trace!("rating preview {value} ({:?})", self.phase);
        }
        self.preview = Some(value);
    }

    fn owns_touch(&self, id: TouchId) -> bool {
        self.is_pointer_captured() && self.touch == Some(id)
    }
}

/// Value a key press selects, or `None` for keys the widget does not handle.
///
/// `Enter` and `Space` are handled but keep the current value.
///
/// # Examples
///
/// ```
/// use rateline_core::Key;
/// use rateline_widgets::{key_value, RatingConfig};
///
/// let config = RatingConfig::default();
/// assert_eq!(key_value(Key::Right, 4.8, &config), Some(5.0));
/// assert_eq!(key_value(Key::Character('x'), 2.0, &config), None);
/// ```
#[must_use]
pub fn key_value(key: Key, committed: f32, config: &RatingConfig) -> Option<f32> {
    let max = f64::from(config.max);
    let current = f64::from(config.clamp(committed));
    let step = f64::from(config.step);
    let next = match key {
        Key::Right | Key::Up => (current + step).min(max),
        Key::Left | Key::Down => (current - step).max(0.0),
        Key::Home => 0.0,
        Key::End => max,
        Key::PageUp => (current + 1.0).min(max),
        Key::PageDown => (current - 1.0).max(0.0),
        Key::Enter | Key::Space => current,
        _ => return None,
    };
    Some(normalize(next))
}
