//! Accessibility metadata for screen readers and assistive technology.
//!
//! Widgets describe themselves with an [`AccessibleNode`]; hosts turn it into
//! platform attributes. For web-style hosts [`AccessibleNode::aria_attributes`]
//! yields the ARIA attribute set directly.

use crate::geometry::Rect;
use crate::widget::{AccessibleRole, WidgetId};

/// An accessible element.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibleNode {
    /// Widget ID if associated with a widget.
    pub widget_id: Option<WidgetId>,
    /// Accessible name (label).
    pub name: Option<String>,
    /// Accessible role.
    pub role: AccessibleRole,
    /// Bounding rectangle.
    pub bounds: Rect,
    /// Whether the element is focusable.
    pub focusable: bool,
    /// Whether the element is read-only.
    pub read_only: bool,
    /// Whether the element is hidden from assistive technology.
    pub hidden: bool,
    /// Current value (for sliders).
    pub value_now: Option<f64>,
    /// Minimum value (for sliders).
    pub value_min: Option<f64>,
    /// Maximum value (for sliders).
    pub value_max: Option<f64>,
    /// Value text (human-readable value).
    pub value_text: Option<String>,
    /// Tab index for focus order (-1 = not focusable, 0 = natural order).
    pub tab_index: i32,
}

impl AccessibleNode {
    /// Create a new accessible node.
    #[must_use]
    pub const fn new(role: AccessibleRole, bounds: Rect) -> Self {
        Self {
            widget_id: None,
            name: None,
            role,
            bounds,
            focusable: false,
            read_only: false,
            hidden: false,
            value_now: None,
            value_min: None,
            value_max: None,
            value_text: None,
            tab_index: -1,
        }
    }

    /// Create a new slider node.
    #[must_use]
    pub fn slider(name: &str, value: f64, min: f64, max: f64, bounds: Rect) -> Self {
        let mut node = Self::new(AccessibleRole::Slider, bounds);
        node.name = Some(name.to_string());
        node.value_now = Some(value);
        node.value_min = Some(min);
        node.value_max = Some(max);
        node.focusable = true;
        node.tab_index = 0;
        node
    }

    /// Associate the node with a widget.
    #[must_use]
    pub const fn with_widget_id(mut self, id: WidgetId) -> Self {
        self.widget_id = Some(id);
        self
    }

    /// Set the human-readable value text.
    #[must_use]
    pub fn with_value_text(mut self, text: impl Into<String>) -> Self {
        self.value_text = Some(text.into());
        self
    }

    /// Mark the node read-only. Read-only nodes leave the focus order.
    #[must_use]
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        if read_only {
            self.focusable = false;
            self.tab_index = -1;
        }
        self
    }

    /// ARIA attributes describing this node, in a stable order.
    #[must_use]
    pub fn aria_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("role", self.role.aria_name().to_string())];
        if let Some(name) = &self.name {
            attrs.push(("aria-label", name.clone()));
        }
        if let Some(v) = self.value_now {
            attrs.push(("aria-valuenow", v.to_string()));
        }
        if let Some(v) = self.value_min {
            attrs.push(("aria-valuemin", v.to_string()));
        }
        if let Some(v) = self.value_max {
            attrs.push(("aria-valuemax", v.to_string()));
        }
        if let Some(text) = &self.value_text {
            attrs.push(("aria-valuetext", text.clone()));
        }
        if self.role == AccessibleRole::Slider {
            attrs.push(("aria-readonly", self.read_only.to_string()));
        }
        if self.hidden {
            attrs.push(("aria-hidden", "true".to_string()));
        }
        attrs.push(("tabindex", self.tab_index.to_string()));
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr<'a>(attrs: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_new_node_is_not_focusable() {
        let node = AccessibleNode::new(AccessibleRole::Image, Rect::default());
        assert!(!node.focusable);
        assert_eq!(node.tab_index, -1);
        assert_eq!(node.value_now, None);
    }

    #[test]
    fn test_slider_node() {
        let node = AccessibleNode::slider("Rating", 3.5, 0.0, 5.0, Rect::default())
            .with_widget_id(WidgetId::new(9))
            .with_value_text("3.5 out of 5");
        assert_eq!(node.role, AccessibleRole::Slider);
        assert!(node.focusable);
        assert_eq!(node.tab_index, 0);
        assert_eq!(node.widget_id, Some(WidgetId::new(9)));

        let attrs = node.aria_attributes();
        assert_eq!(attrs[0], ("role", "slider".to_string()));
        assert_eq!(attr(&attrs, "aria-label"), Some("Rating"));
        assert_eq!(attr(&attrs, "aria-valuenow"), Some("3.5"));
        assert_eq!(attr(&attrs, "aria-valuemin"), Some("0"));
        assert_eq!(attr(&attrs, "aria-valuemax"), Some("5"));
        assert_eq!(attr(&attrs, "aria-valuetext"), Some("3.5 out of 5"));
        assert_eq!(attr(&attrs, "aria-readonly"), Some("false"));
        assert_eq!(attr(&attrs, "tabindex"), Some("0"));
        assert_eq!(attr(&attrs, "aria-hidden"), None);
    }

    #[test]
    fn test_read_only_leaves_focus_order() {
        let node = AccessibleNode::slider("Rating", 2.0, 0.0, 5.0, Rect::default())
            .with_read_only(true);
        assert!(!node.focusable);
        let attrs = node.aria_attributes();
        assert_eq!(attr(&attrs, "aria-readonly"), Some("true"));
        assert_eq!(attr(&attrs, "tabindex"), Some("-1"));
    }

    #[test]
    fn test_hidden_image_node() {
        let mut node = AccessibleNode::new(AccessibleRole::Image, Rect::default());
        node.hidden = true;
        let attrs = node.aria_attributes();
        assert_eq!(attr(&attrs, "role"), Some("img"));
        assert_eq!(attr(&attrs, "aria-hidden"), Some("true"));
        assert_eq!(attr(&attrs, "aria-readonly"), None);
    }
}
