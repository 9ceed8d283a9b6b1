use std::time::Duration;

use egui::Rect;

use crate::element::{Element, OnComplete};
use crate::selection::Selection;

/// The document elements live in.
///
/// Lookups always walk the live tree; implementations must not answer
/// from a cached id index, since the tree may change between calls.
pub trait Document: Sized {
    type Element: Element;

    /// The element currently carrying `id`, if any
    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All attached elements matching `selector`, in document order
    fn query(&self, selector: &str) -> Vec<Self::Element>;

    /// The visible part of the document, in document coordinates
    fn viewport(&self) -> Rect;

    /// Scroll the window to `top`; `on_complete` fires once it is there
    fn animate_scroll(&self, top: f32, duration: Duration, on_complete: OnComplete);

    /// Select elements by selector
    fn select(&self, selector: &str) -> Selection<'_, Self> {
        Selection::new(self, self.query(selector))
    }

    /// Wrap already known elements in a selection
    fn wrap(&self, elements: Vec<Self::Element>) -> Selection<'_, Self> {
        Selection::new(self, elements)
    }
}
