use std::time::Duration;

use egui::{Pos2, Vec2};

mod common;

pub use common::{closest, Completion, DEFAULT_SPEED};

/// Callback fired once an animation has finished
pub type OnComplete = Box<dyn FnOnce() + Send + 'static>;

/// Animations an element can run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Fade opacity to zero, then hide
    FadeOut,
    /// Collapse height to zero, then hide
    SlideUp,
    /// Scroll the element's own content to the given top offset
    ScrollTo(f32),
}

/// Common trait for element handles.
///
/// A handle is a cheap, cloneable reference to a node owned by a document;
/// mutating methods take `&self` and act on the shared node.
pub trait Element: Clone + PartialEq + Send + 'static {
    /// Lowercase tag name
    fn tag_name(&self) -> String;

    /// Get an attribute value
    fn attr(&self, name: &str) -> Option<String>;

    /// Set an attribute, replacing any previous value
    fn set_attr(&self, name: &str, value: &str);

    /// Remove an attribute entirely
    fn remove_attr(&self, name: &str);

    /// Get an inline style property
    fn style(&self, property: &str) -> Option<String>;

    /// Set an inline style property
    fn set_style(&self, property: &str, value: &str);

    /// Test the element against a selector
    fn matches(&self, selector: &str) -> bool;

    /// Parent element, if the element is attached below one
    fn parent(&self) -> Option<Self>;

    /// Preceding element siblings, nearest first
    fn previous_siblings(&self) -> Vec<Self>;

    /// Following element siblings, nearest first
    fn next_siblings(&self) -> Vec<Self>;

    /// Top-left corner in document coordinates, after scrolling
    fn offset(&self) -> Pos2;

    /// Outer size of the element box
    fn size(&self) -> Vec2;

    /// How far the element's own content is scrolled
    fn scroll_top(&self) -> f32;

    fn set_scroll_top(&self, top: f32);

    /// Serialized markup including the element's own tag
    fn outer_html(&self) -> String;

    /// Detach the element from its document
    fn remove(&self);

    /// Start an animation. `on_complete` fires once it has finished.
    fn animate(&self, effect: Effect, duration: Duration, on_complete: OnComplete);
}
