//! Ordered element collections and the helpers that operate on them.

use std::time::Duration;

use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::element::{closest, Completion, Effect, Element, DEFAULT_SPEED};
use crate::error::IdError;
use crate::id_generator::IdGenerator;

/// `display` value used by [`Selection::display`] when none is given
pub const DEFAULT_DISPLAY: &str = "inline-block";

/// What [`Selection::uid_with`] should do with the first element's id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UidRequest {
    /// Return the current id, if any
    #[default]
    Read,
    /// Same as `Read`, and explicitly never generate
    ReadOnly,
    /// Return the current id, generating and assigning one if missing
    Generate,
    /// Assign exactly this id, without checking other elements
    Set(String),
    /// Remove the id attribute
    Unset,
}

impl From<bool> for UidRequest {
    fn from(force: bool) -> Self {
        if force { Self::Generate } else { Self::ReadOnly }
    }
}

impl From<&str> for UidRequest {
    fn from(id: &str) -> Self {
        Self::Set(id.to_string())
    }
}

impl From<String> for UidRequest {
    fn from(id: String) -> Self {
        Self::Set(id)
    }
}

impl From<Option<&str>> for UidRequest {
    fn from(id: Option<&str>) -> Self {
        id.map_or(Self::Unset, Self::from)
    }
}

/// Result of [`Selection::uid_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UidOutcome {
    /// The id read or generated; `None` when there is none or the
    /// selection is empty
    Id(Option<String>),
    /// The id was set or removed; keep using the selection
    Updated,
}

/// Options for [`Selection::animate_into_view`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollOptions {
    /// Written as milliseconds in settings files
    #[serde(with = "crate::util::millis")]
    pub speed: Duration,
    /// Space left between the element and the top edge
    pub margin: f32,
    /// Skip scrolling when the element is already fully visible
    pub if_needed: bool,
    /// Scroll the closest ancestor matching this selector instead of the window
    pub container: Option<String>,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            margin: 0.0,
            if_needed: false,
            container: None,
        }
    }
}

/// An ordered group of zero or more elements from one document.
///
/// Operations read from the first element and write to all of them unless
/// documented otherwise. On an empty selection they are no-ops.
pub struct Selection<'d, D: Document> {
    doc: &'d D,
    elements: Vec<D::Element>,
}

impl<'d, D: Document> Clone for Selection<'d, D> {
    fn clone(&self) -> Self {
        Self {
            doc: self.doc,
            elements: self.elements.clone(),
        }
    }
}

impl<'d, D: Document> std::fmt::Debug for Selection<'d, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("len", &self.elements.len())
            .finish()
    }
}

impl<'d, D: Document> Selection<'d, D> {
    pub fn new(doc: &'d D, elements: Vec<D::Element>) -> Self {
        Self { doc, elements }
    }

    pub fn document(&self) -> &'d D {
        self.doc
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn first(&self) -> Option<&D::Element> {
        self.elements.first()
    }

    pub fn get(&self, index: usize) -> Option<&D::Element> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, D::Element> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[D::Element] {
        &self.elements
    }

    /// Descendants of the selected elements matching `selector`
    pub fn find(&self, selector: &str) -> Selection<'d, D> {
        let found = self
            .doc
            .query(selector)
            .into_iter()
            .filter(|candidate| {
                let mut cursor = candidate.parent();
                while let Some(parent) = cursor {
                    if self.elements.contains(&parent) {
                        return true;
                    }
                    cursor = parent.parent();
                }
                false
            })
            .collect();
        Selection::new(self.doc, found)
    }

    /// Attribute value of the first element
    pub fn attr(&self, name: &str) -> Option<String> {
        self.first()?.attr(name)
    }

    /// Whether the first element carries the attribute at all
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn set_attr(&self, name: &str, value: &str) -> &Self {
        for el in &self.elements {
            el.set_attr(name, value);
        }
        self
    }

    /// The first element's id. Never generates one.
    pub fn uid(&self) -> Option<String> {
        self.attr("id").filter(|id| !id.is_empty())
    }

    /// The first element's id, generating a document-unique one if it has none.
    pub fn ensure_uid(&self) -> Result<Option<String>, IdError> {
        self.ensure_uid_with(&IdGenerator::default())
    }

    /// [`Selection::ensure_uid`] with a custom generator.
    pub fn ensure_uid_with(&self, generator: &IdGenerator) -> Result<Option<String>, IdError> {
        let Some(el) = self.first() else {
            return Ok(None);
        };
        if let Some(id) = self.uid() {
            return Ok(Some(id));
        }

        // check and assign run back to back, nothing can claim the id in between
        let id = generator.generate(self.doc)?;
        el.set_attr("id", &id);
        log::debug!("assigned generated id {} to <{}>", id, el.tag_name());
        Ok(Some(id))
    }

    /// Give the first element exactly this id.
    pub fn set_uid(&self, id: &str) -> &Self {
        if let Some(el) = self.first() {
            el.set_attr("id", id);
        }
        self
    }

    /// Remove the first element's id attribute.
    pub fn clear_uid(&self) -> &Self {
        if let Some(el) = self.first() {
            el.remove_attr("id");
        }
        self
    }

    /// Read, generate, set or clear the first element's id in one call.
    ///
    /// `true` generates when missing, `false` only reads, a string sets
    /// and `None::<&str>` clears.
    pub fn uid_with(&self, request: impl Into<UidRequest>) -> Result<UidOutcome, IdError> {
        match request.into() {
            UidRequest::Read | UidRequest::ReadOnly => Ok(UidOutcome::Id(self.uid())),
            UidRequest::Generate => self.ensure_uid().map(UidOutcome::Id),
            UidRequest::Set(id) => {
                self.set_uid(&id);
                Ok(UidOutcome::Updated)
            }
            UidRequest::Unset => {
                self.clear_uid();
                Ok(UidOutcome::Updated)
            }
        }
    }

    /// Scroll so the first element's top sits `margin` below the top edge.
    ///
    /// The returned completion resolves once scrolling has finished, or
    /// right away when there is nothing to do.
    pub fn animate_into_view(&self, options: &ScrollOptions) -> Completion {
        let Some(el) = self.first() else {
            return Completion::ready();
        };

        let el_rect = Rect::from_min_size(el.offset(), el.size());
        let container = options
            .container
            .as_deref()
            .and_then(|selector| closest(el, selector));

        match container {
            Some(container) => {
                let visible = Rect::from_min_size(container.offset(), container.size());
                if options.if_needed && fully_visible(el_rect, visible) {
                    return Completion::ready();
                }

                let top = container.scroll_top() + (el_rect.min.y - visible.min.y) - options.margin;
                let (done, completion) = Completion::callback();
                container.animate(Effect::ScrollTo(top.max(0.0)), options.speed, done);
                completion
            }
            None => {
                if let Some(selector) = &options.container {
                    log::debug!("no ancestor matches {}, scrolling the window", selector);
                }
                if options.if_needed && fully_visible(el_rect, self.doc.viewport()) {
                    return Completion::ready();
                }

                let top = el_rect.min.y - options.margin;
                let (done, completion) = Completion::callback();
                self.doc.animate_scroll(top.max(0.0), options.speed, done);
                completion
            }
        }
    }

    /// Show every element with the given `display` value
    /// (default [`DEFAULT_DISPLAY`]).
    pub fn display(&self, display: Option<&str>) -> &Self {
        let display = display.unwrap_or(DEFAULT_DISPLAY);
        for el in &self.elements {
            el.set_style("display", display);
        }
        self
    }

    /// Fade every element out, then remove it from the document.
    pub fn fade_out_remove(&self, speed: Duration) -> Completion {
        self.animate_then_remove(Effect::FadeOut, speed)
    }

    /// Slide every element up, then remove it from the document.
    pub fn slide_up_remove(&self, speed: Duration) -> Completion {
        self.animate_then_remove(Effect::SlideUp, speed)
    }

    fn animate_then_remove(&self, effect: Effect, speed: Duration) -> Completion {
        let completions = self
            .elements
            .iter()
            .map(|el| {
                let target = el.clone();
                let (done, completion) = Completion::callback_then(move || target.remove());
                el.animate(effect, speed, done);
                completion
            })
            .collect();
        Completion::all(completions)
    }

    /// Markup of the first element including its own tag
    pub fn outer_html(&self) -> Option<String> {
        Some(self.first()?.outer_html())
    }

    /// Whether any selected element has a preceding sibling matching `selector`
    pub fn is_after(&self, selector: &str) -> bool {
        self.elements.iter().any(|el| {
            el.previous_siblings()
                .iter()
                .any(|sibling| sibling.matches(selector))
        })
    }

    /// Whether any selected element has a following sibling matching `selector`
    pub fn is_before(&self, selector: &str) -> bool {
        self.elements.iter().any(|el| {
            el.next_siblings()
                .iter()
                .any(|sibling| sibling.matches(selector))
        })
    }

    /// Offset of the first element relative to its closest ancestor
    /// matching `selector`, or to the document origin when none does.
    pub fn offset_relative_to(&self, selector: Option<&str>) -> Option<Pos2> {
        let el = self.first()?;
        let origin = selector
            .and_then(|selector| closest(el, selector))
            .map_or(Pos2::ZERO, |ancestor| ancestor.offset());
        Some(Pos2::ZERO + (el.offset() - origin))
    }
}

impl<'s, 'd, D: Document> IntoIterator for &'s Selection<'d, D> {
    type Item = &'s D::Element;
    type IntoIter = std::slice::Iter<'s, D::Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

fn fully_visible(rect: Rect, visible: Rect) -> bool {
    rect.min.y >= visible.min.y && rect.max.y <= visible.max.y
}
