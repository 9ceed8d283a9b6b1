//! In-memory document for tests, headless rendering and servers.
//!
//! Layout is not computed: each element carries the box it was given with
//! [`MemoryElement::set_layout`]. Animations do not tick on their own;
//! [`MemoryDocument::run_animations`] finishes everything scheduled so far.

mod animation;
mod selector;
mod tree;

use std::sync::Arc;
use std::time::Duration;

use egui::{Pos2, Rect, Vec2};
use parking_lot::Mutex;

use crate::document::Document;
use crate::element::{Effect, Element, OnComplete};
use animation::{PendingAnimation, Target};
use tree::{NodeId, Tree};

/// Window size of [`MemoryDocument::new`]
pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(1024.0, 768.0);

/// A document whose nodes live in memory
#[derive(Clone)]
pub struct MemoryDocument {
    tree: Arc<Mutex<Tree>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tree = self.tree.lock();
        f.debug_struct("MemoryDocument")
            .field("elements", &tree.elements().len())
            .field("pending_animations", &tree.animations.len())
            .finish()
    }
}

impl MemoryDocument {
    /// An empty `<html><body></body></html>` document
    pub fn new() -> Self {
        Self::with_window_size(DEFAULT_WINDOW_SIZE)
    }

    pub fn with_window_size(window_size: Vec2) -> Self {
        Self {
            tree: Arc::new(Mutex::new(Tree::new(window_size))),
        }
    }

    pub fn body(&self) -> MemoryElement {
        let body = self.tree.lock().body;
        self.handle(body)
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> MemoryElement {
        let id = self.tree.lock().create_element(tag);
        self.handle(id)
    }

    /// How far the window is scrolled
    pub fn scroll_top(&self) -> f32 {
        self.tree.lock().scroll_top
    }

    pub fn set_scroll_top(&self, top: f32) {
        self.tree.lock().scroll_top = top;
    }

    pub fn pending_animations(&self) -> usize {
        self.tree.lock().animations.len()
    }

    /// Finish every animation scheduled so far and fire its callback.
    ///
    /// Final states are applied first, then callbacks run in scheduling
    /// order with the tree unlocked, so they may touch the document.
    /// Returns how many animations finished.
    pub fn run_animations(&self) -> usize {
        let batch = {
            let mut tree = self.tree.lock();
            let batch = tree.animations.drain();
            for animation in &batch {
                finish(&mut tree, animation);
            }
            batch
        };

        let count = batch.len();
        for PendingAnimation { on_complete, .. } in batch {
            on_complete();
        }
        count
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        let tree = self.tree.lock();
        let mut out = String::new();
        tree.serialize(tree.root, &mut out);
        out
    }

    fn handle(&self, id: NodeId) -> MemoryElement {
        MemoryElement {
            tree: Arc::clone(&self.tree),
            id,
        }
    }
}

fn finish(tree: &mut Tree, animation: &PendingAnimation) {
    match (animation.target, animation.effect) {
        (Target::Window, Effect::ScrollTo(top)) => tree.scroll_top = top,
        (Target::Window, effect) => {
            log::warn!("ignoring {:?} on the window", effect);
        }
        (Target::Node(id), Effect::ScrollTo(top)) => {
            if let Some(data) = tree.element_mut(id) {
                data.scroll_top = top;
            }
        }
        (Target::Node(id), Effect::FadeOut | Effect::SlideUp) => {
            if let Some(data) = tree.element_mut(id) {
                data.set_style("display", "none");
            }
        }
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn get_element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let found = self.tree.lock().find_by_id(id);
        found.map(|node| self.handle(node))
    }

    fn query(&self, selector: &str) -> Vec<MemoryElement> {
        let Some(groups) = selector::parse(selector) else {
            log::warn!("unsupported selector: {:?}", selector);
            return Vec::new();
        };
        let matched: Vec<NodeId> = {
            let tree = self.tree.lock();
            tree.elements()
                .into_iter()
                .filter(|node| tree.matches_any(*node, &groups))
                .collect()
        };
        matched.into_iter().map(|node| self.handle(node)).collect()
    }

    fn viewport(&self) -> Rect {
        let tree = self.tree.lock();
        Rect::from_min_size(Pos2::new(0.0, tree.scroll_top), tree.window_size)
    }

    fn animate_scroll(&self, top: f32, duration: Duration, on_complete: OnComplete) {
        self.tree.lock().animations.push(PendingAnimation {
            target: Target::Window,
            effect: Effect::ScrollTo(top),
            duration,
            on_complete,
        });
    }
}

/// Handle to an element of a [`MemoryDocument`]
#[derive(Clone)]
pub struct MemoryElement {
    tree: Arc<Mutex<Tree>>,
    id: NodeId,
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl Eq for MemoryElement {}

impl std::fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryElement")
            .field("node", &self.id.0)
            .field("tag", &self.tag_name())
            .field("id", &self.attr("id"))
            .finish()
    }
}

impl MemoryElement {
    /// Move `child` (and its subtree) to the end of this element.
    /// Ignored for elements of another document or when it would
    /// create a cycle.
    pub fn append(&self, child: &MemoryElement) -> &Self {
        if !Arc::ptr_eq(&self.tree, &child.tree) {
            log::warn!("cannot append an element from another document");
            return self;
        }
        if !self.tree.lock().append(self.id, child.id) {
            log::warn!("refusing to append an element into itself");
        }
        self
    }

    /// Append a text node
    pub fn append_text(&self, text: &str) -> &Self {
        let mut tree = self.tree.lock();
        let node = tree.create_text(text);
        tree.append(self.id, node);
        self
    }

    /// Set the element's box in unscrolled document coordinates
    pub fn set_layout(&self, rect: Rect) -> &Self {
        if let Some(data) = self.tree.lock().element_mut(self.id) {
            data.layout = rect;
        }
        self
    }

    /// Whether the element is reachable from the document root
    pub fn is_attached(&self) -> bool {
        self.tree.lock().is_attached(self.id)
    }

    /// Child elements, skipping text nodes
    pub fn children(&self) -> Vec<MemoryElement> {
        let children: Vec<NodeId> = {
            let tree = self.tree.lock();
            tree.node(self.id)
                .children
                .iter()
                .copied()
                .filter(|child| tree.element(*child).is_some())
                .collect()
        };
        children.into_iter().map(|id| self.sibling_handle(id)).collect()
    }

    fn sibling_handle(&self, id: NodeId) -> MemoryElement {
        MemoryElement {
            tree: Arc::clone(&self.tree),
            id,
        }
    }
}

impl Element for MemoryElement {
    fn tag_name(&self) -> String {
        self.tree
            .lock()
            .element(self.id)
            .map(|data| data.tag.clone())
            .unwrap_or_default()
    }

    fn attr(&self, name: &str) -> Option<String> {
        let tree = self.tree.lock();
        let data = tree.element(self.id)?;
        if name.eq_ignore_ascii_case("style") {
            return data.style_attr();
        }
        data.attr(&name.to_ascii_lowercase()).map(str::to_string)
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let Some(data) = self.tree.lock().element_mut(self.id) {
            data.set_attr(name, value);
        }
    }

    fn remove_attr(&self, name: &str) {
        if let Some(data) = self.tree.lock().element_mut(self.id) {
            data.remove_attr(name);
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        self.tree
            .lock()
            .element(self.id)?
            .style(property)
            .map(str::to_string)
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(data) = self.tree.lock().element_mut(self.id) {
            data.set_style(property, value);
        }
    }

    fn matches(&self, selector: &str) -> bool {
        match selector::parse(selector) {
            Some(groups) => self.tree.lock().matches_any(self.id, &groups),
            None => false,
        }
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.tree.lock().parent_element(self.id)?;
        Some(self.sibling_handle(parent))
    }

    fn previous_siblings(&self) -> Vec<Self> {
        let siblings = self.tree.lock().previous_element_siblings(self.id);
        siblings.into_iter().map(|id| self.sibling_handle(id)).collect()
    }

    fn next_siblings(&self) -> Vec<Self> {
        let siblings = self.tree.lock().next_element_siblings(self.id);
        siblings.into_iter().map(|id| self.sibling_handle(id)).collect()
    }

    fn offset(&self) -> Pos2 {
        self.tree.lock().offset(self.id)
    }

    fn size(&self) -> Vec2 {
        self.tree
            .lock()
            .element(self.id)
            .map_or(Vec2::ZERO, |data| data.layout.size())
    }

    fn scroll_top(&self) -> f32 {
        self.tree
            .lock()
            .element(self.id)
            .map_or(0.0, |data| data.scroll_top)
    }

    fn set_scroll_top(&self, top: f32) {
        if let Some(data) = self.tree.lock().element_mut(self.id) {
            data.scroll_top = top;
        }
    }

    fn outer_html(&self) -> String {
        let tree = self.tree.lock();
        let mut out = String::new();
        tree.serialize(self.id, &mut out);
        out
    }

    fn remove(&self) {
        let mut tree = self.tree.lock();
        tree.detach(self.id);
        log::debug!("removed node {} from the document", self.id.0);
    }

    fn animate(&self, effect: Effect, duration: Duration, on_complete: OnComplete) {
        let mut tree = self.tree.lock();
        if !tree.is_attached(self.id) {
            log::warn!("animating detached node {}", self.id.0);
        }
        tree.animations.push(PendingAnimation {
            target: Target::Node(self.id),
            effect,
            duration,
            on_complete,
        });
    }
}
