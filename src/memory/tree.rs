use egui::{Rect, Vec2};

use super::animation::AnimationQueue;
use super::selector::{Chain, Combinator, Compound, Part};
use crate::string::escape_html;

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    pub(crate) layout: Rect,
    pub(crate) scroll_top: f32,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            styles: Vec::new(),
            layout: Rect::from_min_size(egui::Pos2::ZERO, Vec2::ZERO),
            scroll_top: 0.0,
        }
    }

    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn style_attr(&self) -> Option<String> {
        if self.styles.is_empty() {
            return None;
        }
        let declarations: Vec<String> = self
            .styles
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect();
        Some(declarations.join(" "))
    }

    pub(crate) fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if name == "style" {
            self.styles.clear();
            for declaration in value.split(';') {
                if let Some((property, value)) = declaration.split_once(':') {
                    self.set_style(property.trim(), value.trim());
                }
            }
            return;
        }
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attrs.push((name, value.to_string())),
        }
    }

    pub(crate) fn remove_attr(&mut self, name: &str) {
        let name = name.to_ascii_lowercase();
        if name == "style" {
            self.styles.clear();
        }
        self.attrs.retain(|(key, _)| *key != name);
    }

    pub(crate) fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn set_style(&mut self, property: &str, value: &str) {
        if property.is_empty() {
            return;
        }
        if value.is_empty() {
            self.styles.retain(|(key, _)| key != property);
            return;
        }
        match self.styles.iter_mut().find(|(key, _)| key == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.styles.push((property.to_string(), value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Document,
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) kind: NodeKind,
}

/// Node storage shared by a document and all of its element handles
pub(crate) struct Tree {
    nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) body: NodeId,
    pub(crate) window_size: Vec2,
    pub(crate) scroll_top: f32,
    pub(crate) animations: AnimationQueue,
}

impl Tree {
    pub(crate) fn new(window_size: Vec2) -> Self {
        let mut tree = Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Document,
            }],
            root: NodeId(0),
            body: NodeId(0),
            window_size,
            scroll_top: 0.0,
            animations: AnimationQueue::default(),
        };
        let html = tree.create_node(NodeKind::Element(ElementData::new("html")));
        tree.append(tree.root, html);
        let body = tree.create_node(NodeKind::Element(ElementData::new("body")));
        tree.append(html, body);
        tree.body = body;
        tree
    }

    pub(crate) fn create_element(&mut self, tag: &str) -> NodeId {
        self.create_node(NodeKind::Element(ElementData::new(tag)))
    }

    pub(crate) fn create_text(&mut self, text: &str) -> NodeId {
        self.create_node(NodeKind::Text(text.to_string()))
    }

    fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            kind,
        });
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Move `child` to the end of `parent`'s children.
    /// Refuses to create a cycle.
    pub(crate) fn append(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.is_ancestor(child, parent) {
            return false;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        true
    }

    pub(crate) fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, of: NodeId) -> bool {
        let mut cursor = self.nodes[of.0].parent;
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.nodes[id.0].parent;
        }
        false
    }

    pub(crate) fn is_attached(&self, id: NodeId) -> bool {
        id == self.root || self.is_ancestor(self.root, id)
    }

    /// Parent element, skipping the document node
    pub(crate) fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0]
            .parent
            .filter(|parent| self.element(*parent).is_some())
    }

    /// Element siblings before `id`, nearest first
    pub(crate) fn previous_element_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.nodes[id.0].parent else {
            return Vec::new();
        };
        let siblings = &self.nodes[parent.0].children;
        let position = siblings.iter().position(|child| *child == id).unwrap_or(0);
        siblings[..position]
            .iter()
            .rev()
            .copied()
            .filter(|sibling| self.element(*sibling).is_some())
            .collect()
    }

    /// Element siblings after `id`, nearest first
    pub(crate) fn next_element_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.nodes[id.0].parent else {
            return Vec::new();
        };
        let siblings = &self.nodes[parent.0].children;
        let Some(position) = siblings.iter().position(|child| *child == id) else {
            return Vec::new();
        };
        siblings[position + 1..]
            .iter()
            .copied()
            .filter(|sibling| self.element(*sibling).is_some())
            .collect()
    }

    /// Attached elements in document order
    pub(crate) fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements(self.root, &mut out);
        out
    }

    fn collect_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.nodes[id.0].children {
            if self.element(*child).is_some() {
                out.push(*child);
                self.collect_elements(*child, out);
            }
        }
    }

    /// First attached element whose id is `id`, walking the whole tree
    pub(crate) fn find_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if self.element(node).and_then(|data| data.attr("id")) == Some(id) {
                return Some(node);
            }
            // reversed so children pop in document order
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        None
    }

    /// Layout position minus the scroll offsets of every ancestor
    pub(crate) fn offset(&self, id: NodeId) -> egui::Pos2 {
        let Some(data) = self.element(id) else {
            return egui::Pos2::ZERO;
        };
        let mut scrolled = 0.0;
        let mut cursor = self.parent_element(id);
        while let Some(parent) = cursor {
            scrolled += self.element(parent).map_or(0.0, |data| data.scroll_top);
            cursor = self.parent_element(parent);
        }
        data.layout.min - Vec2::new(0.0, scrolled)
    }

    pub(crate) fn matches_any(&self, id: NodeId, groups: &[Chain]) -> bool {
        groups.iter().any(|chain| self.matches_chain(id, chain))
    }

    fn matches_compound(&self, id: NodeId, compound: &Compound) -> bool {
        self.element(id).is_some_and(|data| compound.matches(data))
    }

    fn matches_chain(&self, id: NodeId, chain: &[Part]) -> bool {
        let Some((last, rest)) = chain.split_last() else {
            return false;
        };
        if !self.matches_compound(id, &last.compound) {
            return false;
        }
        let Some(combinator) = last.combinator else {
            return true;
        };

        match combinator {
            Combinator::Child => self
                .parent_element(id)
                .is_some_and(|parent| self.matches_chain(parent, rest)),
            Combinator::Descendant => {
                let mut cursor = self.parent_element(id);
                while let Some(parent) = cursor {
                    if self.matches_chain(parent, rest) {
                        return true;
                    }
                    cursor = self.parent_element(parent);
                }
                false
            }
        }
    }

    pub(crate) fn serialize(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Document => {
                for child in &self.nodes[id.0].children {
                    self.serialize(*child, out);
                }
            }
            NodeKind::Text(text) => out.push_str(&escape_html(text)),
            NodeKind::Element(data) => {
                out.push('<');
                out.push_str(&data.tag);
                for (name, value) in &data.attrs {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
                }
                if let Some(style) = data.style_attr() {
                    out.push_str(&format!(" style=\"{}\"", escape_html(&style)));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&data.tag.as_str()) {
                    return;
                }
                for child in &self.nodes[id.0].children {
                    self.serialize(*child, out);
                }
                out.push_str(&format!("</{}>", data.tag));
            }
        }
    }
}
