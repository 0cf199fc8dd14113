//! Retained scene of named display elements.
//!
//! The scene is what the reconciler writes to and what the terminal drawer
//! reads from. Every element is created once when the layout is built and
//! lives for the whole process; only its text, visibility and horizontal
//! span ever change.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Binding layer the reconciler writes through.
///
/// Setters are unconditional; callers compare against the getters first.
pub trait Surface {
    fn find(&self, name: &str) -> Option<ElementId>;

    fn text(&self, id: ElementId) -> &str;
    fn set_text(&mut self, id: ElementId, text: &str);

    fn is_visible(&self, id: ElementId) -> bool;
    fn set_visible(&mut self, id: ElementId, visible: bool);

    /// Horizontal placement as `(x, width)`.
    fn span(&self, id: ElementId) -> (u32, u32);
    fn set_span(&mut self, id: ElementId, x: u32, width: u32);
}

#[derive(Debug, Clone)]
struct Element {
    text: String,
    visible: bool,
    x: u32,
    width: u32,
}

#[derive(Debug, Default)]
pub struct Scene {
    elements: Vec<Element>,
    by_name: HashMap<String, ElementId>,
    writes: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hidden, empty element. Re-adding a name returns the existing id.
    pub fn add(&mut self, name: impl Into<String>) -> ElementId {
        let name = name.into();
        if let Some(id) = self.by_name.get(&name) {
            return *id;
        }
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            text: String::new(),
            visible: false,
            x: 0,
            width: 0,
        });
        self.by_name.insert(name, id);
        id
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of setter calls since the scene was built.
    ///
    /// The runtime redraws the terminal only when this moves.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Surface for Scene {
    fn find(&self, name: &str) -> Option<ElementId> {
        self.by_name.get(name).copied()
    }

    fn text(&self, id: ElementId) -> &str {
        &self.elements[id.0].text
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        self.writes += 1;
        let element = &mut self.elements[id.0];
        element.text.clear();
        element.text.push_str(text);
    }

    fn is_visible(&self, id: ElementId) -> bool {
        self.elements[id.0].visible
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        self.writes += 1;
        self.elements[id.0].visible = visible;
    }

    fn span(&self, id: ElementId) -> (u32, u32) {
        let element = &self.elements[id.0];
        (element.x, element.width)
    }

    fn set_span(&mut self, id: ElementId, x: u32, width: u32) {
        self.writes += 1;
        let element = &mut self.elements[id.0];
        element.x = x;
        element.width = width;
    }
}
