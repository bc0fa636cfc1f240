use crate::{CanvasPoint, Element, ElementContent, ElementId};

/// The ordered collection of elements placed on the canvas.
///
/// Owns every element and the id counter. The counter is independent of
/// the current length, so ids stay unique even if elements are ever
/// removed.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementRegistry {
    elements: Vec<Element>,
    next_id: ElementId,
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            next_id: ElementId::FIRST,
        }
    }
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().map(|e| e.id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Append a new element and return its id.
    pub fn insert(&mut self, content: ElementContent, position: CanvasPoint) -> ElementId {
        let id = self.next_id;
        self.next_id = id.next();
        self.elements.push(Element::new(id, content, position));
        id
    }

    /// A copy of this registry with one element moved.
    ///
    /// Every other element is carried over untouched. Unknown ids return an
    /// identical copy.
    pub fn with_position(&self, id: ElementId, position: CanvasPoint) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|e| if e.id == id { e.moved_to(position) } else { e.clone() })
            .collect();
        Self {
            elements,
            next_id: self.next_id,
        }
    }
}
