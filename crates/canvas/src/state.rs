//! Canvas state as a single value.
//!
//! Every input produces a new [`CanvasState`] rather than mutating flags in
//! place, so a handler either applies a whole transition or none of it.

use crate::drop::{DropOutcome, DropPayload, IgnoreReason};
use element::{CanvasDelta, CanvasPoint, Element, ElementId, ElementKind, ElementRegistry};

/// Reposition interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    /// Dragging one element. `offset` is pointer minus element position at
    /// the moment the drag started and stays fixed until it ends.
    Dragging { id: ElementId, offset: CanvasDelta },
}

/// Events emitted by the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    ElementAdded(ElementId),
    DropIgnored(IgnoreReason),
    DragStarted(ElementId),
    ElementMoved(ElementId),
    DragEnded(ElementId),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasState {
    registry: ElementRegistry,
    interaction: Interaction,
    /// Palette kind waiting for a drop.
    armed: Option<ElementKind>,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn elements(&self) -> &[Element] {
        self.registry.elements()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn armed(&self) -> Option<ElementKind> {
        self.armed
    }

    pub fn dragging_id(&self) -> Option<ElementId> {
        match self.interaction {
            Interaction::Dragging { id, .. } => Some(id),
            Interaction::Idle => None,
        }
    }

    /// Record the palette kind a drag started with.
    pub fn arm(&self, kind: ElementKind) -> Self {
        Self {
            armed: Some(kind),
            ..self.clone()
        }
    }

    /// Apply a drop at a canvas-local position.
    ///
    /// The armed kind is cleared whether or not an element is created.
    pub fn drop_payload(&self, payload: &DropPayload, at: CanvasPoint) -> (Self, CanvasEvent) {
        let mut next = Self {
            armed: None,
            ..self.clone()
        };
        let event = match payload.resolve(self.armed) {
            DropOutcome::Created(content) => {
                CanvasEvent::ElementAdded(next.registry.insert(content, at))
            }
            DropOutcome::Ignored(reason) => CanvasEvent::DropIgnored(reason),
        };
        (next, event)
    }

    /// `Idle -> Dragging` on pointer-down over an element.
    pub fn pointer_down(&self, id: ElementId, at: CanvasPoint) -> (Self, Option<CanvasEvent>) {
        let Some(element) = self.registry.get(id) else {
            return (self.clone(), None);
        };
        let next = Self {
            interaction: Interaction::Dragging {
                id,
                offset: at - element.position,
            },
            ..self.clone()
        };
        (next, Some(CanvasEvent::DragStarted(id)))
    }

    /// `Dragging -> Dragging`; a no-op when idle.
    pub fn pointer_move(&self, at: CanvasPoint) -> (Self, Option<CanvasEvent>) {
        let Interaction::Dragging { id, offset } = self.interaction else {
            return (self.clone(), None);
        };
        let position = at - offset;
        if self.registry.get(id).map(|e| e.position) == Some(position) {
            return (self.clone(), None);
        }
        let next = Self {
            registry: self.registry.with_position(id, position),
            ..self.clone()
        };
        (next, Some(CanvasEvent::ElementMoved(id)))
    }

    /// `Dragging -> Idle` on pointer-up anywhere.
    ///
    /// Also disarms: a palette drag released off the canvas never drops.
    /// A drop that follows the release still carries its kind in the
    /// payload.
    pub fn pointer_up(&self) -> (Self, Option<CanvasEvent>) {
        let next = Self {
            armed: None,
            ..self.end_drag()
        };
        (next, self.dragging_id().map(CanvasEvent::DragEnded))
    }

    /// The pointer left the canvas. Ends any drag so the element doesn't
    /// stay stuck to the pointer.
    pub fn pointer_leave(&self) -> (Self, Option<CanvasEvent>) {
        (self.end_drag(), self.dragging_id().map(CanvasEvent::DragEnded))
    }

    fn end_drag(&self) -> Self {
        Self {
            interaction: Interaction::Idle,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drop::DroppedFile;
    use element::ElementContent;
    use std::collections::HashSet;

    fn drop_at(state: &CanvasState, payload: DropPayload, x: f32, y: f32) -> CanvasState {
        state.drop_payload(&payload, CanvasPoint::new(x, y)).0
    }

    fn position_of(state: &CanvasState, id: ElementId) -> CanvasPoint {
        state.registry().get(id).unwrap().position
    }

    #[test]
    fn palette_button_drop_at_50_50() {
        let state = CanvasState::new().arm(ElementKind::Button);
        let (state, event) = state.drop_payload(
            &DropPayload::palette(ElementKind::Button),
            CanvasPoint::new(50.0, 50.0),
        );

        assert_eq!(event, CanvasEvent::ElementAdded(ElementId::FIRST));
        assert_eq!(state.elements().len(), 1);
        let element = &state.elements()[0];
        assert_eq!(element.kind(), ElementKind::Button);
        assert_eq!(element.position, CanvasPoint::new(50.0, 50.0));
        assert_eq!(element.content, ElementContent::button("Click Me"));
        assert_eq!(state.armed(), None);
    }

    #[test]
    fn text_drop_creates_text_at_drop_point() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("Hello"), 12.0, 34.0);
        assert_eq!(state.elements().len(), 1);
        assert_eq!(state.elements()[0].content, ElementContent::text("Hello"));
        assert_eq!(state.elements()[0].position, CanvasPoint::new(12.0, 34.0));
    }

    #[test]
    fn non_image_file_leaves_registry_unchanged() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("keep"), 0.0, 0.0);
        let payload = DropPayload::files([DroppedFile::new("/tmp/notes.txt")]);
        let (next, event) = state.drop_payload(&payload, CanvasPoint::new(5.0, 5.0));

        assert!(matches!(event, CanvasEvent::DropIgnored(IgnoreReason::UnsupportedFile { .. })));
        assert_eq!(next.registry(), state.registry());
    }

    #[test]
    fn armed_kind_is_cleared_by_any_drop() {
        let state = CanvasState::new().arm(ElementKind::Image);
        let payload = DropPayload::files([DroppedFile::new("/tmp/notes.txt")]);
        let (next, _) = state.drop_payload(&payload, CanvasPoint::ORIGIN);
        assert_eq!(next.armed(), None);
        assert!(next.elements().is_empty());
    }

    #[test]
    fn armed_kind_creates_element_on_bare_drop() {
        let state = CanvasState::new().arm(ElementKind::Text);
        let state = drop_at(&state, DropPayload::default(), 3.0, 4.0);
        assert_eq!(state.elements()[0].content, ElementContent::text(""));
    }

    #[test]
    fn each_drop_adds_one_distinct_id() {
        let payloads = [
            DropPayload::palette(ElementKind::Text),
            DropPayload::text("two"),
            DropPayload::files([DroppedFile::new("/tmp/a.png")]),
            DropPayload::palette(ElementKind::Button),
            DropPayload::palette(ElementKind::Image),
        ];
        let mut state = CanvasState::new();
        for (i, payload) in payloads.into_iter().enumerate() {
            let held: HashSet<_> = state.registry().ids().collect();
            let (next, event) = state.drop_payload(&payload, CanvasPoint::new(i as f32, 0.0));
            let CanvasEvent::ElementAdded(id) = event else {
                panic!("expected an element, got {event:?}");
            };
            assert!(!held.contains(&id));
            assert_eq!(next.elements().len(), state.elements().len() + 1);
            state = next;
        }
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("a"), 10.0, 10.0);
        let state = drop_at(&state, DropPayload::text("b"), 100.0, 100.0);
        let a = ElementId::from_raw(1);
        let b = ElementId::from_raw(2);

        // Grab `b` off-center; it must not jump under the pointer.
        let (state, event) = state.pointer_down(b, CanvasPoint::new(107.0, 103.0));
        assert_eq!(event, Some(CanvasEvent::DragStarted(b)));
        assert_eq!(position_of(&state, b), CanvasPoint::new(100.0, 100.0));

        let (state, event) = state.pointer_move(CanvasPoint::new(127.0, 93.0));
        assert_eq!(event, Some(CanvasEvent::ElementMoved(b)));
        assert_eq!(position_of(&state, b), CanvasPoint::new(120.0, 90.0));
        assert_eq!(position_of(&state, a), CanvasPoint::new(10.0, 10.0));
    }

    #[test]
    fn moves_after_release_are_noops() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("a"), 0.0, 0.0);
        let id = ElementId::FIRST;
        let (state, _) = state.pointer_down(id, CanvasPoint::new(5.0, 5.0));
        let (state, _) = state.pointer_move(CanvasPoint::new(15.0, 5.0));
        let (state, event) = state.pointer_up();
        assert_eq!(event, Some(CanvasEvent::DragEnded(id)));
        assert_eq!(state.interaction(), Interaction::Idle);

        let (after, event) = state.pointer_move(CanvasPoint::new(200.0, 200.0));
        assert_eq!(event, None);
        assert_eq!(after, state);
        assert_eq!(position_of(&after, id), CanvasPoint::new(10.0, 0.0));
    }

    #[test]
    fn leaving_the_canvas_ends_the_drag() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("a"), 0.0, 0.0);
        let (state, _) = state.pointer_down(ElementId::FIRST, CanvasPoint::ORIGIN);
        let (state, event) = state.pointer_leave();
        assert_eq!(event, Some(CanvasEvent::DragEnded(ElementId::FIRST)));
        assert_eq!(state.dragging_id(), None);
    }

    #[test]
    fn pointer_down_on_unknown_id_stays_idle() {
        let state = CanvasState::new();
        let (next, event) = state.pointer_down(ElementId::from_raw(4), CanvasPoint::ORIGIN);
        assert_eq!(event, None);
        assert_eq!(next.interaction(), Interaction::Idle);
    }

    #[test]
    fn pointer_up_while_idle_is_silent() {
        let (_, event) = CanvasState::new().pointer_up();
        assert_eq!(event, None);
    }

    #[test]
    fn only_one_element_drags_at_a_time() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("a"), 0.0, 0.0);
        let state = drop_at(&state, DropPayload::text("b"), 50.0, 0.0);
        let (state, _) = state.pointer_down(ElementId::from_raw(1), CanvasPoint::ORIGIN);
        let (state, _) = state.pointer_down(ElementId::from_raw(2), CanvasPoint::new(50.0, 0.0));
        assert_eq!(state.dragging_id(), Some(ElementId::from_raw(2)));

        let (state, _) = state.pointer_move(CanvasPoint::new(60.0, 10.0));
        assert_eq!(position_of(&state, ElementId::from_raw(1)), CanvasPoint::ORIGIN);
        assert_eq!(position_of(&state, ElementId::from_raw(2)), CanvasPoint::new(60.0, 10.0));
    }

    #[test]
    fn elements_may_leave_the_visible_area() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("a"), 0.0, 0.0);
        let (state, _) = state.pointer_down(ElementId::FIRST, CanvasPoint::ORIGIN);
        let (state, _) = state.pointer_move(CanvasPoint::new(-40.0, 9000.0));
        assert_eq!(position_of(&state, ElementId::FIRST), CanvasPoint::new(-40.0, 9000.0));
    }

    #[test]
    fn release_without_drop_disarms() {
        let state = CanvasState::new().arm(ElementKind::Button);
        let (state, event) = state.pointer_up();
        assert_eq!(event, None);
        assert_eq!(state.armed(), None);
        assert!(state.elements().is_empty());
    }

    #[test]
    fn palette_drop_after_release_still_creates_its_kind() {
        let (state, _) = CanvasState::new().arm(ElementKind::Button).pointer_up();
        let state = drop_at(&state, DropPayload::palette(ElementKind::Button), 1.0, 2.0);
        assert_eq!(state.elements()[0].content, ElementContent::button("Click Me"));
    }

    #[test]
    fn leaving_keeps_the_armed_kind() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("a"), 0.0, 0.0)
            .arm(ElementKind::Text);
        let (state, _) = state.pointer_down(ElementId::FIRST, CanvasPoint::ORIGIN);
        let (state, _) = state.pointer_leave();
        assert_eq!(state.armed(), Some(ElementKind::Text));
    }

    #[test]
    fn dragging_keeps_the_armed_kind() {
        let state = drop_at(&CanvasState::new(), DropPayload::text("a"), 0.0, 0.0)
            .arm(ElementKind::Image);
        let (state, _) = state.pointer_down(ElementId::FIRST, CanvasPoint::ORIGIN);
        assert_eq!(state.armed(), Some(ElementKind::Image));
    }
}
