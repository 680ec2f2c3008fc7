//! Cross-frame interaction state and per-element event derivation.
//!
//! [`PersistentState`] owns the four interaction roles: keyboard focus,
//! keyboard capture, pointer capture and drag tracking. Each role has at most
//! one holder and changes hands only through the transitions below.
//! [`PersistentState::pointer_event`] is the state machine that turns one
//! frame of pointer samples into the [`Event`] mask of one element.

use bitflags::bitflags;
use glint_shared::{Vec2i, MAX_SIMULTANEOUS_POINTERS};

use crate::id::Id;
use crate::input::{Button, Pointer};
use crate::layout::Rect;
use crate::text_edit::TextEdit;

bitflags! {
    /// Interaction events reported to one element for one frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Event: u32 {
        /// Button released over the element that received the press.
        const WENT_UP = 1 << 0;
        /// Button pressed over the element.
        const WENT_DOWN = 1 << 1;
        /// Button held after a press on the element.
        const IS_DOWN = 1 << 2;
        /// Pointer moved past the drag threshold while held.
        const START_DRAG = 1 << 3;
        /// Dragging pointer released.
        const END_DRAG = 1 << 4;
        /// Dragging pointer still held.
        const IS_DRAGGING = 1 << 5;
        /// Pointer over the element (or focus on it) with nothing else going on.
        const HOVER = 1 << 6;
    }
}

/// Pointer tracked for a potential or running drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    /// Press position, reset to the current position when a drag starts.
    pub start: Option<Vec2i>,
    /// Pointer index while a drag is running.
    pub pointer: Option<usize>,
}

/// One pointer as seen by a single element during the render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PointerSample {
    pub position: Vec2i,
    pub button: Button,
    /// False when an enclosing scroll region clips the pointer away.
    pub inside_clip: bool,
}

/// Inputs of one event derivation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EventQuery<'s> {
    pub id: Id,
    pub rect: Rect,
    /// Only report drag transitions (scroll regions).
    pub drag_only: bool,
    pub drag_threshold: i32,
    /// Active pointers, lowest index first.
    pub pointers: &'s [PointerSample],
}

/// Outcome of an event derivation that found a responding pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PointerHit {
    pub event: Event,
    pub pointer: usize,
    /// Focus moved to the element; any keyboard capture was dropped.
    pub took_focus: bool,
}

/// Interaction state that survives across frames.
#[derive(Debug, Clone, Default)]
pub struct PersistentState {
    input_focus: Option<Id>,
    input_capture: Option<Id>,
    pointer_capture: Option<Id>,
    pointer_element: [Option<Id>; MAX_SIMULTANEOUS_POINTERS],
    drag: DragState,
    pub(crate) text_edit: TextEdit,
}

impl PersistentState {
    /// Creates state with no holder in any role.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element with keyboard/gamepad focus.
    #[must_use]
    pub fn focus(&self) -> Option<Id> {
        self.input_focus
    }

    /// Element capturing keyboard/IME input.
    #[must_use]
    pub fn input_capture(&self) -> Option<Id> {
        self.input_capture
    }

    /// Element capturing the pointer.
    #[must_use]
    pub fn pointer_capture(&self) -> Option<Id> {
        self.pointer_capture
    }

    /// Drag tracking.
    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Current text editing session.
    #[must_use]
    pub fn text_edit(&self) -> &TextEdit {
        &self.text_edit
    }

    pub(crate) fn set_focus(&mut self, focus: Option<Id>) {
        if self.input_focus != focus {
            tracing::debug!(from = ?self.input_focus, to = ?focus, "focus moved");
            self.input_focus = focus;
        }
    }

    /// Hands the keyboard to `id`. Releasing (`None`) also drops focus and
    /// ends the editing session.
    pub(crate) fn set_input_capture(&mut self, id: Option<Id>) {
        if self.input_capture != id {
            tracing::debug!(from = ?self.input_capture, to = ?id, "keyboard capture");
        }
        self.input_capture = id;
        if id.is_none() {
            self.set_focus(None);
            self.text_edit.finish();
        }
    }

    /// Gives `id` exclusive pointer events, replacing any previous holder.
    ///
    /// `pointer` is the pointer that produced the latest event; the capturing
    /// element becomes its last-pressed element so the release pairs up.
    pub(crate) fn capture_pointer(&mut self, id: Id, pointer: Option<usize>) {
        if self.pointer_capture != Some(id) {
            tracing::debug!(from = ?self.pointer_capture, to = ?id, "pointer captured");
        }
        self.pointer_capture = Some(id);
        if let Some(pointer) = pointer {
            self.record_press(id, pointer);
        }
    }

    pub(crate) fn release_pointer(&mut self) {
        if let Some(id) = self.pointer_capture.take() {
            tracing::debug!(?id, "pointer released");
        }
    }

    /// True unless another element holds the pointer capture.
    #[must_use]
    pub fn can_receive_pointer_event(&self, id: Id) -> bool {
        self.pointer_capture.is_none() || self.pointer_capture == Some(id)
    }

    /// True if `id` holds the pointer capture.
    #[must_use]
    pub fn is_pointer_captured(&self, id: Id) -> bool {
        self.pointer_capture == Some(id)
    }

    pub(crate) fn record_press(&mut self, id: Id, pointer: usize) {
        if let Some(slot) = self.pointer_element.get_mut(pointer) {
            *slot = Some(id);
        }
    }

    fn was_pressed_by(&self, id: Id, pointer: usize) -> bool {
        self.pointer_element.get(pointer).copied().flatten() == Some(id)
    }

    /// Derives the event of one element from the active pointers.
    ///
    /// The lowest-index pointer that hits the element (or any pointer, while
    /// the element holds the capture) decides; `None` if none qualifies.
    pub(crate) fn pointer_event(&mut self, query: &EventQuery<'_>) -> Option<PointerHit> {
        let id = query.id;
        let captured = self.is_pointer_captured(id);
        let eligible = self.can_receive_pointer_event(id);

        for (index, sample) in query.pointers.iter().enumerate() {
            let hit = eligible && sample.inside_clip && query.rect.contains(sample.position);
            if !hit && !captured {
                continue;
            }
            let button = sample.button;
            let mut event = Event::empty();
            let mut took_focus = false;

            if self.drag.pointer == Some(index) {
                if button.went_up {
                    event |= Event::END_DRAG;
                    self.drag = DragState::default();
                    tracing::trace!(?id, pointer = index, "drag ended");
                } else if button.is_down {
                    event |= Event::IS_DRAGGING;
                }
            } else {
                if !query.drag_only {
                    if button.went_down {
                        self.record_press(id, index);
                        event |= Event::WENT_DOWN;
                    }
                    let pressed_here = self.was_pressed_by(id, index);
                    if button.went_up && pressed_here {
                        event |= Event::WENT_UP;
                    } else if button.is_down && pressed_here {
                        event |= Event::IS_DOWN;
                    }
                    if event.intersects(Event::WENT_UP | Event::IS_DOWN)
                        && self.input_focus != Some(id)
                    {
                        self.set_input_capture(None);
                        self.set_focus(Some(id));
                        took_focus = true;
                    }
                }

                // Any element may start a drag, so ancestors see drags that
                // begin over a descendant.
                if button.went_down {
                    self.drag.start = Some(sample.position);
                }
                if let Some(start) = self.drag.start {
                    let threshold = Vec2i::splat(query.drag_threshold);
                    if button.is_down
                        && query.rect.contains(start)
                        && !sample.position.in_range(start - threshold, start + threshold)
                    {
                        event |= Event::START_DRAG;
                        self.drag = DragState {
                            start: Some(sample.position),
                            pointer: Some(index),
                        };
                        tracing::trace!(?id, pointer = index, "drag started");
                    }
                }
            }

            if event.is_empty() {
                event = Event::HOVER;
            }
            return Some(PointerHit {
                event,
                pointer: index,
                took_focus,
            });
        }
        None
    }

    /// Forgets press state of released pointers: the last-pressed element of
    /// every pointer that is up, a drag whose pointer was released without
    /// any element receiving the end, and a pending drag start once no
    /// pointer is held.
    pub(crate) fn end_frame(&mut self, pointers: &[Pointer]) {
        let held = |index: usize| pointers.get(index).is_some_and(|p| p.button.is_down);
        if let Some(index) = self.drag.pointer {
            if !held(index) {
                tracing::trace!(pointer = index, "drag abandoned");
                self.drag = DragState::default();
            }
        }
        for (index, slot) in self.pointer_element.iter_mut().enumerate() {
            if !held(index) {
                *slot = None;
            }
        }
        if self.drag.pointer.is_none() && !(0..pointers.len()).any(held) {
            self.drag.start = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: i32 = 8;

    fn rect() -> Rect {
        Rect::new(0, 0, 100, 100)
    }

    fn sample(x: i32, y: i32, went_down: bool, is_down: bool, went_up: bool) -> PointerSample {
        PointerSample {
            position: Vec2i::new(x, y),
            button: Button {
                went_down,
                is_down,
                went_up,
            },
            inside_clip: true,
        }
    }

    fn event(state: &mut PersistentState, id: Id, pointer: PointerSample) -> Event {
        let pointers = [pointer];
        state
            .pointer_event(&EventQuery {
                id,
                rect: rect(),
                drag_only: false,
                drag_threshold: THRESHOLD,
                pointers: &pointers,
            })
            .map_or(Event::empty(), |hit| hit.event)
    }

    #[test]
    fn test_capture_replaces_holder() {
        let mut state = PersistentState::new();
        let (a, b) = (Id::new("a"), Id::new("b"));

        state.capture_pointer(a, None);
        state.capture_pointer(b, None);
        assert!(!state.is_pointer_captured(a));
        assert!(state.is_pointer_captured(b));
        assert!(!state.can_receive_pointer_event(a));

        state.release_pointer();
        assert!(state.can_receive_pointer_event(a));
        assert_eq!(state.pointer_capture(), None);
    }

    #[test]
    fn test_press_then_release_inside() {
        let mut state = PersistentState::new();
        let id = Id::new("button");

        let down = event(&mut state, id, sample(10, 10, true, true, false));
        assert!(down.contains(Event::WENT_DOWN));
        assert_eq!(state.focus(), Some(id));

        let held = event(&mut state, id, sample(10, 10, false, true, false));
        assert_eq!(held, Event::IS_DOWN);

        let up = event(&mut state, id, sample(10, 10, false, false, true));
        assert_eq!(up, Event::WENT_UP);

        let idle = event(&mut state, id, sample(10, 10, false, false, false));
        assert_eq!(idle, Event::HOVER);
    }

    #[test]
    fn test_release_outside_reports_nothing() {
        let mut state = PersistentState::new();
        let id = Id::new("button");

        event(&mut state, id, sample(10, 10, true, true, false));
        let up = event(&mut state, id, sample(150, 10, false, false, true));
        assert!(up.is_empty());
    }

    #[test]
    fn test_release_needs_matching_press() {
        let mut state = PersistentState::new();
        let (a, b) = (Id::new("a"), Id::new("b"));

        event(&mut state, a, sample(10, 10, true, true, false));
        // Pointer slid over b and let go there.
        let up = event(&mut state, b, sample(10, 10, false, false, true));
        assert_eq!(up, Event::HOVER);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut state = PersistentState::new();
        let id = Id::new("pane");

        event(&mut state, id, sample(50, 50, true, true, false));
        let small = event(&mut state, id, sample(55, 50, false, true, false));
        assert!(!small.contains(Event::START_DRAG));

        let start = event(&mut state, id, sample(70, 50, false, true, false));
        assert!(start.contains(Event::START_DRAG));
        assert_eq!(state.drag().pointer, Some(0));

        for x in [80, 90, 95] {
            let dragging = event(&mut state, id, sample(x, 50, false, true, false));
            assert_eq!(dragging, Event::IS_DRAGGING);
        }

        let end = event(&mut state, id, sample(95, 50, false, false, true));
        assert_eq!(end, Event::END_DRAG);
        assert_eq!(state.drag(), DragState::default());

        let after = event(&mut state, id, sample(95, 50, false, false, false));
        assert_eq!(after, Event::HOVER);
    }

    #[test]
    fn test_drag_only_skips_clicks() {
        let mut state = PersistentState::new();
        let id = Id::new("scroll");
        let pointers = [sample(10, 10, true, true, false)];
        let hit = state.pointer_event(&EventQuery {
            id,
            rect: rect(),
            drag_only: true,
            drag_threshold: THRESHOLD,
            pointers: &pointers,
        });
        assert_eq!(hit.map(|h| h.event), Some(Event::HOVER));
        assert_eq!(state.drag().start, Some(Vec2i::new(10, 10)));
    }

    #[test]
    fn test_capture_overrides_hit_test() {
        let mut state = PersistentState::new();
        let (holder, other) = (Id::new("holder"), Id::new("other"));
        state.capture_pointer(holder, Some(0));

        // Far outside the holder's rect, but it still receives the pointer.
        let outside = event(&mut state, holder, sample(500, 500, false, true, false));
        assert_eq!(outside, Event::IS_DOWN);
        let blocked = event(&mut state, other, sample(10, 10, false, true, false));
        assert!(blocked.is_empty());
    }

    #[test]
    fn test_first_pointer_wins() {
        let mut state = PersistentState::new();
        let id = Id::new("button");
        let pointers = [
            sample(500, 500, false, false, false),
            sample(10, 10, true, true, false),
            sample(20, 20, true, true, false),
        ];
        let hit = state.pointer_event(&EventQuery {
            id,
            rect: rect(),
            drag_only: false,
            drag_threshold: THRESHOLD,
            pointers: &pointers,
        });
        assert_eq!(hit.map(|h| h.pointer), Some(1));
    }

    #[test]
    fn test_clipped_pointer_misses() {
        let mut state = PersistentState::new();
        let mut pointer = sample(10, 10, true, true, false);
        pointer.inside_clip = false;
        assert!(event(&mut state, Id::new("hidden"), pointer).is_empty());
    }

    #[test]
    fn test_releasing_capture_drops_focus() {
        let mut state = PersistentState::new();
        let id = Id::new("field");
        state.set_focus(Some(id));
        state.set_input_capture(Some(id));
        assert_eq!(state.focus(), Some(id));

        state.set_input_capture(None);
        assert_eq!(state.focus(), None);
        assert_eq!(state.input_capture(), None);
    }

    #[test]
    fn test_release_forgets_press() {
        let mut state = PersistentState::new();
        let id = Id::new("button");
        event(&mut state, id, sample(10, 10, true, true, false));
        event(&mut state, id, sample(10, 10, false, false, true));
        state.end_frame(&[Pointer::default()]);
        assert_eq!(state.drag(), DragState::default());

        // A later press elsewhere slides onto the element: no pairing, and
        // no drag measured from the old press.
        let slid = event(&mut state, id, sample(30, 30, false, true, false));
        assert_eq!(slid, Event::HOVER);
        assert_eq!(state.focus(), Some(id));
    }

    #[test]
    fn test_abandoned_drag_is_cleared() {
        let mut state = PersistentState::new();
        let id = Id::new("pane");
        event(&mut state, id, sample(50, 50, true, true, false));
        event(&mut state, id, sample(90, 50, false, true, false));
        assert!(state.drag().pointer.is_some());

        state.end_frame(&[Pointer::default()]);
        assert_eq!(state.drag(), DragState::default());
    }
}
