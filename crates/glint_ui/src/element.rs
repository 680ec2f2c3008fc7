//! The flat, per-frame record of every widget instance.
//!
//! The layout pass appends to the sequence. The render pass walks it in the
//! same order through [`ElementSequence::next_matching`], which tolerates
//! control flow that diverges between the two passes.

use glint_shared::Vec2i;

use crate::id::Id;

/// One widget instance of the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    /// Identity supplied by the caller.
    pub id: Id,
    /// Minimum on-screen size computed by the layout pass.
    pub size: Vec2i,
    /// Content size beyond the visible window (scroll regions only).
    pub extra_size: Vec2i,
    /// Participates in event dispatch and focus traversal.
    pub interactive: bool,
}

impl Element {
    /// Creates a non-interactive element.
    #[must_use]
    pub const fn new(id: Id, size: Vec2i) -> Self {
        Self {
            id,
            size,
            extra_size: Vec2i::ZERO,
            interactive: false,
        }
    }
}

/// Append-only (layout) / forward-consumed (render) element list.
#[derive(Debug, Default)]
pub struct ElementSequence {
    elements: Vec<Element>,
    cursor: usize,
}

impl ElementSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(256),
            cursor: 0,
        }
    }

    /// Forgets all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.cursor = 0;
    }

    /// Appends an element and returns its index.
    pub fn push(&mut self, id: Id, size: Vec2i) -> usize {
        self.elements.push(Element::new(id, size));
        self.elements.len() - 1
    }

    /// Prepares for the render pass: appends the zero-size sentinel and
    /// rewinds the matching cursor.
    pub fn begin_render(&mut self) {
        self.push(Id::SENTINEL, Vec2i::ZERO);
        self.cursor = 0;
    }

    /// Index of the sentinel appended by [`ElementSequence::begin_render`].
    ///
    /// Groups that did not exist during layout anchor on it.
    #[must_use]
    pub fn sentinel_index(&self) -> usize {
        self.elements.len().saturating_sub(1)
    }

    /// Finds the next element with `id` at or after the cursor.
    ///
    /// On a hit the cursor moves past the element. On a miss the cursor is
    /// left where it was: the caller's element was introduced during this
    /// render pass and has no measured counterpart.
    pub fn next_matching(&mut self, id: Id) -> Option<usize> {
        let found = self.elements[self.cursor..]
            .iter()
            .position(|element| element.id == id)
            .map(|offset| self.cursor + offset);
        if let Some(index) = found {
            self.cursor = index + 1;
        } else {
            tracing::trace!(id = id.raw(), "element not measured this frame");
        }
        found
    }

    /// Index of the first element with `id`.
    #[must_use]
    pub fn index_of(&self, id: Id) -> Option<usize> {
        self.elements.iter().position(|element| element.id == id)
    }

    /// Searches outward from `start` in `forward`/backward direction for the
    /// next interactive element, wrapping once.
    ///
    /// `start == None` searches from before the first element, so the first
    /// interactive element in `forward` order wins. When the search wraps
    /// back to `start` without a hit, `start` keeps focus if it is itself
    /// interactive.
    #[must_use]
    pub fn next_interactive(&self, start: Option<usize>, forward: bool) -> Option<Id> {
        let len = self.elements.len();
        if len == 0 {
            return None;
        }
        let step = |i: usize| if forward { (i + 1) % len } else { (i + len - 1) % len };
        let (mut index, candidates) = match start {
            Some(start) => (step(start.min(len - 1)), len - 1),
            None if forward => (0, len),
            None => (len - 1, len),
        };
        for _ in 0..candidates {
            let element = &self.elements[index];
            if element.interactive {
                return Some(element.id);
            }
            index = step(index);
        }
        start
            .and_then(|start| self.elements.get(start))
            .filter(|element| element.interactive)
            .map(|element| element.id)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if no element was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Returns mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    /// All elements in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    pub(crate) fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(ids: &[&str]) -> ElementSequence {
        let mut seq = ElementSequence::new();
        for id in ids {
            seq.push(Id::new(id), Vec2i::new(1, 1));
        }
        seq
    }

    #[test]
    fn test_matching_advances_in_order() {
        let mut seq = sequence(&["a", "b", "c"]);
        seq.begin_render();

        assert_eq!(seq.next_matching(Id::new("a")), Some(0));
        assert_eq!(seq.next_matching(Id::new("b")), Some(1));
        assert_eq!(seq.next_matching(Id::new("c")), Some(2));
    }

    #[test]
    fn test_skips_removed_elements() {
        let mut seq = sequence(&["a", "b", "c"]);
        seq.begin_render();

        // "b" vanished between the passes.
        assert_eq!(seq.next_matching(Id::new("a")), Some(0));
        assert_eq!(seq.next_matching(Id::new("c")), Some(2));
    }

    #[test]
    fn test_miss_rolls_back_cursor() {
        let mut seq = sequence(&["a", "b", "c"]);
        seq.begin_render();

        assert_eq!(seq.next_matching(Id::new("a")), Some(0));
        // "new" appeared during the render pass.
        assert_eq!(seq.next_matching(Id::new("new")), None);
        assert_eq!(seq.next_matching(Id::new("b")), Some(1));
    }

    #[test]
    fn test_duplicate_ids_match_in_order() {
        let mut seq = sequence(&["ok", "ok"]);
        seq.begin_render();

        assert_eq!(seq.next_matching(Id::new("ok")), Some(0));
        assert_eq!(seq.next_matching(Id::new("ok")), Some(1));
        assert_eq!(seq.next_matching(Id::new("ok")), None);
    }

    #[test]
    fn test_sentinel_is_last_and_inert() {
        let mut seq = sequence(&["a"]);
        seq.begin_render();
        let sentinel = seq.get(seq.sentinel_index()).unwrap();
        assert_eq!(sentinel.size, Vec2i::ZERO);
        assert!(!sentinel.interactive);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_next_interactive_wraps_once() {
        let mut seq = sequence(&["a", "b", "c", "d"]);
        for index in [1, 3] {
            seq.get_mut(index).unwrap().interactive = true;
        }

        assert_eq!(seq.next_interactive(None, true), Some(Id::new("b")));
        assert_eq!(seq.next_interactive(Some(1), true), Some(Id::new("d")));
        // From the last interactive element forward lands on the first.
        assert_eq!(seq.next_interactive(Some(3), true), Some(Id::new("b")));
        assert_eq!(seq.next_interactive(Some(1), false), Some(Id::new("d")));
        assert_eq!(seq.next_interactive(None, false), Some(Id::new("d")));
    }

    #[test]
    fn test_next_interactive_none_when_nothing_interactive() {
        let seq = sequence(&["a", "b"]);
        assert_eq!(seq.next_interactive(None, true), None);
        assert_eq!(seq.next_interactive(Some(0), true), None);
        assert_eq!(ElementSequence::new().next_interactive(None, true), None);
    }

    #[test]
    fn test_lone_interactive_element_keeps_focus() {
        let mut seq = sequence(&["a", "b"]);
        seq.get_mut(0).unwrap().interactive = true;
        assert_eq!(seq.next_interactive(Some(0), true), Some(Id::new("a")));
    }
}
