//! Sliders.

use crate::error::UiError;
use crate::gui::Gui;
use crate::interaction::Event;
use crate::layout::Direction;

impl Gui<'_> {
    /// Makes the current group a slider along `direction`. `value` (0..=1)
    /// follows the pointer while the slider is pressed or dragged.
    ///
    /// The knob is as long as the slider is thick, so the track is the
    /// group length minus the cross-axis size.
    #[allow(clippy::cast_precision_loss)]
    pub fn start_slider(&mut self, direction: Direction, value: &mut f32) {
        if direction == Direction::Overlay {
            self.fault(UiError::InvalidSliderDirection);
            return;
        }
        let event = self.check_event();
        if self.is_layout_pass() {
            return;
        }

        let Some(id) = self.elements.get(self.group.element_index).map(|e| e.id) else {
            return;
        };
        if event.contains(Event::START_DRAG) {
            self.capture_pointer(id);
        } else if event.contains(Event::END_DRAG) {
            self.release_pointer();
        }

        if event.intersects(
            Event::START_DRAG | Event::IS_DRAGGING | Event::WENT_DOWN | Event::IS_DOWN,
        ) {
            let pointer = self.pointer_position() - self.group.position;
            let size = self.group.size;
            let (along, length, knob) = match direction {
                Direction::Vertical => (pointer.y, size.y, size.x),
                _ => (pointer.x, size.x, size.y),
            };
            let track = length - knob;
            let updated = if track <= 0 {
                0.0
            } else {
                ((along as f32 - knob as f32 * 0.5) / track as f32).clamp(0.0, 1.0)
            };
            if (updated - *value).abs() > f32::EPSILON {
                tracing::debug!(?id, value = updated, "slider moved");
            }
            *value = updated;
        }
    }

    /// Closes a slider declaration.
    pub fn end_slider(&mut self) {}
}
