//! The evaluation context handed to UI descriptions.
//!
//! A [`Gui`] lives for one call of [`crate::Ui::run`]. It owns the transient
//! state of both passes (group stack, element sequence, scroll clip) and
//! borrows everything that outlives the frame: the persistent interaction
//! state, the input snapshot, the text layouter and the command list.
//!
//! The widget verbs are spread over [`crate::widget`]; this module holds the
//! pass plumbing and the interaction queries every widget builds on.

use glint_shared::{Vec2, Vec2i, Vec4, Vec4i, MAX_SIMULTANEOUS_POINTERS};

use crate::config::UiConfig;
use crate::element::ElementSequence;
use crate::error::{UiError, UiResult};
use crate::frame::FrameResources;
use crate::group::Group;
use crate::id::Id;
use crate::input::{Button, InputState, Key};
use crate::interaction::{Event, EventQuery, PersistentState, PointerSample};
use crate::layout::{Layout, Rect};
use crate::render::{CommandList, RenderCommand};
use crate::style::Color;
use crate::text::TextLayouter;

/// Visible window of the open scroll region.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScrollClip {
    pub active: bool,
    /// Group stack depth at `start_scroll`.
    pub depth: usize,
    pub position: Vec2i,
    pub size: Vec2i,
    /// Per pointer: not excluded by the clip rectangle.
    pub pointer_inside: [bool; MAX_SIMULTANEOUS_POINTERS],
}

impl Default for ScrollClip {
    fn default() -> Self {
        Self {
            active: false,
            depth: 0,
            position: Vec2i::ZERO,
            size: Vec2i::ZERO,
            pointer_inside: [true; MAX_SIMULTANEOUS_POINTERS],
        }
    }
}

/// Evaluation context of one frame.
pub struct Gui<'a> {
    pub(crate) persistent: &'a mut PersistentState,
    pub(crate) input: &'a mut InputState,
    pub(crate) text: &'a mut dyn TextLayouter,
    pub(crate) commands: &'a mut CommandList,
    window_size: Vec2i,
    virtual_resolution: f32,
    pixel_scale: f32,
    layout_pass: bool,
    pub(crate) elements: ElementSequence,
    pub(crate) group: Group,
    pub(crate) group_stack: Vec<Group>,
    pub(crate) clip: ScrollClip,
    pub(crate) text_color: Color,
    pub(crate) scroll_speed_drag: f32,
    pub(crate) scroll_speed_wheel: f32,
    drag_threshold: i32,
    max_active_pointer: Option<usize>,
    focus_seen: bool,
    gamepad_event: Event,
    current_pointer: Option<usize>,
    fault: Option<UiError>,
}

#[allow(clippy::cast_precision_loss)]
fn pixel_scale(window_size: Vec2i, virtual_resolution: f32) -> f32 {
    let scale = Vec2::from(window_size) / virtual_resolution;
    scale.min_element()
}

const fn action_event(button: Button) -> Option<Event> {
    if button.is_down {
        Some(Event::IS_DOWN)
    } else if button.went_down {
        Some(Event::WENT_DOWN)
    } else if button.went_up {
        Some(Event::WENT_UP)
    } else {
        None
    }
}

impl<'a> Gui<'a> {
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn new(
        persistent: &'a mut PersistentState,
        config: &UiConfig,
        resources: FrameResources<'a>,
        mut elements: ElementSequence,
    ) -> Self {
        elements.clear();
        let FrameResources {
            window_size,
            input,
            text,
            commands,
        } = resources;

        let mut max_active_pointer = config.mouse_always_active.then_some(0);
        for (index, pointer) in input.pointers().iter().enumerate() {
            if pointer.button.is_active() {
                max_active_pointer = Some(max_active_pointer.map_or(index, |m| m.max(index)));
            }
        }

        Self {
            persistent,
            input,
            text,
            commands,
            window_size,
            virtual_resolution: config.virtual_resolution,
            pixel_scale: pixel_scale(window_size, config.virtual_resolution),
            layout_pass: true,
            elements,
            group: Group::new(Layout::VERTICAL_LEFT, 0, 0),
            group_stack: Vec::with_capacity(16),
            clip: ScrollClip::default(),
            text_color: config.text_color,
            scroll_speed_drag: config.scroll_speed_drag,
            scroll_speed_wheel: config.scroll_speed_wheel,
            drag_threshold: config.drag_start_threshold as i32,
            max_active_pointer,
            focus_seen: false,
            gamepad_event: Event::HOVER,
            current_pointer: None,
            fault: None,
        }
    }

    // =========================================================================
    // PASS CONTROL - Layout/render transitions and fault reporting
    // =========================================================================

    /// Records a usage error. The first one is returned from `run`.
    pub(crate) fn fault(&mut self, error: UiError) {
        tracing::error!(%error, layout_pass = self.layout_pass, "ui usage error");
        if self.fault.is_none() {
            self.fault = Some(error);
        }
    }

    fn check_balanced(&mut self) {
        if !self.group_stack.is_empty() {
            let open = self.group_stack.len();
            self.fault(UiError::UnbalancedGroups { open });
        }
        if self.clip.active {
            self.fault(UiError::UnbalancedScroll);
        }
    }

    pub(crate) fn finish_layout_pass(&mut self) -> UiResult<()> {
        self.check_balanced();
        tracing::trace!(elements = self.elements.len(), "layout pass done");
        self.fault.clone().map_or(Ok(()), Err)
    }

    pub(crate) fn begin_render_pass(&mut self) {
        self.elements.begin_render();
        self.layout_pass = false;
        self.group_stack.clear();
        self.group = Group::new(Layout::VERTICAL_LEFT, 0, 0);
        self.group.size = self.elements.get(0).map_or(Vec2i::ZERO, |root| root.size);
        self.clip = ScrollClip::default();
        self.commands.push(RenderCommand::Viewport {
            size: self.window_size,
        });
        self.apply_navigation();
    }

    pub(crate) fn finish_render_pass(&mut self) -> UiResult<()> {
        self.check_balanced();
        if !self.focus_seen || self.persistent.focus().is_none() {
            // Nothing holds focus, or the focused element went away.
            let first = self.elements.next_interactive(None, true);
            self.persistent.set_focus(first);
        }
        self.persistent.end_frame(self.input.pointers());
        tracing::trace!(elements = self.elements.len(), "render pass done");
        self.fault.take().map_or(Ok(()), Err)
    }

    pub(crate) fn into_elements(self) -> ElementSequence {
        self.elements
    }

    /// True while measuring, false while placing and drawing.
    #[must_use]
    pub fn is_layout_pass(&self) -> bool {
        self.layout_pass
    }

    /// Element records of this frame.
    #[must_use]
    pub fn elements(&self) -> &ElementSequence {
        &self.elements
    }

    /// Read access to the state that survives frames.
    #[must_use]
    pub fn persistent(&self) -> &PersistentState {
        self.persistent
    }

    // =========================================================================
    // SCALING - Virtual units to physical pixels
    // =========================================================================

    /// Physical pixels per virtual unit.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.pixel_scale
    }

    /// Window size in physical pixels.
    #[must_use]
    pub fn window_size(&self) -> Vec2i {
        self.window_size
    }

    /// Virtual units mapped onto the shorter window axis.
    #[must_use]
    pub fn virtual_resolution(&self) -> f32 {
        self.virtual_resolution
    }

    pub(crate) fn set_virtual_resolution(&mut self, virtual_resolution: f32) {
        self.virtual_resolution = virtual_resolution;
        self.pixel_scale = pixel_scale(self.window_size, virtual_resolution);
    }

    /// Maps a virtual size to physical pixels, rounding to the nearest pixel.
    #[must_use]
    pub fn virtual_to_physical(&self, v: Vec2) -> Vec2i {
        Vec2i::new(self.to_physical(v.x), self.to_physical(v.y))
    }

    pub(crate) fn virtual_to_physical4(&self, v: Vec4) -> Vec4i {
        Vec4i::new(
            self.to_physical(v.x),
            self.to_physical(v.y),
            self.to_physical(v.z),
            self.to_physical(v.w),
        )
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn to_physical(&self, v: f32) -> i32 {
        (v * self.pixel_scale + 0.5) as i32
    }

    // =========================================================================
    // INTERACTION - Events, capture and navigation
    // =========================================================================

    /// Events of the current group for this frame.
    ///
    /// In the layout pass this only marks the group interactive.
    pub fn check_event(&mut self) -> Event {
        self.check_event_with(false)
    }

    /// Like [`Gui::check_event`]; `drag_only` suppresses press/release
    /// events so only drag transitions and hover are reported.
    pub fn check_event_with(&mut self, drag_only: bool) -> Event {
        let index = self.group.element_index;
        if self.layout_pass {
            if let Some(element) = self.elements.get_mut(index) {
                element.interactive = true;
            }
            return Event::empty();
        }
        let Some(element) = self.elements.get(index).copied() else {
            return Event::empty();
        };
        if !element.interactive {
            return Event::empty();
        }

        let mut samples = [PointerSample::default(); MAX_SIMULTANEOUS_POINTERS];
        let count = self.max_active_pointer.map_or(0, |max| max + 1);
        for (i, sample) in samples.iter_mut().enumerate().take(count) {
            let pointer = self.input.pointer(i);
            *sample = PointerSample {
                position: pointer.position,
                button: pointer.button,
                inside_clip: self.clip.pointer_inside[i],
            };
        }

        let query = EventQuery {
            id: element.id,
            rect: Rect::from_pos_size(self.group.position, self.group.size),
            drag_only,
            drag_threshold: self.drag_threshold,
            pointers: &samples[..count],
        };
        if let Some(hit) = self.persistent.pointer_event(&query) {
            if hit.took_focus {
                self.stop_text_input();
            }
            if self.persistent.focus() == Some(element.id) {
                self.focus_seen = true;
            }
            self.current_pointer = Some(hit.pointer);
            return hit.event;
        }

        if self.persistent.focus() == Some(element.id) {
            self.focus_seen = true;
            return self.gamepad_event;
        }
        Event::empty()
    }

    /// Position of the pointer that produced the latest event.
    #[must_use]
    pub fn pointer_position(&self) -> Vec2i {
        self.input.pointer(self.current_pointer.unwrap_or(0)).position
    }

    pub(crate) fn pointer_delta(&self) -> Vec2i {
        self.input.pointer(self.current_pointer.unwrap_or(0)).delta
    }

    pub(crate) fn active_pointers(&self) -> usize {
        self.max_active_pointer.map_or(0, |max| max + 1)
    }

    /// Routes all pointer events to `id` until released.
    pub fn capture_pointer(&mut self, id: impl Into<Id>) {
        self.persistent.capture_pointer(id.into(), self.current_pointer);
    }

    /// Releases the pointer capture.
    pub fn release_pointer(&mut self) {
        self.persistent.release_pointer();
    }

    /// True if `id` holds the pointer capture.
    #[must_use]
    pub fn is_pointer_captured(&self, id: impl Into<Id>) -> bool {
        self.persistent.is_pointer_captured(id.into())
    }

    /// Routes keyboard input to `id` and opens a text-input session.
    pub fn capture_input(&mut self, id: impl Into<Id>) {
        self.persistent.set_input_capture(Some(id.into()));
        if !self.input.is_recording_text_input() {
            self.input.record_text_input(true);
        }
        self.input.start_text_input();
    }

    /// Releases the keyboard capture, drops focus and closes text input.
    pub fn release_input(&mut self) {
        self.persistent.set_input_capture(None);
        self.stop_text_input();
    }

    fn stop_text_input(&mut self) {
        if self.input.is_recording_text_input() {
            self.input.record_text_input(false);
        }
        self.input.stop_text_input();
    }

    /// Overrides the scroll speeds for the rest of this evaluation.
    pub fn set_scroll_speed(&mut self, drag: f32, wheel: f32) {
        self.scroll_speed_drag = drag;
        self.scroll_speed_wheel = wheel;
    }

    /// Overrides the drag threshold (physical pixels) for the rest of this
    /// evaluation.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_drag_start_threshold(&mut self, threshold: f32) {
        self.drag_threshold = threshold as i32;
    }

    /// Moves focus on keyboard/gamepad input. Suppressed while the keyboard
    /// is captured.
    fn apply_navigation(&mut self) {
        self.gamepad_event = Event::HOVER;
        if self.persistent.input_capture().is_some() {
            return;
        }

        let keyboard = (
            self.input.key(Key::Left),
            self.input.key(Key::Right),
            self.input.key(Key::Enter),
        );
        let sources = std::iter::once(keyboard).chain(
            self.input
                .gamepads
                .iter()
                .map(|pad| (pad.left, pad.right, pad.action)),
        );

        let mut forward = None;
        let mut action = None;
        for (left, right, confirm) in sources {
            if forward.is_none() {
                if right.went_up {
                    forward = Some(true);
                } else if left.went_up {
                    forward = Some(false);
                }
            }
            if action.is_none() {
                action = action_event(confirm);
            }
        }

        if let Some(event) = action {
            self.gamepad_event = event;
        }
        if let Some(forward) = forward {
            let start = self
                .persistent
                .focus()
                .and_then(|focus| self.elements.index_of(focus));
            if let Some(start) = start {
                let next = self.elements.next_interactive(Some(start), forward);
                self.persistent.set_focus(next);
            }
        }
    }
}
