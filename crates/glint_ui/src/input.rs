//! Input snapshot consumed by the engine.
//!
//! The host feeds raw device events into an [`InputState`] between frames
//! and calls [`InputState::begin_frame`] before feeding the next batch. The
//! engine only reads the snapshot, except for the text-input session toggles
//! that an edit field flips when it captures the keyboard.

use glint_shared::{Vec2i, MAX_SIMULTANEOUS_POINTERS};

use crate::layout::Rect;

/// Per-frame transitions of one digital button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    /// Pressed during this frame.
    pub went_down: bool,
    /// Held at the end of this frame.
    pub is_down: bool,
    /// Released during this frame.
    pub went_up: bool,
}

impl Button {
    /// Records a press.
    pub fn press(&mut self) {
        if !self.is_down {
            self.went_down = true;
        }
        self.is_down = true;
    }

    /// Records a release.
    pub fn release(&mut self) {
        if self.is_down {
            self.went_up = true;
        }
        self.is_down = false;
    }

    /// Clears the transitions, keeping the held state.
    pub fn begin_frame(&mut self) {
        self.went_down = false;
        self.went_up = false;
    }

    /// True if the button did anything this frame.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.went_down || self.is_down || self.went_up
    }
}

/// One mouse cursor or touch finger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pointer {
    /// Current position in physical pixels.
    pub position: Vec2i,
    /// Movement accumulated this frame.
    pub delta: Vec2i,
    /// Primary button (or finger contact).
    pub button: Button,
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Space bar.
    Space,
}

impl Key {
    /// Keys forwarded to the text-input queue while recording.
    const fn edits_text(self) -> bool {
        matches!(
            self,
            Self::Escape
                | Self::Enter
                | Self::Backspace
                | Self::Delete
                | Self::Left
                | Self::Right
                | Self::Home
                | Self::End
        )
    }
}

/// Queued text-input event, delivered to the field that captures the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEvent {
    /// Committed text.
    Text(String),
    /// Editing key.
    Key(Key),
}

/// Buttons of one gamepad used for focus navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gamepad {
    /// D-pad left.
    pub left: Button,
    /// D-pad right.
    pub right: Button,
    /// Confirm button.
    pub action: Button,
}

impl Gamepad {
    fn begin_frame(&mut self) {
        self.left.begin_frame();
        self.right.begin_frame();
        self.action.begin_frame();
    }
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointers: [Pointer; MAX_SIMULTANEOUS_POINTERS],
    /// Wheel movement this frame.
    pub wheel_delta: Vec2i,
    /// Keys pressed this frame.
    keys_pressed: Vec<Key>,
    /// Keys released this frame.
    keys_released: Vec<Key>,
    /// Keys currently held.
    keys_down: Vec<Key>,
    /// Connected gamepads.
    pub gamepads: Vec<Gamepad>,
    text_events: Vec<TextEvent>,
    recording_text: bool,
    text_input_active: bool,
    text_input_rect: Option<Rect>,
    ticks_ms: u64,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame state.
    pub fn begin_frame(&mut self) {
        for pointer in &mut self.pointers {
            pointer.delta = Vec2i::ZERO;
            pointer.button.begin_frame();
        }
        for gamepad in &mut self.gamepads {
            gamepad.begin_frame();
        }
        self.wheel_delta = Vec2i::ZERO;
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Moves pointer `index`.
    pub fn pointer_move(&mut self, index: usize, position: Vec2i) {
        if let Some(pointer) = self.pointers.get_mut(index) {
            pointer.delta += position - pointer.position;
            pointer.position = position;
        }
    }

    /// Records a press of pointer `index` at `position`.
    pub fn pointer_down(&mut self, index: usize, position: Vec2i) {
        self.pointer_move(index, position);
        if let Some(pointer) = self.pointers.get_mut(index) {
            pointer.button.press();
        }
    }

    /// Records a release of pointer `index` at `position`.
    pub fn pointer_up(&mut self, index: usize, position: Vec2i) {
        self.pointer_move(index, position);
        if let Some(pointer) = self.pointers.get_mut(index) {
            pointer.button.release();
        }
    }

    /// Records wheel input.
    pub fn wheel(&mut self, dx: i32, dy: i32) {
        self.wheel_delta += Vec2i::new(dx, dy);
    }

    /// Pointer `index`; out-of-range indices read as an idle pointer.
    #[must_use]
    pub fn pointer(&self, index: usize) -> Pointer {
        self.pointers.get(index).copied().unwrap_or_default()
    }

    /// All pointer slots.
    #[must_use]
    pub fn pointers(&self) -> &[Pointer] {
        &self.pointers
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_pressed.push(key);
            self.keys_down.push(key);
        }
        if self.recording_text && key.edits_text() {
            self.text_events.push(TextEvent::Key(key));
        }
    }

    /// Records a key release.
    pub fn key_up(&mut self, key: Key) {
        if self.keys_down.contains(&key) {
            self.keys_released.push(key);
            self.keys_down.retain(|&k| k != key);
        }
    }

    /// Button view of a key for this frame.
    #[must_use]
    pub fn key(&self, key: Key) -> Button {
        Button {
            went_down: self.keys_pressed.contains(&key),
            is_down: self.keys_down.contains(&key),
            went_up: self.keys_released.contains(&key),
        }
    }

    /// Records committed text; ignored unless text input is being recorded.
    pub fn text(&mut self, text: &str) {
        if self.recording_text && !text.is_empty() {
            self.text_events.push(TextEvent::Text(text.to_string()));
        }
    }

    /// Pending text-input events.
    #[must_use]
    pub fn text_events(&self) -> &[TextEvent] {
        &self.text_events
    }

    /// Drops all pending text-input events.
    pub fn clear_text_events(&mut self) {
        self.text_events.clear();
    }

    /// Starts or stops queueing text-input events.
    pub fn record_text_input(&mut self, record: bool) {
        self.recording_text = record;
        if !record {
            self.text_events.clear();
        }
    }

    /// True while text-input events are queued.
    #[must_use]
    pub fn is_recording_text_input(&self) -> bool {
        self.recording_text
    }

    /// Opens the platform text-input (IME) session.
    pub fn start_text_input(&mut self) {
        self.text_input_active = true;
    }

    /// Closes the platform text-input (IME) session.
    pub fn stop_text_input(&mut self) {
        self.text_input_active = false;
        self.text_input_rect = None;
    }

    /// True while a text-input session is open.
    #[must_use]
    pub fn is_text_input_active(&self) -> bool {
        self.text_input_active
    }

    /// Tells the platform where the caret is, for IME candidate windows.
    pub fn set_text_input_rect(&mut self, rect: Rect) {
        self.text_input_rect = Some(rect);
    }

    /// Last caret rectangle reported by an edit field.
    #[must_use]
    pub fn text_input_rect(&self) -> Option<Rect> {
        self.text_input_rect
    }

    /// Advances the monotonic clock.
    pub fn advance_time(&mut self, ms: u64) {
        self.ticks_ms += ms;
    }

    /// Milliseconds since the host started feeding input.
    #[must_use]
    pub fn ticks_ms(&self) -> u64 {
        self.ticks_ms
    }
}
