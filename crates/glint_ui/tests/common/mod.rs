//! Headless frame driver shared by the integration tests.
//!
//! A 1000x1000 window at the default virtual resolution of 1000 gives a
//! pixel scale of exactly 1, so virtual sizes in the tests are also pixels.
//!
//! Only one evaluation may run per process, so each harness holds a shared
//! lock for its lifetime and the tests of a binary take turns.

#![allow(dead_code)]

use glint_shared::{Vec2, Vec2i};
use parking_lot::{Mutex, MutexGuard};
use glint_ui::{
    CommandList, Event, FrameResources, Gui, Id, InputState, Layout, MonospaceLayouter,
    RenderCommand, Ui, UiConfig, UiResult,
};

static EVALUATION_TURN: Mutex<()> = parking_lot::const_mutex(());

pub struct Harness {
    pub ui: Ui,
    pub input: InputState,
    pub fonts: MonospaceLayouter,
    pub commands: CommandList,
    pub window: Vec2i,
    _turn: MutexGuard<'static, ()>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            ui: Ui::new(config),
            input: InputState::new(),
            fonts: MonospaceLayouter,
            commands: CommandList::new(),
            window: Vec2i::new(1000, 1000),
            _turn: EVALUATION_TURN.lock(),
        }
    }

    /// Runs one frame and returns its render commands. Input fed before the
    /// call is consumed by the frame.
    pub fn frame<F>(&mut self, description: F) -> UiResult<Vec<RenderCommand>>
    where
        F: FnMut(&mut Gui<'_>),
    {
        self.commands.begin_frame();
        let result = self.ui.run(
            FrameResources {
                window_size: self.window,
                input: &mut self.input,
                text: &mut self.fonts,
                commands: &mut self.commands,
            },
            description,
        );
        let commands = self.commands.end_frame();
        self.input.begin_frame();
        result.map(|()| commands)
    }
}

/// A clickable `width` x `height` group.
pub fn button(gui: &mut Gui<'_>, id: &str, width: f32, height: f32) -> Event {
    gui.start_group(Layout::HORIZONTAL_TOP, 0.0, id);
    let event = gui.check_event();
    gui.custom_element(Vec2::new(width, height), Id::new(id).child("face"), |_, _, _| {});
    gui.end_group();
    event
}

/// A non-interactive `width` x `height` leaf.
pub fn block(gui: &mut Gui<'_>, id: impl Into<Id>, width: f32, height: f32) {
    gui.custom_element(Vec2::new(width, height), id, |_, _, _| {});
}
