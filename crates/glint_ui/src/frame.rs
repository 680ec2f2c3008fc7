//! Frame entry point: runs a UI description through both passes.
//!
//! ```text
//! run(description)
//!   ├─ layout pass:  description(gui)  → element sizes, bottom-up
//!   ├─ sentinel + navigation + Viewport command
//!   ├─ render pass:  description(gui)  → positions, draws, events
//!   └─ focus resolution
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use glint_shared::Vec2i;

use crate::config::UiConfig;
use crate::element::ElementSequence;
use crate::error::{UiError, UiResult};
use crate::gui::Gui;
use crate::id::Id;
use crate::input::InputState;
use crate::interaction::PersistentState;
use crate::render::CommandList;
use crate::text::TextLayouter;

/// Set while any evaluation runs, on any thread.
static EVALUATING: AtomicBool = AtomicBool::new(false);

/// Scoped claim on the process-wide evaluation slot.
#[derive(Debug)]
pub struct EvaluationGuard {
    _private: (),
}

impl EvaluationGuard {
    /// Claims the slot.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NestedEvaluation`] if an evaluation is already
    /// running, nested on this thread or on another thread.
    pub fn acquire() -> UiResult<Self> {
        EVALUATING
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map(|_| Self { _private: () })
            .map_err(|_| UiError::NestedEvaluation)
    }

    /// True while an evaluation holds the slot.
    #[must_use]
    pub fn is_active() -> bool {
        EVALUATING.load(Ordering::Acquire)
    }
}

impl Drop for EvaluationGuard {
    fn drop(&mut self) {
        EVALUATING.store(false, Ordering::Release);
    }
}

/// Collaborators borrowed for one frame.
pub struct FrameResources<'a> {
    /// Window size in physical pixels.
    pub window_size: Vec2i,
    /// Input snapshot for this frame.
    pub input: &'a mut InputState,
    /// Font subsystem.
    pub text: &'a mut dyn TextLayouter,
    /// Receives the render pass output. Not cleared by the engine.
    pub commands: &'a mut CommandList,
}

/// Owner of the state that outlives frames.
#[derive(Debug, Default)]
pub struct Ui {
    config: UiConfig,
    persistent: PersistentState,
    elements: ElementSequence,
}

impl Ui {
    /// Creates an engine with no focus and no capture.
    #[must_use]
    pub fn new(config: UiConfig) -> Self {
        Self {
            config,
            persistent: PersistentState::new(),
            elements: ElementSequence::new(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Evaluates `description` twice: once to measure, once to place, draw
    /// and dispatch events.
    ///
    /// # Errors
    ///
    /// Returns the first usage error of the frame. A layout pass error skips
    /// the render pass.
    pub fn run<F>(&mut self, resources: FrameResources<'_>, mut description: F) -> UiResult<()>
    where
        F: FnMut(&mut Gui<'_>),
    {
        let _guard = EvaluationGuard::acquire()?;
        let FrameResources {
            window_size,
            input,
            text,
            commands,
        } = resources;
        // Reborrow so the frame borrows share the lifetime of `self`.
        let resources = FrameResources {
            window_size,
            input: &mut *input,
            text: &mut *text,
            commands: &mut *commands,
        };
        let elements = std::mem::take(&mut self.elements);
        let mut gui = Gui::new(&mut self.persistent, &self.config, resources, elements);

        description(&mut gui);
        let result = gui.finish_layout_pass().and_then(|()| {
            gui.begin_render_pass();
            description(&mut gui);
            gui.finish_render_pass()
        });

        self.elements = gui.into_elements();
        result
    }

    /// Element records of the last frame, sentinel included.
    #[must_use]
    pub fn elements(&self) -> &ElementSequence {
        &self.elements
    }

    /// Element with keyboard/gamepad focus.
    #[must_use]
    pub fn focus(&self) -> Option<Id> {
        self.persistent.focus()
    }

    /// Element capturing keyboard/IME input.
    #[must_use]
    pub fn input_capture(&self) -> Option<Id> {
        self.persistent.input_capture()
    }

    /// Element capturing the pointer.
    #[must_use]
    pub fn pointer_capture(&self) -> Option<Id> {
        self.persistent.pointer_capture()
    }

    /// All state that survives frames.
    #[must_use]
    pub fn persistent(&self) -> &PersistentState {
        &self.persistent
    }
}
