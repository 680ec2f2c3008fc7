//! # GLINT UI
//!
//! Immediate-mode layout and interaction engine. A UI is a closure of
//! nested widget calls re-issued every frame; the engine infers sizes,
//! positions, clipping and input routing without a retained widget tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       FRAME PIPELINE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  InputState ─┐                                                │
//! │              ├─ layout pass ─ render pass ─┬─ CommandList    │
//! │  description ┘   (measure)     (place)     └─ events, focus  │
//! │                      ↓             ↑                          │
//! │                  ElementSequence (matched by Id)              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use glint_shared::Vec2i;
//! use glint_ui::{
//!     CommandList, FrameResources, InputState, Layout, MonospaceLayouter, Ui, UiConfig,
//! };
//!
//! let mut ui = Ui::new(UiConfig::default());
//! let mut input = InputState::new();
//! let mut fonts = MonospaceLayouter;
//! let mut commands = CommandList::new();
//!
//! let resources = FrameResources {
//!     window_size: Vec2i::new(1280, 720),
//!     input: &mut input,
//!     text: &mut fonts,
//!     commands: &mut commands,
//! };
//! ui.run(resources, |gui| {
//!     gui.start_group(Layout::VERTICAL_CENTER, 10.0, "menu");
//!     gui.label("Paused", 40.0);
//!     gui.start_group(Layout::HORIZONTAL_CENTER, 0.0, "resume");
//!     if gui.check_event().contains(glint_ui::Event::WENT_UP) {
//!         // resume the game
//!     }
//!     gui.label("Resume", 30.0);
//!     gui.end_group();
//!     gui.end_group();
//! })
//! .unwrap();
//!
//! assert!(!commands.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod element;
pub mod error;
pub mod frame;
pub mod group;
pub mod gui;
pub mod id;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod style;
pub mod text;
pub mod text_edit;
pub mod widget;

pub use config::UiConfig;
pub use element::{Element, ElementSequence};
pub use error::{UiError, UiResult};
pub use frame::{EvaluationGuard, FrameResources, Ui};
pub use gui::Gui;
pub use id::Id;
pub use input::{Button, Gamepad, InputState, Key, Pointer, TextEvent};
pub use interaction::{DragState, Event, PersistentState};
pub use layout::{Alignment, Direction, Layout, Margin, Rect};
pub use render::{
    nine_patch_vertices, CommandList, RenderCommand, Texture, TextureId, UiVertex,
    NINE_PATCH_INDICES,
};
pub use style::Color;
pub use text::{MonospaceLayouter, TextLayout, TextLayouter};
pub use text_edit::{EditMode, TextEdit};
