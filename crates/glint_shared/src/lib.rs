//! # GLINT Shared
//!
//! Value types used by both the layout engine and the hosts that feed it
//! input or replay its render commands.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - a GPU API
//! - a windowing crate
//! - a font rasterizer
//!
//! Two coordinate spaces exist. Callers describe sizes in *virtual* units
//! ([`Vec2`]), the engine lays out and hit-tests in *physical* pixels
//! ([`Vec2i`]).

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{
    DEFAULT_DRAG_START_THRESHOLD, DEFAULT_SCROLL_SPEED_DRAG, DEFAULT_SCROLL_SPEED_WHEEL,
    DEFAULT_VIRTUAL_RESOLUTION, MAX_SIMULTANEOUS_POINTERS,
};
pub use math::{Vec2, Vec2i, Vec4, Vec4i};
