//! # Engine Defaults
//!
//! Values the engine falls back to when the host configuration does not
//! override them.

// =============================================================================
// COORDINATE MAPPING
// =============================================================================

/// Virtual resolution mapped onto the shorter window axis.
///
/// With the default, a UI described in a 1000x1000 virtual space fills a
/// square window exactly and letterboxes on wider ones.
pub const DEFAULT_VIRTUAL_RESOLUTION: f32 = 1000.0;

// =============================================================================
// POINTER HANDLING
// =============================================================================

/// Pointers (mouse + touch fingers) tracked per frame.
pub const MAX_SIMULTANEOUS_POINTERS: usize = 10;

/// Scroll pixels per pixel of pointer drag.
pub const DEFAULT_SCROLL_SPEED_DRAG: f32 = 2.0;

/// Scroll pixels per wheel notch.
pub const DEFAULT_SCROLL_SPEED_WHEEL: f32 = 16.0;

/// Distance in physical pixels a held pointer must travel before a drag starts.
pub const DEFAULT_DRAG_START_THRESHOLD: f32 = 8.0;
