//! # UI Error Types
//!
//! Every error here is a programmer-usage error in the UI description or the
//! host setup. They are surfaced from [`crate::Ui::run`] for the frame in
//! which they were detected and are never recovered internally.

use thiserror::Error;

/// Errors that can occur while evaluating a UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A UI evaluation was started while another one is active.
    #[error("a UI evaluation is already active")]
    NestedEvaluation,

    /// A pass ended with groups still open.
    #[error("unbalanced groups: {open} group(s) still open at the end of the pass")]
    UnbalancedGroups {
        /// Number of groups left on the stack.
        open: usize,
    },

    /// `end_group` was called with no open group.
    #[error("end_group called without a matching start_group")]
    GroupUnderflow,

    /// A scroll region was started inside another scroll region.
    #[error("scroll regions cannot be nested")]
    NestedScroll,

    /// `end_scroll` without `start_scroll`, or a pass ended inside a scroll region.
    #[error("unbalanced scroll region")]
    UnbalancedScroll,

    /// Sliders only run horizontally or vertically.
    #[error("sliders require a horizontal or vertical direction")]
    InvalidSliderDirection,

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("cannot read configuration: {0}")]
    ConfigIo(String),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
