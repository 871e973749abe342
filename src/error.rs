//! Error taxonomy.
//!
//! Two families, split by when they can occur:
//!
//! - [`ConfigError`] — wiring mistakes caught while views and calculators
//!   are constructed, before the loop starts.
//! - [`RenderError`] — failures while rendering a frame. These indicate a
//!   wiring defect (a view naming a reading the backend lacks) or a display
//!   capability failure, and always propagate; nothing in the loop retries
//!   or swallows them.

use core::fmt::Debug;

use thiserror::Error;

/// Wiring-time errors. Abort setup before the loop starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A color range must be a non-empty finite interval.
    #[error("color range is empty: max ({max}) must exceed min ({min})")]
    EmptyRange { min: f32, max: f32 },

    /// The cycler needs at least one view to activate.
    #[error("view cycler requires at least one view")]
    NoViews,

    /// Each view claims one status indicator cell; the status row has 16.
    #[error("{count} views registered, but the status region has only 16 indicator cells")]
    TooManyViews { count: usize },
}

/// Frame-time errors, generic over the display capability's own error type
/// so capability failures propagate unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError<E: Debug> {
    /// A full-screen view references a reading the sensor capability does
    /// not provide.
    #[error("sensor capability does not expose `{0}`")]
    UnknownProperty(&'static str),

    /// The display capability rejected a write.
    #[error("display rejected a write: {0:?}")]
    Display(E),
}
