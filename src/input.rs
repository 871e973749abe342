//! Stick event model.
//!
//! The input device is a four-way pressed-button stick. Only `Pressed` +
//! `Left`/`Right` drives view cycling; every other combination is a no-op
//! for the cycler and is available to future consumers.

/// What the stick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickAction {
    Pressed,
    Released,
    Held,
}

/// Which way the stick was moved. `Enter` is the push-down click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickDirection {
    Left,
    Right,
    Up,
    Down,
    Enter,
}

/// One stick event, as drained from the sensor capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StickEvent {
    pub action: StickAction,
    pub direction: StickDirection,
}

impl StickEvent {
    pub const fn new(action: StickAction, direction: StickDirection) -> Self {
        Self { action, direction }
    }

    /// Shorthand for the only event kind the cycler reacts to.
    pub const fn pressed(direction: StickDirection) -> Self {
        Self::new(StickAction::Pressed, direction)
    }
}
