//! Input event vocabulary consumed by the frame orchestrator
//!
//! Mapping physical keys to these actions is the front-end's job. Press
//! sets a movement intent, release clears it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Sprint,
    Crouch,
    Jump,
    NextWeapon,
    PreviousWeapon,
    Reload,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Fire button.
    MouseButtonDown,
    /// Absolute mouse position, polled per frame.
    MouseMotion { x: f32, y: f32 },
}
