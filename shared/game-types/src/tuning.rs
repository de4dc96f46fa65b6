//! Gameplay tuning constants
//!
//! Timers are in seconds and advance by the frame delta; rates without a
//! time unit are per-tick values at the fixed 60 Hz step.

/// Screen geometry the mouse bands and reticle are expressed in.
pub mod screen {
    pub const WIDTH: u32 = 1000;
    pub const HEIGHT: u32 = 600;
    pub const CENTER_X: f32 = 500.0;
    pub const CENTER_Y: f32 = 300.0;
}

/// Player movement
pub mod movement {
    /// Maximum walking speed (units per tick)
    pub const MAX_SPEED: f32 = 2.0;
    /// Maximum speed while sprinting
    pub const SPRINT_SPEED: f32 = 4.0;
    /// Maximum speed while crouching
    pub const CROUCH_SPEED: f32 = 1.0;
    /// Speed gained per tick while an intent is held
    pub const ACCELERATION: f32 = 0.3;
    /// Per-tick decay factor when no intent is held
    pub const FRICTION: f32 = 0.85;
    /// Speeds below this magnitude snap to exactly zero
    pub const STOP_EPSILON: f32 = 0.01;
    /// Radius used when rejecting movement into world objects
    pub const COLLIDE_RADIUS: f32 = 50.0;
}

/// Four-tier mouse-driven head rotation (radians per tick).
pub mod rotation {
    pub const FAST: f32 = 0.04;
    pub const MEDIUM: f32 = 0.02;
    pub const SLOW: f32 = 0.008;

    /// Band edges in screen X; between `SLOW_LEFT` and `SLOW_RIGHT` is the
    /// dead zone.
    pub const FAST_LEFT: f32 = 150.0;
    pub const MEDIUM_LEFT: f32 = 300.0;
    pub const SLOW_LEFT: f32 = 400.0;
    pub const SLOW_RIGHT: f32 = 600.0;
    pub const MEDIUM_RIGHT: f32 = 700.0;
    pub const FAST_RIGHT: f32 = 850.0;
}

/// Seven-tier vertical look scroll (pixels per tick).
pub mod scroll {
    pub const FAST: f32 = 3.0;
    pub const MEDIUM: f32 = 1.5;
    pub const SLOW: f32 = 0.6;

    pub const UP_FAST: f32 = 150.0;
    pub const UP_MEDIUM: f32 = 250.0;
    pub const UP_SLOW: f32 = 300.0;
    pub const DOWN_SLOW: f32 = 300.0;
    pub const DOWN_MEDIUM: f32 = 375.0;
    pub const DOWN_FAST: f32 = 450.0;

    /// Clamp band for the pure-scroll ground offset.
    pub const MIN_GROUND_Y: f32 = -120.0;
    pub const MAX_GROUND_Y: f32 = 80.0;
}

/// Jump state machine
pub mod jump {
    /// Anticipation squat duration (seconds)
    pub const PREPARE_DURATION: f32 = 0.15;
    /// How far the squat dips below the baseline (pixels)
    pub const PREPARE_DIP: f32 = 30.0;
    /// Gravity (pixels per second squared, negative is down)
    pub const GRAVITY: f32 = -1000.0;
    /// Initial upward velocity (pixels per second)
    pub const FORCE: f32 = 450.0;
}

/// Crouch state machine
pub mod crouch {
    /// Ground offset while fully crouched (pixels, negative is down)
    pub const OFFSET: f32 = -40.0;
    /// Descent/ascent animation duration (seconds)
    pub const DURATION: f32 = 0.2;
}

/// Sprint head-bob
pub mod head_bob {
    pub const AMPLITUDE: f32 = 2.0;
    /// Cycles per second
    pub const FREQUENCY: f32 = 2.5;
    /// Phase decay factor per tick while inactive
    pub const DAMPING: f32 = 0.9;
}

/// Weapon timings, resting positions and sway bounds (screen pixels).
pub mod weapon {
    /// Muzzle flash duration (seconds)
    pub const FIRE_FLASH_DURATION: f32 = 0.3;
    /// Duration of each switch-animation phase (seconds)
    pub const SWITCH_PHASE_DURATION: f32 = 0.3;
    /// Gun reload duration (seconds)
    pub const RELOAD_DURATION: f32 = 1.5;

    pub const GUN_MAGAZINE: u16 = 10;
    pub const GUN_RESERVE: u16 = 30;

    pub const REST_X: f32 = 350.0;
    pub const GUN_REST_Y: f32 = 305.0;
    pub const BOW_REST_Y: f32 = 35.0;
    /// Y used by both switch phases as the off-screen position.
    pub const OFFSCREEN_Y: f32 = 600.0;

    /// Sway rate (pixels per tick)
    pub const SWAY_RATE: f32 = 1.0;
    /// Mouse bands that drive sway.
    pub const MOUSE_TOP: f32 = 250.0;
    pub const MOUSE_BOTTOM: f32 = 360.0;
    pub const MOUSE_LEFT: f32 = 365.0;
    pub const MOUSE_RIGHT: f32 = 600.0;
    /// Horizontal drift bounds.
    pub const X_MIN: f32 = 320.0;
    pub const X_MAX: f32 = 430.0;
    /// Gun vertical drift, relative to its resting Y.
    pub const GUN_SWAY_UP: f32 = 55.0;
    pub const GUN_SWAY_DOWN: f32 = 15.0;
    /// Bow vertical drift, absolute.
    pub const BOW_Y_MIN: f32 = -80.0;
    pub const BOW_Y_MAX: f32 = 50.0;
}
