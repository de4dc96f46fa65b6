//! Camera state machines: vertical scroll, jump, crouch and head-bob
//!
//! The camera owns a single rendering-visible scalar, `ground_y`. Jump and
//! crouch drive it through their own state machines (crouch is blocked
//! while airborne and vice versa); head-bob is a transient render-only
//! delta that is never folded into `ground_y`.

use core::f32::consts::TAU;

use crate::audio::AudioCue;
use crate::tuning::{crouch, head_bob, jump, scroll};

/// Jump phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    Idle,
    /// Anticipation squat before leaving the ground.
    Prepare,
    Jumping,
    Descending,
}

#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical ground offset in screen pixels, the only camera state the
    /// renderer consumes.
    pub ground_y: f32,
    /// Baseline snapshotted when a jump or crouch starts.
    pub saved_ground_y: f32,

    pub jump_state: JumpState,
    jump_timer: f32,
    jump_velocity: f32,

    pub is_crouching: bool,
    crouch_animating: bool,
    /// 1 descending, -1 rising.
    crouch_direction: i8,
    crouch_timer: f32,

    head_bob_timer: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            ground_y: 0.0,
            saved_ground_y: 0.0,
            jump_state: JumpState::Idle,
            jump_timer: 0.0,
            jump_velocity: 0.0,
            is_crouching: false,
            crouch_animating: false,
            crouch_direction: 0,
            crouch_timer: 0.0,
            head_bob_timer: 0.0,
        }
    }

    pub fn is_crouch_animating(&self) -> bool {
        self.crouch_animating
    }

    /// Seven-tier vertical look driven by mouse Y. Ignored entirely while
    /// jumping or crouched; the offset is clamped to a fixed band.
    pub fn update_scroll(&mut self, mouse_y: f32) {
        if self.jump_state != JumpState::Idle || self.is_crouching {
            return;
        }

        let speed = if mouse_y < scroll::UP_FAST {
            scroll::FAST
        } else if mouse_y < scroll::UP_MEDIUM {
            scroll::MEDIUM
        } else if mouse_y < scroll::UP_SLOW {
            scroll::SLOW
        } else if mouse_y > scroll::DOWN_FAST {
            -scroll::FAST
        } else if mouse_y > scroll::DOWN_MEDIUM {
            -scroll::MEDIUM
        } else if mouse_y > scroll::DOWN_SLOW {
            -scroll::SLOW
        } else {
            0.0
        };

        self.ground_y = (self.ground_y + speed).clamp(scroll::MIN_GROUND_Y, scroll::MAX_GROUND_Y);
    }

    /// Begin a jump. Only valid from idle and while standing; anything else
    /// is a silent no-op.
    pub fn start_jump(&mut self) {
        if self.jump_state != JumpState::Idle || self.is_crouching {
            return;
        }
        self.saved_ground_y = self.ground_y;
        self.jump_state = JumpState::Prepare;
        self.jump_timer = 0.0;
        log::debug!("jump: prepare");
    }

    /// Advance the jump state machine. Returns the audio cue for launch or
    /// landing when one fires this frame.
    pub fn update_jump(&mut self, dt: f32) -> Option<AudioCue> {
        match self.jump_state {
            JumpState::Idle => None,
            JumpState::Prepare => {
                self.jump_timer += dt;
                let progress = self.jump_timer / jump::PREPARE_DURATION;
                self.ground_y = self.saved_ground_y - jump::PREPARE_DIP * progress;

                if self.jump_timer >= jump::PREPARE_DURATION {
                    self.jump_state = JumpState::Jumping;
                    self.jump_velocity = jump::FORCE;
                    self.ground_y = self.saved_ground_y;
                    log::debug!("jump: launch");
                    return Some(AudioCue::JumpLaunch);
                }
                None
            }
            JumpState::Jumping | JumpState::Descending => {
                // Semi-implicit Euler.
                self.jump_velocity += jump::GRAVITY * dt;
                self.ground_y += self.jump_velocity * dt;

                if self.jump_velocity < 0.0 && self.jump_state == JumpState::Jumping {
                    self.jump_state = JumpState::Descending;
                }

                if self.ground_y <= self.saved_ground_y {
                    self.ground_y = self.saved_ground_y;
                    self.jump_velocity = 0.0;
                    self.jump_state = JumpState::Idle;
                    log::debug!("jump: landed");
                    return Some(AudioCue::Landing);
                }
                None
            }
        }
    }

    /// Begin crouching. Only valid while the jump is idle and no crouch
    /// transition is running; a second call before `stop_crouch` is a no-op.
    pub fn start_crouch(&mut self) {
        if self.jump_state != JumpState::Idle || self.is_crouching || self.crouch_animating {
            return;
        }
        self.saved_ground_y = self.ground_y;
        self.crouch_animating = true;
        self.crouch_timer = 0.0;
        self.crouch_direction = 1;
        log::debug!("crouch: down");
    }

    /// Begin standing back up.
    pub fn stop_crouch(&mut self) {
        if !self.is_crouching || self.crouch_animating {
            return;
        }
        self.crouch_animating = true;
        self.crouch_timer = 0.0;
        self.crouch_direction = -1;
        log::debug!("crouch: up");
    }

    /// Advance the crouch transition; offset and boolean state snap to
    /// exact targets at completion, no floating residue.
    pub fn update_crouch(&mut self, dt: f32) {
        if !self.crouch_animating {
            return;
        }
        self.crouch_timer += dt;
        let progress = self.crouch_timer / crouch::DURATION;

        if progress >= 1.0 {
            self.crouch_animating = false;
            if self.crouch_direction == 1 {
                self.is_crouching = true;
                self.ground_y = self.saved_ground_y + crouch::OFFSET;
            } else {
                self.is_crouching = false;
                self.ground_y = self.saved_ground_y;
            }
        } else if self.crouch_direction == 1 {
            self.ground_y = self.saved_ground_y + crouch::OFFSET * progress;
        } else {
            self.ground_y = self.saved_ground_y + crouch::OFFSET * (1.0 - progress);
        }
    }

    /// Transient head-bob delta for this frame's draw pass.
    ///
    /// Active only while sprinting, moving, with the jump idle and no
    /// crouch transition running. Inactive frames decay the phase
    /// geometrically so the bob fades out instead of cutting off. The
    /// return value is added to the draw offset for one frame only and
    /// never written back into `ground_y`.
    pub fn head_bob_offset(&mut self, dt: f32, is_moving: bool, is_sprinting: bool) -> f32 {
        let active = is_sprinting
            && is_moving
            && self.jump_state == JumpState::Idle
            && !self.crouch_animating;

        if active {
            self.head_bob_timer += dt * head_bob::FREQUENCY;
            head_bob::AMPLITUDE * libm::sinf(self.head_bob_timer * TAU)
        } else {
            self.head_bob_timer *= head_bob::DAMPING;
            0.0
        }
    }
}
