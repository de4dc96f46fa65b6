//! Player kinematics
//!
//! Integrates movement intents and mouse-driven rotation into a world pose.
//! Vertical motion is entirely the camera's business; kinematics never
//! touch `position.y`.

use glam::Vec3;

use crate::tuning::{movement, rotation};

/// The player's world pose and velocities.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    /// Heading in radians.
    pub angle: f32,

    pub speed_forward: f32,
    pub speed_strafe: f32,

    // Movement intents, set on key press and cleared on release.
    pub moving_forward: bool,
    pub moving_backward: bool,
    pub moving_left: bool,
    pub moving_right: bool,

    pub is_sprinting: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            angle: 0.0,
            speed_forward: 0.0,
            speed_strafe: 0.0,
            moving_forward: false,
            moving_backward: false,
            moving_left: false,
            moving_right: false,
            is_sprinting: false,
        }
    }

    /// Whether any velocity is non-zero, used by the head-bob gate.
    pub fn is_moving(&self) -> bool {
        self.speed_forward != 0.0 || self.speed_strafe != 0.0
    }

    /// Speed cap for the current stance.
    pub fn current_max_speed(&self, crouching: bool) -> f32 {
        if crouching {
            movement::CROUCH_SPEED
        } else if self.is_sprinting {
            movement::SPRINT_SPEED
        } else {
            movement::MAX_SPEED
        }
    }

    /// Four-tier deadzone rotation driven by horizontal mouse position.
    ///
    /// Must run before `update` each frame: the integration step uses the
    /// heading this produces.
    pub fn update_head_rotation(&mut self, mouse_x: f32) {
        if mouse_x > rotation::FAST_RIGHT {
            self.angle -= rotation::FAST;
        } else if mouse_x < rotation::FAST_LEFT {
            self.angle += rotation::FAST;
        } else if mouse_x > rotation::MEDIUM_RIGHT {
            self.angle -= rotation::MEDIUM;
        } else if mouse_x < rotation::MEDIUM_LEFT {
            self.angle += rotation::MEDIUM;
        } else if mouse_x > rotation::SLOW_RIGHT {
            self.angle -= rotation::SLOW;
        } else if mouse_x < rotation::SLOW_LEFT {
            self.angle += rotation::SLOW;
        }
        // Between SLOW_LEFT and SLOW_RIGHT: dead zone, no rotation.
    }

    /// One kinematics tick: accelerate or decay the two speed scalars,
    /// clamp them to the stance cap, then integrate `(x, z)` along the
    /// current heading. `blocked` rejects a candidate XZ position; the two
    /// axes are tried separately so the player slides along blockers.
    pub fn update<F>(&mut self, crouching: bool, blocked: F)
    where
        F: Fn(f32, f32) -> bool,
    {
        if self.moving_forward {
            self.speed_forward += movement::ACCELERATION;
        } else if self.moving_backward {
            self.speed_forward -= movement::ACCELERATION;
        } else {
            self.speed_forward *= movement::FRICTION;
            if self.speed_forward.abs() < movement::STOP_EPSILON {
                self.speed_forward = 0.0;
            }
        }

        if self.moving_left {
            self.speed_strafe -= movement::ACCELERATION;
        } else if self.moving_right {
            self.speed_strafe += movement::ACCELERATION;
        } else {
            self.speed_strafe *= movement::FRICTION;
            if self.speed_strafe.abs() < movement::STOP_EPSILON {
                self.speed_strafe = 0.0;
            }
        }

        let max = self.current_max_speed(crouching);
        self.speed_forward = self.speed_forward.clamp(-max, max);
        self.speed_strafe = self.speed_strafe.clamp(-max, max);

        let sin_a = libm::sinf(self.angle);
        let cos_a = libm::cosf(self.angle);
        let forward = (-sin_a, cos_a);
        let strafe = (-cos_a, -sin_a);

        let dx = forward.0 * self.speed_forward + strafe.0 * self.speed_strafe;
        let dz = forward.1 * self.speed_forward + strafe.1 * self.speed_strafe;

        let new_x = self.position.x + dx;
        if !blocked(new_x, self.position.z) {
            self.position.x = new_x;
        }
        let new_z = self.position.z + dz;
        if !blocked(self.position.x, new_z) {
            self.position.z = new_z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(_x: f32, _z: f32) -> bool {
        false
    }

    #[test]
    fn speeds_stay_clamped_through_intent_toggles() {
        let mut p = Player::new();
        let toggles = [
            (true, false, false, true, false),
            (true, false, true, false, true),
            (false, true, true, false, true),
            (false, false, false, false, false),
            (true, false, false, true, true),
        ];
        for &(f, b, l, r, sprint) in toggles.iter().cycle().take(200) {
            p.moving_forward = f;
            p.moving_backward = b;
            p.moving_left = l;
            p.moving_right = r;
            p.is_sprinting = sprint;
            p.update(false, open);
            let max = p.current_max_speed(false);
            assert!(p.speed_forward.abs() <= max);
            assert!(p.speed_strafe.abs() <= max);
        }
    }

    #[test]
    fn crouch_caps_speed_below_walking() {
        let mut p = Player::new();
        p.moving_forward = true;
        for _ in 0..60 {
            p.update(true, open);
        }
        assert!((p.speed_forward - crate::tuning::movement::CROUCH_SPEED).abs() < 1e-6);
    }

    #[test]
    fn friction_snaps_speed_to_exact_zero() {
        let mut p = Player::new();
        p.moving_forward = true;
        for _ in 0..30 {
            p.update(false, open);
        }
        p.moving_forward = false;
        for _ in 0..200 {
            p.update(false, open);
        }
        assert_eq!(p.speed_forward, 0.0);
        assert!(!p.is_moving());
    }

    #[test]
    fn forward_motion_follows_heading() {
        let mut p = Player::new();
        p.moving_forward = true;
        for _ in 0..10 {
            p.update(false, open);
        }
        // Heading zero: forward is +Z.
        assert!(p.position.z > 0.0);
        assert!(p.position.x.abs() < 1e-4);
        assert_eq!(p.position.y, 0.0);
    }

    #[test]
    fn dead_zone_keeps_heading() {
        let mut p = Player::new();
        p.update_head_rotation(500.0);
        assert_eq!(p.angle, 0.0);
        p.update_head_rotation(900.0);
        assert!(p.angle < 0.0);
        let after_fast = p.angle;
        p.update_head_rotation(100.0);
        assert!(p.angle > after_fast);
    }

    #[test]
    fn blocked_axis_leaves_position_untouched() {
        let mut p = Player::new();
        p.moving_forward = true;
        for _ in 0..10 {
            p.update(false, |_x, z| z > 1.0);
        }
        assert!(p.position.z <= 1.0);
    }
}
