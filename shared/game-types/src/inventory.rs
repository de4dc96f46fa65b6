//! Weapon inventory and the two-phase switch animation
//!
//! Selection order is insertion order, cyclic. The selected index moves
//! immediately on a switch request; only the visual slide is deferred to
//! the animation, which retracts the outgoing weapon and then raises the
//! incoming one.

use alloc::vec::Vec;

use crate::tuning::weapon as tuning;
use crate::weapon::Weapon;

/// Switch animation state. Phases carry their weapon indices so an
/// animation without a target is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwitchAnimation {
    Idle,
    /// The outgoing weapon slides off the bottom of the screen.
    Descending { from: usize, to: usize, elapsed: f32 },
    /// The incoming weapon rises to its resting position.
    Ascending { from: usize, to: usize, elapsed: f32 },
}

#[derive(Debug, Clone)]
pub struct Inventory {
    pub weapons: Vec<Weapon>,
    pub current: usize,
    pub switch: SwitchAnimation,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            weapons: Vec::new(),
            current: 0,
            switch: SwitchAnimation::Idle,
        }
    }

    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    pub fn current_weapon(&self) -> Option<&Weapon> {
        self.weapons.get(self.current)
    }

    pub fn current_weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapons.get_mut(self.current)
    }

    pub fn is_switching(&self) -> bool {
        self.switch != SwitchAnimation::Idle
    }

    /// Cycle to the next weapon. Rejected with fewer than two weapons or
    /// while a switch is running; the index moves immediately on success.
    pub fn switch_to_next(&mut self) -> bool {
        self.begin_switch(1)
    }

    /// Cycle to the previous weapon.
    pub fn switch_to_previous(&mut self) -> bool {
        self.begin_switch(-1)
    }

    fn begin_switch(&mut self, step: isize) -> bool {
        if self.weapons.len() < 2 || self.is_switching() {
            return false;
        }
        let from = self.current;
        let len = self.weapons.len() as isize;
        self.current = ((self.current as isize + step).rem_euclid(len)) as usize;
        self.switch = SwitchAnimation::Descending {
            from,
            to: self.current,
            elapsed: 0.0,
        };
        log::debug!("weapon switch {} -> {}", from, self.current);
        true
    }

    /// Tick every weapon's fire/reload timers.
    pub fn update(&mut self, dt: f32) {
        for weapon in &mut self.weapons {
            weapon.update(dt);
        }
    }

    /// Advance the switch animation. Each phase is a fixed-duration linear
    /// slide; the incoming weapon's Y snaps exactly to its resting value at
    /// completion.
    pub fn update_animation(&mut self, dt: f32) {
        match self.switch {
            SwitchAnimation::Idle => {}
            SwitchAnimation::Descending { from, to, elapsed } => {
                let elapsed = elapsed + dt;
                let progress = (elapsed / tuning::SWITCH_PHASE_DURATION).min(1.0);
                let rest = self.weapons[from].resting_y();
                self.weapons[from].y = rest + (tuning::OFFSCREEN_Y - rest) * progress;

                if elapsed >= tuning::SWITCH_PHASE_DURATION {
                    self.weapons[to].y = tuning::OFFSCREEN_Y;
                    self.switch = SwitchAnimation::Ascending {
                        from,
                        to,
                        elapsed: 0.0,
                    };
                } else {
                    self.switch = SwitchAnimation::Descending { from, to, elapsed };
                }
            }
            SwitchAnimation::Ascending { from, to, elapsed } => {
                let elapsed = elapsed + dt;
                let progress = (elapsed / tuning::SWITCH_PHASE_DURATION).min(1.0);
                let rest = self.weapons[to].resting_y();
                self.weapons[to].y = tuning::OFFSCREEN_Y - (tuning::OFFSCREEN_Y - rest) * progress;

                if elapsed >= tuning::SWITCH_PHASE_DURATION {
                    self.weapons[to].y = rest;
                    self.switch = SwitchAnimation::Idle;
                } else {
                    self.switch = SwitchAnimation::Ascending { from, to, elapsed };
                }
            }
        }
    }

    /// Forward mouse sway to the selected weapon, suppressed entirely while
    /// a switch animation owns the weapon positions.
    pub fn update_positions(&mut self, mouse_x: f32, mouse_y: f32) {
        if self.is_switching() {
            return;
        }
        if let Some(weapon) = self.current_weapon_mut() {
            weapon.update_position(mouse_x, mouse_y);
        }
    }
}
