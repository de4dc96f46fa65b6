//! Weapon state machines
//!
//! Two variants: the gun carries a magazine, reserve ammo and a reload
//! timer; the bow has no ammo model and always fires visually. Variant
//! payloads live behind a tagged enum so gun-only state is queried through
//! a type-safe accessor instead of runtime type inspection.

use crate::tuning::weapon as tuning;

/// Gun-only ammo and reload state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GunState {
    pub ammo: u16,
    pub magazine_size: u16,
    pub reserve: u16,
    /// Counts down to zero; positive means a reload is in progress.
    pub reload_timer: f32,
}

impl GunState {
    pub fn new(magazine_size: u16, reserve: u16) -> Self {
        Self {
            ammo: magazine_size,
            magazine_size,
            reserve,
            reload_timer: 0.0,
        }
    }

    pub fn is_reloading(&self) -> bool {
        self.reload_timer > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeaponKind {
    Gun(GunState),
    Bow,
}

/// A held weapon: screen-space display position plus firing state.
#[derive(Debug, Clone)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub x: f32,
    pub y: f32,
    pub is_firing: bool,
    /// Fire-flash countdown (seconds).
    fire_timer: f32,
}

impl Weapon {
    pub fn gun() -> Self {
        Self {
            kind: WeaponKind::Gun(GunState::new(tuning::GUN_MAGAZINE, tuning::GUN_RESERVE)),
            x: tuning::REST_X,
            y: tuning::GUN_REST_Y,
            is_firing: false,
            fire_timer: 0.0,
        }
    }

    pub fn bow() -> Self {
        Self {
            kind: WeaponKind::Bow,
            x: tuning::REST_X,
            y: tuning::BOW_REST_Y,
            is_firing: false,
            fire_timer: 0.0,
        }
    }

    /// Resting screen Y for this variant, the switch animation's target.
    pub fn resting_y(&self) -> f32 {
        match self.kind {
            WeaponKind::Gun(_) => tuning::GUN_REST_Y,
            WeaponKind::Bow => tuning::BOW_REST_Y,
        }
    }

    pub fn gun_state(&self) -> Option<&GunState> {
        match &self.kind {
            WeaponKind::Gun(state) => Some(state),
            WeaponKind::Bow => None,
        }
    }

    pub fn gun_state_mut(&mut self) -> Option<&mut GunState> {
        match &mut self.kind {
            WeaponKind::Gun(state) => Some(state),
            WeaponKind::Bow => None,
        }
    }

    pub fn is_reloading(&self) -> bool {
        self.gun_state().is_some_and(GunState::is_reloading)
    }

    /// Attempt to fire. The gun refuses with an empty magazine or while
    /// reloading; the bow always fires visually. Returns success so the
    /// caller can gate hit-testing and effects.
    pub fn fire(&mut self) -> bool {
        if let WeaponKind::Gun(state) = &mut self.kind {
            if state.ammo == 0 || state.is_reloading() {
                return false;
            }
            state.ammo -= 1;
            log::debug!("gun fired, {} rounds left", state.ammo);
        }
        self.is_firing = true;
        self.fire_timer = tuning::FIRE_FLASH_DURATION;
        true
    }

    /// Begin a reload (gun only). Refused while already reloading, with a
    /// full magazine, or with no reserve left.
    pub fn start_reload(&mut self) -> bool {
        let Some(state) = self.gun_state_mut() else {
            return false;
        };
        if state.is_reloading() || state.ammo == state.magazine_size || state.reserve == 0 {
            return false;
        }
        state.reload_timer = tuning::RELOAD_DURATION;
        log::debug!("reload started");
        true
    }

    /// Advance the fire-flash and reload timers.
    pub fn update(&mut self, dt: f32) {
        if self.is_firing {
            self.fire_timer -= dt;
            if self.fire_timer <= 0.0 {
                self.is_firing = false;
                self.fire_timer = 0.0;
            }
        }

        if let WeaponKind::Gun(state) = &mut self.kind {
            if state.is_reloading() {
                state.reload_timer -= dt;
                if state.reload_timer <= 0.0 {
                    state.reload_timer = 0.0;
                    let moved = (state.magazine_size - state.ammo).min(state.reserve);
                    state.ammo += moved;
                    state.reserve -= moved;
                    log::debug!("reload complete, {} in reserve", state.reserve);
                }
            }
        }
    }

    /// Mouse-driven sway: the display position drifts toward per-variant
    /// bounds while the mouse sits in the edge bands. The inventory
    /// suppresses this entirely during a switch animation.
    pub fn update_position(&mut self, mouse_x: f32, mouse_y: f32) {
        let (y_min, y_max) = match self.kind {
            WeaponKind::Gun(_) => (
                tuning::GUN_REST_Y - tuning::GUN_SWAY_UP,
                tuning::GUN_REST_Y + tuning::GUN_SWAY_DOWN,
            ),
            WeaponKind::Bow => (tuning::BOW_Y_MIN, tuning::BOW_Y_MAX),
        };

        if mouse_y < tuning::MOUSE_TOP {
            if self.y > y_min {
                self.y -= tuning::SWAY_RATE;
            }
        } else if mouse_y > tuning::MOUSE_BOTTOM {
            if self.y < y_max {
                self.y += tuning::SWAY_RATE;
            }
        }

        if mouse_x >= tuning::MOUSE_RIGHT {
            if self.x < tuning::X_MAX {
                self.x += tuning::SWAY_RATE;
            }
        } else if mouse_x <= tuning::MOUSE_LEFT {
            if self.x > tuning::X_MIN {
                self.x -= tuning::SWAY_RATE;
            }
        }
    }
}
