//! Game Loop
//!
//! Per-frame orchestration. The update order is load-bearing: heading
//! before position integration, camera before projection, projection
//! before depth sort. Head-bob is computed as a render-only delta and
//! applied to the draw offset without ever touching persistent camera
//! state.

use alloc::vec::Vec;

use game_types::tuning::movement;
use game_types::{AudioCue, Camera, InputEvent, Inventory, Key, Player, Weapon, WeaponKind};
use renderer::image::AssetRegistry;
use renderer::math::{CameraPose, Viewport};
use renderer::surface::Surface;

use crate::world::World;

/// Client configuration
#[derive(Debug, Clone, Copy)]
pub struct ClientConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            width: game_types::tuning::screen::WIDTH,
            height: game_types::tuning::screen::HEIGHT,
        }
    }
}

impl ClientConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// Game client instance
pub struct GameClient {
    config: ClientConfig,
    pub player: Player,
    pub camera: Camera,
    pub inventory: Inventory,
    pub world: World,
    pub registry: AssetRegistry,

    mouse_x: f32,
    mouse_y: f32,
    paused: bool,
    running: bool,
    frame_count: u64,
    /// This frame's head-bob delta; render-only, reset every update.
    frame_bob: f32,
    cues: Vec<AudioCue>,
}

impl GameClient {
    pub fn new(config: ClientConfig) -> Self {
        let mut inventory = Inventory::new();
        inventory.add_weapon(Weapon::gun());
        inventory.add_weapon(Weapon::bow());

        Self {
            config,
            player: Player::new(),
            camera: Camera::new(),
            inventory,
            world: World::new(),
            registry: AssetRegistry::new(),
            mouse_x: config.width as f32 / 2.0,
            mouse_y: config.height as f32 / 2.0,
            paused: false,
            running: false,
            frame_count: 0,
            frame_bob: 0.0,
            cues: Vec::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn start(&mut self) {
        self.running = true;
        log::info!("game client started");
    }

    pub fn stop(&mut self) {
        self.running = false;
        log::info!("game client stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Ground offset for the presentation layer: persistent camera offset
    /// plus this frame's transient head-bob.
    pub fn ground_offset(&self) -> f32 {
        self.camera.ground_y + self.frame_bob
    }

    /// Drain the audio cues accumulated since the last call.
    pub fn take_cues(&mut self) -> Vec<AudioCue> {
        core::mem::take(&mut self.cues)
    }

    fn camera_pose(&self) -> CameraPose {
        CameraPose {
            position: self.player.position,
            yaw: self.player.angle,
        }
    }

    /// Apply one input event. Key presses set intents or kick off state
    /// machines; invalid requests are rejected inside those machines.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMotion { x, y } => {
                self.mouse_x = x;
                self.mouse_y = y;
            }
            InputEvent::MouseButtonDown => self.fire(),
            InputEvent::KeyDown(key) => match key {
                Key::Forward => self.player.moving_forward = true,
                Key::Backward => self.player.moving_backward = true,
                Key::StrafeLeft => self.player.moving_left = true,
                Key::StrafeRight => self.player.moving_right = true,
                Key::Sprint => self.player.is_sprinting = true,
                Key::Crouch => self.camera.start_crouch(),
                Key::Jump => self.camera.start_jump(),
                Key::NextWeapon => {
                    self.inventory.switch_to_next();
                }
                Key::PreviousWeapon => {
                    self.inventory.switch_to_previous();
                }
                Key::Reload => {
                    if let Some(weapon) = self.inventory.current_weapon_mut() {
                        weapon.start_reload();
                    }
                }
                Key::Pause => {
                    self.paused = !self.paused;
                    log::info!("paused: {}", self.paused);
                }
            },
            InputEvent::KeyUp(key) => match key {
                Key::Forward => self.player.moving_forward = false,
                Key::Backward => self.player.moving_backward = false,
                Key::StrafeLeft => self.player.moving_left = false,
                Key::StrafeRight => self.player.moving_right = false,
                Key::Sprint => self.player.is_sprinting = false,
                Key::Crouch => self.camera.stop_crouch(),
                _ => {}
            },
        }
    }

    /// Fire the current weapon. Hit-testing runs only for a successful gun
    /// shot; the bow fires visually without a hit scan.
    fn fire(&mut self) {
        if self.paused || self.inventory.is_switching() {
            return;
        }
        let vp = self.config.viewport();
        let Some(weapon) = self.inventory.current_weapon_mut() else {
            return;
        };
        let is_gun = matches!(weapon.kind, WeaponKind::Gun(_));
        if !weapon.fire() {
            return;
        }
        if is_gun {
            self.cues.push(AudioCue::ShotFired);
            self.world.hit_scan(vp.half_width(), vp.half_height());
        }
    }

    /// One simulation step. Skipped entirely while paused; a frozen frame
    /// can still be rendered from the last derived state.
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.frame_count += 1;

        // 1. Heading first: the integration below uses the new angle.
        self.player.update_head_rotation(self.mouse_x);

        // 2. Integrate the player, sliding along blocked axes.
        let world = &self.world;
        self.player.update(self.camera.is_crouching, |x, z| {
            world.blocks(x, z, movement::COLLIDE_RADIUS)
        });

        // 3. Camera sub-state machines.
        self.camera.update_scroll(self.mouse_y);
        if let Some(cue) = self.camera.update_jump(dt) {
            self.cues.push(cue);
        }
        self.camera.update_crouch(dt);

        // 4. Head-bob as a transient render-only delta.
        self.frame_bob =
            self.camera
                .head_bob_offset(dt, self.player.is_moving(), self.player.is_sprinting);

        // Weapon timers, switch animation, then sway (suppressed by the
        // inventory while switching).
        self.inventory.update(dt);
        self.inventory.update_animation(dt);
        self.inventory.update_positions(self.mouse_x, self.mouse_y);

        // 5-6. Project from the new pose, then order back-to-front.
        let cam = self.camera_pose();
        let vp = self.config.viewport();
        self.world.update_projections(&cam, &vp);
        self.world.sort_back_to_front(cam.position);
    }

    /// Draw the world. The head-bob delta rides on the draw offset only;
    /// `camera.ground_y` is untouched, so nothing needs reverting.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.world.draw(surface, self.ground_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ObjectRecord;
    use alloc::string::String;
    use renderer::image::Image;

    const DT: f32 = 1.0 / 60.0;

    fn client() -> GameClient {
        let mut client = GameClient::new(ClientConfig::default());
        client.start();
        client
    }

    fn spawn(client: &mut GameClient, z: f32, destroyable: bool) {
        let record = ObjectRecord {
            texture: String::from("assets/tree.png"),
            x: 0.0,
            y: -32.0,
            z,
            destroyable,
        };
        let registry = &mut client.registry;
        client
            .world
            .spawn(registry, &record, || Image::solid(64, 64, 0xFFFFFFFF));
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let mut c = client();
        c.handle_event(InputEvent::KeyDown(Key::Forward));
        c.update(DT);
        let frames = c.frame_count();
        let pos = c.player.position;

        c.handle_event(InputEvent::KeyDown(Key::Pause));
        c.update(DT);
        c.update(DT);
        assert_eq!(c.frame_count(), frames);
        assert_eq!(c.player.position, pos);

        c.handle_event(InputEvent::KeyDown(Key::Pause));
        c.update(DT);
        assert_eq!(c.frame_count(), frames + 1);
    }

    #[test]
    fn gun_shot_destroys_object_and_emits_cue() {
        let mut c = client();
        spawn(&mut c, 500.0, true);
        c.update(DT);
        assert_eq!(c.world.len(), 1);

        c.handle_event(InputEvent::MouseButtonDown);
        assert_eq!(c.world.len(), 0);
        assert_eq!(c.take_cues(), alloc::vec![AudioCue::ShotFired]);
        assert!(c.take_cues().is_empty());
    }

    #[test]
    fn empty_magazine_fires_nothing() {
        let mut c = client();
        spawn(&mut c, 500.0, true);
        c.update(DT);
        c.inventory.weapons[0].gun_state_mut().unwrap().ammo = 0;

        c.handle_event(InputEvent::MouseButtonDown);
        assert_eq!(c.world.len(), 1);
        assert!(c.take_cues().is_empty());
    }

    #[test]
    fn bow_never_hit_scans() {
        let mut c = client();
        spawn(&mut c, 500.0, true);
        c.update(DT);

        c.handle_event(InputEvent::KeyDown(Key::NextWeapon));
        // Let the switch animation finish so firing is accepted.
        for _ in 0..60 {
            c.update(DT);
        }
        assert!(matches!(
            c.inventory.current_weapon().unwrap().kind,
            WeaponKind::Bow
        ));
        c.handle_event(InputEvent::MouseButtonDown);
        assert_eq!(c.world.len(), 1);
        assert!(c.take_cues().is_empty());
        assert!(c.inventory.current_weapon().unwrap().is_firing);
    }

    #[test]
    fn fire_rejected_mid_switch() {
        let mut c = client();
        spawn(&mut c, 500.0, true);
        c.update(DT);
        c.handle_event(InputEvent::KeyDown(Key::NextWeapon));
        assert!(c.inventory.is_switching());
        c.handle_event(InputEvent::MouseButtonDown);
        assert_eq!(c.world.len(), 1);
        assert!(c.take_cues().is_empty());
    }

    #[test]
    fn jump_cues_reach_the_caller() {
        let mut c = client();
        c.handle_event(InputEvent::KeyDown(Key::Jump));
        let mut cues = Vec::new();
        for _ in 0..120 {
            c.update(DT);
            cues.extend(c.take_cues());
        }
        assert_eq!(cues, alloc::vec![AudioCue::JumpLaunch, AudioCue::Landing]);
    }

    #[test]
    fn collision_blocks_walking_into_an_object() {
        let mut c = client();
        spawn(&mut c, 100.0, false);
        c.handle_event(InputEvent::KeyDown(Key::Forward));
        for _ in 0..300 {
            c.update(DT);
        }
        // Stops at the collision radius instead of passing through.
        assert!(c.player.position.z < 100.0 - movement::COLLIDE_RADIUS + 1.0);
    }

    #[test]
    fn crouch_key_caps_player_speed() {
        let mut c = client();
        c.handle_event(InputEvent::KeyDown(Key::Crouch));
        for _ in 0..30 {
            c.update(DT);
        }
        assert!(c.camera.is_crouching);
        c.handle_event(InputEvent::KeyDown(Key::Forward));
        for _ in 0..60 {
            c.update(DT);
        }
        assert!((c.player.speed_forward - movement::CROUCH_SPEED).abs() < 1e-6);
    }

    #[test]
    fn head_bob_never_persists_in_camera_state() {
        let mut c = client();
        c.handle_event(InputEvent::KeyDown(Key::Forward));
        c.handle_event(InputEvent::KeyDown(Key::Sprint));
        for _ in 0..10 {
            c.update(DT);
        }
        assert_eq!(c.camera.ground_y, 0.0);
        // The draw offset carries the bob instead.
        assert_eq!(c.ground_offset(), c.camera.ground_y + c.frame_bob);
    }
}
