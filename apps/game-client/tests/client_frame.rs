//! End-to-end frame contract tests for the game client.

use game_client::{ClientConfig, GameClient, ObjectRecord};
use game_types::{InputEvent, Key};
use renderer::image::Image;
use renderer::surface::Surface;

const DT: f32 = 1.0 / 60.0;

/// Surface that records blit positions and image sizes instead of pixels.
#[derive(Default)]
struct Recording {
    blits: Vec<(u32, i32, i32)>,
}

impl Surface for Recording {
    fn width(&self) -> u32 {
        1000
    }

    fn height(&self) -> u32 {
        600
    }

    fn blit(&mut self, image: &Image, x: i32, y: i32) {
        self.blits.push((image.width(), x, y));
    }
}

fn client_with_objects(records: &[ObjectRecord]) -> GameClient {
    let mut client = GameClient::new(ClientConfig::default());
    client.start();
    for record in records {
        let registry = &mut client.registry;
        client
            .world
            .spawn(registry, record, || Image::solid(64, 64, 0xFFFFFFFF));
    }
    client
}

fn record(texture: &str, x: f32, z: f32) -> ObjectRecord {
    ObjectRecord {
        texture: texture.into(),
        x,
        y: 0.0,
        z,
        destroyable: false,
    }
}

#[test]
fn draw_order_is_back_to_front() {
    let mut client = client_with_objects(&[
        record("near.png", 0.0, 300.0),
        record("far.png", 40.0, 900.0),
        record("mid.png", -40.0, 600.0),
    ]);
    client.update(DT);

    let mut surface = Recording::default();
    client.render(&mut surface);
    assert_eq!(surface.blits.len(), 3);

    // Scaled widths shrink with depth, so the farthest (smallest) image
    // must be blitted first and the nearest (largest) last.
    let widths: Vec<u32> = surface.blits.iter().map(|b| b.0).collect();
    let mut sorted = widths.clone();
    sorted.sort_unstable();
    assert_eq!(widths, sorted);
}

#[test]
fn projection_cache_is_stable_while_standing_still() {
    let mut client = client_with_objects(&[record("tree.png", 0.0, 500.0)]);
    client.update(DT);
    let first = client.world.objects[0].scaled_image().cloned().unwrap();
    client.update(DT);
    let second = client.world.objects[0].scaled_image().cloned().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn walking_forward_rescales_objects() {
    let mut client = client_with_objects(&[record("tree.png", 0.0, 500.0)]);
    client.update(DT);
    let before = client.world.objects[0].scaled_image().cloned().unwrap();

    client.handle_event(InputEvent::KeyDown(Key::Forward));
    for _ in 0..60 {
        client.update(DT);
    }
    let after = client.world.objects[0].scaled_image().cloned().unwrap();
    assert!(after.width() > before.width());
}

#[test]
fn full_jump_cycle_leaves_draw_offset_unchanged() {
    let mut client = client_with_objects(&[record("tree.png", 0.0, 500.0)]);
    client.update(DT);
    let baseline = client.ground_offset();

    client.handle_event(InputEvent::KeyDown(Key::Jump));
    let mut changed = false;
    for _ in 0..120 {
        client.update(DT);
        if client.ground_offset() != baseline {
            changed = true;
        }
    }
    assert!(changed);
    assert_eq!(client.ground_offset(), baseline);
}

#[test]
fn turning_moves_objects_across_the_screen() {
    let mut client = client_with_objects(&[record("tree.png", 0.0, 500.0)]);
    client.update(DT);
    let centered = client.world.objects[0].screen_x;
    assert!((centered - 500.0).abs() < 1.0);

    // Mouse hard right rotates the view; the object should drift left.
    client.handle_event(InputEvent::MouseMotion { x: 999.0, y: 300.0 });
    for _ in 0..10 {
        client.update(DT);
    }
    assert!(client.world.objects[0].screen_x < centered);
}
