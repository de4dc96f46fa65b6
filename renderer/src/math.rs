//! Projection math for the billboard camera

use glam::Vec3;

/// Minimum camera-space depth. Points whose rotated depth is at or below
/// this plane are not projected, so the perspective division never sees a
/// non-positive or near-zero denominator.
pub const NEAR_PLANE: f32 = 0.1;

/// Default focal length of the perspective projection, in pixels.
pub const FOCAL_LENGTH: f32 = 500.0;

/// Screen-space projection parameters.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub focal_length: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            focal_length: FOCAL_LENGTH,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width as f32 / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height as f32 / 2.0
    }
}

/// Camera pose used for projection: world position plus yaw.
///
/// Vertical look is a screen-space ground offset applied at draw time, so
/// it does not appear here.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
}

/// Result of projecting a world point that is in front of the camera.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub screen_x: f32,
    pub screen_y: f32,
    pub scale: f32,
}

/// Rotate a point around the vertical axis.
#[inline]
pub fn rotate_y(x: f32, z: f32, angle: f32) -> (f32, f32) {
    let cos_a = libm::cosf(angle);
    let sin_a = libm::sinf(angle);
    (x * cos_a - z * sin_a, x * sin_a + z * cos_a)
}

/// Project a world point into screen space.
///
/// Returns `None` when the point is behind or at the camera plane.
pub fn project(world: Vec3, cam: &CameraPose, vp: &Viewport) -> Option<Projection> {
    let rel = world - cam.position;
    let (rot_x, rot_z) = rotate_y(rel.x, rel.z, -cam.yaw);

    if rot_z <= NEAR_PLANE {
        return None;
    }

    let scale = vp.focal_length / rot_z;
    Some(Projection {
        screen_x: vp.half_width() + rot_x * scale,
        screen_y: vp.half_height() - rel.y * scale,
        scale,
    })
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
