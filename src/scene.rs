// scene.rs - What the 3D engine builds from a landscape
//
// The renderer, orbit controls and bloom compositor live in the host page.
// This module only describes them: fixed staging constants, the values
// derived from the seed, and the per-frame plane rotation.

use serde::{Deserialize, Serialize};

use crate::params::SceneParameters;

pub const ROTATION_X_DEG: f64 = -45.0;
pub const ROTATION_Z_DEG: f64 = -65.0;
/// Radians of plane spin per second of elapsed time
pub const AUTO_ROTATE_SPEED: f64 = 0.225;

const PLANE_SIZE: [f64; 2] = [1.0, 2.0];
const PLANE_SEGMENTS: [u32; 2] = [24, 24];

const CAMERA_FOV: f64 = 40.0;
const CAMERA_NEAR: f64 = 0.1;
const CAMERA_FAR: f64 = 20.0;
const CAMERA_X: f64 = -1.5;
const CAMERA_Y: f64 = 0.0;
const CAMERA_Z: f64 = 3.25;
const CAMERA_Z_PREVIEW: f64 = 2.75;

const PLANE_OFFSET: [f64; 2] = [0.05, -0.01];
const PLANE_OFFSET_PREVIEW: [f64; 2] = [0.175, 0.1];

const AMBIENT_COLOR: u32 = 0xffffff;
const AMBIENT_INTENSITY: f64 = 10.0;
const BACKGROUND: u32 = 0x000000;

const MAX_PIXEL_RATIO: f64 = 2.0;
const CAPTURE_SIZE: u32 = 1024;

/// Host-supplied switches. Neither comes from the seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Thumbnail capture run: closer camera, no auto rotation
    pub preview: bool,
    /// Fixed-size output with a preserved drawing buffer for downloads
    pub enable_download: bool,
}

impl RenderOptions {
    pub fn auto_rotate(&self) -> bool {
        !self.preview && !self.enable_download
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescriptor {
    pub background: u32,
    pub plane: Plane,
    pub material: Material,
    pub ambient_light: AmbientLight,
    pub camera: Camera,
    pub bloom_strength: f64,
    pub output: Output,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plane {
    pub width: f64,
    pub height: f64,
    pub width_segments: u32,
    pub height_segments: u32,
    pub position: [f64; 2],
    /// Radians
    pub rotation_x: f64,
    /// Radians, overwritten every frame while auto rotating
    pub rotation_z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub transparent: bool,
    pub displacement_scale: f64,
    pub depth_test: bool,
    pub depth_write: bool,
    pub double_sided: bool,
    pub grid_texture_size: u32,
    pub displacement_texture_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbientLight {
    pub color: u32,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub fov: f64,
    pub near: f64,
    pub far: f64,
    pub position: [f64; 3],
    pub target: [f64; 3],
    pub damping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Some(side) when the canvas is pinned for downloads, else the window size
    pub fixed_size: Option<u32>,
    pub max_pixel_ratio: f64,
    pub preserve_drawing_buffer: bool,
}

impl SceneDescriptor {
    pub fn new(p: &SceneParameters, options: RenderOptions) -> Self {
        let (camera_z, position) = if options.preview {
            (CAMERA_Z_PREVIEW, PLANE_OFFSET_PREVIEW)
        } else {
            (CAMERA_Z, PLANE_OFFSET)
        };

        Self {
            background: BACKGROUND,
            plane: Plane {
                width: PLANE_SIZE[0],
                height: PLANE_SIZE[1],
                width_segments: PLANE_SEGMENTS[0],
                height_segments: PLANE_SEGMENTS[1],
                position,
                rotation_x: ROTATION_X_DEG.to_radians(),
                rotation_z: ROTATION_Z_DEG.to_radians(),
            },
            material: Material {
                transparent: p.transparent,
                displacement_scale: p.max_height,
                depth_test: true,
                depth_write: true,
                double_sided: true,
                grid_texture_size: p.grid_texture_size(),
                displacement_texture_size: p.grid_elements,
            },
            ambient_light: AmbientLight { color: AMBIENT_COLOR, intensity: AMBIENT_INTENSITY },
            camera: Camera {
                fov: CAMERA_FOV,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                position: [CAMERA_X, CAMERA_Y, camera_z],
                target: [0.0; 3],
                damping: true,
            },
            bloom_strength: p.bloom_strength,
            output: Output {
                fixed_size: options.enable_download.then_some(CAPTURE_SIZE),
                max_pixel_ratio: MAX_PIXEL_RATIO,
                preserve_drawing_buffer: options.enable_download,
            },
            auto_rotate: options.auto_rotate(),
            auto_rotate_speed: AUTO_ROTATE_SPEED,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Per-frame plane rotation. The only thing that changes after startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    auto_rotate: bool,
    rest_z: f64,
}

impl Animator {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            auto_rotate: options.auto_rotate(),
            rest_z: ROTATION_Z_DEG.to_radians(),
        }
    }

    /// Plane z rotation in radians at `elapsed` seconds
    pub fn rotation_z(&self, elapsed: f64) -> f64 {
        if self.auto_rotate {
            elapsed * AUTO_ROTATE_SPEED
        } else {
            self.rest_z
        }
    }
}
