use crate::character::CharacterPose;
use crate::constants::{STAR_COUNT, STAR_FIELD_HALF_EXTENT};
use crate::orbit::hex_rgb;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Sprite shapes understood by the scene shader.
pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_RING: f32 = 1.0;
pub const SHAPE_STAR: f32 = 2.0;

/// One camera-facing sprite, laid out for a per-instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub shape: f32,
}

impl InstanceData {
    pub fn new(pos: Vec3, scale: f32, rgb: [f32; 3], alpha: f32, shape: f32) -> Self {
        Self {
            pos: pos.to_array(),
            scale,
            color: [rgb[0], rgb[1], rgb[2], alpha],
            shape,
        }
    }
}

pub fn starfield(seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let h = STAR_FIELD_HALF_EXTENT;
    (0..STAR_COUNT)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-h..h),
                rng.gen_range(-h..h),
                rng.gen_range(-h..h),
            )
        })
        .collect()
}

pub fn push_stars(stars: &[Vec3], out: &mut Vec<InstanceData>) {
    out.extend(
        stars
            .iter()
            .map(|p| InstanceData::new(*p, 0.35, [1.0, 1.0, 1.0], 0.85, SHAPE_STAR)),
    );
}

pub fn push_sun(radius: f32, out: &mut Vec<InstanceData>) {
    out.push(InstanceData::new(Vec3::ZERO, radius * 2.0, hex_rgb(0xFFD700), 1.0, SHAPE_SPHERE));
}

/// Planet disc plus an optional translucent ring behind it.
pub fn push_body(
    center: Vec3,
    radius: f32,
    rgb: [f32; 3],
    ring: bool,
    out: &mut Vec<InstanceData>,
) {
    if ring {
        out.push(InstanceData::new(center, (radius + 0.4) * 2.0, rgb, 0.3, SHAPE_RING));
    }
    out.push(InstanceData::new(center, radius * 2.0, rgb, 1.0, SHAPE_SPHERE));
}

#[inline]
fn limb_end(shoulder: Vec2, length: f32, angle: f32) -> Vec2 {
    shoulder + Vec2::new(angle.sin(), -angle.cos()) * length * 0.5
}

/// The character as a handful of sprites: legs, body, arms, hair, head.
pub fn push_character(at: Vec3, pose: &CharacterPose, out: &mut Vec<InstanceData>) {
    let skin = hex_rgb(0xDEB887);
    let legs = hex_rgb(0x4169E1);
    let tilt = Vec3::new(pose.body_tilt.sin() * 0.5, 0.0, 0.0);

    for (shoulder, angle) in [
        (Vec2::new(-0.2, -1.2), pose.left_leg),
        (Vec2::new(0.2, -1.2), pose.right_leg),
    ] {
        let end = limb_end(shoulder, 1.2, angle);
        out.push(InstanceData::new(at + end.extend(0.0), 0.3, legs, 1.0, SHAPE_SPHERE));
    }
    out.push(InstanceData::new(at, 0.8, hex_rgb(0x8B4513), 1.0, SHAPE_SPHERE));
    for (shoulder, angle) in [
        (Vec2::new(-0.6, 0.2), pose.left_arm),
        (Vec2::new(0.6, 0.2), pose.right_arm),
    ] {
        // raised arms point up and out instead of hanging down
        let end = if pose.arms_raised {
            shoulder + Vec2::new(shoulder.x.signum() * 0.3, 0.45)
        } else {
            limb_end(shoulder, 1.0, angle)
        };
        out.push(InstanceData::new(at + end.extend(0.0) + tilt, 0.2, skin, 1.0, SHAPE_SPHERE));
    }
    out.push(InstanceData::new(
        at + Vec3::new(0.0, 1.3, -0.05) + tilt,
        0.9,
        hex_rgb(0x2F1B14),
        1.0,
        SHAPE_SPHERE,
    ));
    out.push(InstanceData::new(at + Vec3::Y + tilt, 0.8, skin, 1.0, SHAPE_SPHERE));
}

pub fn push_bird(at: Vec3, wing_roll: f32, out: &mut Vec<InstanceData>) {
    let flap = 1.0 + wing_roll;
    out.push(InstanceData::new(at, 0.2 * flap, hex_rgb(0x4A4A4A), 1.0, SHAPE_SPHERE));
}

/// Sort back-to-front as seen from `eye` so alpha blending composes.
pub fn sort_back_to_front(instances: &mut [InstanceData], eye: Vec3) {
    instances.sort_by(|a, b| {
        let da = Vec3::from(a.pos).distance_squared(eye);
        let db = Vec3::from(b.pos).distance_squared(eye);
        db.total_cmp(&da)
    });
}
