use crate::constants::*;
use crate::state::Camera;
use glam::{Vec2, Vec3, Vec4};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug)]
pub struct CameraParams {
    pub start: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub polar_margin: f32,
    pub zoom_per_delta: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            start: Vec3::from(CAMERA_START),
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            polar_margin: POLAR_MARGIN,
            zoom_per_delta: ZOOM_PER_DELTA,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Camera on a sphere around a fixed look-at point.
///
/// `phi` is the polar angle from +Y, `theta` the azimuth around +Y measured
/// from +Z. `phi` is kept inside `[margin, PI - margin]` so the view never
/// flips over a pole.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub target: Vec3,
    params: CameraParams,
}

impl OrbitCamera {
    pub fn new(params: CameraParams) -> Self {
        Self::from_position(params.start, params)
    }

    pub fn from_position(position: Vec3, params: CameraParams) -> Self {
        let radius = position.length().max(f32::EPSILON);
        let theta = position.x.atan2(position.z);
        let phi = (position.y / radius).clamp(-1.0, 1.0).acos();
        let mut cam = Self {
            radius: radius.clamp(params.min_distance, params.max_distance),
            theta,
            phi,
            target: Vec3::ZERO,
            params,
        };
        cam.clamp_phi();
        cam
    }

    pub fn params(&self) -> &CameraParams {
        &self.params
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.phi.sin_cos();
        let (st, ct) = self.theta.sin_cos();
        self.target + self.radius * Vec3::new(sp * st, cp, sp * ct)
    }

    /// Apply a pitch (`d_phi`) and yaw (`d_theta`) step.
    pub fn rotate(&mut self, d_phi: f32, d_theta: f32) {
        if d_phi.is_finite() {
            self.phi += d_phi;
        }
        if d_theta.is_finite() {
            self.theta = (self.theta + d_theta) % (2.0 * PI);
        }
        self.clamp_phi();
    }

    /// Scale the distance by `1 + delta_y * zoom_per_delta`, clamped.
    pub fn zoom(&mut self, delta_y: f32) {
        let factor = 1.0 + delta_y * self.params.zoom_per_delta;
        if !factor.is_finite() {
            return;
        }
        self.radius = (self.radius * factor).clamp(self.params.min_distance, self.params.max_distance);
    }

    fn clamp_phi(&mut self) {
        let m = self.params.polar_margin;
        self.phi = self.phi.clamp(m, PI - m);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: self.params.fovy_radians,
            znear: self.params.znear,
            zfar: self.params.zfar,
        }
    }

    /// World-space ray through pixel `px` of a `viewport`-sized canvas.
    pub fn screen_ray(&self, px: Vec2, viewport: Vec2) -> Ray {
        let width = viewport.x.max(1.0);
        let height = viewport.y.max(1.0);
        let ndc_x = (2.0 * px.x / width) - 1.0;
        let ndc_y = 1.0 - (2.0 * px.y / height);
        let cam = self.camera(width / height);
        let inv = cam.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        let origin = cam.eye;
        Ray {
            origin,
            dir: (far - origin).normalize_or_zero(),
        }
    }
}

/// Distance along the ray to the first hit with the sphere, if any. A ray
/// starting inside the sphere reports the exit point.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}
