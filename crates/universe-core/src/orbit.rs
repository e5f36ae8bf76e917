//! Navigable bodies circling the centre. Positions are a pure function
//! of session time and the shared orbit speed multiplier.

use crate::constants::*;
use crate::gesture::ClickTracker;
use crate::section::Section;
use crate::state::InteractionState;
use glam::Vec3;

/// Fixed parameters of one navigable orbiting body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyParams {
    pub label: &'static str,
    pub target: Section,
    pub orbit_radius: f32,
    /// Base angular speed in radians per second before `ORBIT_SPEED_SCALE`.
    pub angular_speed: f32,
    pub vertical_offset: f32,
    pub size: f32,
    pub color: [f32; 3],
}

#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// The five section bodies, innermost last.
pub fn default_bodies() -> Vec<BodyParams> {
    vec![
        BodyParams {
            label: "MUSIC",
            target: Section::Music,
            orbit_radius: 6.0,
            angular_speed: 0.3,
            vertical_offset: 2.0,
            size: 1.2,
            color: hex_rgb(0xFF6B6B),
        },
        BodyParams {
            label: "IMAGES",
            target: Section::Images,
            orbit_radius: 5.0,
            angular_speed: 0.5,
            vertical_offset: 1.0,
            size: 0.8,
            color: hex_rgb(0x4ECDC4),
        },
        BodyParams {
            label: "TOURS",
            target: Section::Tours,
            orbit_radius: 8.0,
            angular_speed: 0.2,
            vertical_offset: -1.0,
            size: 1.0,
            color: hex_rgb(0x45B7D1),
        },
        BodyParams {
            label: "SHOP",
            target: Section::Shop,
            orbit_radius: 7.0,
            angular_speed: 0.4,
            vertical_offset: 3.0,
            size: 0.9,
            color: hex_rgb(0xFFA07A),
        },
        BodyParams {
            label: "ABOUT",
            target: Section::About,
            orbit_radius: 4.0,
            angular_speed: 0.6,
            vertical_offset: -2.0,
            size: 0.7,
            color: hex_rgb(0xDDA0DD),
        },
    ]
}

#[derive(Clone, Debug)]
pub struct OrbitingBody {
    params: BodyParams,
    position: Vec3,
    spin: f32,
    hovered: bool,
    pub(crate) clicks: ClickTracker,
}

impl OrbitingBody {
    pub fn new(params: BodyParams) -> Self {
        let mut body = Self {
            params,
            position: Vec3::ZERO,
            spin: 0.0,
            hovered: false,
            clicks: ClickTracker::default(),
        };
        body.position = body.position_at(0.0, 1.0);
        body
    }

    pub fn params(&self) -> &BodyParams {
        &self.params
    }

    /// Orbital angle as a pure function of elapsed time and multiplier.
    #[inline]
    pub fn angle_at(&self, elapsed_s: f32, multiplier: f32) -> f32 {
        elapsed_s * self.params.angular_speed * multiplier * ORBIT_SPEED_SCALE
    }

    pub fn position_at(&self, elapsed_s: f32, multiplier: f32) -> Vec3 {
        let (s, c) = self.angle_at(elapsed_s, multiplier).sin_cos();
        Vec3::new(
            c * self.params.orbit_radius,
            self.params.vertical_offset,
            s * self.params.orbit_radius,
        )
    }

    pub fn update(&mut self, elapsed_s: f32, interaction: &InteractionState) {
        self.position = self.position_at(elapsed_s, interaction.orbit_speed_multiplier());
        self.spin = elapsed_s * BODY_SPIN_RATE;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn display_scale(&self) -> f32 {
        if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    pub fn display_radius(&self) -> f32 {
        self.params.size * self.display_scale()
    }

    pub fn display_color(&self) -> [f32; 3] {
        if self.hovered {
            [1.0, 1.0, 1.0]
        } else {
            self.params.color
        }
    }

    pub fn has_ring(&self) -> bool {
        self.params.size > RING_MIN_BODY_SIZE
    }

    pub fn pending_press(&self) -> bool {
        self.clicks.pending().is_some()
    }
}
