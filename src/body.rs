//! Static configuration of every celestial body in the scene.
//!
//! One [`BodyConfig`] row per planet, in increasing distance order. The
//! sun and the starfield are not rows: the sun never revolves and its
//! spin rate is a plain per-second constant, and the starfield is a
//! static backdrop, so both get their own constants instead.

/// Flat ring annulus attached to a planet's pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Asset path of the ring texture.
    pub texture: &'static str,
}

/// One celestial body: a textured sphere revolving around the origin at a
/// fixed distance, with an optional ring.
///
/// `revolution_speed` and `rotation_speed` are the authored defaults; the
/// viewer copies them into a live component where the debug panel edits
/// them within [`crate::constants::REVOLUTION_SPEED_RANGE`] and
/// [`crate::constants::ROTATION_SPEED_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyConfig {
    /// Unique identifier, used as the panel section label.
    pub name: &'static str,
    /// Sphere radius.
    pub radius: f32,
    /// Distance of the sphere from the origin. Zero only for the sun.
    pub distance: f32,
    /// Asset path of the surface texture.
    pub texture: &'static str,
    pub ring: Option<Ring>,
    /// Pivot rotation per frame at the 60 Hz baseline.
    pub revolution_speed: f32,
    /// Mesh rotation per frame at the 60 Hz baseline.
    pub rotation_speed: f32,
}

pub const SUN_TEXTURE: &str = "textures/sun.jpg";
pub const STARFIELD_TEXTURE: &str = "textures/stars.jpg";

/// The eight planets, in increasing distance order.
pub const PLANETS: [BodyConfig; 8] = [
    BodyConfig {
        name: "Mercury",
        radius: 7.5,
        distance: 75.0,
        texture: "textures/mercury.jpg",
        ring: None,
        revolution_speed: 0.0028,
        rotation_speed: 0.004,
    },
    BodyConfig {
        name: "Venus",
        radius: 10.0,
        distance: 98.0,
        texture: "textures/venus.jpg",
        ring: None,
        revolution_speed: 0.0018,
        rotation_speed: 0.011,
    },
    BodyConfig {
        name: "Earth",
        radius: 13.0,
        distance: 132.0,
        texture: "textures/earth.jpg",
        ring: None,
        revolution_speed: 0.0032,
        rotation_speed: 0.008,
    },
    BodyConfig {
        name: "Mars",
        radius: 9.7,
        distance: 163.0,
        texture: "textures/mars.jpg",
        ring: None,
        revolution_speed: 0.0024,
        rotation_speed: 0.008,
    },
    BodyConfig {
        name: "Jupiter",
        radius: 15.5,
        distance: 205.0,
        texture: "textures/jupiter.jpg",
        ring: None,
        revolution_speed: 0.0038,
        rotation_speed: 0.006,
    },
    BodyConfig {
        name: "Saturn",
        radius: 11.0,
        distance: 250.0,
        texture: "textures/saturn.jpg",
        ring: Some(Ring {
            inner_radius: 9.0,
            outer_radius: 18.0,
            texture: "textures/saturn_rings.jpg",
        }),
        revolution_speed: 0.0028,
        rotation_speed: 0.0013,
    },
    BodyConfig {
        name: "Uranus",
        radius: 7.5,
        distance: 288.0,
        texture: "textures/uranus.jpg",
        ring: Some(Ring {
            inner_radius: 7.0,
            outer_radius: 12.0,
            texture: "textures/uranus_ring.jpg",
        }),
        revolution_speed: 0.003,
        rotation_speed: 0.006,
    },
    BodyConfig {
        name: "Neptune",
        radius: 6.5,
        distance: 325.0,
        texture: "textures/neptune.jpg",
        ring: None,
        revolution_speed: 0.0021,
        rotation_speed: 0.007,
    },
];
