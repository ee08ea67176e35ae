use std::f32::consts::PI;
use std::ops::RangeInclusive;

pub const TWO_PI: f32 = 2.0 * PI;

/// The authored speed constants assume a 60 updates-per-second baseline;
/// each frame advances angles by `speed * delta_seconds * 60` so visual
/// rates stay the same at any actual refresh rate.
pub const FRAME_RATE_BASELINE: f32 = 60.0;

pub const SUN_RADIUS: f32 = 50.0;

/// Sun axial spin in radians per second (not frame-normalized).
pub const SUN_SPIN_SPEED: f32 = 0.5;

/// Radius of the enclosing starfield sphere.
pub const STARFIELD_RADIUS: f32 = 2000.0;

/// Subdivisions of an orbit reference path.
pub const ORBIT_SEGMENTS: u32 = 300;

/// Theta segments of a planetary ring annulus.
pub const RING_SEGMENTS: u32 = 40;

/// Sectors and stacks of a planet sphere.
pub const SPHERE_SUBDIVISIONS: usize = 50;

/// Sectors and stacks of the starfield sphere.
pub const STARFIELD_SUBDIVISIONS: usize = 10;

/// Editable range of a body's revolution speed.
pub const REVOLUTION_SPEED_RANGE: RangeInclusive<f32> = 0.0005..=0.04;

/// Editable range of a body's axial spin speed.
pub const ROTATION_SPEED_RANGE: RangeInclusive<f32> = 0.0001..=0.1;
