use glam::Vec3;

use crate::constants::TWO_PI;

/// Samples a closed polyline approximating a circle of `radius` in the
/// horizontal plane.
///
/// Returns `segments + 1` points; point `i` sits at angle
/// `2π·i/segments`. The closing point reuses the angle of point zero, so
/// the first and last points are bitwise equal and the loop closes
/// exactly rather than within floating-point error.
pub fn sample_circle(radius: f32, segments: u32) -> Vec<Vec3> {
    debug_assert!(segments >= 3);

    (0..=segments)
        .map(|i| {
            let theta = (i % segments) as f32 / segments as f32 * TWO_PI;

            Vec3::new(theta.cos() * radius, 0.0, theta.sin() * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(75.0, 300)]
    #[test_case(132.0, 300)]
    #[test_case(1.0, 3)]
    #[test_case(325.0, 16)]
    fn closed_loop_with_one_extra_point(radius: f32, segments: u32) {
        let points = sample_circle(radius, segments);

        assert_eq!(points.len(), segments as usize + 1);
        assert_eq!(points[0], points[segments as usize]);
    }

    #[test_case(75.0, 300)]
    #[test_case(0.5, 7)]
    #[test_case(2000.0, 10)]
    fn every_point_lies_on_the_circle(radius: f32, segments: u32) {
        for point in sample_circle(radius, segments) {
            assert!((point.length() - radius).abs() < radius * 1e-5);
            assert_eq!(point.y, 0.0);
        }
    }

    #[test]
    fn starts_on_the_positive_x_axis() {
        let points = sample_circle(10.0, 300);

        assert_eq!(points[0], Vec3::new(10.0, 0.0, 0.0));
    }
}
