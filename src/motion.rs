use crate::constants::{FRAME_RATE_BASELINE, TWO_PI};

/// Angle advanced during one frame by a body moving at `speed`.
///
/// The authored speed constants are radians per frame at an assumed 60 Hz
/// baseline; multiplying by `delta_seconds * 60` keeps the visual rate
/// identical at any actual refresh rate.
#[inline]
pub fn angle_step(speed: f32, delta_seconds: f32) -> f32 {
    speed * delta_seconds * FRAME_RATE_BASELINE
}

/// Wraps an accumulated angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TWO_PI)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const SIXTY_FPS_DELTA: f32 = 1.0 / 60.0;

    #[test_case(0.0032)]
    #[test_case(0.0028)]
    #[test_case(0.1)]
    fn one_baseline_frame_advances_by_the_authored_speed(speed: f32) {
        let step = angle_step(speed, SIXTY_FPS_DELTA);

        assert!((step - speed).abs() < 1e-7);
    }

    #[test]
    fn step_scales_linearly_with_elapsed_time() {
        let one = angle_step(0.0032, SIXTY_FPS_DELTA);
        let three = angle_step(0.0032, 3.0 * SIXTY_FPS_DELTA);

        assert!((three - 3.0 * one).abs() < 1e-7);
    }

    #[test]
    fn sixty_baseline_frames_integrate_earths_orbit_speed() {
        let total: f32 =
            (0..60).map(|_| angle_step(0.0032, SIXTY_FPS_DELTA)).sum();

        assert!((total - 0.192).abs() < 1e-5);
    }

    #[test_case(0.0, 0.0)]
    #[test_case(TWO_PI, 0.0)]
    #[test_case(TWO_PI + 1.0, 1.0)]
    #[test_case(-1.0, TWO_PI - 1.0)]
    fn wrap_stays_in_range(angle: f32, expected: f32) {
        let wrapped = wrap_angle(angle);

        assert!((wrapped - expected).abs() < 1e-5);
        assert!((0.0..TWO_PI).contains(&wrapped));
    }
}
