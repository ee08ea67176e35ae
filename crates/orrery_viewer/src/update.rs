use bevy::prelude::*;
use orrery::constants::SUN_SPIN_SPEED;
use orrery::motion::{angle_step, wrap_angle};

use crate::planet::{CelestialBody, PlanetMesh, Sun};

/// The sun spins at a fixed rate and never revolves.
pub fn sun_spin(
    time: Res<Time>,
    mut suns: Query<&mut Transform, With<Sun>>,
) {
    for mut transform in suns.iter_mut() {
        transform.rotate_y(SUN_SPIN_SPEED * time.delta_seconds());
    }
}

/// Advances every pivot by its revolution speed, normalized to the 60 Hz
/// authoring baseline. The angle is the exact time-integral of the
/// currently-set speed, so panel edits take effect on the next frame.
pub fn revolution(
    time: Res<Time>,
    mut bodies: Query<(&mut CelestialBody, &mut Transform)>,
) {
    for (mut body, mut transform) in bodies.iter_mut() {
        let step = angle_step(body.revolution_speed, time.delta_seconds());

        body.revolution_angle = wrap_angle(body.revolution_angle + step);
        transform.rotation = Quat::from_rotation_y(body.revolution_angle);
    }
}

/// Advances every sphere mesh by its pivot's rotation speed. Only the
/// sphere spins; ring siblings keep the pivot-level revolution alone.
pub fn axial_spin(
    time: Res<Time>,
    mut meshes: Query<(&Parent, &mut Transform), With<PlanetMesh>>,
    mut bodies: Query<&mut CelestialBody>,
) {
    for (parent, mut transform) in meshes.iter_mut() {
        let Ok(mut body) = bodies.get_mut(parent.get()) else {
            warn!("planet mesh has no celestial body pivot");
            continue;
        };

        let step = angle_step(body.rotation_speed, time.delta_seconds());

        body.spin_angle = wrap_angle(body.spin_angle + step);
        transform.rotation = Quat::from_rotation_y(body.spin_angle);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use orrery::constants::TWO_PI;
    use test_case::test_case;

    use super::*;

    /// One frame of the 60 Hz baseline the speed constants assume.
    const FRAME: Duration = Duration::from_nanos(16_666_667);

    fn test_app() -> App {
        let mut app = App::new();

        app.insert_resource(Time::<()>::default());
        app.add_systems(Update, (sun_spin, revolution, axial_spin));

        app
    }

    fn run_frames(app: &mut App, frames: u32, delta: Duration) {
        for _ in 0..frames {
            app.world.resource_mut::<Time>().advance_by(delta);
            app.update();
        }
    }

    fn spawn_planet(
        app: &mut App,
        revolution_speed: f32,
        rotation_speed: f32,
    ) -> (Entity, Entity) {
        let pivot = app
            .world
            .spawn((
                Transform::default(),
                CelestialBody {
                    revolution_speed,
                    rotation_speed,
                    revolution_angle: 0.0,
                    spin_angle: 0.0,
                },
            ))
            .id();

        let mesh = app
            .world
            .spawn((Transform::from_xyz(132.0, 0.0, 0.0), PlanetMesh))
            .id();

        app.world.entity_mut(pivot).push_children(&[mesh]);

        (pivot, mesh)
    }

    #[test]
    fn sixty_baseline_frames_advance_earth_by_0_192_radians() {
        let mut app = test_app();
        let (pivot, _) = spawn_planet(&mut app, 0.0032, 0.008);

        run_frames(&mut app, 60, FRAME);

        let body = app.world.get::<CelestialBody>(pivot).unwrap();
        assert!((body.revolution_angle - 0.192).abs() < 1e-4);
        assert!((body.spin_angle - 0.48).abs() < 1e-4);
    }

    #[test_case(0.0028, 0.004; "mercury")]
    #[test_case(0.0038, 0.006; "jupiter")]
    fn transforms_mirror_the_accumulated_angles(
        revolution_speed: f32,
        rotation_speed: f32,
    ) {
        let mut app = test_app();
        let (pivot, mesh) = spawn_planet(&mut app, revolution_speed, rotation_speed);

        run_frames(&mut app, 45, FRAME);

        let body = app.world.get::<CelestialBody>(pivot).unwrap();
        let revolution_angle = body.revolution_angle;
        let spin_angle = body.spin_angle;

        let pivot_rotation = app.world.get::<Transform>(pivot).unwrap().rotation;
        let mesh_rotation = app.world.get::<Transform>(mesh).unwrap().rotation;

        assert!(
            pivot_rotation
                .angle_between(Quat::from_rotation_y(revolution_angle))
                < 1e-5
        );
        assert!(
            mesh_rotation.angle_between(Quat::from_rotation_y(spin_angle))
                < 1e-5
        );
    }

    #[test]
    fn speed_edits_apply_from_the_next_frame() {
        let mut app = test_app();
        let (pivot, _) = spawn_planet(&mut app, 0.0032, 0.008);

        run_frames(&mut app, 30, FRAME);

        app.world
            .get_mut::<CelestialBody>(pivot)
            .unwrap()
            .revolution_speed = 0.04;

        run_frames(&mut app, 30, FRAME);

        let body = app.world.get::<CelestialBody>(pivot).unwrap();
        let expected = 30.0 * 0.0032 + 30.0 * 0.04;
        assert!((body.revolution_angle - expected).abs() < 1e-4);
    }

    #[test]
    fn angles_stay_wrapped_below_two_pi() {
        let mut app = test_app();
        let (pivot, _) = spawn_planet(&mut app, 0.04, 0.1);

        run_frames(&mut app, 500, FRAME);

        let body = app.world.get::<CelestialBody>(pivot).unwrap();
        assert!((0.0..TWO_PI).contains(&body.revolution_angle));
        assert!((0.0..TWO_PI).contains(&body.spin_angle));
    }

    #[test]
    fn spin_never_displaces_the_mesh() {
        let mut app = test_app();
        let (_, mesh) = spawn_planet(&mut app, 0.0032, 0.008);

        run_frames(&mut app, 120, FRAME);

        let translation = app.world.get::<Transform>(mesh).unwrap().translation;
        assert_eq!(translation, Vec3::new(132.0, 0.0, 0.0));
    }

    #[test]
    fn motion_speed_is_independent_of_frame_rate() {
        // Same wall-clock second at 60 Hz and at 30 Hz.
        let mut sixty = test_app();
        let (pivot_sixty, _) = spawn_planet(&mut sixty, 0.0032, 0.008);
        run_frames(&mut sixty, 60, FRAME);

        let mut thirty = test_app();
        let (pivot_thirty, _) = spawn_planet(&mut thirty, 0.0032, 0.008);
        run_frames(&mut thirty, 30, Duration::from_nanos(33_333_333));

        let a = sixty
            .world
            .get::<CelestialBody>(pivot_sixty)
            .unwrap()
            .revolution_angle;
        let b = thirty
            .world
            .get::<CelestialBody>(pivot_thirty)
            .unwrap()
            .revolution_angle;

        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn sun_spins_half_a_radian_per_second() {
        let mut app = test_app();
        let sun = app.world.spawn((Transform::default(), Sun)).id();

        run_frames(&mut app, 60, FRAME);

        let rotation = app.world.get::<Transform>(sun).unwrap().rotation;
        let (axis, angle) = rotation.to_axis_angle();

        assert!((angle - 0.5).abs() < 1e-3);
        assert!(axis.abs_diff_eq(Vec3::Y, 1e-4));
    }
}
