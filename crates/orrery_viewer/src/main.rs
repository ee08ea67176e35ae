use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use orrery::body::PLANETS;
use smooth_bevy_cameras::controllers::orbit::{
    OrbitCameraBundle, OrbitCameraController, OrbitCameraPlugin,
};
use smooth_bevy_cameras::LookTransformPlugin;

mod draw;
mod planet;
mod ui;
mod update;

/// Camera eye position at startup, looking at the sun.
const CAMERA_EYE: Vec3 = Vec3::new(-70.0, 120.0, 400.0);

/// Fraction of the previous camera transform kept each frame, so camera
/// motion eases out after input stops instead of halting instantly.
const CAMERA_SMOOTHING_WEIGHT: f32 = 0.97;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(LookTransformPlugin)
        .add_plugins(OrbitCameraPlugin::new(false))
        .add_plugins(EguiPlugin)
        .init_resource::<Settings>()
        .add_systems(Startup, setup)
        .add_systems(Update, ui::panel)
        .add_systems(Update, ui::apply_theme)
        .add_systems(Update, update::sun_spin)
        .add_systems(Update, update::revolution)
        .add_systems(Update, update::axial_spin)
        .add_systems(Update, draw::orbit_paths)
        .add_systems(Update, texture_load_failures)
        .run();
}

#[derive(Resource)]
struct Settings {
    dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    commands.insert_resource(ClearColor(Color::BLACK));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 1.5,
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 800.0,
            range: 100.0,
            ..default()
        },
        ..default()
    });

    planet::spawn_sun(
        &mut commands,
        meshes.as_mut(),
        materials.as_mut(),
        asset_server.as_ref(),
    );

    planet::spawn_starfield(
        &mut commands,
        meshes.as_mut(),
        materials.as_mut(),
        asset_server.as_ref(),
    );

    for config in &PLANETS {
        let assets = planet::body_assets(
            config,
            meshes.as_mut(),
            materials.as_mut(),
            asset_server.as_ref(),
        );

        planet::spawn_planet(&mut commands, config, assets);
    }

    commands
        .spawn(Camera3dBundle::default())
        .insert(OrbitCameraBundle::new(
            {
                let mut controller = OrbitCameraController::default();

                controller.smoothing_weight = CAMERA_SMOOTHING_WEIGHT;

                controller
            },
            CAMERA_EYE,
            Vec3::ZERO,
            Vec3::Y,
        ));
}

/// Texture decode failures are not fatal anywhere in this scene; the
/// affected geometry simply renders untextured. Surface them in the log
/// instead of failing silently.
fn texture_load_failures(
    mut failures: EventReader<AssetLoadFailedEvent<Image>>,
) {
    for failure in failures.read() {
        warn!(
            path = %failure.path,
            error = %failure.error,
            "texture failed to load, rendering untextured"
        );
    }
}
