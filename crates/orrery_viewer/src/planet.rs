use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_resource::{Face, PrimitiveTopology};
use glam::Vec3;
use orrery::body::{STARFIELD_TEXTURE, SUN_TEXTURE};
use orrery::constants::{
    ORBIT_SEGMENTS, RING_SEGMENTS, SPHERE_SUBDIVISIONS, STARFIELD_RADIUS,
    STARFIELD_SUBDIVISIONS, SUN_RADIUS, TWO_PI,
};
use orrery::orbit_path::sample_circle;
use orrery::BodyConfig;

/// Live animation state of one planet, attached to its pivot entity.
///
/// The pivot's rotation produces revolution around the sun; the sphere
/// mesh child carries the axial spin. Speeds are edited in place by the
/// debug panel, angles are accumulated by the animation systems and kept
/// wrapped to `[0, 2π)`.
#[derive(Component)]
pub struct CelestialBody {
    pub revolution_speed: f32,
    pub rotation_speed: f32,
    pub revolution_angle: f32,
    pub spin_angle: f32,
}

impl CelestialBody {
    pub fn from_config(config: &BodyConfig) -> Self {
        Self {
            revolution_speed: config.revolution_speed,
            rotation_speed: config.rotation_speed,
            revolution_angle: 0.0,
            spin_angle: 0.0,
        }
    }
}

/// Sphere mesh child of a pivot; the only node receiving axial spin.
#[derive(Component)]
pub struct PlanetMesh;

/// Ring mesh child of a pivot; revolves with the pivot but never spins.
#[derive(Component)]
pub struct PlanetRing;

#[derive(Component)]
pub struct Sun;

#[derive(Component)]
pub struct Starfield;

/// Decorative reference circle tracing a planet's distance from the
/// origin. Built once at spawn; the points are never touched again.
#[derive(Component)]
pub struct OrbitPath {
    points: Vec<Vec3>,
}

impl OrbitPath {
    pub fn circle(radius: f32) -> Self {
        Self {
            points: sample_circle(radius, ORBIT_SEGMENTS),
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

/// Mesh and material handles for one planet, ready to spawn.
pub struct BodyAssets {
    pub sphere: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub ring: Option<(Handle<Mesh>, Handle<StandardMaterial>)>,
}

/// Builds the sphere and optional ring assets for a configured body.
///
/// Texture loads are fire-and-forget: the asset server decodes them in
/// the background and the renderer picks them up whenever they arrive.
pub fn body_assets(
    config: &BodyConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
) -> BodyAssets {
    let sphere = meshes.add(
        shape::UVSphere {
            radius: config.radius,
            sectors: SPHERE_SUBDIVISIONS,
            stacks: SPHERE_SUBDIVISIONS,
        }
        .into(),
    );

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(config.texture)),
        perceptual_roughness: 1.0,
        ..default()
    });

    let ring = config.ring.map(|ring| {
        let mesh = meshes.add(annulus_mesh(
            ring.inner_radius,
            ring.outer_radius,
            RING_SEGMENTS,
        ));

        // Visible from above and below the orbital plane.
        let material = materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(ring.texture)),
            perceptual_roughness: 1.0,
            double_sided: true,
            cull_mode: None,
            ..default()
        });

        (mesh, material)
    });

    BodyAssets {
        sphere,
        material,
        ring,
    }
}

/// Spawns one planet: a pivot at the origin owning the sphere mesh (and
/// ring, if any) offset to `(distance, 0, 0)`, plus the scene-level orbit
/// path of matching radius. Returns the pivot entity.
pub fn spawn_planet(
    commands: &mut Commands,
    config: &BodyConfig,
    assets: BodyAssets,
) -> Entity {
    let pivot = commands
        .spawn(SpatialBundle::default())
        .insert(CelestialBody::from_config(config))
        .insert(Name::new(config.name))
        .with_children(|pivot| {
            pivot
                .spawn(PbrBundle {
                    mesh: assets.sphere,
                    material: assets.material,
                    transform: Transform::from_xyz(config.distance, 0.0, 0.0),
                    ..default()
                })
                .insert(PlanetMesh);

            if let Some((mesh, material)) = assets.ring {
                // Sibling of the sphere, so it revolves with the pivot
                // without inheriting the sphere's axial spin. Rotated to
                // lie flat in the orbital plane.
                pivot
                    .spawn(PbrBundle {
                        mesh,
                        material,
                        transform: Transform::from_xyz(
                            config.distance,
                            0.0,
                            0.0,
                        )
                        .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                        ..default()
                    })
                    .insert(PlanetRing);
            }
        })
        .id();

    commands.spawn((
        OrbitPath::circle(config.distance),
        Name::new(format!("{} orbit", config.name)),
    ));

    pivot
}

pub fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
) -> Entity {
    let mesh = meshes.add(
        shape::UVSphere {
            radius: SUN_RADIUS,
            sectors: SPHERE_SUBDIVISIONS,
            stacks: SPHERE_SUBDIVISIONS,
        }
        .into(),
    );

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(SUN_TEXTURE)),
        perceptual_roughness: 1.0,
        ..default()
    });

    commands
        .spawn(PbrBundle {
            mesh,
            material,
            ..default()
        })
        .insert(Sun)
        .insert(Name::new("Sun"))
        .id()
}

pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
) -> Entity {
    let mesh = meshes.add(
        shape::UVSphere {
            radius: STARFIELD_RADIUS,
            sectors: STARFIELD_SUBDIVISIONS,
            stacks: STARFIELD_SUBDIVISIONS,
        }
        .into(),
    );

    // Front-face culling leaves only the inward faces visible, putting
    // the texture on the inside of the enclosing sphere.
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(STARFIELD_TEXTURE)),
        unlit: true,
        cull_mode: Some(Face::Front),
        ..default()
    });

    commands
        .spawn(PbrBundle {
            mesh,
            material,
            ..default()
        })
        .insert(Starfield)
        .insert(Name::new("Starfield"))
        .id()
}

/// Builds a flat annulus between `inner_radius` and `outer_radius` in the
/// XY plane, one quad per theta segment.
pub fn annulus_mesh(
    inner_radius: f32,
    outer_radius: f32,
    segments: u32,
) -> Mesh {
    let vertex_count = ((segments + 1) * 2) as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(segments as usize * 6);

    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let (sin, cos) = (t * TWO_PI).sin_cos();

        positions.push([cos * inner_radius, sin * inner_radius, 0.0]);
        positions.push([cos * outer_radius, sin * outer_radius, 0.0]);

        normals.push([0.0, 0.0, 1.0]);
        normals.push([0.0, 0.0, 1.0]);

        uvs.push([t, 0.0]);
        uvs.push([t, 1.0]);
    }

    for i in 0..segments {
        let base = i * 2;

        indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base + 2,
            base + 1,
            base + 3,
        ]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.set_indices(Some(Indices::U32(indices)));

    mesh
}
