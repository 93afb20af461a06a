use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::input::mouse::MouseWheel;
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::predictor::predict_orbit;
use crate::simulation::energy::specific_energy;
use crate::simulation::states::NVec2;

/// Base camera pan speed in world units per frame, scaled by zoom
const PAN_BASE: f32 = 8.0;

/// Zoom clamp (orthographic projection scale), prevents runaway zoom
const MIN_ZOOM: f32 = 0.05;
const MAX_ZOOM: f32 = 5.0;

/// Drawn radius of a satellite marker
const SAT_RADIUS: f32 = 5.0;

pub fn run_2d(scenario: Scenario) {
    log::info!(
        "run_2d: starting Bevy viewer with {} satellites",
        scenario.system.satellites.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (spawn_on_click_system, camera_pan_zoom_system, physics_step_system, draw_system),
        )
        .run();
}

/// nalgebra world position -> bevy screen position
fn world_vec(v: &NVec2) -> Vec2 {
    Vec2::new(v.x as f32, v.y as f32)
}

fn setup_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // The central body is the only static drawable; satellites and trails
    // are redrawn from simulation state every frame
    let central = &scenario.system.central;
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(central.radius as f32))),
        material: materials.add(ColorMaterial::from(Color::srgb(0.24, 0.47, 1.0))),
        transform: Transform::from_xyz(central.position.x as f32, central.position.y as f32, 0.0),
        ..Default::default()
    });
}

/// Advance the simulation by the clamped frame time and sample energy
fn physics_step_system(
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
    mut energy_tick: Local<u32>,
) {
    // compute delta time and clamp for stability
    let mut dt = time.delta_seconds() as f64;
    if dt <= 0.0 {
        dt = 1.0 / 60.0;
    }
    let dt = dt.min(scenario.parameters.max_dt);

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
        engine,
    } = &mut *scenario;

    semi_implicit_euler(system, forces, dt);

    // Energy debug line once per `energy_every` physics frames
    *energy_tick += 1;
    if engine.energy_every > 0 && *energy_tick % engine.energy_every == 0 {
        if let Some(sat) = system.satellites.first() {
            let e = specific_energy(sat.x, sat.v, &system.central, parameters);
            log::info!("energy: {e:.4}");
        }
    }
}

/// Left click spawns a satellite at the cursor's world position
fn spawn_on_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut scenario: ResMut<Scenario>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else { return };
    let Some(cursor) = window.cursor_position() else { return };
    let Ok((camera, cam_transform)) = camera_q.get_single() else { return };
    let Some(world) = camera.viewport_to_world_2d(cam_transform, cursor) else { return };

    let pos = NVec2::new(world.x as f64, world.y as f64);
    if !scenario.spawn_satellite(pos) {
        log::debug!("spawn rejected: {pos:?} is inside the collision margin");
    }
}

/// WASD pans (scaled by zoom so movement feels consistent), wheel zooms
fn camera_pan_zoom_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut wheel: EventReader<MouseWheel>,
    mut camera_q: Query<(&mut Transform, &mut OrthographicProjection), With<Camera>>,
) {
    let Ok((mut transform, mut projection)) = camera_q.get_single_mut() else { return };

    for ev in wheel.read() {
        if ev.y > 0.0 {
            projection.scale *= 0.9;
        } else if ev.y < 0.0 {
            projection.scale *= 1.1;
        }
    }
    projection.scale = projection.scale.clamp(MIN_ZOOM, MAX_ZOOM);

    let cam = PAN_BASE * projection.scale;
    if keys.pressed(KeyCode::KeyA) {
        transform.translation.x -= cam;
    }
    if keys.pressed(KeyCode::KeyD) {
        transform.translation.x += cam;
    }
    if keys.pressed(KeyCode::KeyW) {
        transform.translation.y += cam;
    }
    if keys.pressed(KeyCode::KeyS) {
        transform.translation.y -= cam;
    }
}

/// Draw trails, satellite markers, and the lead satellite's predicted path
fn draw_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    for sat in &scenario.system.satellites {
        if sat.trail.len() >= 2 {
            gizmos.linestrip_2d(
                sat.trail.points().iter().map(world_vec),
                Color::srgb(0.0, 1.0, 0.0),
            );
        }
        gizmos.circle_2d(world_vec(&sat.x), SAT_RADIUS, Color::srgb(1.0, 0.25, 0.25));
    }

    // Ghost path for the lead satellite (display only, recomputed per frame)
    if scenario.engine.predict {
        if let Some(sat) = scenario.system.satellites.first() {
            let ghost: Vec<Vec2> = predict_orbit(
                sat.x,
                sat.v,
                &scenario.system.central,
                &scenario.forces,
                &scenario.engine,
            )
            .map(|p| world_vec(&p))
            .collect();

            if ghost.len() >= 2 {
                gizmos.linestrip_2d(ghost, Color::srgba(0.78, 0.78, 1.0, 0.47));
            }
        }
    }
}
