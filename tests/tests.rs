use orbsim::simulation::states::{CentralBody, Satellite, System, Trail, NVec2, TRAIL_TRIM_BATCH};
use orbsim::simulation::params::Parameters;
use orbsim::simulation::engine::Engine;
use orbsim::simulation::forces::{AccelSet, CentralGravity, TangentialDrift, dir_or_zero};
use orbsim::simulation::integrator::{step_satellite, semi_implicit_euler};
use orbsim::simulation::predictor::predict_orbit;
use orbsim::simulation::energy::specific_energy;
use orbsim::simulation::scenario::{Scenario, circular_velocity};
use orbsim::configuration::config::{
    ScenarioConfig, EngineConfig, ParametersConfig, CentralBodyConfig, SatelliteConfig,
};

/// Default physics parameters for tests (speed scale 1 so auto-initialized
/// orbits are truly circular)
pub fn test_params() -> Parameters {
    Parameters {
        G: 0.2,
        drift_strength: 5.0e-5,
        speed_scale: 1.0,
        min_dist: 1.0e-3,
        max_dt: 0.05,
        max_trail: 3000,
        spawn_margin: 5.0,
    }
}

/// Central body used across tests
pub fn test_central() -> CentralBody {
    CentralBody {
        position: NVec2::zeros(),
        mass: 5000.0,
        radius: 90.0,
    }
}

/// Build the standard force set (gravity + drift) for given parameters
pub fn force_set(p: &Parameters, central: &CentralBody) -> AccelSet {
    AccelSet::new()
        .with(CentralGravity {
            G: p.G,
            mass: central.mass,
            min_dist: p.min_dist,
        })
        .with(TangentialDrift {
            strength: p.drift_strength,
            min_dist: p.min_dist,
        })
}

/// Test engine settings for the predictor
pub fn test_engine() -> Engine {
    Engine {
        predict: true,
        predict_h: 0.02,
        predict_steps: 400,
        energy_every: 200,
    }
}

/// Satellite on a circular orbit at radius `r` along +x
pub fn circular_satellite(r: f64, p: &Parameters, central: &CentralBody) -> Satellite {
    let x = NVec2::new(r, 0.0);
    let v = circular_velocity(x, central, p);
    Satellite::new(x, v, p.max_trail)
}

/// Scenario config mirroring the shipped YAML, with one seeded satellite
pub fn test_config() -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            predict: true,
            predict_h: None,
            predict_steps: None,
            energy_every: None,
        },
        parameters: ParametersConfig {
            G: 0.2,
            drift_strength: 5.0e-5,
            speed_scale: 4.0,
            min_dist: 1.0e-3,
            max_dt: 0.05,
            max_trail: 3000,
            spawn_margin: 5.0,
        },
        central: CentralBodyConfig {
            position: vec![0.0, 0.0],
            mass: 5000.0,
            radius: 90.0,
        },
        satellites: vec![SatelliteConfig {
            x: vec![350.0, 0.0],
            v: None,
        }],
    }
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn gravity_points_toward_center() {
    let p = test_params();
    let central = test_central();
    let forces = AccelSet::new().with(CentralGravity {
        G: p.G,
        mass: central.mass,
        min_dist: p.min_dist,
    });

    let pos = NVec2::new(200.0, 150.0);
    let to_center = central.position - pos;
    let a = forces.accumulate_accel(to_center, to_center.norm());

    assert!(a.norm() > 0.0);
    assert!(
        a.dot(&to_center) > 0.0,
        "Acceleration is not toward the central body"
    );
}

#[test]
fn gravity_epsilon_prevents_blowup() {
    let p = test_params();
    let central = test_central();
    let gravity = CentralGravity {
        G: p.G,
        mass: central.mass,
        min_dist: p.min_dist,
    };

    // Essentially on top of the center: the epsilon floors the denominator
    // and the degenerate direction collapses to zero
    let to_center = NVec2::new(1e-9, 0.0);
    let mut a = NVec2::zeros();
    use orbsim::simulation::forces::Acceleration;
    gravity.acceleration(to_center, to_center.norm(), &mut a);

    assert!(a.norm().is_finite(), "Acceleration blew up near the center");
    assert!(a.norm() < 1e9, "Epsilon guard failed; acceleration too large");
}

#[test]
fn degenerate_direction_is_zero() {
    let d = dir_or_zero(NVec2::new(1e-6, -1e-6), 1e-3);
    assert_eq!(d, NVec2::zeros(), "Sub-epsilon vector must normalize to zero");
}

#[test]
fn drift_is_perpendicular_and_linear_in_distance() {
    let p = test_params();
    let drift = TangentialDrift {
        strength: p.drift_strength,
        min_dist: p.min_dist,
    };
    use orbsim::simulation::forces::Acceleration;

    let to_center = NVec2::new(-300.0, 0.0);
    let mut a = NVec2::zeros();
    drift.acceleration(to_center, 300.0, &mut a);

    assert!(
        a.dot(&to_center).abs() < 1e-12,
        "Drift has a radial component: {:?}",
        a
    );
    assert!(
        (a.norm() - p.drift_strength * 300.0).abs() < 1e-12,
        "Drift magnitude is not strength * r"
    );
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn step_matches_hand_computed_semi_implicit_euler() {
    let p = test_params();
    let central = test_central();
    let forces = force_set(&p, &central);
    let dt = 0.02;

    let v_circ = (p.G * central.mass / 350.0).sqrt();
    let mut sat = Satellite::new(NVec2::new(350.0, 0.0), NVec2::new(0.0, v_circ), p.max_trail);

    // Closed-form single-step arithmetic at (350, 0):
    // toward-center direction is (-1, 0), its tangent (0, -1)
    let accel = p.G * central.mass / (350.0 * 350.0 + p.min_dist);
    let a = NVec2::new(-accel, 0.0) + NVec2::new(0.0, -p.drift_strength * 350.0);

    // Velocity kicks first from the pre-step position, then the position
    // drifts with the *updated* velocity
    let expected_v = NVec2::new(0.0, v_circ) + a * dt;
    let expected_x = NVec2::new(350.0, 0.0) + expected_v * dt;

    step_satellite(&mut sat, &central, &forces, dt);

    assert!(
        (sat.v - expected_v).norm() < 1e-12,
        "Velocity mismatch: {:?} vs {:?}",
        sat.v,
        expected_v
    );
    assert!(
        (sat.x - expected_x).norm() < 1e-12,
        "Position mismatch (symplectic ordering broken?): {:?} vs {:?}",
        sat.x,
        expected_x
    );
    assert_eq!(
        sat.trail.points().last().copied(),
        Some(sat.x),
        "New position was not appended to the trail"
    );
}

#[test]
fn collision_at_radius_marks_dead_without_moving() {
    let p = test_params();
    let central = test_central();
    let forces = force_set(&p, &central);

    // Exactly on the collision radius
    let x0 = NVec2::new(central.radius, 0.0);
    let v0 = NVec2::new(0.0, 1.0);
    let mut sat = Satellite::new(x0, v0, p.max_trail);

    step_satellite(&mut sat, &central, &forces, 0.02);

    assert!(!sat.alive, "Satellite at the collision radius must die");
    assert_eq!(sat.x, x0, "Dead satellite's position changed");
    assert_eq!(sat.v, v0, "Dead satellite's velocity changed");
    assert!(sat.trail.is_empty(), "Dead satellite appended to its trail");
}

#[test]
fn frame_pass_removes_dead_and_steps_live_exactly_once() {
    let p = test_params();
    let central = test_central();
    let forces = force_set(&p, &central);

    let live = circular_satellite(350.0, &p, &central);
    let doomed = Satellite::new(NVec2::new(10.0, 0.0), NVec2::zeros(), p.max_trail);

    let mut sys = System {
        central,
        satellites: vec![doomed, live],
        t: 0.0,
    };

    semi_implicit_euler(&mut sys, &forces, 0.02);

    assert_eq!(sys.satellites.len(), 1, "Dead satellite not compacted out");
    assert!(sys.satellites[0].alive);
    assert_eq!(
        sys.satellites[0].trail.len(),
        1,
        "Surviving satellite must be stepped exactly once per frame"
    );
    assert!((sys.t - 0.02).abs() < 1e-15);
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn trail_trims_oldest_in_batches() {
    let mut trail = Trail::new(100);
    for i in 0..=100 {
        trail.push(NVec2::new(i as f64, 0.0));
    }

    // One point over the cap still drops a full batch from the front
    assert_eq!(trail.len(), 101 - TRAIL_TRIM_BATCH);
    assert_eq!(trail.points()[0].x, TRAIL_TRIM_BATCH as f64);
    assert_eq!(trail.points().last().unwrap().x, 100.0);
}

#[test]
fn trail_never_exceeds_cap_and_keeps_most_recent() {
    let cap = 100;
    let total = 1000;
    let mut trail = Trail::new(cap);

    for i in 0..total {
        trail.push(NVec2::new(i as f64, 0.0));
        assert!(trail.len() <= cap, "Trail cap violated at push {}", i);
    }

    // Retained points are the contiguous most-recent tail
    let len = trail.len();
    assert_eq!(trail.points().last().unwrap().x, (total - 1) as f64);
    assert_eq!(trail.points()[0].x, (total - len) as f64);
}

#[test]
fn trail_cap_holds_over_many_integration_steps() {
    let mut p = test_params();
    p.max_trail = 200;
    let central = test_central();
    let forces = force_set(&p, &central);
    let mut sat = circular_satellite(350.0, &p, &central);

    for _ in 0..1000 {
        step_satellite(&mut sat, &central, &forces, 0.02);
        assert!(sat.trail.len() <= p.max_trail);
    }
    assert_eq!(
        sat.trail.points().last().copied(),
        Some(sat.x),
        "Trail tail must track the current position"
    );
}

// ==================================================================================
// Predictor tests
// ==================================================================================

#[test]
fn predictor_does_not_mutate_caller_state() {
    let p = test_params();
    let central = test_central();
    let forces = force_set(&p, &central);
    let engine = test_engine();

    let sat = circular_satellite(350.0, &p, &central);
    let (x0, v0) = (sat.x, sat.v);

    let ghost: Vec<NVec2> = predict_orbit(sat.x, sat.v, &central, &forces, &engine).collect();

    assert!(!ghost.is_empty());
    assert_eq!(sat.x, x0, "Prediction mutated the live position");
    assert_eq!(sat.v, v0, "Prediction mutated the live velocity");
}

#[test]
fn predictor_recomputes_identically_each_call() {
    let p = test_params();
    let central = test_central();
    let forces = force_set(&p, &central);
    let engine = test_engine();
    let sat = circular_satellite(350.0, &p, &central);

    let first: Vec<NVec2> = predict_orbit(sat.x, sat.v, &central, &forces, &engine).collect();
    let second: Vec<NVec2> = predict_orbit(sat.x, sat.v, &central, &forces, &engine).collect();

    assert_eq!(first, second, "Prediction must be deterministic from scratch");
}

#[test]
fn predictor_runs_full_budget_on_stable_orbit() {
    let p = test_params();
    let central = test_central();
    let forces = force_set(&p, &central);
    let engine = test_engine();
    let sat = circular_satellite(350.0, &p, &central);

    let count = predict_orbit(sat.x, sat.v, &central, &forces, &engine).count();
    assert_eq!(count, engine.predict_steps);
}

#[test]
fn predictor_stops_at_collision() {
    let mut p = test_params();
    p.drift_strength = 0.0;
    let central = test_central();
    let forces = force_set(&p, &central);
    let engine = test_engine();

    // Released from rest just above the surface: guaranteed to fall in well
    // inside the step budget
    let pos = NVec2::new(central.radius + 1.0, 0.0);
    let vel = NVec2::zeros();

    let ghost: Vec<NVec2> = predict_orbit(pos, vel, &central, &forces, &engine).collect();

    assert!(!ghost.is_empty());
    assert!(
        ghost.len() < engine.predict_steps,
        "Prediction did not stop early: {} points",
        ghost.len()
    );
    let last = *ghost.last().unwrap();
    assert!(
        (last - central.position).norm() <= central.radius,
        "Prediction stopped before reaching the surface"
    );
}

// ==================================================================================
// Energy tests
// ==================================================================================

#[test]
fn energy_is_conserved_without_drift() {
    let mut p = test_params();
    p.drift_strength = 0.0;
    let central = test_central();
    let forces = force_set(&p, &central);

    let mut sys = System {
        central: central.clone(),
        satellites: vec![circular_satellite(350.0, &p, &central)],
        t: 0.0,
    };

    let e0 = specific_energy(sys.satellites[0].x, sys.satellites[0].v, &central, &p);
    for _ in 0..5000 {
        semi_implicit_euler(&mut sys, &forces, 0.02);
    }
    let e1 = specific_energy(sys.satellites[0].x, sys.satellites[0].v, &central, &p);

    assert!(
        (e1 - e0).abs() < 0.05,
        "Energy not conserved on drift-free circular orbit: {} -> {}",
        e0,
        e1
    );
}

#[test]
fn energy_wanders_with_drift() {
    let p = test_params();
    let central = test_central();
    let forces = force_set(&p, &central);

    let mut sys = System {
        central: central.clone(),
        satellites: vec![circular_satellite(350.0, &p, &central)],
        t: 0.0,
    };

    let e0 = specific_energy(sys.satellites[0].x, sys.satellites[0].v, &central, &p);
    for _ in 0..5000 {
        semi_implicit_euler(&mut sys, &forces, 0.02);
    }
    let e1 = specific_energy(sys.satellites[0].x, sys.satellites[0].v, &central, &p);

    assert!(
        (e1 - e0).abs() > 0.5,
        "Tangential drift had no visible effect on energy: {} -> {}",
        e0,
        e1
    );
}

// ==================================================================================
// Scenario / spawn tests
// ==================================================================================

#[test]
fn seeded_satellite_gets_circular_velocity() {
    let scenario = Scenario::build_scenario(test_config());

    let sat = &scenario.system.satellites[0];
    let p = &scenario.parameters;
    let central = &scenario.system.central;

    let expected_speed = (p.G * central.mass / 350.0).sqrt() * p.speed_scale;
    assert!((sat.v.norm() - expected_speed).abs() < 1e-9);
    assert!(
        sat.v.dot(&(sat.x - central.position)).abs() < 1e-9,
        "Seeded velocity is not tangential"
    );
}

#[test]
fn spawn_rejects_positions_inside_margin() {
    let mut scenario = Scenario::build_scenario(test_config());
    let before = scenario.system.satellites.len();
    let margin = scenario.system.central.radius + scenario.parameters.spawn_margin;

    // Inside the body and exactly on the margin boundary: both rejected
    assert!(!scenario.spawn_satellite(NVec2::new(50.0, 0.0)));
    assert!(!scenario.spawn_satellite(NVec2::new(margin, 0.0)));
    assert_eq!(scenario.system.satellites.len(), before, "A rejected spawn created a body");
}

#[test]
fn spawn_assigns_tangential_circular_velocity() {
    let mut scenario = Scenario::build_scenario(test_config());

    let pos = NVec2::new(0.0, 200.0);
    assert!(scenario.spawn_satellite(pos));

    let sat = scenario.system.satellites.last().unwrap();
    let p = &scenario.parameters;
    let central = &scenario.system.central;

    let radial = pos - central.position;
    let expected_speed = (p.G * central.mass / 200.0).sqrt() * p.speed_scale;

    assert!(
        sat.v.dot(&radial).abs() < 1e-9,
        "Spawn velocity is not perpendicular to the radial direction"
    );
    assert!(
        (sat.v.norm() - expected_speed).abs() < 1e-9,
        "Spawn speed does not match the scaled circular-orbit formula"
    );
}
