use std::time::Instant;
use crate::simulation::states::{System, CentralBody, Satellite, NVec2};
use crate::simulation::params::Parameters;
use crate::simulation::forces::{AccelSet, CentralGravity, TangentialDrift};
use crate::simulation::engine::Engine;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::predictor::predict_orbit;
use crate::simulation::scenario::circular_velocity;

fn bench_params() -> Parameters {
    Parameters {
        G: 0.2,
        drift_strength: 5.0e-5,
        speed_scale: 4.0,
        min_dist: 1.0e-3,
        max_dt: 0.05,
        max_trail: 3000,
        spawn_margin: 5.0,
    }
}

fn bench_central() -> CentralBody {
    CentralBody {
        position: NVec2::zeros(),
        mass: 5000.0,
        radius: 90.0,
    }
}

fn bench_forces(p: &Parameters, central: &CentralBody) -> AccelSet {
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

/// Build a system of `n` satellites on deterministic circular-ish orbits
fn bench_system(n: usize, p: &Parameters) -> System {
    let central = bench_central();
    let mut satellites = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let angle = i_f * 0.37;
        let radius = 150.0 + (i_f * 0.13).sin().abs() * 600.0 + central.radius;
        let x = NVec2::new(angle.cos() * radius, angle.sin() * radius);
        let v = circular_velocity(x, &central, p);

        satellites.push(Satellite::new(x, v, p.max_trail));
    }

    System {
        central,
        satellites,
        t: 0.0,
    }
}

/// Time the per-frame integrator pass at several satellite counts
pub fn bench_step() {
    // Different system sizes to test
    let ns = [100, 400, 1600, 6400];
    let frames = 1000;
    let dt = 1.0 / 60.0;

    let p = bench_params();

    for n in ns {
        let mut sys = bench_system(n, &p);
        let forces = bench_forces(&p, &sys.central);

        // Warm up
        semi_implicit_euler(&mut sys, &forces, dt);

        let t0 = Instant::now();
        for _ in 0..frames {
            semi_implicit_euler(&mut sys, &forces, dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {frames} frames = {elapsed:8.6} s, {:10.1} sat-steps/s",
            (n * frames) as f64 / elapsed
        );
    }
}

/// Time full predictor sweeps at several step budgets
pub fn bench_predict() {
    let budgets = [400, 1600, 6400];
    let sweeps = 1000;

    let p = bench_params();
    let central = bench_central();
    let forces = bench_forces(&p, &central);

    let x = NVec2::new(350.0, 0.0);
    let v = circular_velocity(x, &central, &p);

    for steps in budgets {
        let engine = Engine {
            predict: true,
            predict_h: 0.02,
            predict_steps: steps,
            energy_every: 0,
        };

        // Warm up
        let _ = predict_orbit(x, v, &central, &forces, &engine).count();

        let t0 = Instant::now();
        let mut points = 0usize;
        for _ in 0..sweeps {
            points += predict_orbit(x, v, &central, &forces, &engine).count();
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "steps = {steps:5}, {sweeps} sweeps = {elapsed:8.6} s ({points} points)"
        );
    }
}
