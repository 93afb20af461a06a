//! Fixed-step time integration for the orbital system
//!
//! Advances satellites with semi-implicit (symplectic) Euler, driven by
//! `AccelSet` and `Parameters`, and handles collision with the central body

use super::states::{System, Satellite, CentralBody};
use super::forces::AccelSet;

/// Advance one satellite by `dt` against the central body
///
/// Collision is checked on the pre-step position: at or inside the collision
/// radius the satellite is marked dead and nothing else changes. Otherwise
/// the velocity is kicked with the acceleration from the pre-step position,
/// then the position drifts with the *updated* velocity (symplectic
/// ordering), and the new position is appended to the trail
pub fn step_satellite(
    sat: &mut Satellite,
    central: &CentralBody,
    forces: &AccelSet,
    dt: f64,
) {
    // Displacement from the satellite to the central body and its length.
    // The same distance feeds both the collision check and the force terms
    let to_center = central.position - sat.x;
    let dist = to_center.norm();

    if dist <= central.radius {
        // simple collision: mark dead, position/velocity stay untouched
        sat.alive = false;
        return;
    }

    // Total acceleration at the pre-step position (gravity + drift)
    let a = forces.accumulate_accel(to_center, dist);

    // Kick: v_n+1 = v_n + dt * a(x_n)
    sat.v += a * dt;

    // Drift: x_n+1 = x_n + dt * v_n+1  (uses the freshly kicked velocity)
    sat.x += sat.v * dt;

    // Trail: append, trimming happens in batches inside the container
    sat.trail.push(sat.x);
}

/// Advance the whole system by one frame
///
/// `dt` must already be clamped by the caller (to `Parameters::max_dt`) so
/// the scheme stays stable under frame-rate hitches. Each live satellite is
/// stepped exactly once. Satellites that collided this pass are compacted
/// out afterwards (mark-then-compact), so the next frame's pass sees live
/// satellites only
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, dt: f64) {
    let System {
        central,
        satellites,
        t,
    } = sys;

    for sat in satellites.iter_mut() {
        step_satellite(sat, central, forces, dt);
    }

    // Drop satellites marked dead during this pass
    satellites.retain(|s| s.alive);

    // Advance the simulation clock by one full step
    *t += dt;
}
