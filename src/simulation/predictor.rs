//! Forward orbit prediction
//!
//! Runs the same force model and semi-implicit Euler rule as the live
//! integrator on local copies of a satellite's state, yielding a bounded
//! sequence of future positions for display. Never touches live state

use super::states::{NVec2, CentralBody};
use super::forces::AccelSet;
use super::engine::Engine;

/// Lazy iterator over predicted future positions
///
/// Each `next()` applies one fixed sub-step of the shared integration rule
/// to a private position/velocity pair. Iteration ends when the step budget
/// is exhausted, or early once the predicted position reaches the central
/// body's collision radius (the intersecting point is the last one yielded)
pub struct OrbitPrediction<'a> {
    p: NVec2, // predicted position (local copy)
    v: NVec2, // predicted velocity (local copy)
    h: f64, // fixed sub-step, independent of frame dt
    remaining: usize,
    central: &'a CentralBody,
    forces: &'a AccelSet,
}

impl Iterator for OrbitPrediction<'_> {
    type Item = NVec2;

    fn next(&mut self) -> Option<NVec2> {
        if self.remaining == 0 {
            return None;
        }

        // Stop once the path has intersected the central body
        let to_center = self.central.position - self.p;
        let dist = to_center.norm();
        if dist <= self.central.radius {
            return None;
        }

        // Same kick/drift update the live integrator uses
        let a = self.forces.accumulate_accel(to_center, dist);
        self.v += a * self.h;
        self.p += self.v * self.h;

        self.remaining -= 1;
        Some(self.p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Build a prediction from a hypothetical starting state
///
/// `pos` and `vel` are taken by value; the caller's satellite is never
/// mutated. Every call recomputes from scratch
pub fn predict_orbit<'a>(
    pos: NVec2,
    vel: NVec2,
    central: &'a CentralBody,
    forces: &'a AccelSet,
    engine: &Engine,
) -> OrbitPrediction<'a> {
    OrbitPrediction {
        p: pos,
        v: vel,
        h: engine.predict_h,
        remaining: engine.predict_steps,
        central,
        forces,
    }
}
