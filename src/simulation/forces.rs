//! Force / acceleration contributors for the orbital engine
//!
//! Defines the acceleration trait for central-force terms, including
//! Newtonian point gravity and the stylized tangential drift perturbation

use crate::simulation::states::NVec2;

/// Collection of acceleration terms (gravity, drift, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per satellite
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute the total acceleration on one satellite
    /// - `to_center` is the displacement from the satellite to the central body
    /// - `dist` is its Euclidean length, precomputed by the caller (the
    ///   integrator already needs it for the collision check)
    pub fn accumulate_accel(&self, to_center: NVec2, dist: f64) -> NVec2 {
        // Zero accumulator
        let mut a = NVec2::zeros();
        // Iterate over all acceration contributors
        for term in &self.terms {
            term.acceleration(to_center, dist, &mut a);
        }
        a
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources acting on a satellite relative to the
/// central body. Implementations add their contribution into `out`
///
/// Pure and deterministic: same `(to_center, dist)` in, same contribution
/// out, no side effects
pub trait Acceleration {
    fn acceleration(&self, to_center: NVec2, dist: f64, out: &mut NVec2);
}

/// Normalize `v`, returning the zero vector when the magnitude is at or
/// below `min_dist`. The zero fallback stops NaNs from propagating out of
/// degenerate (near-center) states
pub fn dir_or_zero(v: NVec2, min_dist: f64) -> NVec2 {
    let m = v.norm();
    if m <= min_dist {
        return NVec2::zeros();
    }
    v / m
}

/// Newtonian point gravity toward the central body
/// `min_dist` floors the squared-distance denominator so the acceleration
/// stays finite as r -> 0
#[allow(non_snake_case)]
pub struct CentralGravity {
    pub G: f64, // gravitional constant
    pub mass: f64, // central body mass
    pub min_dist: f64, // epsilon guard
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, to_center: NVec2, dist: f64, out: &mut NVec2) {
        // Unit vector pointing from the satellite toward the center.
        // Degenerate (dist <= epsilon) input yields the zero vector, so the
        // term contributes nothing instead of a NaN
        let dir = dir_or_zero(to_center, self.min_dist);

        // Acceleration magnitude:
        //   |a| = G * M / (r^2 + eps)
        // The epsilon in the denominator protects the division as r -> 0
        let accel = self.G * self.mass / (dist * dist + self.min_dist);

        // Gravity pulls along +dir (toward the center)
        *out += dir * accel;
    }
}

/// Stylized tangential drift perturbation
///
/// Adds an acceleration perpendicular to the radial direction with
/// magnitude `strength * r`. This is a deliberate, non-physical hack kept
/// from the simulator's design, not a real oblateness term; the energy
/// drift it causes is expected behavior
pub struct TangentialDrift {
    pub strength: f64, // acceleration per unit distance
    pub min_dist: f64, // epsilon guard for normalization
}

impl Acceleration for TangentialDrift {
    fn acceleration(&self, to_center: NVec2, dist: f64, out: &mut NVec2) {
        let dir = dir_or_zero(to_center, self.min_dist);

        // Rotate the toward-center direction 90 degrees to get the tangent
        let tangent = NVec2::new(-dir.y, dir.x);

        // Drift grows linearly with distance from the center
        *out += tangent * (self.strength * dist);
    }
}
