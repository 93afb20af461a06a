//! Diagnostic energy bookkeeping
//!
//! Specific orbital energy of a satellite, sampled periodically by the host
//! for logging. Never feeds back into the simulation

use super::states::{NVec2, CentralBody};
use super::params::Parameters;

/// Kinetic plus potential energy per unit satellite mass:
/// `0.5 |v|^2 - G M / max(r, eps)`
///
/// With zero drift strength this is conserved (up to integration error);
/// nonzero drift makes it wander, which is the expected signature of the
/// stylized perturbation
pub fn specific_energy(
    pos: NVec2,
    vel: NVec2,
    central: &CentralBody,
    params: &Parameters,
) -> f64 {
    let r = (central.position - pos).norm().max(params.min_dist);
    let ke = 0.5 * vel.norm_squared();
    let pe = -params.G * central.mass / r;
    ke + pe
}
