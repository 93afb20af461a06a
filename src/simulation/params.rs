//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime tunables:
//! - gravitational constant and drift strength (`G`, `drift_strength`),
//! - circular-orbit speed scale for seeded/spawned satellites,
//! - distance epsilon and timestep cap (`min_dist`, `max_dt`),
//! - trail cap and spawn margin

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub drift_strength: f64, // tangential drift magnitude per unit distance
    pub speed_scale: f64, // scales circular-orbit speed of new satellites
    pub min_dist: f64, // distance epsilon, floors every division by r
    pub max_dt: f64, // upper bound the host clamps frame dt to
    pub max_trail: usize, // trail cap per satellite
    pub spawn_margin: f64, // extra clearance beyond the collision radius
}
