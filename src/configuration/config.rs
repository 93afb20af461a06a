//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]      – prediction and diagnostics options
//! - [`ParametersConfig`]  – numerical parameters and physical constants
//! - [`CentralBodyConfig`] – the fixed gravity source
//! - [`SatelliteConfig`]   – initial state for each seeded satellite
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   predict: true           # draw the lead satellite's predicted path
//!   predict_h: 0.02         # predictor sub-step (optional)
//!   predict_steps: 400      # predictor step budget (optional)
//!   energy_every: 200       # physics frames between energy log lines (optional)
//!
//! parameters:
//!   G: 0.2                  # gravitational constant
//!   drift_strength: 5.0e-5  # tangential drift per unit distance
//!   speed_scale: 4.0        # scales circular-orbit speed, 1.0 = unscaled
//!   min_dist: 1.0e-3        # distance epsilon
//!   max_dt: 0.05            # frame dt clamp
//!   max_trail: 3000         # trail cap per satellite
//!   spawn_margin: 5.0       # required clearance beyond the collision radius
//!
//! central:
//!   position: [ 0.0, 0.0 ]
//!   mass: 5000.0
//!   radius: 90.0
//!
//! satellites:
//!   - x: [ 350.0, 0.0 ]     # velocity omitted -> circular orbit at that radius
//!   - x: [ -500.0, 120.0 ]
//!     v: [ 0.0, -3.5 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

/// Prediction and diagnostics options
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub predict: bool, // `true` - compute and draw the lead satellite's ghost path
    pub predict_h: Option<f64>, // predictor sub-step, defaults to 0.02
    pub predict_steps: Option<usize>, // predictor step budget, defaults to 400
    pub energy_every: Option<u32>, // energy log cadence in physics frames, defaults to 200
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub G: f64,              // gravitational constant
    pub drift_strength: f64, // tangential drift per unit distance
    pub speed_scale: f64,    // circular-orbit speed multiplier for new satellites
    pub min_dist: f64,       // distance epsilon - prevent singular forces near the center
    pub max_dt: f64,         // frame timestep clamp for numerical stability
    pub max_trail: usize,    // trail cap per satellite
    pub spawn_margin: f64,   // required clearance beyond the collision radius
}

/// Configuration for the fixed central body
#[derive(Deserialize, Debug)]
pub struct CentralBodyConfig {
    pub position: Vec<f64>, // world position, fixed for the whole run
    pub mass: f64,          // mass
    pub radius: f64,        // collision radius
}

/// Configuration for a single seeded satellite's initial state
#[derive(Deserialize, Debug)]
pub struct SatelliteConfig {
    pub x: Vec<f64>,         // initial position in world units
    pub v: Option<Vec<f64>>, // initial velocity; omitted -> tangential circular orbit
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // prediction and diagnostics options
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub central: CentralBodyConfig, // the fixed gravity source
    pub satellites: Vec<SatelliteConfig>, // satellites seeded at t = 0
}
