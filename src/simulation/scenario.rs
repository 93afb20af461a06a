//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the central body and seeded satellites)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics, input, and drawing systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, CentralBody, Satellite, NVec2};
use crate::simulation::forces::{AccelSet, CentralGravity, TangentialDrift, dir_or_zero};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, and
/// the set of active force laws (accelerations)
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

/// Tangential circular-orbit velocity for a satellite at `pos`
///
/// Speed is `sqrt(G M / r)` scaled by the configured speed scale; direction
/// is the outward radial rotated 90 degrees. At a degenerate radius the
/// direction collapses to zero and so does the velocity
pub fn circular_velocity(pos: NVec2, central: &CentralBody, params: &Parameters) -> NVec2 {
    let radial = pos - central.position;
    let r = radial.norm();

    let dir = dir_or_zero(radial, params.min_dist);
    let tangent = NVec2::new(-dir.y, dir.x);

    let speed = (params.G * central.mass / r.max(params.min_dist)).sqrt() * params.speed_scale;
    tangent * speed
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Engine (runtime) from EngineConfig, filling optional defaults
        let e_cfg = cfg.engine;
        let engine = Engine {
            predict: e_cfg.predict,
            predict_h: e_cfg.predict_h.unwrap_or(0.02),
            predict_steps: e_cfg.predict_steps.unwrap_or(400),
            energy_every: e_cfg.energy_every.unwrap_or(200),
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            drift_strength: p_cfg.drift_strength,
            speed_scale: p_cfg.speed_scale,
            min_dist: p_cfg.min_dist,
            max_dt: p_cfg.max_dt,
            max_trail: p_cfg.max_trail,
            spawn_margin: p_cfg.spawn_margin,
        };

        let central = CentralBody {
            position: NVec2::new(cfg.central.position[0], cfg.central.position[1]),
            mass: cfg.central.mass,
            radius: cfg.central.radius,
        };

        // Seed satellites: explicit velocity when given, otherwise the
        // tangential circular-orbit velocity at the configured position
        let satellites: Vec<Satellite> = cfg.satellites.iter().map(|sc| {
            let x = NVec2::new(sc.x[0], sc.x[1]);
            let v = match &sc.v {
                Some(v) => NVec2::new(v[0], v[1]),
                None => circular_velocity(x, &central, &parameters),
            };
            Satellite::new(x, v, parameters.max_trail)
        }).collect();

        // Initial system state at t = 0
        let system = System {
            central,
            satellites,
            t: 0.0,
        };

        // Forces: gravity toward the central body plus the tangential drift
        // perturbation. Zero drift strength leaves the term a no-op
        let forces = AccelSet::new()
            .with(CentralGravity {
                G: parameters.G,
                mass: system.central.mass,
                min_dist: parameters.min_dist,
            })
            .with(TangentialDrift {
                strength: parameters.drift_strength,
                min_dist: parameters.min_dist,
            });

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }

    /// Spawn a satellite at a world position, on a circular-ish orbit
    ///
    /// Positions at or inside the collision radius plus the spawn margin are
    /// rejected and no satellite is created. Returns whether a satellite was
    /// added
    pub fn spawn_satellite(&mut self, pos: NVec2) -> bool {
        let r = (pos - self.system.central.position).norm();
        if r <= self.system.central.radius + self.parameters.spawn_margin {
            return false;
        }

        let v = circular_velocity(pos, &self.system.central, &self.parameters);
        self.system.satellites.push(Satellite::new(pos, v, self.parameters.max_trail));
        true
    }
}
