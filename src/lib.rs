pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{CentralBody, Satellite, System, Trail, NVec2, TRAIL_TRIM_BATCH};
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity, TangentialDrift, dir_or_zero};
pub use simulation::integrator::{semi_implicit_euler, step_satellite};
pub use simulation::predictor::{predict_orbit, OrbitPrediction};
pub use simulation::energy::specific_energy;
pub use simulation::scenario::{Scenario, circular_velocity};

pub use configuration::config::{EngineConfig, ParametersConfig, CentralBodyConfig, SatelliteConfig, ScenarioConfig};

pub use visualization::orbit_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_predict};
