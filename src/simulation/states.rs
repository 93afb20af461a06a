//! Core state types for the orbital simulation.
//!
//! Defines the two-body state structs:
//! - `CentralBody`  fixed gravity source (position, mass, collision radius)
//! - `Satellite`    orbiting body (position, velocity, trail, alive flag)
//! - `Trail`        bounded history of past positions, trimmed in batches
//!
//! The `System` holds the central body, the list of live satellites, and the
//! current simulation time `t`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Minimum number of trail points dropped per trim, even if the cap is only
/// exceeded by one, so removal cost is amortized across frames
pub const TRAIL_TRIM_BATCH: usize = 16;

/// The fixed, dominant gravity source all satellites orbit.
/// Immutable for the lifetime of a simulation run.
#[derive(Debug, Clone)]
pub struct CentralBody {
    pub position: NVec2, // world position (fixed)
    pub mass: f64, // mass
    pub radius: f64, // collision radius
}

/// Bounded history of a satellite's past positions, oldest first.
/// Used only for rendering, never for physics.
///
/// When a push takes the length over `max_len`, the oldest block of entries
/// is dropped in one batch of at least [`TRAIL_TRIM_BATCH`] points, so
/// `len() <= max_len` holds after every push without a per-push O(n) shift.
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<NVec2>,
    max_len: usize,
}

impl Trail {
    /// Create an empty trail capped at `max_len` points
    pub fn new(max_len: usize) -> Self {
        Self {
            points: Vec::with_capacity(max_len.min(512)),
            max_len,
        }
    }

    /// Append a position, trimming the oldest block if the cap is exceeded
    pub fn push(&mut self, p: NVec2) {
        self.points.push(p);
        if self.points.len() > self.max_len {
            let excess = self.points.len() - self.max_len;
            // remove the oldest block in one batch
            let remove = excess.max(TRAIL_TRIM_BATCH).min(self.points.len());
            self.points.drain(..remove);
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Past positions, oldest first
    pub fn points(&self) -> &[NVec2] {
        &self.points
    }
}

/// A simulated satellite.
/// `alive` flips to false exactly once, on collision with the central body;
/// the system compacts dead satellites out at the end of the update pass.
#[derive(Debug, Clone)]
pub struct Satellite {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub trail: Trail, // bounded position history (rendering only)
    pub alive: bool,
}

impl Satellite {
    pub fn new(x: NVec2, v: NVec2, max_trail: usize) -> Self {
        Self {
            x,
            v,
            trail: Trail::new(max_trail),
            alive: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub central: CentralBody, // the gravity source (read-only during updates)
    pub satellites: Vec<Satellite>, // live satellites
    pub t: f64, // time
}
