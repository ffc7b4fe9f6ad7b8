//! Error types for the gravity core

use thiserror::Error;

/// Result type for registry and integrator operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors that abort loading or stepping the simulation
#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Planet data error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Body {name:?} has invalid mass {mass} (must be positive and finite)")]
    InvalidMass { name: String, mass: f64 },

    #[error("Timestep {timestep} is not a finite number of seconds")]
    InvalidTimestep { timestep: f64 },

    #[error("No bodies in planet data")]
    EmptyRegistry,

    #[error("Bodies {first:?} and {second:?} share a position; gravitational force is undefined")]
    CoincidentBodies { first: String, second: String },
}
