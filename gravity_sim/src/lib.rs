//! Solar system gravity core
//!
//! Holds the physical state of a small set of celestial bodies and steps it
//! forward with pairwise Newtonian gravitation and a fixed-step explicit
//! Euler scheme:
//! - [`BodyRegistry`]: bodies loaded once from planet data, positions in AU,
//!   velocities in m/s
//! - [`GravityIntegrator`]: one tick of force accumulation and integration
//! - [`diagnostics`]: momentum, center of mass and energy
//! - [`display`]: per-body instances for a renderer

pub mod body;
pub mod config;
pub mod diagnostics;
pub mod display;
pub mod error;
pub mod integrator;
pub mod planet_data;
pub mod registry;

pub use body::{Body, BodyRecord, SUN_NAME};
pub use config::{IntegrationMode, PairStrategy, SimulationConfig};
pub use display::{DisplayInstance, DisplayProjection};
pub use error::{SimError, SimResult};
pub use integrator::{gravitational_force, GravityIntegrator, TickReport};
pub use registry::{BodyRegistry, BodyState, Snapshot};
