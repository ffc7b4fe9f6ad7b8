//! Common utilities for the solar system simulation
//!
//! This crate provides the physical constants, the AU/SI unit conversions and
//! the logging setup shared by the gravity core and anything that turns
//! simulation state into display space.

pub mod units;

pub use units::*;

/// Physical constants used in simulations
pub mod constants {
    /// Gravitational constant in N·m²/kg²
    pub const G: f64 = 6.67408e-11;

    /// One astronomical unit in meters
    pub const AU_METERS: f64 = 149_597_870_700.0;

    /// Simulated seconds advanced by one tick
    pub const TIMESTEP: f64 = 1e22;
}

/// Initialise `env_logger` with an `info` default, overridable through `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
    log::debug!("logging initialised");
}
