//! Simulation parameters

use std::fmt;
use std::str::FromStr;

use common::constants::TIMESTEP;

use crate::error::{SimError, SimResult};

/// How a tick turns velocity and acceleration into displacement.
/// The two modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationMode {
    /// `v += a·dt`, then `x += v·dt`. The ½·a·dt² term is left out,
    /// reproducing the reference trajectories exactly.
    #[default]
    Faithful,
    /// `x += v·dt + ½·a·dt²` with the pre-kick velocity, then `v += a·dt`.
    Corrected,
}

/// How pairwise forces are evaluated during force accumulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairStrategy {
    /// Every ordered pair, N·(N−1) evaluations per tick
    #[default]
    Ordered,
    /// Every unordered pair once, applied equal and opposite: N·(N−1)/2
    Symmetric,
}

impl PairStrategy {
    /// Pair evaluations one tick makes over `n` bodies
    pub fn evaluations_per_tick(self, n: usize) -> usize {
        let ordered = n * n.saturating_sub(1);
        match self {
            Self::Ordered => ordered,
            Self::Symmetric => ordered / 2,
        }
    }
}

impl FromStr for IntegrationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "faithful" => Ok(Self::Faithful),
            "corrected" => Ok(Self::Corrected),
            other => Err(format!(
                "unknown integration mode {other:?} (expected faithful or corrected)"
            )),
        }
    }
}

impl fmt::Display for IntegrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Faithful => f.write_str("faithful"),
            Self::Corrected => f.write_str("corrected"),
        }
    }
}

impl FromStr for PairStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ordered" => Ok(Self::Ordered),
            "symmetric" => Ok(Self::Symmetric),
            other => Err(format!(
                "unknown pair strategy {other:?} (expected ordered or symmetric)"
            )),
        }
    }
}

impl fmt::Display for PairStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordered => f.write_str("ordered"),
            Self::Symmetric => f.write_str("symmetric"),
        }
    }
}

/// Fixed parameters of the integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Seconds of simulated time per tick
    pub timestep: f64,
    pub mode: IntegrationMode,
    pub strategy: PairStrategy,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            timestep: TIMESTEP,
            mode: IntegrationMode::Faithful,
            strategy: PairStrategy::Ordered,
        }
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_mode(mut self, mode: IntegrationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_strategy(mut self, strategy: PairStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject a NaN or infinite timestep
    pub fn validate(&self) -> SimResult<()> {
        if !self.timestep.is_finite() {
            return Err(SimError::InvalidTimestep {
                timestep: self.timestep,
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
