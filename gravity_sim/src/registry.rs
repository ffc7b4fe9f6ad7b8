//! Body registry: the owned, fixed-size set of bodies being simulated

use std::path::Path;

use common::units::Au;
use glam::DVec3;

use crate::body::{Body, BodyRecord};
use crate::error::{SimError, SimResult};
use crate::planet_data;

/// Canonical physical state for every body
///
/// Built once and never resized. Order is fixed at construction; index 0 is
/// the gravitational center by convention.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    tick: u64,
    elapsed: f64,
}

impl BodyRegistry {
    /// Build a registry from SI planet records
    ///
    /// Fails without building anything if there are no records or any record
    /// has a non-positive mass.
    pub fn from_records(records: &[BodyRecord]) -> SimResult<Self> {
        let bodies = records
            .iter()
            .map(Body::from_record)
            .collect::<SimResult<Vec<_>>>()
            .inspect_err(|e| log::warn!("Rejected planet data: {e}"))?;

        Self::from_bodies(bodies)
    }

    /// Build a registry from already constructed bodies
    pub fn from_bodies(bodies: Vec<Body>) -> SimResult<Self> {
        if bodies.is_empty() {
            return Err(SimError::EmptyRegistry);
        }

        log::info!(
            "Body registry built with {} bodies ({})",
            bodies.len(),
            bodies.iter().map(Body::name).collect::<Vec<_>>().join(", ")
        );

        Ok(Self {
            bodies,
            tick: 0,
            elapsed: 0.0,
        })
    }

    /// Load planet data from a CSV file and build the registry from it
    pub fn load(path: &Path) -> SimResult<Self> {
        let records = planet_data::load_csv(path)?;
        Self::from_records(&records)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Find body by name
    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// The body at index 0
    pub fn gravitational_center(&self) -> &Body {
        &self.bodies[0]
    }

    /// Completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds since construction
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub(crate) fn advance_clock(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed += dt;
    }

    /// Immutable copy of the current state, for readers outside the tick loop
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            elapsed: self.elapsed,
            bodies: self.bodies.iter().map(BodyState::from).collect(),
        }
    }
}

/// Per-body state captured by a [`Snapshot`]
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub position: Au,
    pub velocity: DVec3,
}

impl From<&Body> for BodyState {
    fn from(body: &Body) -> Self {
        Self {
            name: body.name().to_string(),
            mass: body.mass(),
            radius: body.radius(),
            position: body.position(),
            velocity: body.velocity(),
        }
    }
}

/// Registry state at a tick boundary
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub elapsed: f64,
    pub bodies: Vec<BodyState>,
}
