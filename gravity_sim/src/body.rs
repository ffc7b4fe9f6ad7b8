//! Celestial bodies and the planet data rows they are built from

use common::units::{Au, Meters};
use glam::DVec3;
use serde::Deserialize;

use crate::error::{SimError, SimResult};

/// Name of the body treated as the gravitational center by renderers
pub const SUN_NAME: &str = "Sun";

/// One row of planet data, in SI units
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    /// kg
    pub mass: f64,
    /// Display radius, only meaningful to a renderer
    pub radius: f64,
    #[serde(rename = "positionX")]
    pub position_x: f64,
    #[serde(rename = "positionY")]
    pub position_y: f64,
    #[serde(rename = "positionZ")]
    pub position_z: f64,
    #[serde(rename = "velocityX")]
    pub velocity_x: f64,
    #[serde(rename = "velocityY")]
    pub velocity_y: f64,
    #[serde(rename = "velocityZ")]
    pub velocity_z: f64,
}

impl BodyRecord {
    /// Build a record from SI position (m) and velocity (m/s)
    pub fn new(name: &str, mass: f64, radius: f64, position: DVec3, velocity: DVec3) -> Self {
        Self {
            name: name.to_string(),
            mass,
            radius,
            position_x: position.x,
            position_y: position.y,
            position_z: position.z,
            velocity_x: velocity.x,
            velocity_y: velocity.y,
            velocity_z: velocity.z,
        }
    }

    pub fn position(&self) -> Meters {
        Meters::new(self.position_x, self.position_y, self.position_z)
    }

    pub fn velocity(&self) -> DVec3 {
        DVec3::new(self.velocity_x, self.velocity_y, self.velocity_z)
    }
}

/// A point-mass body in the simulation
///
/// Position is kept in AU; everything else is SI. `force` (N) and
/// `acceleration` (m/s²) hold the values computed by the most recent tick and
/// are overwritten by the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: f64,
    radius: f64,
    pub(crate) position: Au,
    /// m/s
    pub(crate) velocity: DVec3,
    /// N
    pub(crate) force: DVec3,
    /// m/s²
    pub(crate) acceleration: DVec3,
}

impl Body {
    /// Create a body, rejecting any mass that is not positive and finite
    pub fn new(name: &str, mass: f64, position: Au, velocity: DVec3) -> SimResult<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass {
                name: name.to_string(),
                mass,
            });
        }

        Ok(Self {
            name: name.to_string(),
            mass,
            radius: 0.0,
            position,
            velocity,
            force: DVec3::ZERO,
            acceleration: DVec3::ZERO,
        })
    }

    /// Convert a planet data row: position m -> AU, velocity stays in m/s
    pub fn from_record(record: &BodyRecord) -> SimResult<Self> {
        Ok(Self::new(&record.name, record.mass, record.position().to_au(), record.velocity())?
            .with_radius(record.radius))
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// kg
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// AU
    pub fn position(&self) -> Au {
        self.position
    }

    /// m/s
    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    /// N, from the last tick
    pub fn force(&self) -> DVec3 {
        self.force
    }

    /// m/s², from the last tick
    pub fn acceleration(&self) -> DVec3 {
        self.acceleration
    }

    /// kg·m/s
    pub fn momentum(&self) -> DVec3 {
        self.velocity * self.mass
    }

    pub fn is_gravitational_center(&self) -> bool {
        self.name == SUN_NAME
    }
}
