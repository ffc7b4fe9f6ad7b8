//! Astronomical / SI unit conversions
//!
//! Body positions are stored in astronomical units while velocities, forces
//! and accelerations stay in SI. Every conversion between the two goes
//! through the functions here, and positions carry an [`Au`] or [`Meters`]
//! tag so the two can't be mixed up silently.

use glam::DVec3;
use std::ops::{Add, Sub};

use crate::constants::AU_METERS;

/// Converts meters to astronomical units
#[inline]
pub fn meters_to_au(meters: f64) -> f64 {
    meters / AU_METERS
}

/// Converts astronomical units to meters
#[inline]
pub fn au_to_meters(au: f64) -> f64 {
    au * AU_METERS
}

/// A position in astronomical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Au(pub DVec3);

/// A position in meters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Meters(pub DVec3);

impl Au {
    pub const ZERO: Self = Self(DVec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    pub fn to_meters(self) -> Meters {
        Meters(self.0 * AU_METERS)
    }

    pub fn distance(self, other: Au) -> f64 {
        self.0.distance(other.0)
    }
}

impl Meters {
    pub const ZERO: Self = Self(DVec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    pub fn to_au(self) -> Au {
        Au(self.0 / AU_METERS)
    }

    pub fn distance(self, other: Meters) -> f64 {
        self.0.distance(other.0)
    }
}

impl From<Au> for Meters {
    fn from(au: Au) -> Self {
        au.to_meters()
    }
}

impl From<Meters> for Au {
    fn from(meters: Meters) -> Self {
        meters.to_au()
    }
}

// Only same-unit arithmetic is provided.
impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters {
        Meters(self.0 - rhs.0)
    }
}

impl Add for Au {
    type Output = Au;
    fn add(self, rhs: Au) -> Au {
        Au(self.0 + rhs.0)
    }
}

impl Sub for Au {
    type Output = Au;
    fn sub(self, rhs: Au) -> Au {
        Au(self.0 - rhs.0)
    }
}
