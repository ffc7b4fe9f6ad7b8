//! Renderer-facing view of the registry
//!
//! A renderer consumes one [`DisplayInstance`] per body after each tick. The
//! conversion from simulation units to display units is a single scale factor;
//! the reference scene multiplies the stored position by `meters_to_au(1)`.

use std::f64::consts::TAU;

use common::units::meters_to_au;

use crate::body::Body;
use crate::registry::BodyRegistry;

/// Radians each non-central body turns per rendered frame
pub const SPIN_PER_FRAME: f32 = 0.01;

pub const FLAG_EMISSIVE: u32 = 1 << 0;
pub const FLAG_CASTS_SHADOW: u32 = 1 << 1;
pub const FLAG_RINGED: u32 = 1 << 2;

/// Per-body instance data, laid out for direct upload to a GPU buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DisplayInstance {
    pub position: [f32; 3],
    pub radius: f32,
    /// Rotation about the body's Y axis, wrapped into `[0, 2π)`
    pub spin: f32,
    pub flags: u32,
}

/// Maps registry positions into display space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayProjection {
    pub scale: f64,
}

impl DisplayProjection {
    /// The reference scene's factor, `meters_to_au(1)`
    pub fn reference() -> Self {
        Self { scale: meters_to_au(1.0) }
    }

    /// One display unit per AU
    pub fn au() -> Self {
        Self { scale: 1.0 }
    }

    pub fn position(&self, body: &Body) -> [f32; 3] {
        (body.position().0 * self.scale).as_vec3().to_array()
    }

    pub fn instance(&self, body: &Body, frame: u64) -> DisplayInstance {
        let mut flags = 0;
        let spin;

        if body.is_gravitational_center() {
            flags |= FLAG_EMISSIVE;
            spin = 0.0;
        } else {
            flags |= FLAG_CASTS_SHADOW;
            spin = (frame as f64 * f64::from(SPIN_PER_FRAME)).rem_euclid(TAU) as f32;
        }

        if body.name() == "Saturn" {
            flags |= FLAG_RINGED;
        }

        DisplayInstance {
            position: self.position(body),
            radius: body.radius() as f32,
            spin,
            flags,
        }
    }

    /// One instance per body, in registry order, using the registry tick as the frame count
    pub fn project(&self, registry: &BodyRegistry) -> Vec<DisplayInstance> {
        registry
            .bodies()
            .iter()
            .map(|body| self.instance(body, registry.tick()))
            .collect()
    }

    /// The scene light sits inside body 0
    pub fn light_position(&self, registry: &BodyRegistry) -> [f32; 3] {
        self.position(registry.gravitational_center())
    }
}

impl Default for DisplayProjection {
    fn default() -> Self {
        Self::reference()
    }
}
