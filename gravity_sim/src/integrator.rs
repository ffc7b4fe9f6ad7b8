//! Fixed-step gravity integrator
//!
//! Each tick:
//! 1. accumulates the net Newtonian force on every body from every other body,
//!    with positions converted AU -> m for the calculation,
//! 2. derives acceleration as `force / mass`,
//! 3. kicks velocity by `acceleration · dt`,
//! 4. moves the body, doing the arithmetic in meters and storing the result
//!    back in AU.
//!
//! All forces are computed before any body is touched, so a failed tick leaves
//! the registry exactly as it was.

use common::constants::G;
use common::units::Meters;
use glam::DVec3;

use crate::body::Body;
use crate::config::{IntegrationMode, PairStrategy, SimulationConfig};
use crate::error::{SimError, SimResult};
use crate::registry::BodyRegistry;

/// Gravitational force exerted on `body` by `other`, in newtons
///
/// Points from `body` toward `other` with magnitude `G·m₁·m₂/d²`, `d` in
/// meters. Swapping the arguments yields exactly the negated vector.
pub fn gravitational_force(body: &Body, other: &Body) -> SimResult<DVec3> {
    let offset = (other.position().to_meters() - body.position().to_meters()).0;
    let distance_sq = offset.length_squared();

    if distance_sq == 0.0 {
        return Err(SimError::CoincidentBodies {
            first: body.name().to_string(),
            second: other.name().to_string(),
        });
    }

    // m₁·m₂ first so the magnitude doesn't depend on argument order
    let magnitude = G * (body.mass() * other.mass()) / distance_sq;
    let direction = offset / distance_sq.sqrt();

    Ok(direction * magnitude)
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Ticks completed, including this one
    pub tick: u64,
    /// Calls to [`gravitational_force`] made during force accumulation
    pub force_evaluations: usize,
    /// Simulated seconds since the registry was built
    pub elapsed: f64,
}

/// Advances a [`BodyRegistry`] one fixed timestep at a time
///
/// Holds nothing but its configuration, so a tick depends only on the
/// registry contents it is handed.
#[derive(Debug, Clone, Default)]
pub struct GravityIntegrator {
    config: SimulationConfig,
}

impl GravityIntegrator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Net force on every body, indexed like the registry, plus the number of
    /// pair evaluations it took
    pub fn accumulate_forces(&self, bodies: &[Body]) -> SimResult<(Vec<DVec3>, usize)> {
        let n = bodies.len();
        let mut forces = vec![DVec3::ZERO; n];
        let mut evaluations = 0;

        match self.config.strategy {
            PairStrategy::Ordered => {
                for i in 0..n {
                    for j in 0..n {
                        if i != j {
                            forces[i] += gravitational_force(&bodies[i], &bodies[j])?;
                            evaluations += 1;
                        }
                    }
                }
            }
            PairStrategy::Symmetric => {
                for i in 0..n {
                    for j in (i + 1)..n {
                        let force = gravitational_force(&bodies[i], &bodies[j])?;
                        forces[i] += force;
                        forces[j] -= force;
                        evaluations += 1;
                    }
                }
            }
        }

        Ok((forces, evaluations))
    }

    /// Advance every body by one timestep
    pub fn tick(&self, registry: &mut BodyRegistry) -> SimResult<TickReport> {
        self.config.validate()?;
        let (forces, force_evaluations) = self.accumulate_forces(registry.bodies())?;
        let dt = self.config.timestep;
        let mode = self.config.mode;

        for (body, force) in registry.bodies_mut().iter_mut().zip(forces) {
            body.force = force;
            body.acceleration = force / body.mass();

            match mode {
                IntegrationMode::Faithful => {
                    body.velocity += body.acceleration * dt;
                    let moved = body.position.to_meters() + Meters(body.velocity * dt);
                    body.position = moved.to_au();
                }
                IntegrationMode::Corrected => {
                    let displacement = body.velocity * dt + body.acceleration * (0.5 * dt * dt);
                    let moved = body.position.to_meters() + Meters(displacement);
                    body.position = moved.to_au();
                    body.velocity += body.acceleration * dt;
                }
            }

            log::trace!(
                "{}: F = {:e} N, v = {:?} m/s, x = {:?} AU",
                body.name(),
                body.force.length(),
                body.velocity,
                body.position.0
            );
        }

        registry.advance_clock(dt);

        let report = TickReport {
            tick: registry.tick(),
            force_evaluations,
            elapsed: registry.elapsed(),
        };
        log::debug!(
            "tick {} done: {} bodies, {} force evaluations",
            report.tick,
            registry.len(),
            report.force_evaluations
        );

        Ok(report)
    }

    /// Run `ticks` ticks, stopping at the first error. Returns total force evaluations.
    pub fn run(&self, registry: &mut BodyRegistry, ticks: u64) -> SimResult<usize> {
        let mut evaluations = 0;
        for _ in 0..ticks {
            evaluations += self.tick(registry)?.force_evaluations;
        }
        Ok(evaluations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::units::Au;

    fn body(name: &str, mass: f64, x_au: f64) -> Body {
        Body::new(name, mass, Au::new(x_au, 0.0, 0.0), DVec3::ZERO).unwrap()
    }

    #[test]
    fn force_points_toward_other_body() {
        let a = body("A", 1e24, 0.0);
        let b = body("B", 1e24, 2.0);
        let f = gravitational_force(&a, &b).unwrap();
        assert!(f.x > 0.0);
        assert_eq!(f.y, 0.0);
        assert_eq!(f.z, 0.0);
    }

    #[test]
    fn coincident_bodies_are_rejected() {
        let a = body("A", 1e24, 1.0);
        let b = body("B", 1e24, 1.0);
        assert!(matches!(
            gravitational_force(&a, &b),
            Err(SimError::CoincidentBodies { .. })
        ));
    }

    #[test]
    fn failed_tick_leaves_registry_untouched() {
        let bodies = vec![body("A", 1e24, 0.0), body("B", 1e24, 3.0), body("C", 1e24, 3.0)];
        let mut registry = BodyRegistry::from_bodies(bodies).unwrap();
        let before = registry.clone();

        let integrator = GravityIntegrator::default();
        assert!(integrator.tick(&mut registry).is_err());
        assert_eq!(registry, before);
    }

    #[test]
    fn non_finite_timestep_fails_before_moving_anything() {
        let bodies = vec![body("Sun", 1.989e30, 0.0), body("Earth", 5.972e24, 1.0)];
        let mut registry = BodyRegistry::from_bodies(bodies).unwrap();
        let before = registry.clone();

        for timestep in [f64::NAN, f64::INFINITY] {
            let config = SimulationConfig::new().with_timestep(timestep);
            let integrator = GravityIntegrator::new(config);
            let err = integrator.tick(&mut registry).unwrap_err();
            assert!(matches!(err, SimError::InvalidTimestep { .. }));
            assert_eq!(registry, before);
        }
    }

    #[test]
    fn earth_feels_solar_gravity_in_si_units() {
        let bodies = vec![body("Sun", 1.989e30, 0.0), body("Earth", 5.972e24, 1.0)];
        let mut registry = BodyRegistry::from_bodies(bodies).unwrap();
        GravityIntegrator::new(SimulationConfig::new().with_timestep(1.0))
            .tick(&mut registry)
            .unwrap();

        let earth = &registry.bodies()[1];
        // ~3.54e22 N and ~5.93e-3 m/s² toward the Sun
        assert!((earth.force().length() - 3.54e22).abs() < 0.01e22);
        assert!((earth.acceleration().length() - 5.93e-3).abs() < 0.01e-3);
        assert!(earth.acceleration().x < 0.0);
        assert_eq!(earth.velocity(), earth.acceleration());
    }

    #[test]
    fn single_body_does_not_move_without_velocity() {
        let mut registry = BodyRegistry::from_bodies(vec![body("Sun", 1.989e30, 0.0)]).unwrap();
        let report = GravityIntegrator::default().tick(&mut registry).unwrap();

        assert_eq!(report.force_evaluations, 0);
        assert_eq!(registry.bodies()[0].position(), Au::ZERO);
        assert_eq!(registry.bodies()[0].force(), DVec3::ZERO);
    }

    #[test]
    fn clock_advances_by_timestep() {
        let mut registry =
            BodyRegistry::from_bodies(vec![body("A", 1.0, 0.0), body("B", 1.0, 1.0)]).unwrap();
        let integrator = GravityIntegrator::new(SimulationConfig::new().with_timestep(60.0));

        integrator.run(&mut registry, 3).unwrap();
        assert_eq!(registry.tick(), 3);
        assert_eq!(registry.elapsed(), 180.0);
    }
}
