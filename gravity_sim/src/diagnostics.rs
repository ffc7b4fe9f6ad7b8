//! Conserved-quantity diagnostics over a registry

use common::constants::G;
use common::units::Au;
use glam::DVec3;

use crate::registry::BodyRegistry;

/// Total linear momentum in kg·m/s
pub fn total_momentum(registry: &BodyRegistry) -> DVec3 {
    registry.bodies().iter().map(|b| b.momentum()).sum()
}

/// Mass-weighted mean position
pub fn center_of_mass(registry: &BodyRegistry) -> Au {
    let mut total_mass = 0.0;
    let mut com = DVec3::ZERO;

    for body in registry.bodies() {
        com += body.position().0 * body.mass();
        total_mass += body.mass();
    }

    // Registry masses are all positive, so total_mass > 0
    Au(com / total_mass)
}

/// Kinetic plus gravitational potential energy in joules
pub fn total_energy(registry: &BodyRegistry) -> f64 {
    let bodies = registry.bodies();
    let mut kinetic = 0.0;
    let mut potential = 0.0;

    for (i, body_i) in bodies.iter().enumerate() {
        kinetic += 0.5 * body_i.mass() * body_i.velocity().length_squared();

        for body_j in bodies.iter().skip(i + 1) {
            let r = body_i.position().to_meters().distance(body_j.position().to_meters());
            potential -= G * body_i.mass() * body_j.mass() / r;
        }
    }

    kinetic + potential
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;

    #[test]
    fn center_of_mass_is_weighted() {
        let registry = BodyRegistry::from_bodies(vec![
            Body::new("Heavy", 3.0, Au::new(0.0, 0.0, 0.0), DVec3::ZERO).unwrap(),
            Body::new("Light", 1.0, Au::new(4.0, 0.0, 0.0), DVec3::ZERO).unwrap(),
        ])
        .unwrap();

        assert_eq!(center_of_mass(&registry), Au::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn momentum_sums_bodies() {
        let registry = BodyRegistry::from_bodies(vec![
            Body::new("A", 2.0, Au::ZERO, DVec3::new(1.0, 0.0, 0.0)).unwrap(),
            Body::new("B", 1.0, Au::new(1.0, 0.0, 0.0), DVec3::new(-2.0, 3.0, 0.0)).unwrap(),
        ])
        .unwrap();

        assert_eq!(total_momentum(&registry), DVec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn bound_pair_has_negative_energy() {
        let registry = BodyRegistry::from_bodies(vec![
            Body::new("Sun", 1.989e30, Au::ZERO, DVec3::ZERO).unwrap(),
            Body::new(
                "Earth",
                5.972e24,
                Au::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 29_780.0, 0.0),
            )
            .unwrap(),
        ])
        .unwrap();

        assert!(total_energy(&registry) < 0.0);
    }
}
