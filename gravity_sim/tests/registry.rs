use std::io::Write;
use std::path::PathBuf;

use common::units::Au;
use gravity_sim::display::{FLAG_EMISSIVE, FLAG_RINGED};
use gravity_sim::{
    planet_data, BodyRegistry, DisplayProjection, GravityIntegrator, SimError, Snapshot,
};

fn bundled_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("planets.csv")
}

fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gravity_sim_{}_{name}.csv", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn bundled_planet_data_loads() {
    let registry = BodyRegistry::load(&bundled_data()).unwrap();

    assert_eq!(registry.len(), 9);
    assert_eq!(registry.gravitational_center().name(), "Sun");
    assert_eq!(registry.get(0).map(|b| b.position()), Some(Au::ZERO));

    let earth = registry.find("Earth").unwrap();
    assert_eq!(earth.position(), Au::new(1.0, 0.0, 0.0));
    assert_eq!(earth.velocity().z, 29_780.0);
    assert_eq!(earth.mass(), 5.972e24);
}

#[test]
fn bundled_system_steps_and_projects() {
    let mut registry = BodyRegistry::load(&bundled_data()).unwrap();
    let integrator = GravityIntegrator::default();

    let report = integrator.tick(&mut registry).unwrap();
    assert_eq!(report.force_evaluations, 9 * 8);

    let instances = DisplayProjection::reference().project(&registry);
    assert_eq!(instances.len(), 9);
    assert_eq!(instances[0].flags & FLAG_EMISSIVE, FLAG_EMISSIVE);

    let saturn = registry.bodies().iter().position(|b| b.name() == "Saturn").unwrap();
    assert_eq!(instances[saturn].flags & FLAG_RINGED, FLAG_RINGED);
    assert!(instances.iter().all(|i| i.position.iter().all(|c| c.is_finite())));
}

#[test]
fn zero_mass_row_aborts_loading() {
    let path = write_temp_csv(
        "zero_mass",
        "name,mass,radius,positionX,positionY,positionZ,velocityX,velocityY,velocityZ\n\
         Sun,1.989e30,0.5,0,0,0,0,0,0\n\
         Dust,0,0.01,1e11,0,0,0,0,0\n",
    );

    let err = BodyRegistry::load(&path).unwrap_err();
    assert!(matches!(err, SimError::InvalidMass { ref name, .. } if name == "Dust"));
    std::fs::remove_file(path).ok();
}

#[test]
fn header_only_file_is_empty_registry() {
    let path = write_temp_csv(
        "header_only",
        "name,mass,radius,positionX,positionY,positionZ,velocityX,velocityY,velocityZ\n",
    );

    assert!(planet_data::load_csv(&path).unwrap().is_empty());
    assert!(matches!(BodyRegistry::load(&path), Err(SimError::EmptyRegistry)));
    std::fs::remove_file(path).ok();
}

#[test]
fn snapshot_crosses_threads() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Snapshot>();

    let mut registry = BodyRegistry::load(&bundled_data()).unwrap();
    GravityIntegrator::default().tick(&mut registry).unwrap();
    let snapshot = registry.snapshot();

    let names = std::thread::spawn(move || {
        snapshot
            .bodies
            .iter()
            .map(|b| b.name.clone())
            .collect::<Vec<_>>()
    })
    .join()
    .unwrap();

    assert_eq!(names.first().map(String::as_str), Some("Sun"));
    assert_eq!(names.len(), 9);
}
