//! Headless solar system driver
//!
//! Loads planet data, advances the gravity integrator a fixed number of
//! ticks the way a render loop would (one tick per frame), logs diagnostics
//! along the way and prints the final state of every body.
//!
//! Usage:
//! - `--data <csv>`: planet data file (defaults to the bundled `data/planets.csv`)
//! - `--ticks <n>`: frames to simulate
//! - `--timestep <s>`: seconds per tick
//! - `--mode faithful|corrected`: displacement rule
//! - `--strategy ordered|symmetric`: pair evaluation strategy
//! - `--report-every <n>`: log diagnostics every n ticks
//!
//! Set `RUST_LOG=debug` (or `trace`) for per-tick output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gravity_sim::diagnostics::{center_of_mass, total_energy, total_momentum};
use gravity_sim::{
    BodyRegistry, DisplayProjection, GravityIntegrator, IntegrationMode, PairStrategy,
    SimulationConfig,
};

fn default_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("planets.csv")
}

#[derive(Parser, Debug)]
#[command(name = "gravity_sim")]
#[command(about = "Step a solar system forward under Newtonian gravity")]
struct Args {
    /// Planet data CSV
    #[arg(short, long, default_value_os_t = default_data_path())]
    data: PathBuf,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 10)]
    ticks: u64,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = common::constants::TIMESTEP)]
    timestep: f64,

    /// Displacement rule: faithful or corrected
    #[arg(long, default_value_t = IntegrationMode::Faithful)]
    mode: IntegrationMode,

    /// Pair evaluation strategy: ordered or symmetric
    #[arg(long, default_value_t = PairStrategy::Ordered)]
    strategy: PairStrategy,

    /// Log diagnostics every n ticks (0 disables)
    #[arg(long, default_value_t = 1)]
    report_every: u64,
}

fn log_diagnostics(registry: &BodyRegistry) {
    let com = center_of_mass(registry);
    log::info!(
        "tick {:>6}  t = {:.3e} s  |p| = {:.6e} kg·m/s  E = {:.6e} J  \
         com = ({:.4e}, {:.4e}, {:.4e}) AU",
        registry.tick(),
        registry.elapsed(),
        total_momentum(registry).length(),
        total_energy(registry),
        com.0.x,
        com.0.y,
        com.0.z
    );
}

fn main() -> Result<()> {
    common::init_logging();
    let args = Args::parse();

    let config = SimulationConfig::new()
        .with_timestep(args.timestep)
        .with_mode(args.mode)
        .with_strategy(args.strategy);
    config.validate().context("invalid simulation config")?;
    log::info!(
        "timestep {:e} s, mode {}, strategy {}",
        config.timestep,
        config.mode,
        config.strategy
    );

    let mut registry = BodyRegistry::load(&args.data)
        .with_context(|| format!("failed to load planet data from {}", args.data.display()))?;
    let integrator = GravityIntegrator::new(config);
    let projection = DisplayProjection::reference();

    log_diagnostics(&registry);

    for _ in 0..args.ticks {
        let report = integrator
            .tick(&mut registry)
            .with_context(|| format!("tick {} failed", registry.tick() + 1))?;

        if args.report_every > 0 && report.tick % args.report_every == 0 {
            log_diagnostics(&registry);
            let light = projection.light_position(&registry);
            log::debug!("light at {:?}", light);
        }
    }

    let snapshot = registry.snapshot();
    println!("after {} ticks ({:e} s):", snapshot.tick, snapshot.elapsed);
    println!(
        "{:<10} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "body", "x (AU)", "y (AU)", "z (AU)", "vx (m/s)", "vy (m/s)", "vz (m/s)"
    );
    for body in &snapshot.bodies {
        println!(
            "{:<10} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
            body.name,
            body.position.0.x,
            body.position.0.y,
            body.position.0.z,
            body.velocity.x,
            body.velocity.y,
            body.velocity.z
        );
    }

    Ok(())
}
