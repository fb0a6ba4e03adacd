// Emergency Care Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/emergency-care-simulator config.txt
// ```
//
// Or with a fixed seed and a readable report:
//
// ```console
// $ ./target/release/emergency-care-simulator config.txt --seed 7 --format text --verbose
// ```

use anyhow::Context;
use clap::Parser;
use emergency_care_simulator::simulation::{
    LoggingConfig, Simulation, SimulationStatistics, DEFAULT_CSV_SEPARATOR,
};
use emergency_care_simulator::types::{CliArgs, OutputFormat, SimulationConfig};
use std::fs::File;
use std::io::BufWriter;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();
    let separator = args.separator
        .clone()
        .unwrap_or_else(|| DEFAULT_CSV_SEPARATOR.to_string());

    // Flags that need neither logging nor a configuration file
    if args.header {
        println!("{}", SimulationStatistics::csv_header(&separator));
        return;
    }
    if args.print_config {
        let default_config = SimulationConfig::default();
        match args.format {
            OutputFormat::Json => match serde_json::to_string_pretty(&default_config) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Failed to serialize default configuration: {}", e);
                    process::exit(1);
                }
            },
            _ => print!("{}", default_config.to_config_text()),
        }
        return;
    }

    if let Err(e) = LoggingConfig::from_cli_args(&args).init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Emergency Care Simulator");

    let config = match SimulationConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    match run_simulation(&args, config, &separator) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            error!("Simulation failed: {:#}", e);
            process::exit(1);
        }
    }

    info!("Emergency Care Simulator completed successfully");
}

/// Run one simulation and render its statistics
fn run_simulation(
    args: &CliArgs,
    config: SimulationConfig,
    separator: &str,
) -> anyhow::Result<String> {
    let mut simulation = Simulation::new(config).context("Failed to initialize simulation")?;
    let processed = simulation.run().context("Simulation run aborted")?;
    info!(
        processed,
        clock = simulation.time(),
        "Simulation run complete"
    );

    if let Some(path) = &args.event_log {
        let file = File::create(path)
            .with_context(|| format!("Failed to create event log file '{}'", path))?;
        simulation
            .write_event_log(BufWriter::new(file))
            .with_context(|| format!("Failed to write event log to '{}'", path))?;
        info!("Event log written to: {}", path);
    }

    let report = simulation
        .statistics()
        .render(args.format, separator)
        .context("Failed to render statistics")?;
    Ok(report)
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Total Time: {} minutes", config.total_time);
    eprintln!(
        "  Staff: {} attendants, {} nurses, {} doctors",
        config.attendants,
        config.nurses,
        config.doctors
    );
    eprintln!(
        "  Exams Probability: {:.1}%",
        config.exams_probability * 100.0
    );
    eprintln!(
        "  Priority Probabilities: {:?}",
        config.priority_probabilities
    );
    eprintln!("  Queue Weights: {:?}", config.queue_weights);
    eprintln!("  Queue Discipline: {}", config.queue_discipline);
    for (name, spec) in config.named_distributions() {
        eprintln!("  {} Time: {}", capitalize(name), spec);
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
