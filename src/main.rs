use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use liftoff_simulation::io::{csv, json};
use liftoff_simulation::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "liftoff")]
#[command(version)]
#[command(about = "Single-stage rocket liftoff simulation", long_about = None)]
struct Cli {
    /// Number of astronauts on board
    #[arg(short = 'a', long, default_value_t = DEFAULT_ASTRONAUTS, allow_negative_numbers = true)]
    astronauts: i64,

    /// Engine thrust (N)
    #[arg(short = 't', long, default_value_t = DEFAULT_THRUST, allow_negative_numbers = true)]
    thrust: f64,

    /// Fuel burn rate (kg/s)
    #[arg(short = 'b', long, default_value_t = DEFAULT_FUEL_BURN_RATE, allow_negative_numbers = true)]
    fuel_burn: f64,

    /// Time step (s)
    #[arg(long, default_value_t = DEFAULT_TIME_STEP, allow_negative_numbers = true)]
    time_step: f64,

    /// Maximum simulated duration (s)
    #[arg(long, default_value_t = DEFAULT_MAX_DURATION, allow_negative_numbers = true)]
    max_duration: f64,

    /// Prompt for every value on stdin, defaults in brackets
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Record every step instead of one status line per 10 s of flight
    #[arg(long)]
    every_step: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn prompt<T: FromStr + Display>(
    input: &mut impl BufRead,
    field: &str,
    label: &str,
    default: T,
) -> Result<T, Box<dyn Error>> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_field(field, &line, default)?)
}

fn read_config(cli: &Cli) -> Result<SimulationConfig, Box<dyn Error>> {
    if !cli.interactive {
        return Ok(SimulationConfig::new(
            cli.astronauts,
            cli.thrust,
            cli.fuel_burn,
            cli.time_step,
            cli.max_duration,
        )?);
    }

    println!("(Press Enter to accept default values shown in brackets)\n");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let astronauts = prompt(&mut input, "astronauts", "Enter the number of astronauts", cli.astronauts)?;
    let thrust = prompt(&mut input, "thrust", "Enter your thrust (Newtons)", cli.thrust)?;
    let fuel_burn = prompt(&mut input, "fuel_burn", "Enter fuel burn rate (kg/s)", cli.fuel_burn)?;
    let time_step = prompt(&mut input, "time_step", "Enter time step duration (seconds)", cli.time_step)?;
    let max_duration = prompt(
        &mut input,
        "max_duration",
        "Enter max simulation duration (seconds)",
        cli.max_duration,
    )?;

    Ok(SimulationConfig::new(
        astronauts,
        thrust,
        fuel_burn,
        time_step,
        max_duration,
    )?)
}

fn print_configuration(config: &SimulationConfig, constants: &VehicleConstants) {
    println!("Configuration Summary:");
    println!(
        "- Astronauts on board: {} (Total Mass: {:.1} kg)",
        config.astronaut_count(),
        config.crew_mass_kg(constants)
    );
    println!("- Fixed Rocket Dry Mass: {} kg", constants.dry_mass_kg);
    println!("- Initial Fuel Mass: {} kg", constants.initial_fuel_kg);
    println!(
        "- Total Initial Launch Mass: {:.1} kg\n",
        config.initial_total_mass_kg(constants)
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match read_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration, simulation not started: {}", err);
            return Err(err);
        }
    };

    let cadence = if cli.every_step {
        SnapshotCadence::EveryStep
    } else {
        SnapshotCadence::Interval(STATUS_INTERVAL)
    };

    let mut controller = FlightController::new(config);
    if let OutputFormat::Table = cli.output {
        print_configuration(&config, controller.constants());
    }

    let mut telemetry = Telemetry::new();
    let mut trace = Vec::new();
    for snapshot in controller.trace(cadence) {
        telemetry.record(&snapshot);
        trace.push(snapshot);
    }
    let report = controller.finish();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Table => {
            for line in &telemetry.log {
                writeln!(out, "{}", line)?;
            }
            writeln!(out, "\n--- Simulation Summary ---")?;
            renderer_for(report.outcome).render(&report, &mut out)?;
            for line in telemetry.summary_lines(&report) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            json::write_report(&mut out, &report, &trace)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => csv::write_trace(&mut out, &trace)?,
    }

    Ok(())
}
