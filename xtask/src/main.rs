use std::process::{exit, Command, ExitStatus};

use clap::{Args, Parser, Subcommand, ValueEnum};
use fare_core::comparison::compare_scenarios;
use fare_core::contract::{validate_request, PriceRequest};
use fare_core::params::SimulationParameters;
use fare_core::pricing::{compute_price, trace_price};
use fare_core::scenario::{preset_by_id, PRESETS};
use serde_json::Value;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the surge pricing simulator workspace",
    long_about = "A unified CLI for serving the pricing API, pricing trips from the\n\
                  command line, running benchmarks, and CI checks."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,
    },
    /// Price one trip and print the result as JSON
    Quote {
        #[command(flatten)]
        trip: TripArgs,
        /// Print every rule step, including rules that did not fire
        #[arg(long)]
        trace: bool,
    },
    /// Price one trip next to variants with pricing factors removed
    Compare {
        #[command(flatten)]
        trip: TripArgs,
    },
    /// List the scenario presets
    Presets,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run benchmarks
    Bench,
    /// Run check + bench
    All,
}

/// Trip parameters. Validated with the same rules as the HTTP API.
#[derive(Args)]
struct TripArgs {
    /// Start from a scenario preset (see `xtask presets`); explicit flags win
    #[arg(long)]
    preset: Option<String>,
    /// Trip distance in km (0-100)
    #[arg(long)]
    distance: Option<f64>,
    /// economy, comfort, premium or xl
    #[arg(long)]
    vehicle: Option<String>,
    /// Hour of day (0-23)
    #[arg(long)]
    hour: Option<f64>,
    /// Apply the rush hour surcharge
    #[arg(long)]
    rush_hour: bool,
    /// Apply the holiday surcharge
    #[arg(long)]
    holiday: bool,
    /// Rain severity in percent (0-100); sets rain on
    #[arg(long)]
    rain: Option<f64>,
    /// Traffic intensity in percent (0-100)
    #[arg(long)]
    traffic: Option<f64>,
    /// Apply the special event surcharge
    #[arg(long)]
    special_event: bool,
    /// none, low, medium or high
    #[arg(long)]
    surge_zone: Option<String>,
}

impl TripArgs {
    fn into_request(self) -> Result<PriceRequest, String> {
        let base = match self.preset.as_deref() {
            Some(id) => preset_by_id(id)
                .ok_or_else(|| format!("unknown preset `{id}`"))?
                .apply(&SimulationParameters::default()),
            None => SimulationParameters::default(),
        };
        let mut request = PriceRequest::from(&base);

        if let Some(distance) = self.distance {
            request.distance = Some(distance);
        }
        if let Some(vehicle) = self.vehicle {
            request.vehicle_type = Some(vehicle);
        }
        if let Some(hour) = self.hour {
            request.hour = Some(hour);
        }
        if self.rush_hour {
            request.is_rush_hour = Some(true);
        }
        if self.holiday {
            request.is_holiday = Some(true);
        }
        if let Some(severity) = self.rain {
            request.has_rain = Some(true);
            request.weather_severity = Some(severity);
        }
        if let Some(traffic) = self.traffic {
            request.traffic_intensity = Some(traffic);
        }
        if self.special_event {
            request.has_special_event = Some(true);
        }
        if let Some(zone) = self.surge_zone {
            request.surge_zone = Some(zone);
        }
        Ok(request)
    }

    fn into_params(self) -> SimulationParameters {
        let request = self.into_request().unwrap_or_else(|message| fail(&message));
        validate_request(request).unwrap_or_else(|error| fail(&error.to_string()))
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    exit(2);
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn print_json(value: Value) {
    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{text}"),
        Err(error) => fail(&format!("failed to render output: {error}")),
    }
}

fn to_json(value: impl serde::Serialize) -> Value {
    serde_json::to_value(value).unwrap_or_else(|error| fail(&format!("failed to serialize: {error}")))
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test fare_core");
    run_cargo(&["test", "-p", "fare_core"]);

    step("Test fare_server");
    run_cargo(&["test", "-p", "fare_server"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "fare_core", "--bench", "performance"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let port = port.to_string();
            run_cargo(&[
                "run",
                "-p",
                "fare_server",
                "--bin",
                "fare_server",
                "--",
                "--port",
                &port,
            ]);
        }
        Commands::Quote { trip, trace } => {
            let params = trip.into_params();
            if trace {
                print_json(to_json(trace_price(&params)));
            } else {
                print_json(to_json(compute_price(&params)));
            }
        }
        Commands::Compare { trip } => {
            let params = trip.into_params();
            for entry in compare_scenarios(&params) {
                println!(
                    "{:<14} {:>12.2}  {:>+7.1}%",
                    entry.label, entry.result.total_price, entry.result.percentage_change
                );
            }
        }
        Commands::Presets => {
            for preset in PRESETS.iter() {
                println!("{:<18} {} ({})", preset.id, preset.name, preset.description);
            }
        }
        Commands::Bench => {
            run_cargo(&["bench", "--package", "fare_core", "--bench", "performance"]);
        }
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_bench();
            }
        },
    }
}
