//! Interrupt-handling simulator CLI.
//!
//! This binary is the reference host for the simulation engine. It performs:
//! 1. **Scripted runs:** Drive a fixed number of ticks, raising interrupts at
//!    scheduled ticks, then render the event log and statistics.
//! 2. **Catalog listing:** Print the registered interrupt kinds.
//!
//! The engine owns no timer; this host supplies the cadence by calling `tick`
//! in a loop, which is also what makes scripted runs fully reproducible.

use std::process;

use clap::{Parser, Subcommand};

use irqsim_core::catalog::InterruptCatalog;
use irqsim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "irqsim",
    author,
    version,
    about = "Deterministic CPU interrupt-handling simulator",
    long_about = "Run a scripted interrupt simulation or list the interrupt catalog.\n\nExamples:\n  irqsim run --ticks 20\n  irqsim run --ticks 30 --raise timer@3 --raise exception@3 --raise disk@10\n  irqsim run --ticks 20 --config sim.json --json\n  irqsim kinds"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scripted simulation and print the log and statistics.
    Run {
        /// Number of ticks to drive.
        #[arg(short, long, default_value_t = 20)]
        ticks: u64,

        /// Raise an interrupt, as `<kind>` (tick 1) or `<kind>@<tick>`. Repeatable.
        #[arg(short, long = "raise", value_name = "KIND[@TICK]")]
        raises: Vec<String>,

        /// JSON configuration file (defaults are used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Print the final snapshot as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// List the interrupt kinds in the standard catalog.
    Kinds,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            ticks,
            raises,
            config,
            json,
        } => cmd_run(ticks, &raises, config.as_deref(), json),
        Commands::Kinds => cmd_kinds(),
    }
}

/// A scheduled `raise_interrupt` command: raise `kind` just before tick `tick`.
#[derive(Debug)]
struct ScheduledRaise {
    /// Tick before which the interrupt is raised.
    tick: u64,
    /// Catalog id of the kind to raise.
    kind: String,
}

/// Parses a `<kind>` or `<kind>@<tick>` argument.
fn parse_raise(arg: &str) -> Result<ScheduledRaise, String> {
    match arg.split_once('@') {
        None => Ok(ScheduledRaise {
            tick: 1,
            kind: arg.to_owned(),
        }),
        Some((kind, tick)) => {
            let tick: u64 = tick
                .parse()
                .map_err(|_| format!("bad tick in raise argument {arg:?} (want <kind>@<tick>)"))?;
            Ok(ScheduledRaise {
                tick,
                kind: kind.to_owned(),
            })
        }
    }
}

/// Runs the simulation: drives `ticks` steps, raising scheduled interrupts,
/// then prints the event log and statistics (or the final snapshot as JSON).
fn cmd_run(ticks: u64, raises: &[String], config_path: Option<&str>, json: bool) {
    let config = match config_path {
        None => Config::default(),
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config {path}: {e}");
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {path}: {e}");
                process::exit(1);
            })
        }
    };

    let mut schedule: Vec<ScheduledRaise> = Vec::with_capacity(raises.len());
    for arg in raises {
        match parse_raise(arg) {
            Ok(raise) => schedule.push(raise),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }

    let mut sim = Simulator::new(config);
    sim.start();

    let mut snapshot = sim.snapshot();
    for t in 1..=ticks {
        for raise in schedule.iter().filter(|r| r.tick == t) {
            if let Err(e) = sim.raise_interrupt(&raise.kind) {
                eprintln!("Error at tick {t}: {e}");
                process::exit(1);
            }
        }
        snapshot = match sim.tick() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("\n[!] FATAL: {e}");
                process::exit(1);
            }
        };
    }

    if json {
        match snapshot.to_json() {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("[*] {} ticks driven", snapshot.tick);
    println!(
        "    status: {}  PC={}  SP={}  AX={}  BX={}  instr #{}",
        snapshot.status,
        snapshot.cpu.pc,
        snapshot.cpu.sp,
        snapshot.cpu.ax,
        snapshot.cpu.bx,
        snapshot.cpu.instruction_counter
    );
    if snapshot.pending.is_empty() {
        println!("    queue: empty");
    } else {
        println!("    queue:");
        for pending in &snapshot.pending {
            println!(
                "      [{}] {} (priority {})",
                pending.id.0, pending.kind.name, pending.kind.priority
            );
        }
    }
    println!("\nEVENT LOG");
    for entry in &snapshot.log {
        println!("  tick {:>4}  {}", entry.tick, entry.message);
    }
    sim.stats().print(snapshot.pending_count);
}

/// Prints the standard catalog in priority order.
fn cmd_kinds() {
    let catalog = InterruptCatalog::standard(Config::default().dispatch.handler_stride);
    let mut kinds: Vec<_> = catalog.kinds().iter().collect();
    kinds.sort_by_key(|k| k.priority);
    println!("Registered interrupt kinds (most urgent first):");
    for kind in kinds {
        println!(
            "  {:<10} priority {}  {:<22} {} at vector offset {}",
            kind.id, kind.priority, kind.name, kind.handler, kind.handler_offset
        );
    }
}
