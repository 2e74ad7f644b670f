// Hostel Occupancy Registry - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hostel-occupancy allocate --student "Alice" --room-type AC
// ```
//
// The store lives in a SQLite database (default hostel.db), created and
// seeded on first use:
//
// ```console
// $ ./target/release/hostel-occupancy --db rooms.db report --status occupied
// ```

use anyhow::{bail, Context};
use clap::Parser;
use hostel_occupancy::ops::{execute, Command};
use hostel_occupancy::store::SqliteRoomStore;
use hostel_occupancy::types::{CliArgs, HostelConfig};
use hostel_occupancy::LoggingConfig;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = HostelConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Load configuration, open the store, and run the requested command
fn run(args: CliArgs) -> anyhow::Result<()> {
    let config =
        HostelConfig::from_cli_args(&args).context("failed to load configuration")?;
    config.validate().context("configuration validation failed")?;

    info!(
        database = %config.database_path,
        rooms = config.room_count,
        "configuration loaded"
    );

    let Some(cli_command) = args.command else {
        bail!("no command given; run with --help for the list of commands");
    };

    let mut store = SqliteRoomStore::open(&config.database_path, &config)
        .with_context(|| format!("failed to open room store at {}", config.database_path))?;

    let outcome = execute(&mut store, Command::from(cli_command))?;
    println!("{}", outcome);

    Ok(())
}
