//! Configuration structures for the hostel occupancy registry
//!
//! This module contains the seed/store configuration and the command line
//! argument structures used by the CLI binary. Configuration can come from a
//! JSON file, from command line overrides, or from built-in defaults, with
//! the CLI taking precedence over the file and the file over the defaults.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound on the number of seeded rooms
///
/// The registry is built for a hostel of at most a few hundred rooms; the
/// bound rejects configurations far outside that envelope.
pub const MAX_ROOM_COUNT: usize = 1000;

/// Configuration for the hostel seed layout and room store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostelConfig {
    /// Number of rooms to seed (numbered 1..=room_count, odd NON-AC, even AC)
    pub room_count: usize,
    /// Number of rooms grouped under each floor in the seed layout
    pub rooms_per_floor: usize,
    /// Name of the building the seed layout places every floor under
    pub building_name: String,
    /// Path of the SQLite database backing the table-backed store
    pub database_path: String,
}

impl Default for HostelConfig {
    fn default() -> Self {
        Self {
            room_count: 50,
            rooms_per_floor: 10,
            building_name: "Main Block".to_string(),
            database_path: "hostel.db".to_string(),
        }
    }
}

/// Partial configuration as read from a JSON file
///
/// Every field is optional; missing fields fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    room_count: Option<usize>,
    rooms_per_floor: Option<usize>,
    building_name: Option<String>,
    database_path: Option<String>,
}

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("Failed to parse configuration file: {0}")]
    Json(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for hostel configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Room count is invalid
    #[error("Room count must be greater than 0, got {0}")]
    InvalidRoomCount(usize),

    /// Room count exceeds the supported scale
    #[error("Room count must be at most {MAX_ROOM_COUNT}, got {0}")]
    RoomCountTooLarge(usize),

    /// Rooms-per-floor is invalid
    #[error("Rooms per floor must be greater than 0, got {0}")]
    InvalidRoomsPerFloor(usize),

    /// Building name is empty
    #[error("Building name must not be empty")]
    EmptyBuildingName,

    /// Database path is empty
    #[error("Database path must not be empty")]
    EmptyDatabasePath,
}

impl HostelConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        config.apply_cli_overrides(args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            room_count: config_file.room_count.unwrap_or(defaults.room_count),
            rooms_per_floor: config_file.rooms_per_floor.unwrap_or(defaults.rooms_per_floor),
            building_name: config_file.building_name.unwrap_or(defaults.building_name),
            database_path: config_file.database_path.unwrap_or(defaults.database_path),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(value) = args.room_count {
            self.room_count = value;
        }
        if let Some(value) = args.rooms_per_floor {
            self.rooms_per_floor = value;
        }
        if let Some(value) = &args.db {
            self.database_path = value.clone();
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.room_count == 0 {
            return Err(ConfigValidationError::InvalidRoomCount(self.room_count));
        }

        if self.room_count > MAX_ROOM_COUNT {
            return Err(ConfigValidationError::RoomCountTooLarge(self.room_count));
        }

        if self.rooms_per_floor == 0 {
            return Err(ConfigValidationError::InvalidRoomsPerFloor(self.rooms_per_floor));
        }

        if self.building_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBuildingName);
        }

        if self.database_path.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDatabasePath);
        }

        Ok(())
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hostel-occupancy",
    version,
    about = "Hostel room occupancy tracker",
    long_about = "Tracks hostel room occupancy: allocate the first free room of a requested \
type to a student, free rooms again, and report per-room status or aggregate counts.

EXAMPLES:
    # Allocate the first free AC room
    hostel-occupancy allocate --student \"Alice\" --room-type AC

    # Free room 7
    hostel-occupancy deallocate --room 7

    # Move an allocation from room 7 to the first free NON-AC room
    hostel-occupancy reallocate --room 7 --room-type NON-AC

    # Per-room report, optionally filtered by status
    hostel-occupancy report
    hostel-occupancy report --status occupied

    # Aggregate counts
    hostel-occupancy dashboard

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON format)
    3. Default values (lowest priority)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(short, long, help = "Configuration file path (JSON format)")]
    pub config: Option<String>,

    /// SQLite database path backing the room store
    #[arg(
        long,
        help = "SQLite database path",
        long_help = "Path of the SQLite database backing the room store. Created and seeded \
with the configured rooms on first use. Default: hostel.db"
    )]
    pub db: Option<String>,

    /// Number of rooms to seed when the store is empty
    #[arg(long, help = "Number of rooms to seed when the store is empty")]
    pub room_count: Option<usize>,

    /// Number of rooms grouped under each floor of the seed layout
    #[arg(long, help = "Rooms per floor in the seed layout")]
    pub rooms_per_floor: Option<usize>,

    /// Print the default configuration as JSON and exit
    #[arg(long, help = "Print default configuration as JSON and exit")]
    pub print_config: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose (info-level) logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, help = "Enable debug-level logging")]
    pub debug: bool,

    /// The operation to run
    #[command(subcommand)]
    pub command: Option<HostelCli>,
}

/// CLI subcommands, one per registry operation
#[derive(Debug, Clone, Subcommand)]
pub enum HostelCli {
    /// Allocate the first free room of a type to a student
    Allocate {
        /// Student name (echoed in the confirmation, never stored)
        #[arg(long)]
        student: String,
        /// Requested room type (AC or NON-AC)
        #[arg(long)]
        room_type: String,
    },
    /// Mark a room free by its number
    Deallocate {
        /// Room number to free
        #[arg(long)]
        room: String,
    },
    /// Free a room and allocate the first free room of a new type
    Reallocate {
        /// Room number currently held
        #[arg(long)]
        room: String,
        /// Requested new room type (AC or NON-AC)
        #[arg(long)]
        room_type: String,
    },
    /// Print one line per room with number, type, and status
    Report {
        /// Only include rooms with this status (occupied or empty)
        #[arg(long)]
        status: Option<String>,
    },
    /// Print total/occupied/empty room counts
    Dashboard,
}
