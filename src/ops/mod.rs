//! Commands and outcomes
//!
//! User actions arrive as command values carrying the raw strings collected
//! from the user. Execution validates the input first — an empty student
//! name, a non-numeric room number, or an unknown room type fails before any
//! store call — then drives the occupancy store and returns an outcome value
//! the presentation layer can render. The store never sees a presentation
//! concern and the presentation layer never mutates rooms directly.

use crate::error::{HostelError, HostelResult};
use crate::registry::{DashboardCounts, RoomRecord};
use crate::store::OccupancyStore;
use crate::types::{HostelCli, RoomNumber, RoomStatus, RoomType};
use std::fmt;
use tracing::info;

/// A user action with its raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Allocate the first free room of a type to a student
    Allocate {
        /// Student name as typed; echoed in the confirmation, never stored
        student_name: String,
        /// Requested room type as typed
        room_type: String,
    },
    /// Mark a room free by its number
    Deallocate {
        /// Room number as typed
        room_number: String,
    },
    /// Free a room and allocate the first free room of a new type
    Reallocate {
        /// Currently held room number as typed
        room_number: String,
        /// Requested new room type as typed
        room_type: String,
    },
    /// Per-room report, optionally filtered by status
    Report {
        /// Status filter as typed, if any
        status: Option<String>,
    },
    /// Aggregate total/occupied/empty counts
    Dashboard,
}

impl From<HostelCli> for Command {
    fn from(cli: HostelCli) -> Self {
        match cli {
            HostelCli::Allocate { student, room_type } => {
                Command::Allocate { student_name: student, room_type }
            }
            HostelCli::Deallocate { room } => Command::Deallocate { room_number: room },
            HostelCli::Reallocate { room, room_type } => {
                Command::Reallocate { room_number: room, room_type }
            }
            HostelCli::Report { status } => Command::Report { status },
            HostelCli::Dashboard => Command::Dashboard,
        }
    }
}

/// The result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A room was allocated to the named student
    Allocated {
        /// Student name echoed back; it is not retained anywhere
        student_name: String,
        /// The allocated room
        room: RoomRecord,
    },
    /// No free room of the requested type exists; nothing changed
    NoVacancy {
        /// The requested type
        room_type: RoomType,
    },
    /// A deallocation request was processed
    Deallocated {
        /// The room number that was freed
        room_number: RoomNumber,
        /// Whether a room with that number existed (unknown numbers are a
        /// no-op but still confirmed)
        existed: bool,
    },
    /// A reallocation moved the occupant to a new room
    Reallocated {
        /// The room number that was vacated
        vacated: RoomNumber,
        /// The newly allocated room
        room: RoomRecord,
    },
    /// A reallocation vacated the room but found no replacement
    ///
    /// The vacated room stays free; this is the documented no-rollback
    /// behavior.
    ReallocationFailed {
        /// The room number that was vacated
        vacated: RoomNumber,
        /// The requested type with no free room
        room_type: RoomType,
    },
    /// Per-room report rows
    Report(Vec<RoomRecord>),
    /// Aggregate counts
    Dashboard(DashboardCounts),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Allocated { student_name, room } => {
                write!(f, "Room {} ({}) allocated to {}.", room.number, room.room_type, student_name)
            }
            Outcome::NoVacancy { room_type } => {
                write!(f, "No available rooms of type {}.", room_type)
            }
            Outcome::Deallocated { room_number, .. } => {
                write!(f, "Room {} has been deallocated.", room_number)
            }
            Outcome::Reallocated { vacated, room } => {
                write!(
                    f,
                    "Room {} has been deallocated. Room {} ({}) allocated.",
                    vacated, room.number, room.room_type
                )
            }
            Outcome::ReallocationFailed { vacated, room_type } => {
                write!(
                    f,
                    "Room {} has been deallocated. No available rooms of type {}.",
                    vacated, room_type
                )
            }
            Outcome::Report(records) => {
                let mut first = true;
                for record in records {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{}", record)?;
                    first = false;
                }
                Ok(())
            }
            Outcome::Dashboard(counts) => write!(f, "{}", counts),
        }
    }
}

/// Execute a command against an occupancy store
///
/// Input validation happens before any store access, so a validation failure
/// never changes state.
pub fn execute<S: OccupancyStore>(store: &mut S, command: Command) -> HostelResult<Outcome> {
    match command {
        Command::Allocate { student_name, room_type } => {
            let student_name = parse_student_name(&student_name)?;
            let room_type = parse_room_type(&room_type)?;

            info!(student = %student_name, %room_type, "allocate requested");
            match store.allocate(room_type)? {
                Some(room) => Ok(Outcome::Allocated { student_name, room }),
                None => Ok(Outcome::NoVacancy { room_type }),
            }
        }
        Command::Deallocate { room_number } => {
            let room_number = parse_room_number(&room_number)?;

            info!(room = %room_number, "deallocate requested");
            let existed = store.deallocate(room_number)?;
            Ok(Outcome::Deallocated { room_number, existed })
        }
        Command::Reallocate { room_number, room_type } => {
            let room_number = parse_room_number(&room_number)?;
            let room_type = parse_room_type(&room_type)?;

            info!(room = %room_number, %room_type, "reallocate requested");
            match store.reallocate(room_number, room_type)? {
                Some(room) => Ok(Outcome::Reallocated { vacated: room_number, room }),
                None => Ok(Outcome::ReallocationFailed { vacated: room_number, room_type }),
            }
        }
        Command::Report { status } => {
            let status = match status {
                Some(raw) => Some(parse_status(&raw)?),
                None => None,
            };
            Ok(Outcome::Report(store.report_by_status(status)?))
        }
        Command::Dashboard => Ok(Outcome::Dashboard(store.dashboard()?)),
    }
}

fn parse_student_name(raw: &str) -> HostelResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(HostelError::validation("Student name must not be empty"));
    }
    Ok(name.to_string())
}

fn parse_room_type(raw: &str) -> HostelResult<RoomType> {
    raw.parse::<RoomType>().map_err(HostelError::validation)
}

fn parse_room_number(raw: &str) -> HostelResult<RoomNumber> {
    raw.parse::<RoomNumber>().map_err(|_| {
        HostelError::validation(format!("Room number must be a number, got '{}'", raw.trim()))
    })
}

fn parse_status(raw: &str) -> HostelResult<RoomStatus> {
    raw.parse::<RoomStatus>().map_err(HostelError::validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::HostelRegistry;
    use crate::types::HostelConfig;

    fn registry() -> HostelRegistry {
        HostelRegistry::from_config(&HostelConfig::default()).unwrap()
    }

    #[test]
    fn test_allocate_command() {
        let mut store = registry();
        let outcome = execute(
            &mut store,
            Command::Allocate {
                student_name: "Alice".to_string(),
                room_type: "AC".to_string(),
            },
        )
        .unwrap();

        assert_eq!(
            outcome.to_string(),
            "Room 2 (AC) allocated to Alice."
        );
    }

    #[test]
    fn test_allocate_rejects_empty_student_name() {
        let mut store = registry();
        let result = execute(
            &mut store,
            Command::Allocate { student_name: "   ".to_string(), room_type: "AC".to_string() },
        );

        assert!(matches!(result, Err(HostelError::Validation(_))));
        // Validation failure leaves state untouched
        assert_eq!(store.dashboard().occupied, 0);
    }

    #[test]
    fn test_allocate_rejects_unknown_room_type() {
        let mut store = registry();
        let result = execute(
            &mut store,
            Command::Allocate {
                student_name: "Alice".to_string(),
                room_type: "deluxe".to_string(),
            },
        );

        assert!(matches!(result, Err(HostelError::Validation(_))));
        assert_eq!(store.dashboard().occupied, 0);
    }

    #[test]
    fn test_allocate_no_vacancy_message() {
        let config = HostelConfig { room_count: 1, ..Default::default() };
        let mut store = HostelRegistry::from_config(&config).unwrap();

        // Only room is NON-AC; AC is exhausted from the start
        let outcome = execute(
            &mut store,
            Command::Allocate {
                student_name: "Alice".to_string(),
                room_type: "AC".to_string(),
            },
        )
        .unwrap();

        assert_eq!(outcome, Outcome::NoVacancy { room_type: RoomType::Ac });
        assert_eq!(outcome.to_string(), "No available rooms of type AC.");
    }

    #[test]
    fn test_deallocate_command() {
        let mut store = registry();
        execute(
            &mut store,
            Command::Allocate {
                student_name: "Alice".to_string(),
                room_type: "AC".to_string(),
            },
        )
        .unwrap();

        let outcome =
            execute(&mut store, Command::Deallocate { room_number: "2".to_string() }).unwrap();
        assert_eq!(
            outcome,
            Outcome::Deallocated { room_number: RoomNumber::new(2), existed: true }
        );
        assert_eq!(outcome.to_string(), "Room 2 has been deallocated.");
    }

    #[test]
    fn test_deallocate_rejects_non_numeric_room() {
        let mut store = registry();
        let result =
            execute(&mut store, Command::Deallocate { room_number: "two".to_string() });
        assert!(matches!(result, Err(HostelError::Validation(_))));
    }

    #[test]
    fn test_deallocate_unknown_room_reports_not_existed() {
        let mut store = registry();
        let outcome =
            execute(&mut store, Command::Deallocate { room_number: "999".to_string() }).unwrap();
        assert_eq!(
            outcome,
            Outcome::Deallocated { room_number: RoomNumber::new(999), existed: false }
        );
    }

    #[test]
    fn test_reallocate_command() {
        let mut store = registry();
        execute(
            &mut store,
            Command::Allocate {
                student_name: "Alice".to_string(),
                room_type: "AC".to_string(),
            },
        )
        .unwrap();

        let outcome = execute(
            &mut store,
            Command::Reallocate {
                room_number: "2".to_string(),
                room_type: "NON-AC".to_string(),
            },
        )
        .unwrap();

        match outcome {
            Outcome::Reallocated { vacated, room } => {
                assert_eq!(vacated, RoomNumber::new(2));
                assert_eq!(room.number, RoomNumber::new(1));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_report_command_lines() {
        let config = HostelConfig { room_count: 2, ..Default::default() };
        let mut store = HostelRegistry::from_config(&config).unwrap();
        execute(
            &mut store,
            Command::Allocate {
                student_name: "Alice".to_string(),
                room_type: "AC".to_string(),
            },
        )
        .unwrap();

        let outcome = execute(&mut store, Command::Report { status: None }).unwrap();
        assert_eq!(
            outcome.to_string(),
            "Room 1 - NON-AC - Empty\nRoom 2 - AC - Occupied"
        );
    }

    #[test]
    fn test_report_command_status_filter() {
        let mut store = registry();
        execute(
            &mut store,
            Command::Allocate {
                student_name: "Alice".to_string(),
                room_type: "AC".to_string(),
            },
        )
        .unwrap();

        let outcome = execute(
            &mut store,
            Command::Report { status: Some("occupied".to_string()) },
        )
        .unwrap();
        match outcome {
            Outcome::Report(records) => assert_eq!(records.len(), 1),
            other => panic!("unexpected outcome: {:?}", other),
        }

        let result = execute(
            &mut store,
            Command::Report { status: Some("broken".to_string()) },
        );
        assert!(matches!(result, Err(HostelError::Validation(_))));
    }

    #[test]
    fn test_dashboard_command() {
        let mut store = registry();
        let outcome = execute(&mut store, Command::Dashboard).unwrap();
        assert_eq!(
            outcome.to_string(),
            "Total Rooms: 50\nOccupied Rooms: 0\nEmpty Rooms: 50"
        );
    }

    #[test]
    fn test_command_from_cli() {
        let command: Command = HostelCli::Allocate {
            student: "Alice".to_string(),
            room_type: "AC".to_string(),
        }
        .into();
        assert_eq!(
            command,
            Command::Allocate {
                student_name: "Alice".to_string(),
                room_type: "AC".to_string()
            }
        );

        let command: Command = HostelCli::Dashboard.into();
        assert_eq!(command, Command::Dashboard);
    }
}
