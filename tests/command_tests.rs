//! Command validation and CLI wiring tests
//!
//! Drives the full path the binary takes: clap-parsed arguments become
//! command values, validation runs before any store access, and outcomes
//! render the exact user-facing messages.

use clap::Parser;
use hostel_occupancy::error::HostelError;
use hostel_occupancy::ops::{execute, Command, Outcome};
use hostel_occupancy::registry::HostelRegistry;
use hostel_occupancy::store::SqliteRoomStore;
use hostel_occupancy::types::{CliArgs, HostelConfig, RoomNumber, RoomType};

fn registry() -> HostelRegistry {
    HostelRegistry::from_config(&HostelConfig::default()).unwrap()
}

fn parse_command(argv: &[&str]) -> Command {
    let args = CliArgs::parse_from(argv);
    Command::from(args.command.expect("subcommand given"))
}

#[test]
fn cli_allocate_runs_end_to_end() {
    let command = parse_command(&[
        "hostel-occupancy",
        "allocate",
        "--student",
        "Alice",
        "--room-type",
        "AC",
    ]);

    let mut store = registry();
    let outcome = execute(&mut store, command).unwrap();
    assert_eq!(outcome.to_string(), "Room 2 (AC) allocated to Alice.");
}

#[test]
fn cli_room_type_is_case_insensitive() {
    let command = parse_command(&[
        "hostel-occupancy",
        "allocate",
        "--student",
        "Alice",
        "--room-type",
        "non-ac",
    ]);

    let mut store = registry();
    let outcome = execute(&mut store, command).unwrap();
    assert_eq!(outcome.to_string(), "Room 1 (NON-AC) allocated to Alice.");
}

#[test]
fn blank_student_name_is_rejected_before_the_store() {
    let mut store = registry();
    let result = execute(
        &mut store,
        Command::Allocate { student_name: "   ".to_string(), room_type: "AC".to_string() },
    );

    match result {
        Err(HostelError::Validation(msg)) => assert!(msg.contains("Student name")),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(store.dashboard().occupied, 0);
}

#[test]
fn unknown_room_type_is_rejected_before_the_store() {
    let mut store = registry();
    let result = execute(
        &mut store,
        Command::Allocate { student_name: "Alice".to_string(), room_type: "suite".to_string() },
    );

    assert!(matches!(result, Err(HostelError::Validation(_))));
    assert_eq!(store.dashboard().occupied, 0);
}

#[test]
fn non_numeric_room_number_is_rejected_for_deallocate_and_reallocate() {
    let mut store = registry();
    store.allocate(RoomType::Ac);

    for command in [
        Command::Deallocate { room_number: "two".to_string() },
        Command::Reallocate { room_number: "2b".to_string(), room_type: "AC".to_string() },
    ] {
        let result = execute(&mut store, command);
        assert!(matches!(result, Err(HostelError::Validation(_))));
    }

    // The one legitimate allocation is the only state change.
    assert_eq!(store.dashboard().occupied, 1);
}

#[test]
fn invalid_status_filter_is_rejected() {
    let mut store = registry();
    let result =
        execute(&mut store, Command::Report { status: Some("half-full".to_string()) });
    assert!(matches!(result, Err(HostelError::Validation(_))));
}

#[test]
fn deallocate_confirmation_is_unconditional() {
    // The confirmation message does not distinguish known from unknown
    // rooms; the outcome value does.
    let mut store = registry();

    let known = execute(&mut store, Command::Deallocate { room_number: "1".to_string() }).unwrap();
    let unknown =
        execute(&mut store, Command::Deallocate { room_number: "999".to_string() }).unwrap();

    assert_eq!(known.to_string(), "Room 1 has been deallocated.");
    assert_eq!(unknown.to_string(), "Room 999 has been deallocated.");
    assert_eq!(
        unknown,
        Outcome::Deallocated { room_number: RoomNumber::new(999), existed: false }
    );
}

#[test]
fn validation_failure_leaves_sqlite_store_untouched() {
    let mut store = SqliteRoomStore::open_in_memory(&HostelConfig::default()).unwrap();

    let result = execute(
        &mut store,
        Command::Allocate { student_name: "".to_string(), room_type: "AC".to_string() },
    );
    assert!(matches!(result, Err(HostelError::Validation(_))));

    let outcome = execute(&mut store, Command::Dashboard).unwrap();
    assert_eq!(
        outcome.to_string(),
        "Total Rooms: 50\nOccupied Rooms: 0\nEmpty Rooms: 50"
    );
}

#[test]
fn student_name_is_trimmed_in_the_confirmation() {
    let mut store = registry();
    let outcome = execute(
        &mut store,
        Command::Allocate { student_name: "  Alice  ".to_string(), room_type: "AC".to_string() },
    )
    .unwrap();

    assert_eq!(outcome.to_string(), "Room 2 (AC) allocated to Alice.");
}
