//! SQLite-backed room store
//!
//! The table-backed variant: a single synchronous connection to a `rooms`
//! table with one row per room. Each operation is a direct query mirroring
//! the in-memory registry's semantics; there are no transactions spanning
//! statements and no isolation beyond the single connection.

use crate::error::{HostelError, HostelResult};
use crate::registry::{DashboardCounts, RoomRecord};
use crate::store::OccupancyStore;
use crate::types::{HostelConfig, RoomNumber, RoomStatus, RoomType};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info, warn};

/// Room store backed by a SQLite table
///
/// Schema: `rooms(id INTEGER PRIMARY KEY, room_number INTEGER, room_type
/// TEXT, is_occupied INTEGER)`. The `id` column pins seed order, so scans
/// ordered by it match the in-memory registry's traversal order.
#[derive(Debug)]
pub struct SqliteRoomStore {
    conn: Connection,
}

impl SqliteRoomStore {
    /// Open (or create) the database at the given path and seed it if empty
    pub fn open<P: AsRef<Path>>(path: P, config: &HostelConfig) -> HostelResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        let store = Self { conn };
        store.initialize(config)?;
        Ok(store)
    }

    /// Open an in-memory database, mainly for tests
    pub fn open_in_memory(config: &HostelConfig) -> HostelResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize(config)?;
        Ok(store)
    }

    /// Create the rooms table if absent and seed it only if it is empty
    ///
    /// Seeding inserts `config.room_count` rows numbered from 1, odd numbers
    /// NON-AC and even numbers AC. A reopened database keeps its occupancy
    /// flags untouched.
    fn initialize(&self, config: &HostelConfig) -> HostelResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS rooms (
                id INTEGER PRIMARY KEY,
                room_number INTEGER,
                room_type TEXT,
                is_occupied INTEGER
            )",
            [],
        )?;

        let existing: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))?;
        if existing > 0 {
            debug!(rows = existing, "rooms table already seeded");
            return Ok(());
        }

        for number in 1..=config.room_count as u32 {
            let room_type = if number % 2 == 0 { RoomType::Ac } else { RoomType::NonAc };
            self.conn.execute(
                "INSERT INTO rooms (room_number, room_type, is_occupied) VALUES (?1, ?2, 0)",
                params![number, room_type.to_string()],
            )?;
        }

        info!(rooms = config.room_count, "rooms table seeded");
        Ok(())
    }

    /// Total number of rows in the rooms table
    pub fn room_count(&self) -> HostelResult<usize> {
        let count: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn record_from_row(
        number: u32,
        type_text: &str,
        is_occupied: i64,
    ) -> HostelResult<RoomRecord> {
        let room_type: RoomType = type_text.parse().map_err(|_| {
            HostelError::layout(format!(
                "unexpected room_type '{}' in rooms table",
                type_text
            ))
        })?;
        let status = if is_occupied != 0 { RoomStatus::Occupied } else { RoomStatus::Empty };
        Ok(RoomRecord { number: RoomNumber::new(number), room_type, status })
    }
}

impl OccupancyStore for SqliteRoomStore {
    fn allocate(&mut self, room_type: RoomType) -> HostelResult<Option<RoomRecord>> {
        let candidate: Option<(i64, u32)> = self
            .conn
            .query_row(
                "SELECT id, room_number FROM rooms
                 WHERE room_type = ?1 AND is_occupied = 0
                 ORDER BY id LIMIT 1",
                params![room_type.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((id, number)) = candidate else {
            debug!(%room_type, "no free room of requested type");
            return Ok(None);
        };

        self.conn.execute("UPDATE rooms SET is_occupied = 1 WHERE id = ?1", params![id])?;
        debug!(room = number, %room_type, "room allocated");
        Ok(Some(RoomRecord {
            number: RoomNumber::new(number),
            room_type,
            status: RoomStatus::Occupied,
        }))
    }

    fn deallocate(&mut self, number: RoomNumber) -> HostelResult<bool> {
        let changed = self.conn.execute(
            "UPDATE rooms SET is_occupied = 0 WHERE room_number = ?1",
            params![number.value()],
        )?;

        if changed == 0 {
            warn!(room = %number, "deallocate ignored: no such room");
        } else {
            debug!(room = %number, "room deallocated");
        }
        Ok(changed > 0)
    }

    fn reallocate(
        &mut self,
        current: RoomNumber,
        new_type: RoomType,
    ) -> HostelResult<Option<RoomRecord>> {
        // Vacate first; no rollback when the new allocation fails
        self.deallocate(current)?;
        self.allocate(new_type)
    }

    fn report_by_status(
        &mut self,
        status: Option<RoomStatus>,
    ) -> HostelResult<Vec<RoomRecord>> {
        let (sql, filter): (&str, Option<i64>) = match status {
            None => ("SELECT room_number, room_type, is_occupied FROM rooms ORDER BY id", None),
            Some(RoomStatus::Occupied) => (
                "SELECT room_number, room_type, is_occupied FROM rooms
                 WHERE is_occupied = ?1 ORDER BY id",
                Some(1),
            ),
            Some(RoomStatus::Empty) => (
                "SELECT room_number, room_type, is_occupied FROM rooms
                 WHERE is_occupied = ?1 ORDER BY id",
                Some(0),
            ),
        };

        let mut stmt = self.conn.prepare(sql)?;
        let mut collect = |rows: rusqlite::Rows<'_>| -> HostelResult<Vec<RoomRecord>> {
            let mut records = Vec::new();
            let mut rows = rows;
            while let Some(row) = rows.next()? {
                let number: u32 = row.get(0)?;
                let type_text: String = row.get(1)?;
                let is_occupied: i64 = row.get(2)?;
                records.push(Self::record_from_row(number, &type_text, is_occupied)?);
            }
            Ok(records)
        };

        match filter {
            Some(flag) => collect(stmt.query(params![flag])?),
            None => collect(stmt.query([])?),
        }
    }

    fn dashboard(&mut self) -> HostelResult<DashboardCounts> {
        let total: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))?;
        let occupied: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM rooms WHERE is_occupied = 1",
            [],
            |row| row.get(0),
        )?;

        Ok(DashboardCounts {
            total: total as usize,
            occupied: occupied as usize,
            empty: (total - occupied) as usize,
        })
    }
}
