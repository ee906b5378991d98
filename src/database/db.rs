//! Database operations for the Leitner scheduler
//!
//! Handles SQLite database initialization, box-state snapshots, and the
//! simulated current date that drives due checks.

use crate::models::{Card, CardBox};
use rusqlite::types::Type;
use rusqlite::{Connection, Result, params};
use std::time::{Duration, SystemTime};
use uuid::Uuid;

/// Initializes the SQLite database with required tables
///
/// Creates tables for boxes, cards, and app state. Sets current date to
/// now if not already initialized.
pub fn init_database() -> Result<Connection> {
    let conn = Connection::open("leitner.sqlite3")?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Creates the schema on an open connection
///
/// Split out of [`init_database`] so tests can run against an in-memory
/// connection.
pub fn init_schema(conn: &Connection) -> Result<()> {
    // One row per box, keyed by position in the system
    conn.execute(
        "CREATE TABLE IF NOT EXISTS boxes (
            box_index INTEGER PRIMARY KEY,
            review_interval INTEGER NOT NULL,
            last_reviewed INTEGER NOT NULL
        )",
        (),
    )?;

    // Cards with auto-increment sequence to preserve insertion order
    conn.execute(
        "CREATE TABLE IF NOT EXISTS cards (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL,
            box_index INTEGER NOT NULL,
            word TEXT NOT NULL,
            last_reviewed INTEGER NOT NULL,
            FOREIGN KEY (box_index) REFERENCES boxes(box_index) ON DELETE CASCADE
        )",
        (),
    )?;

    // Create app_state table for storing current date
    conn.execute(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    // Initialize current_date if not exists
    let current_timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs();

    conn.execute(
        "INSERT OR IGNORE INTO app_state (key, value) VALUES ('current_date', ?1)",
        params![current_timestamp.to_string()],
    )?;

    Ok(())
}

/// Retrieves current simulated date from database
pub fn get_current_date(conn: &Connection) -> Result<SystemTime> {
    let timestamp: String = conn.query_row(
        "SELECT value FROM app_state WHERE key = 'current_date'",
        [],
        |row| row.get(0),
    )?;

    let secs = timestamp.parse::<u64>().unwrap_or(0);
    Ok(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
}

/// Advances current date by 24 hours (for testing spaced repetition)
pub fn advance_day(conn: &Connection) -> Result<()> {
    let current = get_current_date(conn)?;
    let next_day = current + Duration::from_secs(24 * 60 * 60);

    conn.execute(
        "UPDATE app_state SET value = ?1 WHERE key = 'current_date'",
        params![to_timestamp(next_day).to_string()],
    )?;

    Ok(())
}

/// Snapshots the full box state, replacing any previous snapshot
///
/// Boxes are stored by position and cards in insertion order, so a
/// following [`load_boxes`] reproduces the system exactly.
pub fn save_boxes(boxes: &[CardBox], conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM cards", ())?;
    tx.execute("DELETE FROM boxes", ())?;

    for (box_index, card_box) in boxes.iter().enumerate() {
        tx.execute(
            "INSERT INTO boxes (box_index, review_interval, last_reviewed) VALUES (?1, ?2, ?3)",
            params![
                box_index as i64,
                card_box.review_interval,
                to_timestamp(card_box.last_reviewed)
            ],
        )?;

        for card in &card_box.cards {
            tx.execute(
                "INSERT INTO cards (id, box_index, word, last_reviewed) VALUES (?1, ?2, ?3, ?4)",
                params![
                    card.id.to_string(),
                    box_index as i64,
                    card.word,
                    to_timestamp(card.last_reviewed)
                ],
            )?;
        }
    }

    tx.commit()
}

/// Restores the box state saved by [`save_boxes`]
///
/// Returns an empty vector when nothing has been saved yet. The caller
/// feeds the result to `LeitnerSystem::load_boxes`.
pub fn load_boxes(conn: &Connection) -> Result<Vec<CardBox>> {
    let mut stmt =
        conn.prepare("SELECT review_interval, last_reviewed FROM boxes ORDER BY box_index")?;

    let mut boxes = stmt
        .query_map([], |row| {
            Ok(CardBox {
                cards: Vec::new(),
                review_interval: row.get(0)?,
                last_reviewed: from_timestamp(row.get(1)?),
            })
        })?
        .collect::<Result<Vec<CardBox>>>()?;

    let mut stmt = conn
        .prepare("SELECT id, box_index, word, last_reviewed FROM cards ORDER BY seq")?;

    let cards = stmt
        .query_map([], |row| {
            let id: String = row.get(0)?;
            let id = Uuid::parse_str(&id)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

            Ok((
                row.get::<_, i64>(1)? as usize,
                Card {
                    id,
                    word: row.get(2)?,
                    last_reviewed: from_timestamp(row.get(3)?),
                },
            ))
        })?
        .collect::<Result<Vec<(usize, Card)>>>()?;

    for (box_index, card) in cards {
        if let Some(card_box) = boxes.get_mut(box_index) {
            card_box.cards.push(card);
        }
    }

    Ok(boxes)
}

/// Converts SystemTime to epoch seconds for storage
fn to_timestamp(time: SystemTime) -> i64 {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

fn from_timestamp(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64)
}
