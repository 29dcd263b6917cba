//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use super::{ProfileRepository, SessionRepository};

/// Shared handle to the (possibly not yet opened) connection
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConnection,
    pub path: PathBuf,
}

impl DbState {
    /// Empty state; the connection is filled in once `init_db` finishes
    pub fn new(path: PathBuf) -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
            path,
        }
    }

    pub fn with_connection(path: PathBuf, conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(Some(conn))),
            path,
        }
    }

    pub async fn is_ready(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    pub fn profiles(&self) -> ProfileRepository {
        ProfileRepository::new(self.conn.clone())
    }

    pub fn sessions(&self) -> SessionRepository {
        SessionRepository::new(self.conn.clone())
    }
}

/// Open the database at `db_path` and bring the schema up to date
pub async fn init_db(db_path: &Path) -> Result<Connection, String> {
    let conn = Connection::open(db_path)
        .map_err(|e| format!("Failed to open {}: {}", db_path.display(), e))?;

    run_migrations(&conn)?;

    Ok(conn)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(names) = stmt.query_map([], |row| row.get::<_, String>(1)) else {
        return false;
    };
    let found = names.flatten().any(|name| name == column);
    found
}

/// Optional questionnaire columns, added after the first schema
const PROFILE_DETAIL_COLUMNS: &[(&str, &str)] = &[
    ("floor_plan", "TEXT"),
    ("food_stock", "TEXT"),
    ("medications", "TEXT"),
    ("emergency_contacts", "TEXT"),
    ("citizen_app", "TEXT"),
    ("concerned_disasters", "TEXT NOT NULL DEFAULT '[]'"),
    ("biggest_worry", "TEXT"),
    ("reminder_preference", "TEXT"),
];

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS profiles (
            user_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            location TEXT NOT NULL,
            household_size INTEGER NOT NULL,
            housing_type TEXT NOT NULL,
            transportation TEXT NOT NULL,
            mobility TEXT NOT NULL,
            pets INTEGER NOT NULL DEFAULT 0,
            social_support TEXT NOT NULL,
            dietary TEXT NOT NULL DEFAULT '[]',
            updated_at INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS local_user (
            slot INTEGER PRIMARY KEY CHECK (slot = 1),
            id TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );",
    )
    .map_err(|e| e.to_string())?;

    for (column, decl) in PROFILE_DETAIL_COLUMNS {
        if !column_exists(conn, "profiles", column) {
            conn.execute(
                &format!("ALTER TABLE profiles ADD COLUMN {} {}", column, decl),
                [],
            )
            .map_err(|e| format!("Failed to add {}: {}", column, e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_add_detail_columns() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE profiles (
                user_id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                location TEXT NOT NULL,
                household_size INTEGER NOT NULL,
                housing_type TEXT NOT NULL,
                transportation TEXT NOT NULL,
                mobility TEXT NOT NULL,
                pets INTEGER NOT NULL DEFAULT 0,
                social_support TEXT NOT NULL,
                dietary TEXT NOT NULL DEFAULT '[]',
                updated_at INTEGER NOT NULL DEFAULT 0
            );",
        )
        .unwrap();
        assert!(!column_exists(&conn, "profiles", "biggest_worry"));

        run_migrations(&conn).unwrap();
        for (column, _) in PROFILE_DETAIL_COLUMNS {
            assert!(column_exists(&conn, "profiles", column), "missing {}", column);
        }

        // Idempotent
        run_migrations(&conn).unwrap();
    }
}
