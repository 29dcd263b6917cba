//! Session Repository
//!
//! Holds the single provisioned `LocalUser`. The `local_user` table has one
//! slot; creating a session when one exists returns the existing user.

use rusqlite::{params, OptionalExtension};

use crate::domain::{DomainResult, LocalUser};
use super::db::SharedConnection;
use super::profile_repo::{internal, not_ready};

pub struct SessionRepository {
    conn: SharedConnection,
}

impl SessionRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub async fn current(&self) -> DomainResult<Option<LocalUser>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        conn.query_row(
            "SELECT id, created_at FROM local_user WHERE slot = 1",
            [],
            |row| {
                Ok(LocalUser {
                    id: row.get(0)?,
                    created_at: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(internal)
    }

    /// Return the signed-in user, provisioning `candidate` if there is none
    pub async fn create(&self, candidate: LocalUser) -> DomainResult<LocalUser> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        conn.execute(
            "INSERT OR IGNORE INTO local_user (slot, id, created_at) VALUES (1, ?1, ?2)",
            params![candidate.id, candidate.created_at],
        )
        .map_err(internal)?;

        conn.query_row(
            "SELECT id, created_at FROM local_user WHERE slot = 1",
            [],
            |row| {
                Ok(LocalUser {
                    id: row.get(0)?,
                    created_at: row.get(1)?,
                })
            },
        )
        .map_err(internal)
    }

    pub async fn clear(&self) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        conn.execute("DELETE FROM local_user", []).map_err(internal)?;
        Ok(())
    }
}
