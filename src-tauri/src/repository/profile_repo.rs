//! Profile Repository
//!
//! SQLite-backed storage for completed profiles, one row per user. Rows go
//! through `ProfileRecord` so the columns stay snake_case and enums stay as
//! their wire strings; tag sets are stored as JSON arrays.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{DomainError, DomainResult, ProfileRecord, StoredProfile};
use super::db::SharedConnection;
use super::traits::Repository;

const SELECT_COLUMNS: &str = "user_id, name, location, household_size, housing_type, \
    transportation, mobility, pets, social_support, dietary, floor_plan, food_stock, \
    medications, emergency_contacts, citizen_app, concerned_disasters, biggest_worry, \
    reminder_preference, updated_at";

pub struct ProfileRepository {
    conn: SharedConnection,
}

impl ProfileRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub async fn count(&self) -> DomainResult<usize> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))
            .map_err(internal)?;
        Ok(n as usize)
    }
}

#[async_trait]
impl Repository<StoredProfile> for ProfileRepository {
    async fn insert(&self, entity: &StoredProfile) -> DomainResult<()> {
        let record = ProfileRecord::from_profile(&entity.user_id, &entity.profile);
        // A row that cannot be read back would lock the user out of their plan
        record.clone().into_profile()?;
        let dietary = serde_json::to_string(&record.dietary).map_err(internal)?;
        let concerns = serde_json::to_string(&record.concerned_disasters).map_err(internal)?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        conn.execute(
            "INSERT INTO profiles (user_id, name, location, household_size, housing_type,
                transportation, mobility, pets, social_support, dietary, floor_plan,
                food_stock, medications, emergency_contacts, citizen_app,
                concerned_disasters, biggest_worry, reminder_preference, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)
             ON CONFLICT(user_id) DO UPDATE SET
                name = excluded.name,
                location = excluded.location,
                household_size = excluded.household_size,
                housing_type = excluded.housing_type,
                transportation = excluded.transportation,
                mobility = excluded.mobility,
                pets = excluded.pets,
                social_support = excluded.social_support,
                dietary = excluded.dietary,
                floor_plan = excluded.floor_plan,
                food_stock = excluded.food_stock,
                medications = excluded.medications,
                emergency_contacts = excluded.emergency_contacts,
                citizen_app = excluded.citizen_app,
                concerned_disasters = excluded.concerned_disasters,
                biggest_worry = excluded.biggest_worry,
                reminder_preference = excluded.reminder_preference,
                updated_at = excluded.updated_at",
            params![
                record.user_id,
                record.name,
                record.location,
                record.household_size,
                record.housing_type,
                record.transportation,
                record.mobility,
                record.pets,
                record.social_support,
                dietary,
                record.floor_plan,
                record.food_stock,
                record.medications,
                record.emergency_contacts,
                record.citizen_app,
                concerns,
                record.biggest_worry,
                record.reminder_preference,
                entity.updated_at,
            ],
        )
        .map_err(internal)?;

        Ok(())
    }

    async fn select_one(&self, id: &String) -> DomainResult<Option<StoredProfile>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM profiles WHERE user_id = ?1", SELECT_COLUMNS),
                params![id],
                read_row,
            )
            .optional()
            .map_err(internal)?;

        match row {
            Some((record, updated_at)) => {
                let user_id = record.user_id.clone();
                let profile = record.into_profile()?;
                Ok(Some(StoredProfile {
                    user_id,
                    profile,
                    updated_at,
                }))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_ready)?;
        conn.execute("DELETE FROM profiles WHERE user_id = ?1", params![id])
            .map_err(internal)?;
        Ok(())
    }
}

/// Map a `profiles` row (in `SELECT_COLUMNS` order) to a record
fn read_row(row: &Row<'_>) -> rusqlite::Result<(ProfileRecord, i64)> {
    let record = ProfileRecord {
        user_id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        household_size: row.get(3)?,
        housing_type: row.get(4)?,
        transportation: row.get(5)?,
        mobility: row.get(6)?,
        pets: row.get(7)?,
        social_support: row.get(8)?,
        dietary: json_tags(row, 9)?,
        floor_plan: row.get(10)?,
        food_stock: row.get(11)?,
        medications: row.get(12)?,
        emergency_contacts: row.get(13)?,
        citizen_app: row.get(14)?,
        concerned_disasters: json_tags(row, 15)?,
        biggest_worry: row.get(16)?,
        reminder_preference: row.get(17)?,
    };
    Ok((record, row.get(18)?))
}

fn json_tags(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let text: Option<String> = row.get(idx)?;
    match text {
        Some(text) => serde_json::from_str(&text).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        }),
        None => Ok(Vec::new()),
    }
}

pub(super) fn not_ready() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

pub(super) fn internal<E: std::fmt::Display>(e: E) -> DomainError {
    DomainError::Internal(e.to_string())
}
