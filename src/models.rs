//! Frontend Models
//!
//! Data structures matching backend entities. Profile types come from
//! `hearth_core` directly.

use serde::{Deserialize, Serialize};

/// The locally provisioned user (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalUser {
    pub id: String,
    pub created_at: i64,
}
