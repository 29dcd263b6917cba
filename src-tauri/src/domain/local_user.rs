//! Local User
//!
//! The identity a device signs in as. There is no remote account: the first
//! session provisions one user and keeps it until sign-out.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalUser {
    /// Hex digest, stable for the lifetime of the session
    pub id: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

impl LocalUser {
    /// Derive a fresh identity from the creation time and a caller salt
    pub fn provision(created_at: i64, salt: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&created_at.to_le_bytes());
        hasher.update(salt);
        Self {
            id: hasher.finalize().to_hex().to_string(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_is_hex_and_salted() {
        let a = LocalUser::provision(1_700_000_000_000, b"salt-a");
        let b = LocalUser::provision(1_700_000_000_000, b"salt-b");
        assert_eq!(a.id.len(), 64);
        assert!(a.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a.id, b.id);
        assert_eq!(a, LocalUser::provision(1_700_000_000_000, b"salt-a"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(LocalUser::provision(5, b"x")).unwrap();
        assert_eq!(json["createdAt"], 5);
    }
}
