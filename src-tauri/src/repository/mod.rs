//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod profile_repo;
mod session_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, DbState};
pub use profile_repo::ProfileRepository;
pub use session_repo::SessionRepository;
