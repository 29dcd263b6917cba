//! Domain Layer
//!
//! Backend entities. The profile rules themselves live in `hearth_core`.

mod entity;
mod local_user;
mod stored_profile;

pub use entity::Entity;
pub use local_user::LocalUser;
pub use stored_profile::StoredProfile;
pub use hearth_core::{DomainError, DomainResult, ProfileRecord, UserProfile};
