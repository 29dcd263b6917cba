//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod session_cmd;
mod profile_cmd;
mod floor_plan_cmd;

pub use session_cmd::*;
pub use profile_cmd::*;
pub use floor_plan_cmd::*;
