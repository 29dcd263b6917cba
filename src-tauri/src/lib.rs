//! Hearth Backend
//!
//! Layered architecture:
//! - domain: Stored entities (the profile rules live in `hearth_core`)
//! - repository: SQLite access for profiles and the local session
//! - commands: Tauri command handlers

use tauri::{Emitter, Manager};

mod config;
mod domain;
mod repository;
mod commands;

use config::{AppPaths, LOG_NAME};
use repository::{init_db, DbState};

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub paths: AppPaths,
}

fn stamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let result = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();
            let paths = AppPaths::resolve(&app_handle)?;

            if let Err(e) = rolling_logger::init_logger(paths.log_dir.clone(), LOG_NAME) {
                eprintln!("[{}] Rolling logger unavailable: {}", stamp(), e);
            }
            log::info!("App setup starting, data dir {}", paths.data_dir.display());

            // Commands see an empty state until the background init fills it in
            let db_state = DbState::new(paths.db_path.clone());
            app.manage(AppState {
                db_state: db_state.clone(),
                paths: paths.clone(),
            });

            tauri::async_runtime::spawn(async move {
                eprintln!("[{}] Background: Starting DB initialization", stamp());

                match init_db(&db_state.path).await {
                    Ok(conn) => {
                        *db_state.conn.lock().await = Some(conn);
                        let _ = rolling_logger::info("Async DB init success");

                        if let Err(e) = app_handle.emit(hearth_core::DB_INITIALIZED_EVENT, ()) {
                            log::error!("Failed to emit db-initialized: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("[{}] Background: DB init failed: {}", stamp(), e);
                        let _ = rolling_logger::error(&format!("Async DB init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Session
            commands::current_user,
            commands::start_session,
            commands::sign_out,
            // Profile
            commands::save_profile,
            commands::load_profile,
            // Floor plan
            commands::pick_floor_plan,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        eprintln!("[{}] Error while running tauri application: {}", stamp(), e);
        std::process::exit(1);
    }
}
