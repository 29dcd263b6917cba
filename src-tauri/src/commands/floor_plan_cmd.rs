//! Floor Plan Commands
//!
//! Picks an image from disk and hands it back as a data URL, which is what
//! the profile stores.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tauri::{command, AppHandle, Runtime};
#[cfg(not(any(target_os = "android", target_os = "ios")))]
use tauri_plugin_dialog::DialogExt;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// `data:<mime>;base64,<payload>` for a file's bytes
pub fn to_data_url(path: &Path, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}

#[command]
pub async fn pick_floor_plan<R: Runtime>(app: AppHandle<R>) -> Result<Option<String>, String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let picked = app
            .dialog()
            .file()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .blocking_pick_file();
        let Some(picked) = picked else {
            return Ok(None);
        };

        let path = picked.into_path().map_err(|e| e.to_string())?;
        let bytes = std::fs::read(&path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        log::info!("Floor plan picked: {} ({} bytes)", path.display(), bytes.len());
        Ok(Some(to_data_url(&path, &bytes)))
    }
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        // Drawing on the canvas still works on mobile
        let _ = (app, IMAGE_EXTENSIONS);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_uses_guessed_mime() {
        let url = to_data_url(Path::new("plan.png"), b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let url = to_data_url(Path::new("plan.unknownext"), &[0u8, 1, 2]);
        assert!(url.starts_with("data:application/octet-stream;base64,"));
    }
}
