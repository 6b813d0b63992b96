//! Image formats hyprpaper can display.

use std::path::Path;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "jxl", "webp"];

/// Case-insensitive extension check; the file itself is not inspected.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
        .unwrap_or(false)
}
