use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use once_cell::sync::Lazy;

use crate::error::IconError;
use crate::logger::{log_error, log_line};

// 1x1 transparent PNG. All four placeholder entries share the same payload,
// only the filename differs.
const PLACEHOLDER_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAC0lEQVR4nGNgAAIAAAUAAXpeqz8AAAAASUVORK5CYII=";

/// Placeholder table: output filename to base64 payload, smallest size first.
pub const PLACEHOLDER_ICONS: [(&str, &str); 4] = [
    ("icon16.png", PLACEHOLDER_PNG_B64),
    ("icon32.png", PLACEHOLDER_PNG_B64),
    ("icon48.png", PLACEHOLDER_PNG_B64),
    ("icon128.png", PLACEHOLDER_PNG_B64),
];

// Decoded once at first access; the literals are fixed data, so a decode
// failure can only be a bad edit to the table above.
static DECODED: Lazy<Vec<(&'static str, Vec<u8>)>> = Lazy::new(|| {
    PLACEHOLDER_ICONS
        .iter()
        .map(|(name, b64)| {
            let bytes = general_purpose::STANDARD
                .decode(b64)
                .expect("invalid placeholder payload");
            (*name, bytes)
        })
        .collect()
});

/// Pre-decoded placeholder table.
pub fn placeholder_table() -> &'static [(&'static str, Vec<u8>)] {
    &DECODED
}

/// Write every placeholder entry verbatim into `base_dir`, overwriting
/// existing files. Stops at the first write failure; entries already written
/// stay on disk.
pub fn emit_placeholders(base_dir: &Path) -> Result<(), IconError> {
    for (name, bytes) in placeholder_table() {
        let path = base_dir.join(name);
        fs::write(&path, bytes).map_err(|e| {
            let err = IconError::Write {
                path: path.clone(),
                source: e,
            };
            log_error("write placeholder", &err);
            err
        })?;
        println!("Created {}", path.display());
        log_line(&format!("wrote placeholder {}", path.display()));
    }
    Ok(())
}
