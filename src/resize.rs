use std::path::Path;

use image::error::ImageFormatHint;
use image::imageops::{self, FilterType};

use crate::error::IconError;
use crate::logger::{log_error, log_line};

/// Resize `source_path` to each size in `sizes` and write
/// `<target_dir>/icon<size>.png`, overwriting existing files. Outputs are
/// exactly square; a non-square source gets stretched. Stops at the first
/// failure, files already written stay on disk.
pub fn resize_icons(source_path: &Path, target_dir: &Path, sizes: &[u32]) -> Result<(), IconError> {
    if !source_path.exists() {
        return Err(IconError::MissingInput {
            path: source_path.to_path_buf(),
        });
    }

    // Decoded source lives only for the duration of the batch.
    let img = match image::open(source_path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            let err = decode_error(e);
            log_error("decode source image", &err);
            return Err(err);
        }
    };

    for &size in sizes {
        let resized = imageops::resize(&img, size, size, FilterType::Lanczos3);
        let path = target_dir.join(format!("icon{}.png", size));
        if let Err(e) = resized.save(&path) {
            let err = save_error(&path, e);
            log_error("save icon", &err);
            return Err(err);
        }
        println!("Saved {}", path.display());
        log_line(&format!("wrote {}x{} icon {}", size, size, path.display()));
    }

    Ok(())
}

// The codec reports both "format not compiled in" and "format unrecognizable"
// as Unsupported; only a recognized format is a capability problem.
fn decode_error(e: image::ImageError) -> IconError {
    match e {
        image::ImageError::Unsupported(err) if err.format_hint() != ImageFormatHint::Unknown => {
            IconError::CapabilityUnavailable {
                detail: err.to_string(),
            }
        }
        other => IconError::Processing {
            detail: other.to_string(),
        },
    }
}

fn save_error(path: &Path, e: image::ImageError) -> IconError {
    match e {
        image::ImageError::IoError(err) => IconError::Write {
            path: path.to_path_buf(),
            source: err,
        },
        image::ImageError::Unsupported(err) => IconError::CapabilityUnavailable {
            detail: err.to_string(),
        },
        other => IconError::Processing {
            detail: other.to_string(),
        },
    }
}
