use std::path::PathBuf;

/// Icon sizes the extension manifest references, smallest first.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Extension package directory the icons are written into.
const ICON_DIR: &str = "ext";

/// Default source artwork for the resizer.
const SOURCE_PATH: &str = "assets/icon_source.png";

/// Paths and sizes for both icon batches. Defaults cover the in-repo layout;
/// callers override fields for anything else. Output directories must already
/// exist, neither batch creates them.
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Where the placeholder batch writes.
    pub base_dir: PathBuf,
    /// Source artwork for the resize batch.
    pub source_path: PathBuf,
    /// Where the resize batch writes.
    pub target_dir: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(ICON_DIR),
            source_path: PathBuf::from(SOURCE_PATH),
            target_dir: PathBuf::from(ICON_DIR),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}
