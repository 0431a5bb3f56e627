use std::path::PathBuf;

use crate::RenderSettings;

/// Directory auto-saved images go to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "medias";
/// Side of the on-screen preview, in pixels.
pub const PREVIEW_PX: u32 = 240;
/// Longest URL fragment kept in an auto-save file name.
pub const MAX_FRAGMENT_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub render: RenderSettings,
    pub preview_px: u32,
    pub max_fragment_len: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::default_with_output(PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

impl GeneratorConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            render: RenderSettings::default(),
            preview_px: PREVIEW_PX,
            max_fragment_len: MAX_FRAGMENT_LEN,
        }
    }
}
