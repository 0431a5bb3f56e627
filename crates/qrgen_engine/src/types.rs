use std::path::PathBuf;

use image::RgbImage;

use crate::{EncodeError, QrBitmap};

/// Square grid of QR modules, without quiet zone. `true` is dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from row-major module colors.
    ///
    /// `dark` must hold exactly `width * width` entries.
    pub fn new(width: usize, dark: Vec<bool>) -> Result<Self, EncodeError> {
        if width == 0 || dark.len() != width * width {
            return Err(EncodeError::MatrixSize {
                width,
                modules: dark.len(),
            });
        }
        Ok(Self { width, dark })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.width, "module out of bounds");
        self.dark[y * self.width + x]
    }

    pub fn count_dark_modules(&self) -> usize {
        self.dark.iter().filter(|&&dark| dark).count()
    }
}

/// Outcome of one successful generation cycle.
#[derive(Debug, Clone)]
pub struct Generated {
    pub url: String,
    pub bitmap: QrBitmap,
    pub preview: RgbImage,
    pub saved_path: PathBuf,
}
