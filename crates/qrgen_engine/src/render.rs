use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageResult, Rgb, RgbImage};

use crate::ModuleMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Pixel size of one module.
    pub module_px: u32,
    /// Blank border around the matrix, in modules.
    pub quiet_zone: u32,
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            module_px: 8,
            quiet_zone: 3,
            foreground: Rgb([0x0f, 0x0f, 0x0f]),
            background: Rgb([0xff, 0xff, 0xff]),
        }
    }
}

/// Full-resolution, two-tone QR image.
#[derive(Debug, Clone, PartialEq)]
pub struct QrBitmap {
    image: RgbImage,
}

impl QrBitmap {
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Scaled copy for on-screen display. Nearest-neighbour keeps module edges sharp.
    pub fn preview(&self, size: u32) -> RgbImage {
        let size = size.max(1);
        imageops::resize(&self.image, size, size, FilterType::Nearest)
    }

    pub fn encode_png(&self) -> ImageResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }
}

pub fn render_bitmap(matrix: &ModuleMatrix, settings: &RenderSettings) -> QrBitmap {
    let module_px = settings.module_px.max(1);
    let quiet_zone = settings.quiet_zone;
    let width = matrix.width() as u32;
    let side = (width + 2 * quiet_zone) * module_px;

    let image = RgbImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / module_px, y / module_px);
        let inside = (quiet_zone..quiet_zone + width).contains(&mx)
            && (quiet_zone..quiet_zone + width).contains(&my);
        if inside && matrix.is_dark((mx - quiet_zone) as usize, (my - quiet_zone) as usize) {
            settings.foreground
        } else {
            settings.background
        }
    });

    QrBitmap { image }
}
