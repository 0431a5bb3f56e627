use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use thiserror::Error;

use crate::ModuleMatrix;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("could not encode text as a QR code: {0}")]
    Qr(#[from] QrError),
    #[error("encoder returned {modules} modules for a {width}x{width} matrix")]
    MatrixSize { width: usize, modules: usize },
}

/// Text in, module matrix out.
pub trait QrEncoder {
    fn encode(&self, text: &str) -> Result<ModuleMatrix, EncodeError>;
}

/// Encoder backed by the `qrcode` crate.
///
/// Always uses the highest error-correction level and lets the library pick
/// the smallest version that fits.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeEncoder;

impl QrEncoder for QrcodeEncoder {
    fn encode(&self, text: &str) -> Result<ModuleMatrix, EncodeError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?;
        qrgen_logging::qrgen_debug!(
            "encoded {} bytes as {:?} ({}x{} modules)",
            text.len(),
            code.version(),
            code.width(),
            code.width()
        );
        let dark = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        ModuleMatrix::new(code.width(), dark)
    }
}
