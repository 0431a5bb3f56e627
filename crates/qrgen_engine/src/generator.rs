use std::path::{Path, PathBuf};

use qrgen_logging::{qrgen_info, qrgen_warn};
use thiserror::Error;

use crate::{
    auto_save_filename, export_bitmap, render_bitmap, AtomicFileWriter, EncodeError, Generated,
    GeneratorConfig, PersistError, QrBitmap, QrEncoder, QrcodeEncoder,
};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Runs one generation cycle: encode, render, preview, auto-save.
pub struct Generator<E = QrcodeEncoder> {
    encoder: E,
    config: GeneratorConfig,
    writer: AtomicFileWriter,
}

impl Generator<QrcodeEncoder> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_encoder(QrcodeEncoder, config)
    }
}

impl<E: QrEncoder> Generator<E> {
    pub fn with_encoder(encoder: E, config: GeneratorConfig) -> Self {
        let writer = AtomicFileWriter::new(config.output_dir.clone());
        Self {
            encoder,
            config,
            writer,
        }
    }

    /// Nothing is written unless encoding succeeds; an existing file for the
    /// same URL is replaced.
    pub fn generate(&self, url: &str) -> Result<Generated, GenerateError> {
        let matrix = self.encoder.encode(url).inspect_err(|err| {
            qrgen_warn!("Encoding failed url_len={} err={}", url.len(), err);
        })?;
        let bitmap = render_bitmap(&matrix, &self.config.render);
        let preview = bitmap.preview(self.config.preview_px);

        let filename = auto_save_filename(url, self.config.max_fragment_len);
        let saved_path = self.save(&filename, &bitmap).inspect_err(|err| {
            qrgen_warn!("Auto-save to {:?} failed: {}", self.writer.dir(), err);
        })?;

        qrgen_info!(
            "Generated url={} modules={} px={} saved={}",
            url,
            matrix.width(),
            bitmap.width(),
            saved_path.display()
        );
        Ok(Generated {
            url: url.to_string(),
            bitmap,
            preview,
            saved_path,
        })
    }

    /// Write a copy of `bitmap` to a user-chosen path.
    pub fn export(&self, bitmap: &QrBitmap, path: &Path) -> Result<PathBuf, PersistError> {
        match export_bitmap(bitmap, path) {
            Ok(written) => {
                qrgen_info!("Exported to {}", written.display());
                Ok(written)
            }
            Err(err) => {
                qrgen_warn!("Export to {} failed: {}", path.display(), err);
                Err(err)
            }
        }
    }

    fn save(&self, filename: &str, bitmap: &QrBitmap) -> Result<PathBuf, PersistError> {
        let png = bitmap.encode_png()?;
        self.writer.write(filename, &png)
    }
}
