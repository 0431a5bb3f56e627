//! QR generator engine: encoding, rendering and file output.
mod config;
mod encoder;
mod export;
mod filename;
mod generator;
mod persist;
mod render;
mod types;

pub use config::{GeneratorConfig, DEFAULT_OUTPUT_DIR, MAX_FRAGMENT_LEN, PREVIEW_PX};
pub use encoder::{EncodeError, QrEncoder, QrcodeEncoder};
pub use export::{export_bitmap, with_default_extension};
pub use filename::auto_save_filename;
pub use generator::{GenerateError, Generator};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use render::{render_bitmap, QrBitmap, RenderSettings};
pub use types::{Generated, ModuleMatrix};

/// Extension used for every image this crate writes.
pub const IMAGE_EXTENSION: &str = "png";
