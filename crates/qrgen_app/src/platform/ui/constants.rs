use eframe::egui::Color32;

pub const APP_ID: &str = "qrgen";
pub const WINDOW_TITLE: &str = "QR Generator";
pub const WINDOW_SIZE: [f32; 2] = [520.0, 680.0];

pub const BG: Color32 = Color32::from_rgb(0x0f, 0x0f, 0x0f);
pub const CARD: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0xe5, 0xff);
pub const TEXT: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
pub const SUBTEXT: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xff, 0x3c, 0xac);

pub const OUTER_MARGIN: f32 = 30.0;
pub const PREVIEW_SIDE: f32 = 240.0;

pub const LABEL_GENERATE: &str = "GENERATE  ›";
pub const LABEL_GENERATING: &str = "...";
pub const LABEL_EXPORT: &str = "Save as…";
pub const LABEL_PREVIEW_PLACEHOLDER: &str = "[ QR code preview ]";
pub const LABEL_TAGLINE: &str = "Turn any URL into a QR code instantly.";

pub const SAVE_DIALOG_TITLE: &str = "Save QR code";

/// Horizontal offsets of the input shake, one per step.
pub const SHAKE_OFFSETS: [f32; 7] = [8.0, -8.0, 6.0, -6.0, 4.0, -4.0, 0.0];
pub const SHAKE_STEP_SECS: f64 = 0.03;
