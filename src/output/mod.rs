//! Output encoders (PNG, data URLs).

mod png_encoder;

pub use png_encoder::PngEncoder;
