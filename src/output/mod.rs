//! Output encoders (PNG images, ASCII text files).

mod png_encoder;
mod text;

pub use png_encoder::PngEncoder;
pub use text::write_text;
