//! `@font-face` rendering and the stream stage that writes it

pub mod css;
pub mod stream;

pub use css::{render_font_face, FONT_URL_DIR};
pub use stream::{FontFaceExt, FontFaceGenerator, FontFaceStream, Report};
