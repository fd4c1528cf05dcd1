//! Generates CSS `@font-face` rules from font file names.
//!
//! Family, style and weight are read off the file stem
//! (`Roboto-BoldItalic` is `Roboto`, italic, 700). Files are passed through
//! [`FontFaceGenerator`] one at a time; each distinct stem appends one rule
//! to the configured stylesheet and every file is handed back unchanged.

pub mod cli;
pub mod error;
pub mod font;
pub mod generator;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
pub use font::classify;
pub use generator::{render_font_face, FontFaceExt, FontFaceGenerator, FontFaceStream, Report};
pub use models::{
    Config, FamilyNaming, FileDescriptor, FontFile, FontRecord, FontStyle, InitPolicy, WriteMode,
};
