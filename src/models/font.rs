use std::fmt;
use std::path::{Path, PathBuf};

/// CSS `font-style` values a filename can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontStyle::Normal => write!(f, "normal"),
            FontStyle::Italic => write!(f, "italic"),
            FontStyle::Oblique => write!(f, "oblique"),
        }
    }
}

/// Attributes inferred from a single filename stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    /// Value of `font-family`
    pub family: String,
    /// Value of `font-style`
    pub style: FontStyle,
    /// Value of `font-weight`, one of 100..=900 in steps of 100, or 950
    pub weight: u16,
    /// Stem used to build the `url(...)` sources
    pub file_name: String,
}

/// Anything flowing through the generator that has a filename stem.
///
/// The generator only reads the stem; the item itself is handed back
/// untouched so later stages see every other attribute as it was.
pub trait FileDescriptor {
    /// Filename without directory and extension
    fn stem(&self) -> String;
}

impl FileDescriptor for Path {
    fn stem(&self) -> String {
        self.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl FileDescriptor for PathBuf {
    fn stem(&self) -> String {
        self.as_path().stem()
    }
}

impl<T: FileDescriptor + ?Sized> FileDescriptor for &T {
    fn stem(&self) -> String {
        (**self).stem()
    }
}

/// A font file discovered on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    /// Location of the font file
    pub path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FileDescriptor for FontFile {
    fn stem(&self) -> String {
        self.path.stem()
    }
}
