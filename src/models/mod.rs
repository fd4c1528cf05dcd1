pub mod config;
pub mod font;

pub use config::{Config, FamilyNaming, InitPolicy, WriteMode, DEFAULT_FILENAME, DEFAULT_FILEPATH};
pub use font::{FileDescriptor, FontFile, FontRecord, FontStyle};
