pub mod file;
pub mod naming;
pub mod logging;

pub use file::{
    append_to_file, copy_into, ensure_directory_exists, find_font_files, is_font_file,
    prepare_output,
};
pub use naming::{family_basic, family_enhanced, capitalize};
pub use logging::init_logging;
