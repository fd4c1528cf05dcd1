//! Command-line interface handling

mod args;
mod inputs;

pub use args::Args;
pub use inputs::{collect_font_files, read_input_list};
