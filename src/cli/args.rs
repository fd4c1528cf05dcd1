use std::path::PathBuf;
use clap::Parser;
use crate::models::{
    Config, FamilyNaming, InitPolicy, WriteMode, DEFAULT_FILENAME, DEFAULT_FILEPATH,
};

/// Generate CSS @font-face rules from font file names
#[derive(Parser, Debug)]
#[command(
    name = "fontface",
    version,
    about,
    after_help = "By default an existing stylesheet is left untouched and the run stops.\n\
                  Pass --overwrite to regenerate it from scratch."
)]
pub struct Args {
    /// Font files or directories to scan for fonts
    pub inputs: Vec<PathBuf>,

    /// Read more inputs from a file, one path per line
    #[arg(long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Directory containing the generated stylesheet
    #[arg(long, default_value = DEFAULT_FILEPATH)]
    pub filepath: PathBuf,

    /// File name of the generated stylesheet
    #[arg(long, default_value = DEFAULT_FILENAME)]
    pub filename: String,

    /// Replace an existing stylesheet instead of refusing to run
    #[arg(long)]
    pub overwrite: bool,

    /// Derive family names with keywords, subsets and versions stripped
    #[arg(long)]
    pub enhanced_names: bool,

    /// Do not wait for each rule to be written before taking the next file
    #[arg(long)]
    pub background_writes: bool,

    /// Copy every processed font file into this directory
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Build the generator configuration from the parsed flags
    pub fn config(&self) -> Config {
        let init_policy = if self.overwrite { InitPolicy::Overwrite } else { InitPolicy::Strict };
        let write_mode = if self.background_writes {
            WriteMode::Background
        } else {
            WriteMode::Sync
        };
        let naming = if self.enhanced_names { FamilyNaming::Enhanced } else { FamilyNaming::Basic };

        Config::new(&self.filepath, &self.filename)
            .with_init_policy(init_policy)
            .with_write_mode(write_mode)
            .with_naming(naming)
    }
}
