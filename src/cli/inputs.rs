use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::error::{Error, Result};
use crate::models::FontFile;
use crate::utils::{find_font_files, is_font_file};

/// Read input paths from a list file, skipping blank lines and `#` comments
pub fn read_input_list(list_file: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(list_file)?;
    let inputs: Vec<PathBuf> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect();

    debug!("Read {} inputs from {}", inputs.len(), list_file.display());
    Ok(inputs)
}

/// Expand directories into the font files they contain.
///
/// Plain files are kept in the order given; files without a font extension
/// are skipped with a warning.
pub fn collect_font_files(inputs: &[PathBuf]) -> Result<Vec<FontFile>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            files.extend(find_font_files(input)?.into_iter().map(FontFile::new));
        } else if input.is_file() {
            if is_font_file(input) {
                files.push(FontFile::new(input));
            } else {
                warn!("Skipping {}: not a font file", input.display());
            }
        } else {
            return Err(Error::InvalidPath(input.clone()));
        }
    }

    Ok(files)
}
