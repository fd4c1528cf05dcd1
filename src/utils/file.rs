use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use walkdir::WalkDir;
use crate::error::{Error, Result};
use crate::models::{Config, InitPolicy};

/// Extensions picked up when searching a directory for fonts
pub const FONT_EXTENSIONS: &[&str] = &["woff2", "woff", "ttf", "otf"];

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Bring the output location into the state `config.init_policy` asks for.
///
/// Strict mode refuses to continue when the stylesheet exists. Overwrite
/// mode deletes it so every run starts from an empty file.
pub fn prepare_output(config: &Config) -> Result<PathBuf> {
    let output = config.output_path();

    if output.exists() {
        match config.init_policy {
            InitPolicy::Strict => return Err(Error::OutputExists(output)),
            InitPolicy::Overwrite => {
                info!("Removing existing {}", output.display());
                fs::remove_file(&output)?;
            }
        }
    }

    ensure_directory_exists(&config.filepath)?;
    Ok(output)
}

/// Append `text` to `path`, creating the file on first use
pub fn append_to_file(path: &Path, text: &str) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(text.as_bytes()))
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Check if a path looks like a font file by its extension
pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Recursively collect font files below `dir`, sorted by path.
///
/// Symlinks are followed; a link back into one of its own ancestors is
/// reported once and not descended into.
pub fn find_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidPath(dir.to_path_buf()));
    }

    let mut font_files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry below {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_font_file(entry.path()) {
            font_files.push(entry.into_path());
        }
    }
    font_files.sort();

    debug!("Found {} font files in {}", font_files.len(), dir.display());
    Ok(font_files)
}

/// Copy a file into `dest_dir`, keeping its file name
pub fn copy_into(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = src
        .file_name()
        .ok_or_else(|| Error::InvalidPath(src.to_path_buf()))?;

    ensure_directory_exists(dest_dir)?;
    let dest = dest_dir.join(file_name);
    fs::copy(src, &dest)?;

    debug!("Copied {} to {}", src.display(), dest.display());
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prepare_output_creates_directory() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path().join("nested/css"), "fonts.css");

        let output = prepare_output(&config).unwrap();
        assert_eq!(output, dir.path().join("nested/css/fonts.css"));
        assert!(dir.path().join("nested/css").is_dir());
        assert!(!output.exists());
    }

    #[test]
    fn test_prepare_output_strict_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("fonts.css");
        fs::write(&existing, "stale").unwrap();

        let config = Config::new(dir.path(), "fonts.css");
        let result = prepare_output(&config);

        assert!(matches!(result, Err(Error::OutputExists(p)) if p == existing));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "stale");
    }

    #[test]
    fn test_prepare_output_overwrite_removes_existing_file() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("fonts.css");
        fs::write(&existing, "stale").unwrap();

        let config = Config::new(dir.path(), "fonts.css").with_init_policy(InitPolicy::Overwrite);
        prepare_output(&config).unwrap();

        assert!(!existing.exists());
    }

    #[test]
    fn test_append_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.css");

        append_to_file(&path, "a\n").unwrap();
        append_to_file(&path, "b\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing/out.css");

        let result = append_to_file(&path, "a");
        assert!(matches!(result, Err(Error::Write { .. })));
    }

    #[test]
    fn test_find_font_files_recurses_and_filters() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("Roboto-Bold.woff2"), b"").unwrap();
        fs::write(dir.path().join("sub/Lato.TTF"), b"").unwrap();
        fs::write(dir.path().join("readme.txt"), b"").unwrap();

        let files = find_font_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("Roboto-Bold.woff2"), dir.path().join("sub/Lato.TTF")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_find_font_files_survives_symlink_loop() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("A-Bold.woff2"), b"").unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let files = find_font_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("A-Bold.woff2")]);
    }

    #[test]
    fn test_find_font_files_rejects_non_directory() {
        let dir = tempdir().unwrap();
        let result = find_font_files(&dir.path().join("nope"));
        assert!(matches!(result, Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_copy_into() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("Inter.woff");
        fs::write(&src, b"font").unwrap();

        let dest = copy_into(&src, &dir.path().join("dist/font")).unwrap();
        assert_eq!(dest, dir.path().join("dist/font/Inter.woff"));
        assert_eq!(fs::read(&dest).unwrap(), b"font");
    }
}
