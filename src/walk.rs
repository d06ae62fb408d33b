//! Recursive discovery of PNG files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};

use crate::{error::SweepError, sweep_err, sweep_try};

const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Lists every regular file under `root` whose name ends in `.png`, in any case,
/// descending into all subdirectories including hidden ones.
///
/// Symlinked directories are not entered, so each file is found at most once
/// even when links form a cycle. Symlinks to files are listed like the files.
/// Only file names are matched against the pattern; `root` is taken literally.
///
/// Subdirectories that cannot be read are logged and left out. The result is
/// sorted so that runs over the same tree always go in the same order.
pub fn find_png_files(root: &Path) -> Result<Vec<PathBuf>, SweepError> {
    let pattern = sweep_try!(Pattern::new("*.png"));
    let mut files = Vec::new();
    if !root.is_dir() {
        return Ok(files);
    }
    visit(root, &pattern, &mut files)
        .map_err(|error| sweep_err!("unable to read {}: {error}", root.display()))?;
    files.sort();
    Ok(files)
}

fn visit(dir: &Path, pattern: &Pattern, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // does not follow symlinks
        if entry.file_type()?.is_dir() {
            if let Err(error) = visit(&path, pattern, files) {
                log::warn!("unable to read {}: {error}", path.display());
            }
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::debug!("skipping non-UTF-8 file name: {}", path.display());
            continue;
        };
        if !pattern.matches_with(name, OPTIONS) {
            continue;
        }
        if path.is_file() {
            files.push(path);
        } else {
            log::debug!("not a regular file: {}", path.display());
        }
    }
    Ok(())
}
