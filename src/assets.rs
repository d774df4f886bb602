//! Mirror the user's font directory into the generated iOS tree.

use std::{fs, path::Path};

use log::debug;

use crate::{paths::Paths, Error};

/// Copy the whole font source tree into `ios/Fonts`.
///
/// The mirror is unconditional: every file under the source directory is
/// copied whether a declaration references it or not, overwriting whatever
/// a previous generation run left behind. Runs once per invocation, not per
/// target.
pub fn copy_fonts(paths: &Paths, src_folder: &str) -> Result<(), Error> {
    let source = paths.source_dir(src_folder);
    if !source.is_dir() {
        return Err(Error::ExpectedDirectory(source));
    }
    let dest = paths.fonts_dir();
    fs::create_dir_all(dest).map_err(|e| Error::file_io(dest, e))?;
    debug!("mirroring {} into {}", source.display(), dest.display());
    copy_tree(&source, dest)
}

fn copy_tree(source: &Path, dest: &Path) -> Result<(), Error> {
    for entry in fs::read_dir(source).map_err(|e| Error::file_io(source, e))? {
        let entry = entry.map_err(|e| Error::file_io(source, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            fs::create_dir_all(&to).map_err(|e| Error::file_io(&to, e))?;
            copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| Error::file_io(&from, e))?;
        }
    }
    Ok(())
}
