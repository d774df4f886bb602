//! Where things live inside the generated native project tree.

use std::path::{Path, PathBuf};

/// Locations this plugin reads and writes under the project root.
#[derive(Debug, Clone)]
pub struct Paths {
    project_root: PathBuf,
    fonts_dir: PathBuf,
}

impl Paths {
    pub fn new(project_root: &Path) -> Paths {
        let project_root = project_root.to_path_buf();
        let fonts_dir = project_root.join("ios").join("Fonts");
        Paths {
            project_root,
            fonts_dir,
        }
    }

    /// Where the user's font tree gets mirrored to.
    pub fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    /// The user's font source directory.
    pub fn source_dir(&self, src_folder: &str) -> PathBuf {
        self.project_root.join(src_folder)
    }

    /// The property list of a build target.
    pub fn info_plist(&self, target: &str) -> PathBuf {
        self.project_root
            .join("ios")
            .join(target)
            .join("Info.plist")
    }
}
