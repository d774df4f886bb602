//! Installs custom font resources into a generated Xcode project.
//!
//! Invoked once per project-generation run by the enclosing cross-platform
//! tool. Hand [`install_fonts`] the project root, the mutable pbxproj object
//! graph, and the user's font configuration; on success the font files are
//! mirrored under `ios/Fonts`, each build target's Info.plist declares them
//! under `UIAppFonts`, and the object graph references them as resources of
//! the right targets. Any failure aborts the generation run; nothing is
//! rolled back because the generator only serializes the graph after every
//! plugin succeeds.

mod assets;
mod config;
mod error;
mod groups;
mod paths;
mod plist;
mod project;

pub use assets::copy_fonts;
pub use config::{FontAsset, FontsConfig, Platform};
pub use error::Error;
pub use groups::{group_by_target, TargetGroups};
pub use paths::Paths;
pub use plist::update_info_plists;
pub use project::{update_project, ProjectGraph};

use std::path::Path;

use log::info;

/// Run the whole installation pipeline against one generated project.
///
/// Validation happens before any side effect; after that the steps run in a
/// fixed order: mirror the font tree, patch the Info.plists, mutate the
/// project graph.
pub fn install_fonts(
    project_root: &Path,
    graph: &mut impl ProjectGraph,
    config: &FontsConfig,
) -> Result<(), Error> {
    config.validate()?;
    let fonts = config.ios_fonts();
    let groups = group_by_target(&fonts)?;
    info!(
        "installing {} font(s) across {} target(s)",
        fonts.len(),
        groups.len()
    );

    let paths = Paths::new(project_root);
    copy_fonts(&paths, &config.src_folder)?;
    update_info_plists(&paths, &groups)?;
    update_project(graph, &groups)?;
    Ok(())
}
