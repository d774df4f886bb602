//! Fan fonts out to the build targets that embed them.

use indexmap::IndexMap;

use crate::{config::FontAsset, Error};

/// Fonts keyed by build target name.
///
/// Keys are in first-seen order so repeated runs mutate targets in the same
/// sequence.
pub type TargetGroups<'a> = IndexMap<String, Vec<&'a FontAsset>>;

/// Group fonts by the targets that embed them.
///
/// A font naming N targets lands in all N groups. A font naming the same
/// target twice is appended twice; de-duplicating is the config author's
/// problem. A font naming no targets at all is an error.
pub fn group_by_target<'a>(fonts: &[&'a FontAsset]) -> Result<TargetGroups<'a>, Error> {
    let mut groups = TargetGroups::new();
    for font in fonts {
        if font.targets.is_empty() {
            return Err(Error::NoTargets(font.ident().to_string()));
        }
        for target in &font.targets {
            groups.entry(target.clone()).or_default().push(font);
        }
    }
    Ok(groups)
}
