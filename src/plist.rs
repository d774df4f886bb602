//! Register fonts in each target's Info.plist so the OS loads them.

use std::fs;

use log::debug;

use crate::{config::FontAsset, groups::TargetGroups, paths::Paths, Error};

/// The key iOS reads at launch to find embedded fonts.
const REGISTRATION_KEY: &str = "UIAppFonts";
const DICT_OPEN: &str = "<dict>";

/// Insert the font registration into every grouped target's Info.plist.
///
/// Each target's plist must already exist at `ios/<target>/Info.plist`;
/// project generation creates it before plugins run.
pub fn update_info_plists(paths: &Paths, groups: &TargetGroups) -> Result<(), Error> {
    for (target, fonts) in groups {
        let plist = paths.info_plist(target);
        if !plist.exists() {
            return Err(Error::FileExpected(plist));
        }
        let contents = fs::read_to_string(&plist).map_err(|e| Error::file_io(&plist, e))?;
        let Some(patched) = register_fonts(&contents, fonts) else {
            return Err(Error::NoDictionary(plist));
        };
        debug!("registering {} font(s) in {}", fonts.len(), plist.display());
        fs::write(&plist, patched).map_err(|e| Error::file_io(&plist, e))?;
    }
    Ok(())
}

/// Splice a UIAppFonts array directly after the document's first `<dict>`.
///
/// This is a textual patch, not a plist-aware merge: a document that
/// already carries a UIAppFonts array gains a second one. Returns None when
/// the document has no `<dict>` at all.
fn register_fonts(contents: &str, fonts: &[&FontAsset]) -> Option<String> {
    let dict = contents.find(DICT_OPEN)?;
    let insert_at = dict + DICT_OPEN.len();

    let mut block = format!("\n\t<key>{REGISTRATION_KEY}</key>\n\t<array>");
    for font in fonts {
        block.push_str("\n\t\t<string>");
        block.push_str(font.file_name());
        block.push_str("</string>");
    }
    block.push_str("\n\t</array>");

    let mut patched = String::with_capacity(contents.len() + block.len());
    patched.push_str(&contents[..insert_at]);
    patched.push_str(&block);
    patched.push_str(&contents[insert_at..]);
    Some(patched)
}
