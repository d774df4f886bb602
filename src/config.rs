//! The declarative font configuration handed to us by the project generator.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Which native platforms a font should be installed for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Both,
}

impl Platform {
    /// True if the iOS pipeline should process a font with this platform.
    pub fn targets_ios(&self) -> bool {
        !matches!(self, Platform::Android)
    }
}

/// One font file the user wants embedded in their app.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontAsset {
    /// Path of the font file, relative to [`FontsConfig::src_folder`].
    pub file_path: String,
    /// Names of the build targets that embed this font.
    pub targets: Vec<String>,
    /// Logical font identifier. Defaults to the file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub platform: Platform,
}

impl FontAsset {
    /// The logical name of the font, for humans and log messages.
    pub fn font_name(&self) -> &str {
        if let Some(name) = &self.name {
            return name;
        }
        let base = self.file_name();
        base.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(base)
    }

    /// The file's base name, extension included.
    ///
    /// The OS expects this, not the logical font name, in the runtime
    /// registration.
    pub fn file_name(&self) -> &str {
        self.file_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.file_path)
    }

    /// `name` if given, otherwise the full relative path.
    pub(crate) fn ident(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.file_path)
    }
}

/// The full font installation request: where the fonts live and which
/// targets embed them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontsConfig {
    /// Directory containing the font files, relative to the project root.
    /// Fonts may sit in subdirectories of it.
    pub src_folder: String,
    pub fonts: Vec<FontAsset>,
}

impl FontsConfig {
    /// Check required fields before any side effect happens.
    ///
    /// Absent fields are already rejected when the config is deserialized;
    /// this catches empty values in configs built in code. An empty font
    /// list passes, as does an empty `targets` array (grouping rejects the
    /// latter).
    pub fn validate(&self) -> Result<(), Error> {
        if self.src_folder.is_empty() {
            return Err(Error::MissingSourceFolder);
        }
        for (i, font) in self.fonts.iter().enumerate() {
            if font.file_path.is_empty() {
                return Err(Error::MissingFilePath(i));
            }
        }
        Ok(())
    }

    /// The fonts the iOS pipeline should install, in declaration order.
    ///
    /// There is no android pipeline to hand android-only declarations to;
    /// they are skipped with a warning rather than dropped silently.
    pub fn ios_fonts(&self) -> Vec<&FontAsset> {
        let (ios, android): (Vec<_>, Vec<_>) =
            self.fonts.iter().partition(|f| f.platform.targets_ios());
        for skipped in android {
            warn!(
                "font '{}' is declared for android only; android installation is not implemented, skipping",
                skipped.ident()
            );
        }
        ios
    }
}
