use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;

use crate::foundation::error::{GlyphloomError, GlyphloomResult};
use crate::text::face::FaceProvider;
use crate::text::parley_face::ParleyFace;

/// Default directory holding the Roboto `.ttf` files.
pub const DEFAULT_FONTS_DIR: &str = "assets/text";

/// A named font style, validated against the built-in style table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontStyle {
    key: &'static str,
    file_name: &'static str,
}

const fn style(key: &'static str, file_name: &'static str) -> FontStyle {
    FontStyle { key, file_name }
}

const FONT_STYLES: [FontStyle; 27] = [
    style("roboto_black", "Roboto-Black.ttf"),
    style("roboto_c_black", "Roboto_Condensed-Black.ttf"),
    style("roboto_sc_ebold", "Roboto_SemiCondensed-ExtraBold.ttf"),
    style("roboto_bold", "Roboto-Bold.ttf"),
    style("roboto_c_bold", "Roboto_Condensed-Bold.ttf"),
    style("roboto_sc_italic", "Roboto_SemiCondensed-Italic.ttf"),
    style("roboto_ebold", "Roboto-ExtraBold.ttf"),
    style("roboto_c_ebitalic", "Roboto_Condensed-ExtraBoldItalic.ttf"),
    style("roboto_sc_light", "Roboto_SemiCondensed-Light.ttf"),
    style("roboto_elight", "Roboto-ExtraLight.ttf"),
    style("roboto_c_elight", "Roboto_Condensed-ExtraLight.ttf"),
    style("roboto_sc_litalic", "Roboto_SemiCondensed-LightItalic.ttf"),
    style("roboto_italic", "Roboto-Italic.ttf"),
    style("roboto_c_elitalic", "Roboto_Condensed-ExtraLightItalic.ttf"),
    style("roboto_sc_medium", "Roboto_SemiCondensed-Medium.ttf"),
    style("roboto_light", "Roboto-Light.ttf"),
    style("roboto_c_regular", "Roboto_Condensed-Regular.ttf"),
    style("roboto_sc_mitalic", "Roboto_SemiCondensed-MediumItalic.ttf"),
    style("roboto_medium", "Roboto-Medium.ttf"),
    style("roboto_c_titalic", "Roboto_Condensed-ThinItalic.ttf"),
    style("roboto_sc_sbold", "Roboto_SemiCondensed-SemiBold.ttf"),
    style("roboto_regular", "Roboto-Regular.ttf"),
    style("roboto_sc_blitalic", "Roboto_SemiCondensed-BlackItalic.ttf"),
    style("roboto_sc_sbitalic", "Roboto_SemiCondensed-SemiBoldItalic.ttf"),
    style("roboto_sbold", "Roboto-SemiBold.ttf"),
    style("roboto_sc_bitalic", "Roboto_SemiCondensed-BoldItalic.ttf"),
    style("roboto_sc_thin", "Roboto_SemiCondensed-Thin.ttf"),
];

impl FontStyle {
    /// `roboto_bold`.
    pub const DEFAULT: FontStyle = style("roboto_bold", "Roboto-Bold.ttf");

    /// Every known style.
    pub fn all() -> &'static [FontStyle] {
        &FONT_STYLES
    }

    /// All style keys sorted lexicographically, for help output.
    pub fn sorted_keys() -> Vec<&'static str> {
        let mut keys: Vec<_> = FONT_STYLES.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys
    }

    /// Configuration key, e.g. `roboto_bold`.
    pub fn key(self) -> &'static str {
        self.key
    }

    /// Font file name relative to the fonts directory.
    pub fn file_name(self) -> &'static str {
        self.file_name
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}

impl FromStr for FontStyle {
    type Err = GlyphloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FONT_STYLES
            .iter()
            .copied()
            .find(|style| style.key == s)
            .ok_or_else(|| GlyphloomError::validation(format!("invalid font style: {s}")))
    }
}

impl serde::Serialize for FontStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key)
    }
}

impl<'de> serde::Deserialize<'de> for FontStyle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// Loads font files from a directory and builds [`ParleyFace`] values from them.
#[derive(Clone, Debug)]
pub struct FontLibrary {
    root: PathBuf,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new(DEFAULT_FONTS_DIR)
    }
}

impl FontLibrary {
    /// Library rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory font files are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file backing `style`.
    pub fn path_for(&self, style: FontStyle) -> PathBuf {
        self.root.join(style.file_name())
    }

    /// Read the raw font bytes for `style`.
    pub fn read_bytes(&self, style: FontStyle) -> GlyphloomResult<Vec<u8>> {
        let path = self.path_for(style);
        std::fs::read(&path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))
            .map_err(|e| GlyphloomError::asset_load(format!("unable to read font file: {e:#}")))
    }
}

impl FaceProvider for FontLibrary {
    type Face = ParleyFace;

    fn load_face(&self, style: FontStyle, size: f32) -> GlyphloomResult<ParleyFace> {
        let bytes = self.read_bytes(style)?;
        ParleyFace::new(bytes, size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
