use std::fmt;

/// Visual treatment applied when drawing text onto a background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderEffect {
    /// White text.
    Plain,
    /// White text over a one-pixel black outline.
    #[default]
    Outlined,
    /// Background visible only through the glyphs, on a white field.
    Reveal,
    /// Like [`RenderEffect::Reveal`] with the outline widening the cutout.
    RevealOutlined,
}

impl RenderEffect {
    /// Whether the effect draws the eight-direction outline pass.
    pub fn is_outlined(self) -> bool {
        matches!(self, RenderEffect::Outlined | RenderEffect::RevealOutlined)
    }

    /// Whether the effect cuts text out of a white field through a mask.
    pub fn is_reveal(self) -> bool {
        matches!(self, RenderEffect::Reveal | RenderEffect::RevealOutlined)
    }

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            RenderEffect::Plain => "plain",
            RenderEffect::Outlined => "outlined",
            RenderEffect::Reveal => "reveal",
            RenderEffect::RevealOutlined => "reveal-outlined",
        }
    }
}

impl fmt::Display for RenderEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
