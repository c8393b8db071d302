//! Card rendering.
//!
//! A card is a pure function of [`CardForm`]: [`CardLayout::from_form`]
//! resolves the state-dependent parts and [`render_svg`] turns them into a
//! self-contained SVG document. The preview mounts that markup and the
//! exporter rasterizes it, so both see the same card.

mod layout;
mod svg;

pub use layout::{
    estimate_text_width, AvatarView, CardLayout, Chip, Rect, RoleStrip, BADGE_WIDTH, CHIPS_TOP,
    CHIP_GAP, CHIP_HEIGHT, TITLE_BASELINE, TITLE_BOX,
};
pub use svg::{escape_xml, render_svg};

use crate::form::CardForm;

/// Card width in logical pixels.
pub const CARD_WIDTH: u32 = 420;
/// Card height in logical pixels (3:4).
pub const CARD_HEIGHT: u32 = 560;
/// Inset of the content from the card edge.
pub const CARD_PADDING: f32 = 16.0;
/// Top edge of the footer panel.
pub const FOOTER_TOP: f32 = 500.0;

/// Bundled face that `sans-serif` resolves to when rasterizing.
pub const FALLBACK_FONT_FAMILY: &str = "DejaVu Sans";

/// Suffix every exported file name ends with.
pub const EXPORT_FILE_SUFFIX: &str = "-gbillions-card.png";

/// Suggested download name: `{name}-gbillions-card.png`, or `card-...` when empty.
pub fn export_file_name(name: &str) -> String {
    let stem = if name.is_empty() { "card" } else { name };
    format!("{}{}", stem, EXPORT_FILE_SUFFIX)
}

/// Markup of a card as currently mounted, plus the name it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSnapshot {
    name: String,
    svg: String,
}

impl CardSnapshot {
    /// Render the current form state.
    pub fn capture(form: &CardForm) -> Self {
        Self {
            name: form.name.clone(),
            svg: render_svg(&CardLayout::from_form(form)),
        }
    }

    /// Wrap already-rendered markup.
    pub fn from_parts(name: impl Into<String>, svg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            svg: svg.into(),
        }
    }

    /// Display name as typed, without fallback.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn file_name(&self) -> String {
        export_file_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_name() {
        assert_eq!(export_file_name("Ansh"), "Ansh-gbillions-card.png");
    }

    #[test]
    fn file_name_falls_back_to_card() {
        assert_eq!(export_file_name(""), "card-gbillions-card.png");
    }

    #[test]
    fn whitespace_name_is_not_treated_as_empty() {
        assert_eq!(export_file_name(" "), " -gbillions-card.png");
    }

    #[test]
    fn snapshot_keeps_raw_name() {
        let snapshot = CardSnapshot::capture(&CardForm::with_name(""));
        assert_eq!(snapshot.name(), "");
        assert_eq!(snapshot.file_name(), "card-gbillions-card.png");
        assert!(snapshot.svg().contains(">Ansh</text>"));
    }
}
