//! Card layout computed from form state.

use crate::form::CardForm;
use crate::roles::Role;

use super::{CARD_PADDING, CARD_WIDTH};

/// Top edge of the role chip area.
pub const CHIPS_TOP: f32 = 318.0;
/// Chip height in logical pixels.
pub const CHIP_HEIGHT: f32 = 24.0;
/// Horizontal padding inside a chip.
pub const CHIP_PADDING_X: f32 = 10.0;
/// Gap between chips, both directions.
pub const CHIP_GAP: f32 = 8.0;
/// Chip label font size.
pub const CHIP_FONT_SIZE: f32 = 12.0;

/// Baseline of the display name.
pub const TITLE_BASELINE: f32 = 306.0;
/// Width of the "NFT CARD" badge right of the title.
pub const BADGE_WIDTH: f32 = 68.0;
/// Area the display name is clipped to; it stops 8px short of the badge.
pub const TITLE_BOX: Rect = Rect {
    x: CARD_PADDING,
    y: TITLE_BASELINE - 26.0,
    width: CARD_WIDTH as f32 - CARD_PADDING * 2.0 - BADGE_WIDTH - 8.0,
    height: 34.0,
};

/// Axis-aligned box in card coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// What goes in the avatar frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AvatarView {
    /// Embedded image data URI, scaled to cover the frame.
    Image(String),
    /// "Upload your DP" prompt.
    Placeholder,
}

/// A positioned role chip.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub role: Role,
    pub rect: Rect,
}

/// What goes in the role strip.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleStrip {
    Chips(Vec<Chip>),
    /// "Select roles to show…" prompt.
    Placeholder,
}

impl RoleStrip {
    pub fn chips(&self) -> &[Chip] {
        match self {
            RoleStrip::Chips(chips) => chips,
            RoleStrip::Placeholder => &[],
        }
    }
}

/// The state-dependent parts of a card. Everything else is fixed ornament.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub title: String,
    pub avatar: AvatarView,
    pub roles: RoleStrip,
}

impl CardLayout {
    pub fn from_form(form: &CardForm) -> Self {
        let avatar = match form.avatar.get() {
            Some(image) => AvatarView::Image(image.data_uri().to_string()),
            None => AvatarView::Placeholder,
        };

        let displayed = form.roles.displayed();
        let roles = if displayed.is_empty() {
            RoleStrip::Placeholder
        } else {
            RoleStrip::Chips(flow_chips(displayed))
        };

        Self {
            title: form.display_name().to_string(),
            avatar,
            roles,
        }
    }
}

/// Approximate advance width of `text` in a sans-serif face.
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars()
        .map(|c| {
            if c == ' ' {
                0.28
            } else if c.is_ascii_uppercase() || c.is_ascii_digit() {
                0.66
            } else if matches!(c, 'i' | 'l' | 'j' | '/' | '.' | ',') {
                0.3
            } else {
                0.54
            }
        })
        .sum::<f32>()
        * font_size
}

/// Lay chips out left to right, wrapping inside the card padding.
fn flow_chips(roles: &[Role]) -> Vec<Chip> {
    let left = CARD_PADDING;
    let right = CARD_WIDTH as f32 - CARD_PADDING;
    let mut x = left;
    let mut y = CHIPS_TOP;

    roles
        .iter()
        .map(|&role| {
            let width = estimate_text_width(role.label(), CHIP_FONT_SIZE) + CHIP_PADDING_X * 2.0;
            if x > left && x + width > right {
                x = left;
                y += CHIP_HEIGHT + CHIP_GAP;
            }
            let rect = Rect {
                x,
                y,
                width,
                height: CHIP_HEIGHT,
            };
            x += width + CHIP_GAP;
            Chip { role, rect }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CARD_HEIGHT, FOOTER_TOP};
    use crate::roles::RoleSet;

    #[test]
    fn empty_selection_shows_placeholder() {
        let mut form = CardForm::new();
        form.roles.clear();
        let layout = CardLayout::from_form(&form);
        assert_eq!(layout.roles, RoleStrip::Placeholder);
        assert!(layout.roles.chips().is_empty());
    }

    #[test]
    fn no_avatar_shows_placeholder() {
        let layout = CardLayout::from_form(&CardForm::new());
        assert_eq!(layout.avatar, AvatarView::Placeholder);
    }

    #[test]
    fn title_falls_back_when_name_empty() {
        let layout = CardLayout::from_form(&CardForm::with_name(""));
        assert_eq!(layout.title, "Ansh");
    }

    #[test]
    fn full_selection_fits_between_title_and_footer() {
        let mut form = CardForm::new();
        form.roles = RoleSet::all();
        let layout = CardLayout::from_form(&form);
        let chips = layout.roles.chips();

        assert_eq!(chips.len(), 8);
        for chip in chips {
            assert!(chip.rect.x >= CARD_PADDING);
            assert!(chip.rect.right() <= CARD_WIDTH as f32 - CARD_PADDING);
            assert!(chip.rect.bottom() < FOOTER_TOP);
        }
        assert!(FOOTER_TOP < CARD_HEIGHT as f32);
    }

    #[test]
    fn chips_follow_insertion_order() {
        let mut form = CardForm::new();
        form.roles.clear();
        form.roles.toggle(Role::Helper247);
        form.roles.toggle(Role::Og);
        let layout = CardLayout::from_form(&form);
        let order: Vec<Role> = layout.roles.chips().iter().map(|c| c.role).collect();
        assert_eq!(order, vec![Role::Helper247, Role::Og]);
        assert!(layout.roles.chips()[0].rect.x < layout.roles.chips()[1].rect.x);
    }

    #[test]
    fn chips_wrap_onto_new_rows() {
        let chips = flow_chips(&Role::ALL);
        let rows: std::collections::BTreeSet<u32> =
            chips.iter().map(|c| c.rect.y as u32).collect();
        assert!(rows.len() > 1);
        assert_eq!(chips[0].rect.y, CHIPS_TOP);
    }
}
