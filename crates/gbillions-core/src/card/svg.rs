//! SVG serialization of a card layout.

use super::layout::{AvatarView, CardLayout, RoleStrip, CHIP_FONT_SIZE, CHIP_PADDING_X};
use super::layout::{BADGE_WIDTH, TITLE_BASELINE, TITLE_BOX};
use super::{CARD_HEIGHT, CARD_PADDING, CARD_WIDTH, FOOTER_TOP};

const FONT_FAMILY: &str = "Inter, 'Helvetica Neue', Arial, 'DejaVu Sans', sans-serif";

// Avatar frame
const FRAME_TOP: f32 = 44.0;
const FRAME_HEIGHT: f32 = 224.0;

// Palette
const SKY_400: &str = "#38bdf8";
const SKY_500: &str = "#0ea5e9";
const BLUE_500: &str = "#3b82f6";
const INDIGO_600: &str = "#4f46e5";
const SLATE_950: &str = "#020617";
const SLATE_900: &str = "#0f172a";
const SLATE_800: &str = "#1e293b";
const EMERALD_400: &str = "#34d399";

/// Escape text for use in XML content or attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a card as a standalone SVG document.
///
/// The document references nothing outside itself: gradients, filters and
/// the avatar image are all inline.
pub fn render_svg(layout: &CardLayout) -> String {
    let w = CARD_WIDTH as f32;
    let h = CARD_HEIGHT as f32;
    let inner_w = w - CARD_PADDING * 2.0;
    let right = w - CARD_PADDING;

    let mut out = String::with_capacity(8 * 1024);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    ));

    push_defs(&mut out, inner_w);

    // Gradient rim, body and sheen
    out.push_str(&format!(
        r#"<rect width="{w}" height="{h}" rx="28" fill="url(#rim)"/>"#
    ));
    out.push_str(&format!(
        r#"<rect x="2" y="2" width="{}" height="{}" rx="26" fill="{SLATE_950}"/>"#,
        w - 4.0,
        h - 4.0
    ));
    out.push_str(&format!(
        r#"<rect x="2" y="2" width="{}" height="{}" rx="26" fill="url(#sheen)"/>"#,
        w - 4.0,
        h - 4.0
    ));

    out.push_str(&format!(
        r#"<g clip-path="url(#card-clip)" font-family="{FONT_FAMILY}" fill="white">"#
    ));

    // Header
    out.push_str(&format!(
        r#"<circle cx="25" cy="26" r="5" fill="{SKY_400}" opacity="0.9" filter="url(#glow)"/>"#
    ));
    out.push_str(&format!(r#"<circle cx="25" cy="26" r="5" fill="{SKY_400}"/>"#));
    out.push_str(
        r#"<text x="36" y="30" font-size="11" letter-spacing="2.2" fill-opacity="0.7">GBILLIONS</text>"#,
    );
    out.push_str(&format!(
        r#"<text x="{right}" y="30" font-size="11" text-anchor="end" fill-opacity="0.6">Series 1 · #001</text>"#
    ));

    // Avatar frame
    out.push_str(&format!(
        r#"<rect x="{CARD_PADDING}" y="{FRAME_TOP}" width="{inner_w}" height="{FRAME_HEIGHT}" rx="16" fill="url(#frame)"/>"#
    ));
    match &layout.avatar {
        AvatarView::Image(uri) => out.push_str(&format!(
            r#"<image x="{CARD_PADDING}" y="{FRAME_TOP}" width="{inner_w}" height="{FRAME_HEIGHT}" preserveAspectRatio="xMidYMid slice" clip-path="url(#frame-clip)" xlink:href="{}"/>"#,
            escape_xml(uri)
        )),
        AvatarView::Placeholder => out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="14" text-anchor="middle" fill-opacity="0.4">Upload your DP</text>"#,
            w / 2.0,
            FRAME_TOP + FRAME_HEIGHT / 2.0 + 5.0
        )),
    }
    out.push_str(&format!(
        r#"<rect x="{CARD_PADDING}" y="{FRAME_TOP}" width="{inner_w}" height="{FRAME_HEIGHT}" rx="16" fill="url(#frame-shade)"/>"#
    ));
    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="16" fill="none" stroke="white" stroke-opacity="0.1"/>"#,
        CARD_PADDING + 0.5,
        FRAME_TOP + 0.5,
        inner_w - 1.0,
        FRAME_HEIGHT - 1.0
    ));

    // Title and badge
    out.push_str(&format!(
        r#"<text x="{CARD_PADDING}" y="{TITLE_BASELINE}" font-size="24" font-weight="700" letter-spacing="-0.4" clip-path="url(#title-clip)">{}</text>"#,
        escape_xml(&layout.title)
    ));
    let badge_w = BADGE_WIDTH;
    let badge_x = right - badge_w;
    let badge_y = TITLE_BASELINE - 19.0;
    out.push_str(&format!(
        r#"<rect x="{badge_x}" y="{badge_y}" width="{badge_w}" height="22" rx="10" fill="{SKY_500}" fill-opacity="0.2" stroke="{SKY_500}" stroke-opacity="0.4"/>"#
    ));
    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="10" letter-spacing="1" text-anchor="middle">NFT CARD</text>"#,
        badge_x + badge_w / 2.0,
        badge_y + 14.5
    ));

    // Roles
    match &layout.roles {
        RoleStrip::Chips(chips) => {
            for chip in chips {
                let r = chip.rect;
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="12" fill="{SKY_500}" fill-opacity="0.1" stroke="{SKY_500}" stroke-opacity="0.4"/>"#,
                    r.x, r.y, r.width, r.height
                ));
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{CHIP_FONT_SIZE}">{}</text>"#,
                    r.x + CHIP_PADDING_X,
                    r.y + 16.0,
                    escape_xml(chip.role.label())
                ));
            }
        }
        RoleStrip::Placeholder => out.push_str(&format!(
            r#"<text x="{CARD_PADDING}" y="{}" font-size="14" fill-opacity="0.4">Select roles to show…</text>"#,
            super::CHIPS_TOP + 16.0
        )),
    }

    // Footer
    out.push_str(&format!(
        r#"<rect x="{CARD_PADDING}" y="{FOOTER_TOP}" width="{inner_w}" height="44" rx="16" fill="white" fill-opacity="0.05" stroke="white" stroke-opacity="0.1"/>"#
    ));
    let footer_mid = FOOTER_TOP + 22.0;
    out.push_str(&format!(
        r#"<circle cx="32" cy="{footer_mid}" r="3" fill="{EMERALD_400}" filter="url(#glow)"/><circle cx="32" cy="{footer_mid}" r="3" fill="{EMERALD_400}"/>"#
    ));
    out.push_str(&format!(
        r#"<text x="42" y="{}" font-size="11" fill-opacity="0.7">Made by Ansh</text>"#,
        footer_mid + 4.0
    ));
    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="11" text-anchor="end" fill-opacity="0.7">Rarity: Epic</text>"#,
        right - 12.0,
        footer_mid + 4.0
    ));

    // Grain and glare
    out.push_str(&format!(
        r#"<rect width="{w}" height="{h}" filter="url(#grain)" opacity="0.06"/>"#
    ));
    out.push_str(&format!(
        r#"<rect width="{w}" height="{}" fill="url(#glare)"/>"#,
        h / 5.0
    ));

    out.push_str("</g></svg>");
    out
}

fn push_defs(out: &mut String, inner_w: f32) {
    out.push_str("<defs>");
    out.push_str(&format!(
        r#"<linearGradient id="rim" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{SKY_400}"/><stop offset="0.5" stop-color="{BLUE_500}"/><stop offset="1" stop-color="{INDIGO_600}"/></linearGradient>"#
    ));
    out.push_str(
        r#"<linearGradient id="sheen" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="white" stop-opacity="0.1"/><stop offset="0.5" stop-color="white" stop-opacity="0.05"/><stop offset="1" stop-color="white" stop-opacity="0.1"/></linearGradient>"#,
    );
    out.push_str(&format!(
        r#"<linearGradient id="frame" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{SLATE_900}"/><stop offset="1" stop-color="{SLATE_800}"/></linearGradient>"#
    ));
    out.push_str(&format!(
        r#"<linearGradient id="frame-shade" x1="0" y1="1" x2="0" y2="0"><stop offset="0" stop-color="{SLATE_950}" stop-opacity="0.4"/><stop offset="1" stop-color="{SLATE_950}" stop-opacity="0"/></linearGradient>"#
    ));
    out.push_str(
        r#"<linearGradient id="glare" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="white" stop-opacity="0.12"/><stop offset="1" stop-color="white" stop-opacity="0"/></linearGradient>"#,
    );
    out.push_str(&format!(
        r#"<clipPath id="card-clip"><rect x="2" y="2" width="{}" height="{}" rx="26"/></clipPath>"#,
        CARD_WIDTH as f32 - 4.0,
        CARD_HEIGHT as f32 - 4.0
    ));
    out.push_str(&format!(
        r#"<clipPath id="frame-clip"><rect x="{CARD_PADDING}" y="{FRAME_TOP}" width="{inner_w}" height="{FRAME_HEIGHT}" rx="16"/></clipPath>"#
    ));
    out.push_str(&format!(
        r#"<clipPath id="title-clip"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
        TITLE_BOX.x, TITLE_BOX.y, TITLE_BOX.width, TITLE_BOX.height
    ));
    out.push_str(
        r#"<filter id="grain" x="0" y="0" width="100%" height="100%"><feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="4" stitchTiles="stitch"/></filter>"#,
    );
    out.push_str(
        r#"<filter id="glow" x="-100%" y="-100%" width="300%" height="300%"><feGaussianBlur stdDeviation="3"/></filter>"#,
    );
    out.push_str("</defs>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::decode_avatar;
    use crate::card::FALLBACK_FONT_FAMILY;
    use crate::form::CardForm;
    use crate::roles::{Role, RoleSet};

    fn svg_for(form: &CardForm) -> String {
        render_svg(&CardLayout::from_form(form))
    }

    #[test]
    fn escapes_markup_in_text() {
        assert_eq!(
            escape_xml(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &apos;Jerry&apos;&lt;/b&gt;"
        );
    }

    #[test]
    fn name_is_escaped_in_title() {
        let svg = svg_for(&CardForm::with_name("<script>"));
        assert!(svg.contains(">&lt;script&gt;</text>"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn placeholder_instead_of_image_without_avatar() {
        let svg = svg_for(&CardForm::new());
        assert!(svg.contains("Upload your DP"));
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn avatar_is_embedded_inline() {
        let mut bytes = Vec::new();
        image::RgbaImage::new(2, 2)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let mut form = CardForm::new();
        let ticket = form.avatar.request();
        form.avatar.complete(ticket, decode_avatar(&bytes));

        let svg = svg_for(&form);
        assert!(svg.contains(r#"xlink:href="data:image/png;base64,"#));
        assert!(!svg.contains("Upload your DP"));
    }

    #[test]
    fn every_selected_role_gets_a_chip() {
        let mut form = CardForm::new();
        form.roles = RoleSet::all();
        let svg = svg_for(&form);
        for role in Role::ALL {
            assert!(svg.contains(&format!(">{}</text>", role.label())), "{}", role);
        }
        assert!(!svg.contains("Select roles to show"));
    }

    #[test]
    fn empty_roles_show_prompt() {
        let mut form = CardForm::new();
        form.roles.clear();
        let svg = svg_for(&form);
        assert!(svg.contains("Select roles to show…"));
    }

    #[test]
    fn font_stack_ends_in_bundled_family() {
        assert!(FONT_FAMILY.contains(&format!("'{}'", FALLBACK_FONT_FAMILY)));
        assert!(FONT_FAMILY.ends_with("sans-serif"));
    }

    #[test]
    fn title_is_clipped_short_of_badge() {
        let svg = svg_for(&CardForm::with_name("W".repeat(80)));
        assert!(svg.contains(r#"<clipPath id="title-clip">"#));
        assert!(svg.contains(r#"clip-path="url(#title-clip)">WWWW"#));
        let badge_x = CARD_WIDTH as f32 - CARD_PADDING - BADGE_WIDTH;
        assert!(TITLE_BOX.right() <= badge_x - 8.0);
    }

    #[test]
    fn static_ornaments_do_not_depend_on_state() {
        let a = svg_for(&CardForm::with_name("A"));
        let b = svg_for(&CardForm::with_name("B"));
        for fixed in ["GBILLIONS", "Series 1 · #001", "NFT CARD", "Made by Ansh", "Rarity: Epic"] {
            assert!(a.contains(fixed));
            assert!(b.contains(fixed));
        }
    }
}
