//! Edge case and boundary condition tests
//!
//! These tests verify the card handles unusual inputs and the avatar slot
//! resolves racing decodes correctly.

use std::io::Cursor;

use gbillions_core::card::{AvatarView, RoleStrip};
use gbillions_core::{
    decode_avatar, load_avatar, AvatarSlot, AvatarUpdate, CardError, CardForm, CardLayout,
    CardSnapshot, Role, RoleSet,
};
use image::{ImageFormat, Rgba, RgbaImage};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 90, 255]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

// ============================================================================
// Name Input
// ============================================================================

/// Very long names are kept as typed
#[test]
fn test_long_name() {
    let name = "A".repeat(10_000);
    let form = CardForm::with_name(name.clone());
    let snapshot = CardSnapshot::capture(&form);
    assert_eq!(snapshot.name(), name);
    assert!(snapshot.svg().contains(&name));
}

/// Markup in names cannot break out of the card document
#[test]
fn test_name_with_markup() {
    let form = CardForm::with_name("</text><image xlink:href=\"file:///etc/passwd\"/>");
    let snapshot = CardSnapshot::capture(&form);
    assert!(!snapshot.svg().contains("<image"));
}

/// Unicode names survive into the title
#[test]
fn test_unicode_name() {
    let form = CardForm::with_name("Анш ✨ 安什");
    let layout = CardLayout::from_form(&form);
    assert_eq!(layout.title, "Анш ✨ 安什");
}

// ============================================================================
// Role Boundaries
// ============================================================================

/// Exactly the full vocabulary selected shows eight chips
#[test]
fn test_full_vocabulary_shows_eight_chips() {
    let mut form = CardForm::new();
    form.roles = RoleSet::all();
    let layout = CardLayout::from_form(&form);
    assert_eq!(layout.roles.chips().len(), 8);
}

/// A single role shows a single chip
#[test]
fn test_single_role() {
    let mut form = CardForm::new();
    form.roles.clear();
    form.roles.toggle(Role::Helper247);
    let layout = CardLayout::from_form(&form);
    match layout.roles {
        RoleStrip::Chips(chips) => {
            assert_eq!(chips.len(), 1);
            assert_eq!(chips[0].role.label(), "24/7 Helper");
        }
        RoleStrip::Placeholder => panic!("expected a chip"),
    }
}

// ============================================================================
// Avatar
// ============================================================================

/// No avatar renders the prompt rather than a broken image
#[test]
fn test_no_avatar_placeholder() {
    let layout = CardLayout::from_form(&CardForm::new());
    assert_eq!(layout.avatar, AvatarView::Placeholder);
}

/// Removing the avatar brings the placeholder back
#[test]
fn test_remove_avatar() {
    let mut form = CardForm::new();
    let ticket = form.avatar.request();
    form.avatar.complete(ticket, decode_avatar(&png_bytes(8, 8)));
    assert!(matches!(
        CardLayout::from_form(&form).avatar,
        AvatarView::Image(_)
    ));

    form.avatar.clear();
    assert_eq!(CardLayout::from_form(&form).avatar, AvatarView::Placeholder);
}

/// Three overlapping requests: only the last one issued can land
#[test]
fn test_out_of_order_completions() {
    let small = decode_avatar(&png_bytes(2, 2)).unwrap();
    let medium = decode_avatar(&png_bytes(4, 4)).unwrap();
    let large = decode_avatar(&png_bytes(8, 8)).unwrap();

    let mut slot = AvatarSlot::new();
    let t1 = slot.request();
    let t2 = slot.request();
    let t3 = slot.request();

    assert!(matches!(slot.complete(t3, Ok(large)), AvatarUpdate::Applied));
    assert!(matches!(slot.complete(t1, Ok(small)), AvatarUpdate::Stale));
    assert!(matches!(slot.complete(t2, Ok(medium)), AvatarUpdate::Stale));
    assert_eq!(slot.get().map(|a| a.dimensions()), Some((8, 8)));
}

/// A stale failure is dropped without surfacing an error
#[test]
fn test_stale_failure_is_silent() {
    let mut slot = AvatarSlot::new();
    let old = slot.request();
    let new = slot.request();

    assert!(matches!(
        slot.complete(old, Err(CardError::AvatarDecode("corrupt".into()))),
        AvatarUpdate::Stale
    ));
    assert!(matches!(
        slot.complete(new, decode_avatar(&png_bytes(3, 3))),
        AvatarUpdate::Applied
    ));
}

/// A corrupt file on disk fails to decode and leaves the slot unset
#[tokio::test]
async fn test_corrupt_file_leaves_avatar_unset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    let mut bytes = png_bytes(16, 16);
    bytes.truncate(20);
    std::fs::write(&path, &bytes).unwrap();

    let mut slot = AvatarSlot::new();
    let ticket = slot.request();
    let update = slot.complete(ticket, load_avatar(&path).await);

    assert!(matches!(update, AvatarUpdate::Failed(CardError::AvatarDecode(_))));
    assert!(!slot.is_set());
}

/// A valid file on disk decodes and keeps its dimensions
#[tokio::test]
async fn test_load_avatar_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("me.png");
    std::fs::write(&path, png_bytes(12, 7)).unwrap();

    let avatar = load_avatar(&path).await.unwrap();
    assert_eq!(avatar.dimensions(), (12, 7));
    assert_eq!(avatar.mime(), "image/png");
}
