//! Card Preview
//!
//! Mounts the rendered card and publishes its snapshot for export.

use dioxus::prelude::*;
use gbillions_core::CardSnapshot;

use crate::context::{use_card_form, use_mounted_card};

/// Live card preview.
///
/// Re-renders whenever the form changes. While mounted, the exact markup on
/// screen is kept in the mounted-card context; on unmount the slot is
/// cleared so export becomes a no-op.
#[component]
pub fn CardPreview() -> Element {
    let form = use_card_form();
    let mut mounted = use_mounted_card();

    let snapshot = use_memo(move || CardSnapshot::capture(&form.read()));

    use_effect(move || {
        mounted.set(Some(snapshot()));
    });

    use_drop(move || {
        if let Ok(mut slot) = mounted.try_write() {
            *slot = None;
        }
    });

    rsx! {
        div {
            class: "card-preview",
            dangerous_inner_html: "{snapshot.read().svg()}",
        }
    }
}
