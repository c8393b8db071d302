//! Avatar Picker Component
//!
//! File picker that decodes the chosen image into the card's avatar slot.

use dioxus::prelude::*;
use gbillions_core::avatar::AVATAR_EXTENSIONS;
use gbillions_core::{load_avatar, AvatarUpdate};
use gbillions_ui::{Button, ButtonVariant};
use rfd::FileDialog;

use crate::context::use_card_form;

/// Profile image picker with a Remove button
///
/// Each pick takes a ticket from the avatar slot before decoding, so when
/// picks overlap only the most recent one can land. Decode errors are shown
/// under the picker and leave the current avatar as it was.
#[component]
pub fn AvatarPicker() -> Element {
    let mut form = use_card_form();
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_| {
        error.set(None);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", AVATAR_EXTENSIONS)
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            let path = match file_path {
                Ok(Some(path)) => path,
                Ok(None) => return,
                Err(e) => {
                    error.set(Some(format!("File picker error: {}", e)));
                    return;
                }
            };

            let ticket = form.write().avatar.request();
            loading.set(true);
            let result = load_avatar(&path).await;

            let update = form.write().avatar.complete(ticket, result);
            match update {
                AvatarUpdate::Applied => {
                    loading.set(false);
                    error.set(None);
                }
                AvatarUpdate::Failed(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
                // A newer pick owns the loading state
                AvatarUpdate::Stale => {}
            }
        });
    };

    let handle_remove = move |_| {
        form.write().avatar.clear();
        loading.set(false);
        error.set(None);
    };

    let has_avatar = form.read().avatar.is_set();

    rsx! {
        div { class: "form-field",
            label { class: "input-label", "Profile Image" }
            div { class: "avatar-picker",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: handle_pick,
                    if loading() { "Loading…" } else { "Choose image" }
                }
                if has_avatar {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_remove,
                        "Remove"
                    }
                }
            }

            if let Some(err) = error() {
                div { class: "avatar-picker__error",
                    "⚠️ {err}"
                }
            }
        }
    }
}
