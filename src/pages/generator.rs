//! Generator page - edit the card on the left, preview it on the right.

use dioxus::prelude::*;
use gbillions_ui::{Input, RoleToggles};

use crate::components::{AvatarPicker, CardPreview, ExportButton};
use crate::context::use_card_form;

#[component]
pub fn Generator() -> Element {
    let mut form = use_card_form();
    let name = form.read().name.clone();
    let roles = form.read().roles.clone();

    rsx! {
        div { class: "generator",
            header { class: "app-header",
                div { class: "app-header__inner",
                    div { class: "app-header__brand",
                        div { class: "app-header__logo" }
                        h1 { class: "app-title", "Gbillions - NFT Card Generator" }
                    }
                    ExportButton {}
                }
            }

            main { class: "generator__main",
                section { class: "panel",
                    h2 { class: "panel__title", "Customize" }
                    div { class: "panel__fields",
                        Input {
                            id: "display-name".to_string(),
                            value: name,
                            oninput: move |text: String| form.write().set_name(text),
                            label: "Display Name".to_string(),
                            placeholder: "Your name".to_string(),
                        }

                        AvatarPicker {}

                        RoleToggles {
                            selected: roles,
                            on_toggle: move |role| form.write().roles.toggle(role),
                            on_select_all: move |_| form.write().roles.select_all(),
                            on_clear: move |_| form.write().roles.clear(),
                        }

                        p { class: "panel__tip",
                            "Tip: Use a square-ish image for the cleanest crop. The export has a subtle grain & glow baked in for that futuristic NFT vibe."
                        }
                    }
                }

                section { class: "preview",
                    CardPreview {}
                }
            }

            footer { class: "app-footer",
                "Made by "
                span { class: "app-footer__author", "Ansh" }
                " ✨ share the link and let friends mint their vibe."
            }
        }
    }
}
