//! Role Toggle Grid
//!
//! Two-column grid of checkbox toggles, one per role, with bulk actions.
//! Selected toggles get a sky tint and border.

use dioxus::prelude::*;
use gbillions_core::{Role, RoleSet};

use super::button::{Button, ButtonVariant};

/// Properties for the RoleToggles component
#[derive(Clone, PartialEq, Props)]
pub struct RoleTogglesProps {
    /// Current selection
    pub selected: RoleSet,
    /// Called with the role whose checkbox changed
    pub on_toggle: EventHandler<Role>,
    /// "Select all" pressed
    pub on_select_all: EventHandler<()>,
    /// "Clear" pressed
    pub on_clear: EventHandler<()>,
}

/// Displays every role as a checkbox toggle
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RoleToggles {
///         selected: form.read().roles.clone(),
///         on_toggle: move |role| form.write().roles.toggle(role),
///         on_select_all: move |_| form.write().roles.select_all(),
///         on_clear: move |_| form.write().roles.clear(),
///     }
/// }
/// ```
#[component]
pub fn RoleToggles(props: RoleTogglesProps) -> Element {
    let on_select_all = props.on_select_all;
    let on_clear = props.on_clear;

    rsx! {
        div { class: "form-field",
            div { class: "role-toggles__header",
                label { class: "input-label", "Roles" }
                div { class: "role-toggles__bulk",
                    Button {
                        variant: ButtonVariant::Small,
                        onclick: move |_| on_select_all.call(()),
                        "Select all"
                    }
                    Button {
                        variant: ButtonVariant::Small,
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
            div {
                class: "role-toggles",
                role: "group",
                "aria-label": "Role selection",
                for role in Role::ALL {
                    {
                        let checked = props.selected.contains(role);
                        let on_toggle = props.on_toggle;
                        rsx! {
                            label {
                                key: "{role}",
                                class: toggle_class(checked),
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    onchange: move |_| on_toggle.call(role),
                                }
                                span { "{role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// CSS class for a toggle in the given state
pub fn toggle_class(selected: bool) -> &'static str {
    if selected {
        "role-toggle selected"
    } else {
        "role-toggle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_class_marks_selection() {
        assert_eq!(toggle_class(true), "role-toggle selected");
        assert_eq!(toggle_class(false), "role-toggle");
    }
}
