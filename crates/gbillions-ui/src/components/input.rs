//! Input Field Components
//!
//! Labelled single-line text input on a slate well with a sky focus ring.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called with the new value on every keystroke
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// ID for label association
    pub id: String,
}

/// Text input field
///
/// The value is passed through untouched: no trimming or normalization.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "display-name".to_string(),
///         value: form.read().name.clone(),
///         oninput: move |s| form.write().set_name(s),
///         label: "Display Name".to_string(),
///         placeholder: "Your name".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone();

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                class: "input-field",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
