//! Button Components
//!
//! Button styles used by the generator:
//! - Primary: sky gradient, used for the export action
//! - Secondary: translucent white, used for Remove and file picking
//! - Small: compact bulk actions (Select all / Clear)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Gradient call-to-action with glow
    #[default]
    Primary,
    /// Translucent background, thin border
    Secondary,
    /// Compact secondary button
    Small,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Small => "btn-small",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Small,
///         onclick: move |_| roles.write().select_all(),
///         "Select all"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", props.variant.class(), extra),
        _ => props.variant.class().to_string(),
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Label shown on the export button for the current state.
pub fn export_button_label(in_progress: bool) -> &'static str {
    if in_progress {
        "Rendering…"
    } else {
        "Generate & Download PNG"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Small.class(), "btn-small");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn export_label_tracks_progress() {
        assert_eq!(export_button_label(true), "Rendering…");
        assert_eq!(export_button_label(false), "Generate & Download PNG");
    }
}
