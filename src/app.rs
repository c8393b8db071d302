use dioxus::prelude::*;
use gbillions_core::{CardForm, CardSnapshot};

use crate::context::get_launch_config;
use crate::download::build_exporter;
use crate::pages::Generator;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Card generator
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Generator {},
}

/// Root application component.
///
/// Provides global styles, form state, the mounted-card slot, the exporter
/// and routing.
#[component]
pub fn App() -> Element {
    let form: Signal<CardForm> = use_signal(|| match get_launch_config().initial_name {
        Some(name) => CardForm::with_name(name),
        None => CardForm::new(),
    });
    let mounted: Signal<Option<CardSnapshot>> = use_signal(|| None);

    use_context_provider(|| form);
    use_context_provider(|| mounted);
    use_context_provider(|| build_exporter(&get_launch_config()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
