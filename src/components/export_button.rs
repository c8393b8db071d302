//! Export Button
//!
//! Generates the PNG of the mounted card and downloads it.

use dioxus::prelude::*;
use gbillions_ui::{export_button_label, Button, ButtonVariant};

use crate::context::{use_exporter, use_mounted_card};
use crate::download::show_export_error;

#[component]
pub fn ExportButton() -> Element {
    let exporter = use_exporter();
    let mounted = use_mounted_card();
    let mut in_progress = use_signal(|| false);

    let handle_export = move |_| {
        let exporter = exporter.clone();
        let snapshot = mounted();

        spawn(async move {
            in_progress.set(true);
            let result = exporter.export(snapshot).await;
            // The gate may still be held by an export this click did not start
            in_progress.set(exporter.is_busy());

            // The exporter logs every outcome; only failures need the user
            if result.is_err() {
                show_export_error().await;
            }
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Primary,
            disabled: in_progress(),
            onclick: handle_export,
            "{export_button_label(in_progress())}"
        }
    }
}
