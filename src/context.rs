//! Shared state for the card generator.
//!
//! The App component provides three contexts:
//! - the editable [`CardForm`]
//! - the snapshot of the mounted card preview (`None` while unmounted)
//! - the [`Exporter`]
//!
//! ## Usage
//!
//! ```ignore
//! let mut form = use_card_form();
//! form.write().roles.select_all();
//! ```

use dioxus::prelude::*;
use gbillions_core::{CardForm, CardSnapshot, Exporter};

use crate::LaunchConfig;

/// Get the launch configuration parsed from the command line.
pub fn get_launch_config() -> LaunchConfig {
    crate::get_launch_config()
}

/// Hook to access the card form.
pub fn use_card_form() -> Signal<CardForm> {
    use_context::<Signal<CardForm>>()
}

/// Hook to access the mounted card snapshot.
///
/// The card preview writes its current markup here while mounted and
/// clears it when it unmounts.
pub fn use_mounted_card() -> Signal<Option<CardSnapshot>> {
    use_context::<Signal<Option<CardSnapshot>>>()
}

/// Hook to access the exporter.
pub fn use_exporter() -> Exporter {
    use_context::<Exporter>()
}
