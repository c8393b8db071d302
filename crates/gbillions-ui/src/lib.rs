//! Gbillions UI Components
//!
//! Dioxus components for the card generator, styled after the card itself:
//! - **Sky (#38bdf8 → #2563eb)**: primary actions, selected toggles
//! - **Slate (#020617)**: backgrounds and input wells
//! - **White at low opacity**: borders, secondary buttons, hints
//!
//! Components are stateless: they render props and report user intent
//! through event handlers. State lives in the desktop app.

pub mod components;

pub use components::*;
