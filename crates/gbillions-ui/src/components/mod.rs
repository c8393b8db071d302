//! Reusable UI components for the card generator.

mod button;
mod input;
mod role_toggles;

pub use button::*;
pub use input::*;
pub use role_toggles::*;
