//! Visual theme for the card generator.

mod styles;

pub use styles::GLOBAL_STYLES;
