//! Application pages.

mod generator;

pub use generator::Generator;
