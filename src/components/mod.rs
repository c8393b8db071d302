//! App-level components bound to the generator's shared state.

mod avatar_picker;
mod card_preview;
mod export_button;

pub use avatar_picker::AvatarPicker;
pub use card_preview::CardPreview;
pub use export_button::ExportButton;
