//! Gbillions Card Core Library
//!
//! State, rendering and PNG export for the Gbillions NFT card generator.
//!
//! ## Overview
//!
//! A card is built from three inputs the user edits: a display name, an
//! optional avatar image and a selection of role tags. The card is rendered
//! as a self-contained SVG document which the desktop app shows on screen
//! and the exporter rasterizes to PNG at 3x.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use gbillions_core::{CardForm, CardSnapshot, DirectorySink, Exporter, Role};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut form = CardForm::with_name("Ansh");
//!     form.roles.clear();
//!     form.roles.toggle(Role::Og);
//!
//!     let exporter = Exporter::new(Arc::new(DirectorySink::new("./out")));
//!     let outcome = exporter.export(Some(CardSnapshot::capture(&form))).await?;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

pub mod avatar;
pub mod card;
pub mod error;
pub mod export;
pub mod form;
pub mod roles;

// Re-exports
pub use avatar::{decode_avatar, load_avatar, AvatarImage, AvatarSlot, AvatarUpdate, DecodeTicket};
pub use card::{export_file_name, render_svg, CardLayout, CardSnapshot};
pub use error::{CardError, CardResult};
pub use export::{
    build_artifact, ArtifactSink, DirectorySink, ExportArtifact, ExportGate, ExportOutcome,
    Exporter, RasterOptions,
};
pub use form::{CardForm, DEFAULT_DISPLAY_NAME};
pub use roles::{Role, RoleSet, MAX_DISPLAYED_ROLES};
