//! Card export pipeline.
//!
//! Takes the snapshot of the mounted card, rasterizes it at [`PIXEL_RATIO`]
//! over a solid background, encodes PNG and hands the result to an
//! [`ArtifactSink`].
//!
//! ## States
//!
//! ```text
//! Idle ──export()──▶ Rendering ──ok / err──▶ Idle
//! ```
//!
//! The [`ExportGate`] permit is held for the whole `Rendering` phase and is
//! released however the phase ends. A second request while rendering gets
//! [`ExportOutcome::Busy`] and does nothing.

mod gate;
mod raster;
mod sink;

pub use gate::{ExportGate, ExportPermit};
pub use raster::{encode_png, rasterize, RasterOptions, FALLBACK_BACKGROUND, PIXEL_RATIO};
pub use sink::{sanitize_file_name, write_atomically, ArtifactSink, DirectorySink};

use std::path::PathBuf;
use std::sync::Arc;

use crate::card::CardSnapshot;
use crate::error::{CardError, CardResult};

/// A rendered card, ready to download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// How an export request ended, when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// The artifact was saved at this path.
    Downloaded(PathBuf),
    /// The user dismissed the save prompt.
    Cancelled,
    /// No card is mounted; nothing was done.
    NotMounted,
    /// Another export is in progress; nothing was done.
    Busy,
}

/// Rasterize and encode a snapshot.
pub fn build_artifact(snapshot: &CardSnapshot, options: &RasterOptions) -> CardResult<ExportArtifact> {
    let bitmap = rasterize(snapshot.svg(), options)?;
    let (width, height) = bitmap.dimensions();
    let png = encode_png(&bitmap)?;
    Ok(ExportArtifact {
        file_name: snapshot.file_name(),
        png,
        width,
        height,
    })
}

/// Runs exports one at a time and delivers them through a sink.
#[derive(Clone)]
pub struct Exporter {
    gate: ExportGate,
    sink: Arc<dyn ArtifactSink>,
}

impl Exporter {
    pub fn new(sink: Arc<dyn ArtifactSink>) -> Self {
        Self {
            gate: ExportGate::new(),
            sink,
        }
    }

    pub fn gate(&self) -> &ExportGate {
        &self.gate
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Export the mounted card, if any.
    ///
    /// Rasterization, encoding and delivery run on a blocking worker. Any
    /// failure is returned as an error and nothing is delivered.
    pub async fn export(&self, snapshot: Option<CardSnapshot>) -> CardResult<ExportOutcome> {
        let Some(snapshot) = snapshot else {
            tracing::debug!("Export requested with no mounted card");
            return Ok(ExportOutcome::NotMounted);
        };

        let Some(permit) = self.gate.try_acquire() else {
            tracing::warn!("Export already in progress, ignoring request");
            return Ok(ExportOutcome::Busy);
        };

        let sink = Arc::clone(&self.sink);
        let task = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let artifact = build_artifact(&snapshot, &RasterOptions::default())?;
            tracing::info!(
                file = %artifact.file_name,
                width = artifact.width,
                height = artifact.height,
                bytes = artifact.png.len(),
                "Card rendered"
            );
            sink.deliver(&artifact)
        });

        match task.await {
            Ok(Ok(Some(path))) => {
                tracing::info!("Card saved to {:?}", path);
                Ok(ExportOutcome::Downloaded(path))
            }
            Ok(Ok(None)) => {
                tracing::info!("Card download cancelled");
                Ok(ExportOutcome::Cancelled)
            }
            Ok(Err(e)) => {
                tracing::error!("Card export failed: {}", e);
                Err(e)
            }
            Err(e) => {
                tracing::error!("Card export task failed: {}", e);
                Err(CardError::Delivery(format!("export task failed: {}", e)))
            }
        }
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
