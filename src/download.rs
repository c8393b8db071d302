//! Desktop delivery of exported cards.
//!
//! Exports either go straight into the download directory or through a
//! native save dialog, depending on the launch config. Export failures are
//! reported with a blocking native message box.

use std::path::PathBuf;
use std::sync::Arc;

use gbillions_core::export::{sanitize_file_name, write_atomically};
use gbillions_core::{ArtifactSink, CardResult, DirectorySink, ExportArtifact, Exporter};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::LaunchConfig;

/// Message shown when an export fails.
pub const EXPORT_FAILED_MESSAGE: &str = "Unable to export image. Try again.";

/// Prompts for a save location for each artifact.
#[derive(Debug, Clone)]
pub struct DialogSink {
    start_dir: PathBuf,
}

impl DialogSink {
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
        }
    }
}

impl ArtifactSink for DialogSink {
    fn deliver(&self, artifact: &ExportArtifact) -> CardResult<Option<PathBuf>> {
        let picked = FileDialog::new()
            .set_title("Save card")
            .set_directory(&self.start_dir)
            .set_file_name(sanitize_file_name(&artifact.file_name))
            .add_filter("PNG image", &["png"])
            .save_file();

        match picked {
            Some(path) => {
                write_atomically(&path, &artifact.png)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}

/// Build the exporter for this launch.
pub fn build_exporter(config: &LaunchConfig) -> Exporter {
    let sink: Arc<dyn ArtifactSink> = if config.save_dialog {
        Arc::new(DialogSink::new(config.download_dir.clone()))
    } else {
        Arc::new(DirectorySink::new(config.download_dir.clone()))
    };
    Exporter::new(sink)
}

/// Show the blocking export error box.
pub async fn show_export_error() {
    // Message boxes block, so keep them off the UI thread
    let shown = tokio::task::spawn_blocking(|| {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Export failed")
            .set_description(EXPORT_FAILED_MESSAGE)
            .set_buttons(MessageButtons::Ok)
            .show()
    })
    .await;

    if let Err(e) = shown {
        tracing::error!("Failed to show export error dialog: {}", e);
    }
}
