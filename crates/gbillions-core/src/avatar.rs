//! Avatar capture.
//!
//! Turns a user-picked file into an embeddable data URI and holds the
//! current avatar in a slot that only accepts the most recent request.

use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use image::{GenericImageView, ImageFormat};

use crate::error::{CardError, CardResult};

/// File extensions offered by the avatar picker.
pub const AVATAR_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A decoded avatar, ready to embed in the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    data_uri: String,
    mime: &'static str,
    width: u32,
    height: u32,
}

impl AvatarImage {
    /// `data:<mime>;base64,...`
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Validate `bytes` as an image and build an embeddable representation.
///
/// PNG, JPEG, GIF and WebP are embedded as-is. Anything else the decoder
/// understands is re-encoded as PNG so the rasterizer can read it.
pub fn decode_avatar(bytes: &[u8]) -> CardResult<AvatarImage> {
    let format =
        image::guess_format(bytes).map_err(|e| CardError::AvatarDecode(e.to_string()))?;
    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| CardError::AvatarDecode(e.to_string()))?;
    let (width, height) = img.dimensions();

    let (mime, payload): (&'static str, Cow<'_, [u8]>) = match format {
        ImageFormat::Png => ("image/png", Cow::Borrowed(bytes)),
        ImageFormat::Jpeg => ("image/jpeg", Cow::Borrowed(bytes)),
        ImageFormat::Gif => ("image/gif", Cow::Borrowed(bytes)),
        ImageFormat::WebP => ("image/webp", Cow::Borrowed(bytes)),
        _ => {
            let mut buffer = Vec::new();
            img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
                .map_err(|e| CardError::AvatarDecode(e.to_string()))?;
            ("image/png", Cow::Owned(buffer))
        }
    };

    let encoded = base64::engine::general_purpose::STANDARD.encode(payload.as_ref());
    Ok(AvatarImage {
        data_uri: format!("data:{};base64,{}", mime, encoded),
        mime,
        width,
        height,
    })
}

/// Read and decode an avatar file without blocking the caller's thread.
pub async fn load_avatar(path: impl AsRef<Path>) -> CardResult<AvatarImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CardError::AvatarRead(format!("{}: {}", path.display(), e)))?;

    tokio::task::spawn_blocking(move || decode_avatar(&bytes))
        .await
        .map_err(|e| CardError::AvatarDecode(format!("decoder task failed: {}", e)))?
}

/// Identifies one avatar decode request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeTicket(u64);

/// What happened when a decode result reached the slot.
#[derive(Debug)]
pub enum AvatarUpdate {
    /// The result belonged to the latest request and is now the avatar.
    Applied,
    /// A newer request (or a clear) superseded this one; the result was dropped.
    Stale,
    /// The latest request failed; the slot is unchanged.
    Failed(CardError),
}

/// Single avatar slot guarded by a generation counter.
#[derive(Debug, Clone, Default)]
pub struct AvatarSlot {
    current: Option<AvatarImage>,
    generation: u64,
}

impl AvatarSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&AvatarImage> {
        self.current.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Start a decode request. Any earlier outstanding ticket becomes stale.
    pub fn request(&mut self) -> DecodeTicket {
        self.generation += 1;
        DecodeTicket(self.generation)
    }

    /// Offer a decode result. Only the latest ticket can change the slot.
    pub fn complete(&mut self, ticket: DecodeTicket, result: CardResult<AvatarImage>) -> AvatarUpdate {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                generation = self.generation,
                "Dropping stale avatar decode"
            );
            return AvatarUpdate::Stale;
        }

        match result {
            Ok(image) => {
                let (w, h) = image.dimensions();
                tracing::info!(width = w, height = h, mime = image.mime(), "Avatar updated");
                self.current = Some(image);
                AvatarUpdate::Applied
            }
            Err(e) => {
                tracing::warn!("Avatar decode failed: {}", e);
                AvatarUpdate::Failed(e)
            }
        }
    }

    /// Remove the avatar and invalidate any pending decode.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }
}
