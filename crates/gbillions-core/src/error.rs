//! Error types for the Gbillions card generator

use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// The avatar file could not be read from disk
    #[error("Failed to read avatar: {0}")]
    AvatarRead(String),

    /// The avatar bytes are not a decodable image
    #[error("Failed to decode avatar: {0}")]
    AvatarDecode(String),

    /// The card markup could not be parsed for rasterization
    #[error("Invalid card markup: {0}")]
    InvalidSvg(String),

    /// The output bitmap could not be allocated
    #[error("Cannot allocate a {width}x{height} bitmap")]
    PixmapAllocation { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("Encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// The artifact could not be handed to the user
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::PixmapAllocation {
            width: 0,
            height: 1680,
        };
        assert_eq!(format!("{}", err), "Cannot allocate a 0x1680 bitmap");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
