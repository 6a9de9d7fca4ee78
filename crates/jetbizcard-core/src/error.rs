//! Error types for JetBizCard

use thiserror::Error;

/// Errors raised at the edges of the card: asset resolution and content loading.
///
/// Rendering itself never fails.
#[derive(Error, Debug)]
pub enum CardError {
    /// No file for the asset name exists under the assets directory
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Asset file exists but is not an image we can display
    #[error("Unsupported asset format: {0}")]
    UnsupportedAsset(String),

    /// Card content file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Card content parsed but is not usable
    #[error("Invalid card content: {0}")]
    InvalidContent(String),

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
        let err = CardError::AssetNotFound("profile_image".to_string());
        assert_eq!(format!("{}", err), "Asset not found: profile_image");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let card_err: CardError = json_err.into();
        assert!(matches!(card_err, CardError::Config(_)));
    }
}
