//! Error types for startup and asset loading
//!
//! Game-logic operations never fail (unaffordable purchases and missed clicks
//! are no-ops), so the only errors in the crate come from bringing the game up:
//! SDL initialisation, reading the config file, and decoding images.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort startup or the frame loop
#[derive(Debug, Error)]
pub enum GameError {
    /// SDL2 reports its failures as plain strings
    #[error("SDL error: {0}")]
    Sdl(String),

    /// A config file exists but could not be parsed
    #[error("failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config parsed but holds values the game cannot run with
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Sdl(message)
    }
}

/// Image decoding failure
///
/// Never surfaced to the player: the asset layer swaps in a procedural
/// placeholder whenever it sees one of these.
#[derive(Debug, Error)]
#[error("failed to load image {path}: {reason}")]
pub struct AssetError {
    pub path: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_string_converts() {
        let err: GameError = "no video device".to_string().into();
        assert_eq!(err.to_string(), "SDL error: no video device");
    }

    #[test]
    fn test_asset_error_message() {
        let err = AssetError {
            path: "pickle.png".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "failed to load image pickle.png: not found");
    }
}
