use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("palette file not found: {}", .0.display())]
    PaletteNotFound(PathBuf),

    #[error("invalid palette name: {0}")]
    InvalidPaletteName(String),

    #[error("invalid JSON in {}: {source}", .path.display())]
    PaletteParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("palette '{theme}' is missing required colors: {}", .missing.join(", "))]
    MissingRequiredColors { theme: String, missing: Vec<String> },

    #[error("missing color key '{key}' while rendering {target}")]
    MissingColorKey { target: &'static str, key: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
