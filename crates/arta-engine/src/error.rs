//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors surfaced to the host by construction and per-tick update calls.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An effect was asked to pick a texture from an empty set.
    /// Recoverable: the engine skips that tick's seeding step.
    #[error("particle effect has no textures to choose from")]
    EmptyTextureSet,

    /// A sprite-sheet was described with zero rows or zero columns.
    #[error("invalid atlas layout: {rows} rows x {columns} columns")]
    InvalidAtlasLayout { rows: u32, columns: u32 },

    /// Manifest lookup of an atlas name that is not declared.
    #[error("atlas '{0}' not found in manifest")]
    UnknownAtlas(String),

    /// Manifest lookup of an effect name that is not declared.
    #[error("effect '{0}' not found in manifest")]
    UnknownEffect(String),

    /// An effect descriptor whose parameters cannot produce particles.
    #[error("invalid effect config: {0}")]
    InvalidEffectConfig(String),

    /// The manifest JSON could not be parsed.
    #[error("manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_layout() {
        let err = EngineError::InvalidAtlasLayout { rows: 2, columns: 0 };
        assert_eq!(err.to_string(), "invalid atlas layout: 2 rows x 0 columns");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::Manifest(_)));
    }
}
