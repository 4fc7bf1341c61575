use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("singleton holder is already initialized")]
    AlreadyInitialized,

    #[error("unknown creator '{0}' (expected 'a' or 'b')")]
    UnknownCreator(String),

    #[error("unknown strategy '{0}' (expected 'add', 'subtract' or 'multiply')")]
    UnknownStrategy(String),

    #[error("decorator layers {layers} exceeds the limit of {max}")]
    TooManyLayers { layers: usize, max: usize },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PatternError::UnknownCreator("c".into()).to_string(),
            "unknown creator 'c' (expected 'a' or 'b')"
        );
        assert_eq!(
            PatternError::AlreadyInitialized.to_string(),
            "singleton holder is already initialized"
        );
    }

    #[test]
    fn test_too_many_layers_message() {
        let err = PatternError::TooManyLayers {
            layers: 5000,
            max: 1024,
        };
        assert_eq!(err.to_string(), "decorator layers 5000 exceeds the limit of 1024");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = PatternError::Io {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read missing.toml");
        assert!(err.source().is_some());
    }
}
