//! Errors raised while loading `doxbridge.toml`.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid doxbridge.toml")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = ConfigError::Io(
            PathBuf::from("docs/doxbridge.toml"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot read config `docs/doxbridge.toml`");
    }

    #[test]
    fn test_validation_error_carries_message() {
        let err = ConfigError::Validation("[doxygen.inputs] must have at least one element".into());
        assert!(err.to_string().ends_with("[doxygen.inputs] must have at least one element"));
    }
}
