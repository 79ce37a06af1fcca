//! Error type shared by the simulation kernel, the harness and config loading

use thiserror::Error;

/// Crate-wide result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Reference body name that is not part of the system
    #[error("unknown body: {0:?}")]
    UnknownBody(String),

    /// Invalid caller-supplied parameter (index, mass, time step, ...)
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Report file or config file I/O
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed YAML config
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_body_names_the_body() {
        let e = Error::UnknownBody("pluto".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("unknown body"));
        assert!(msg.contains("pluto"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
    }
}
