/// Error types shared across the application
///
/// `LoadError` travels inside UI messages, so it only carries strings and
/// stays `Clone`. `ConfigError` and `StartupError` are only ever seen at
/// startup and end up as the process exit status.
use thiserror::Error;

/// Why an image could not be turned into something the grid can draw
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("could not read file: {0}")]
    Io(String),

    #[error("could not decode image: {0}")]
    Decode(String),

    #[error("unsupported image source: {0}")]
    UnsupportedUri(String),

    #[error("background task failed: {0}")]
    Join(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => LoadError::Status(status.as_u16()),
            None => LoadError::Request(e.to_string()),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e.to_string())
    }
}

impl From<image::ImageError> for LoadError {
    fn from(e: image::ImageError) -> Self {
        LoadError::Decode(e.to_string())
    }
}

impl From<tokio::task::JoinError> for LoadError {
    fn from(e: tokio::task::JoinError) -> Self {
        LoadError::Join(e.to_string())
    }
}

/// Problems reading or validating the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Anything that stops the application from starting or running
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("window system failed: {0}")]
    Ui(#[from] iced::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_becomes_load_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LoadError = io.into();
        assert!(matches!(err, LoadError::Io(msg) if msg.contains("gone")));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            LoadError::Status(404).to_string(),
            "server answered with status 404"
        );
        assert_eq!(
            ConfigError::Invalid("columns must be at least 1".into()).to_string(),
            "invalid configuration: columns must be at least 1"
        );
    }

    #[test]
    fn test_config_error_stops_startup() {
        let err: StartupError = ConfigError::Invalid("zoom cap must be greater than 1.0".into()).into();
        assert!(matches!(err, StartupError::Config(ConfigError::Invalid(_))));
        assert_eq!(
            err.to_string(),
            "invalid configuration: zoom cap must be greater than 1.0"
        );
    }
}
