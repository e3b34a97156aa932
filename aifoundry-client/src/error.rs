#[derive(Debug, thiserror::Error)]
pub enum FoundryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FoundryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FoundryError::Config("AGENT_NAME is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: AGENT_NAME is not set");

        let err = FoundryError::Api { status: 404, message: "connection not found".to_string() };
        assert_eq!(err.to_string(), "API error (status 404): connection not found");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let foundry_err: FoundryError = io_err.into();
        assert!(matches!(foundry_err, FoundryError::Io(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(FoundryError::Config("invalid".to_string()));
        assert!(err_result.is_err());
    }
}
