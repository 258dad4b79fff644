use thiserror::Error;

/// Errors raised while assembling the application configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .missing.join(", "))]
    MissingConfiguration { missing: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_formatting() {
        let error = ConfigError::MissingConfiguration {
            missing: vec![
                "FIREBASE_CREDENTIALS_PATH".to_string(),
                "FIREBASE_DATABASE_URL".to_string(),
            ],
        };

        let msg = error.to_string();
        assert_eq!(
            msg,
            "Missing required environment variables: FIREBASE_CREDENTIALS_PATH, FIREBASE_DATABASE_URL"
        );
    }

    #[test]
    fn test_single_missing_variable_formatting() {
        let error = ConfigError::MissingConfiguration {
            missing: vec!["FIREBASE_DATABASE_URL".to_string()],
        };

        let msg = error.to_string();
        assert!(msg.contains("FIREBASE_DATABASE_URL"));
        assert!(!msg.contains("FIREBASE_CREDENTIALS_PATH"));
    }
}
