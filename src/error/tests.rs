//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod golf_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let golf_error = GolfError::from(json_error);

        match golf_error {
            GolfError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let golf_error = GolfError::from(io_error);

        match golf_error {
            GolfError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_insufficient_data_message() {
        let error = GolfError::insufficient("need at least 2 dated points");
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 dated points"
        );
        assert!(error.is_insufficient());
    }

    #[test]
    fn test_no_fit_is_treated_as_insufficient() {
        assert!(GolfError::NoFit.is_insufficient());
    }

    #[test]
    fn test_other_errors_are_not_insufficient() {
        let error = GolfError::InvalidDate {
            value: "yesterday".to_string(),
        };
        assert!(!error.is_insufficient());
        assert!(error.to_string().contains("yesterday"));

        let error = GolfError::Config {
            message: "sweep_steps must be at least 2".to_string(),
        };
        assert!(!error.is_insufficient());
        assert!(error.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = GolfError::InvalidArgument {
            message: "stretch size must be positive".to_string(),
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidArgument"));
    }
}
