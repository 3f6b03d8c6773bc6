use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

// Debug so Result<_, InternalError> can be unwrapped in tests.
#[derive(Debug)]
pub struct InternalError {
    pub message: String,
}

impl InternalError {
    pub fn new(message: impl Into<String>) -> InternalError {
        InternalError {
            message: message.into(),
        }
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        // Logging in the conversion keeps the handlers free of it.
        error!(
            "Error encountered while processing request: {}",
            self.message
        );
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_results_can_be_inspected_in_tests() {
        let result: Result<(), InternalError> = Err(InternalError::new("boom"));
        assert!(result.is_err());
        assert!(format!("{:?}", result).contains("boom"));
    }
}
