use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::model::ErrorBody;
use crate::utils::error::{CalcError, ErrorCategory};

impl CalcError {
    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Client => StatusCode::BAD_REQUEST,
            ErrorCategory::Routing => StatusCode::NOT_FOUND,
            ErrorCategory::Internal | ErrorCategory::Startup => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Operation;

    #[test]
    fn test_status_codes() {
        assert_eq!(CalcError::InvalidOperands.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CalcError::ModuloByZero.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CalcError::NegativeSquareRoot.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CalcError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CalcError::Internal(Operation::Exponentiation).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
