// --- File: crates/solarops_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{HttpStatusCode, SolarOpsError};

/// Extension trait for SolarOpsError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for SolarOpsError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for SolarOpsError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// Converts a domain `Result` into a `Result<Json<T>, Response>` for handlers
/// returning JSON, using `f` to turn the error into a [`SolarOpsError`].
pub fn map_json_error<T, E, F>(result: Result<T, E>, f: F) -> Result<Json<T>, Response>
where
    T: serde::Serialize,
    F: FnOnce(E) -> SolarOpsError,
{
    result.map(Json).map_err(|err| f(err).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::conflict;

    #[test]
    fn test_error_maps_to_status() {
        let response = conflict("slot taken").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_map_json_error_uses_mapper() {
        let result: Result<u32, std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));

        let mapped = map_json_error(result, SolarOpsError::from);

        match mapped {
            Ok(_) => panic!("expected an error response"),
            Err(response) => assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
