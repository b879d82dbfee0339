use aide::OperationIo;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_set::error_set;
use schemars::JsonSchema;
use vf_system::error::SessionError;

error_set! {
    #[derive(OperationIo)]
    ApiError = {
        #[display("{0}")]
        Session(SessionError),
    };
}

/// The body of every error response.
#[derive(serde::Serialize, serde::Deserialize, JsonSchema, Clone, Debug, PartialEq, Eq)]
pub struct ApiResponseError {
    pub detail: String,
}

impl ApiError {
    /// The status code this error is reported with.
    ///
    /// Upstream rejections keep the upstream's status, everything else is our own fault.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Session(SessionError::Upstream { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = ApiResponseError {
            detail: self.to_string(),
        };

        (status, Json(response)).into_response()
    }
}
