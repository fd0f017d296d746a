use std::convert::Infallible;

use warp::{http::StatusCode, Rejection, Reply};

use dunmail::api::ErrorResponse;
use dunmail::Error;

/// Wrap the shared Dunmail error type so Reject can be impl'd
#[derive(Debug)]
pub struct ApiError(pub Error);

impl warp::reject::Reject for ApiError {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

/// Maps internal errors to HTTP return codes and JSON bodies.
///
/// Validation and attachment lookups are caller mistakes (400);
/// configuration problems and everything else are server-side (500).
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let status_code;
    let body;

    if err.is_not_found() {
        status_code = StatusCode::NOT_FOUND;
        body = ErrorResponse {
            error: "Not found".to_string(),
            details: None,
        };
    } else if let Some(ApiError(e)) = err.find::<ApiError>() {
        log::error!("send-failed-billing error: {}", e);

        match e {
            Error::BadRequest(_) | Error::AttachmentNotFound(_) => {
                status_code = StatusCode::BAD_REQUEST;
                body = ErrorResponse {
                    error: e.to_string(),
                    details: None,
                };
            }
            Error::Config(_) => {
                status_code = StatusCode::INTERNAL_SERVER_ERROR;
                body = ErrorResponse {
                    error: e.to_string(),
                    details: None,
                };
            }
            _ => {
                status_code = StatusCode::INTERNAL_SERVER_ERROR;
                body = ErrorResponse {
                    error: "Internal error sending email".to_string(),
                    details: Some(e.to_string()),
                };
            }
        }
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        status_code = StatusCode::METHOD_NOT_ALLOWED;
        body = ErrorResponse {
            error: "Method not allowed".to_string(),
            details: None,
        };
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        status_code = StatusCode::PAYLOAD_TOO_LARGE;
        body = ErrorResponse {
            error: "Payload too large".to_string(),
            details: None,
        };
    } else {
        status_code = StatusCode::INTERNAL_SERVER_ERROR;
        body = ErrorResponse {
            error: "Internal error sending email".to_string(),
            details: None,
        };
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&body),
        status_code,
    ))
}
