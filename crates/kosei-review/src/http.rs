//! Shared HTTP response helpers for the review client.

use crate::error::ReviewError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Error bodies are never read.
pub fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ReviewError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ReviewError::Api {
            status: status.as_u16(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn check_response_success() {
        assert!(check_response(mock_response(200)).is_ok());
        assert!(check_response(mock_response(204)).is_ok());
    }

    #[test]
    fn check_response_server_error() {
        let err = check_response(mock_response(500)).unwrap_err();
        assert!(matches!(err, ReviewError::Api { status: 500 }));
    }

    #[test]
    fn check_response_client_error() {
        let err = check_response(mock_response(422)).unwrap_err();
        assert!(matches!(err, ReviewError::Api { status: 422 }));
    }

    #[test]
    fn redirect_status_is_not_success() {
        let err = check_response(mock_response(304)).unwrap_err();
        assert!(matches!(err, ReviewError::Api { status: 304 }));
    }
}
