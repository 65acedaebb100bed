//! HTTP error responses.
//!
//! Every error body has the shape `{"status": "error", "message": "..."}`,
//! except unmatched routes which render `{"message": "Route not found"}`.

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Error type returned by handlers.
#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> String {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) => message,
            Self::Internal => "Internal server error".to_string(),
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(ErrorBody::new(self.message())));
    }
}

/// Body rendered for requests that match no route.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RouteNotFoundBody {
    pub message: String,
}

/// Catcher hoop that renders JSON for responses without a body.
///
/// Unmatched routes become `404 {"message": "Route not found"}`; anything
/// else (panics caught upstream, unexpected statuses) becomes a generic
/// internal error body.
#[handler]
pub(crate) async fn format_unhandled(res: &mut Response, ctrl: &mut FlowCtrl) {
    if res.status_code == Some(StatusCode::NOT_FOUND) {
        res.render(Json(RouteNotFoundBody {
            message: "Route not found".to_string(),
        }));
    } else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        res.render(Json(ErrorBody::new("Internal server error")));
    }

    ctrl.skip_rest();
}
