use crate::http::Page;
use crate::http::PageError;
use crate::pages::errors::failure_page;
use crate::pages::errors::not_found_page;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, page) = match self {
            PageError::NotFound => (StatusCode::NOT_FOUND, not_found_page()),
            PageError::Content(_) => (StatusCode::INTERNAL_SERVER_ERROR, failure_page()),
        };

        (status, Html(page.into_string())).into_response()
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        (StatusCode::OK, Html(self.0.into_string())).into_response()
    }
}
