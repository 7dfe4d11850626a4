use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::config::{METHOD_NOT_ALLOWED_MESSAGE, PROCESSING_ERROR_PREFIX};
use crate::routes::response::JsonBody;
use crate::service::ConversionError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}{}", PROCESSING_ERROR_PREFIX, .0)]
    Conversion(#[from] ConversionError),

    #[error("{}", METHOD_NOT_ALLOWED_MESSAGE)]
    UnsupportedMethod,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Conversion(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMethod => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        JsonBody::failure(self.status(), &self.to_string()).into_response()
    }
}
