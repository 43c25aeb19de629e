use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, PartialEq)]
pub enum AppError {
    Unexpected,
    InternalServerError(&'static str),

    MessagesMissingContent,
    MessagesMissingSender,
    MessagesMissingReceiver,
    MessagesMissingUserId,

    UsersNotFound,
    UsersMissingUserId,
    UsersMissingDisplayName,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::InternalServerError(_) => "internal_server_error",

            AppError::MessagesMissingContent => "messages.missing_content",
            AppError::MessagesMissingSender => "messages.missing_sender",
            AppError::MessagesMissingReceiver => "messages.missing_receiver",
            AppError::MessagesMissingUserId => "messages.missing_user_id",

            AppError::UsersNotFound => "users.not_found",
            AppError::UsersMissingUserId => "users.missing_user_id",
            AppError::UsersMissingDisplayName => "users.missing_display_name",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::InternalServerError(_) => "An internal server error has occurred.",

            AppError::MessagesMissingContent => "The `content` parameter is required.",
            AppError::MessagesMissingSender => "The `senderId` parameter is required.",
            AppError::MessagesMissingReceiver => "The `receiverId` parameter is required.",
            AppError::MessagesMissingUserId => "The `userId` parameter is required.",

            AppError::UsersNotFound => "This user does not exist.",
            AppError::UsersMissingUserId => "The `userId` parameter is required.",
            AppError::UsersMissingDisplayName => "The `displayName` parameter is required.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::MessagesMissingContent
            | AppError::MessagesMissingSender
            | AppError::MessagesMissingReceiver
            | AppError::MessagesMissingUserId
            | AppError::UsersMissingUserId
            | AppError::UsersMissingDisplayName => StatusCode::BAD_REQUEST,

            AppError::UsersNotFound => StatusCode::NOT_FOUND,

            AppError::Unexpected | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
