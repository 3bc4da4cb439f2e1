use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("movie not found")]
    NotFound,
    #[error("movie catalog request failed: {0}")]
    Catalog(#[from] reqwest::Error),
    #[error("movie catalog returned unusable metadata: {0}")]
    Metadata(String),
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::Catalog(_) | AppError::Metadata(_) => {
                (StatusCode::BAD_GATEWAY, "Movie catalog unavailable")
            }
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Html(crate::templates::error_page(title, self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
