use crate::quiz::RankingError;
use crate::sink::SinkError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No quiz available for today.")]
    NoQuizForToday,

    #[error("session_id must not be empty")]
    MissingSession,

    #[error("{0}")]
    InvalidRankings(#[from] RankingError),

    #[error("rankings already submitted for day {day}")]
    AlreadySubmitted { day: u16 },

    #[error("submission could not be delivered: {0}")]
    SinkUnavailable(#[from] SinkError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoQuizForToday => StatusCode::NOT_FOUND,
            Self::MissingSession | Self::InvalidRankings(_) => StatusCode::BAD_REQUEST,
            Self::AlreadySubmitted { .. } => StatusCode::CONFLICT,
            Self::SinkUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
