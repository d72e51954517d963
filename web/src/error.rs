/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::input::InputError;
use roster_core::types::BaseResponse;
use sea_orm::DbErr;
use std::fmt;

/// Everything except `NotFound` is answered with 500, so clients cannot tell
/// rejected input from a server fault by status code alone.
#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    Database(DbErr),
    InputValidation(InputError),
    JsonParsing(JsonRejection),
    PathParsing(PathRejection),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::InputValidation(err) => write!(f, "Input validation error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::PathParsing(err) => write!(f, "Path parsing error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::InputValidation(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::PathParsing(err) => Some(err),
            WebError::Internal(err) => Some(&**err),
            WebError::NotFound(_) => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<InputError> for WebError {
    fn from(err: InputError) -> Self {
        WebError::InputValidation(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<PathRejection> for WebError {
    fn from(err: PathRejection) -> Self {
        WebError::PathParsing(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            WebError::InputValidation(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            WebError::JsonParsing(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.body_text()),
            WebError::PathParsing(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.body_text()),
            WebError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
            }
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }
}
