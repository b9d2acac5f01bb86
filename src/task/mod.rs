//! Task lifecycle: upload registration, survey attachment, readiness gating.

pub mod handlers;
pub mod models;
pub mod multipart_parser;
pub mod store;

#[cfg(test)]
mod mod_tests;

use actix_web::HttpResponse;
use thiserror::Error;
use uuid::Uuid;

use crate::ErrorResponse;

/// Errors raised by the task lifecycle store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("expected exactly {expected} uploaded files, got {actual}")]
    InvalidUploadCount { expected: usize, actual: usize },
    #[error("task {0} not found")]
    TaskNotFound(Uuid),
    #[error("report for task {0} is not ready yet")]
    NotReady(Uuid),
}

impl From<TaskError> for HttpResponse {
    fn from(error: TaskError) -> Self {
        match error {
            TaskError::InvalidUploadCount { .. } => {
                HttpResponse::BadRequest().json(ErrorResponse::bad_request(&error.to_string()))
            }
            TaskError::TaskNotFound(_) => {
                HttpResponse::NotFound().json(ErrorResponse::not_found(&error.to_string()))
            }
            TaskError::NotReady(_) => {
                HttpResponse::NotFound().json(ErrorResponse::not_ready(&error.to_string()))
            }
        }
    }
}
