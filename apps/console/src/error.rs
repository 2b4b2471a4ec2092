use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Application-level error surfaced by the console components.
///
/// Carries a stable machine-readable code alongside a human-readable detail,
/// so a host application can route errors to its own UI without string
/// matching on messages.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Store error: {detail}")]
    Store { detail: String },
    #[error("Store unavailable: {detail}")]
    StoreUnavailable { detail: String },
    #[error("Timeout: {detail}")]
    Timeout { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable error code for any variant.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::NotFound { code, .. } => code,
            AppError::Store { .. } => "STORE_ERROR",
            AppError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            AppError::Timeout { .. } => "STORE_TIMEOUT",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    /// Human-readable detail for any variant.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. } => detail,
            AppError::NotFound { detail, .. } => detail,
            AppError::Store { detail } => detail,
            AppError::StoreUnavailable { detail } => detail,
            AppError::Timeout { detail } => detail,
            AppError::Config { detail } => detail,
            AppError::Internal { detail } => detail,
        }
    }

    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn not_found(code: &'static str, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn store(detail: String) -> Self {
        Self::Store { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => AppError::Validation {
                code: "VALIDATION_ERROR",
                detail,
            },
            DomainError::NotFound(kind, detail) => AppError::NotFound {
                code: match kind {
                    NotFoundKind::Player => "PLAYER_NOT_FOUND",
                    NotFoundKind::Game => "GAME_NOT_FOUND",
                    _ => "NOT_FOUND",
                },
                detail,
            },
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::Timeout => AppError::Timeout { detail },
                InfraErrorKind::StoreUnavailable => AppError::StoreUnavailable { detail },
                InfraErrorKind::MalformedDocument | InfraErrorKind::Storage => {
                    AppError::Store { detail }
                }
                _ => AppError::Internal { detail },
            },
        }
    }
}
