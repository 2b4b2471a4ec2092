// Unit tests for error mapping - pure domain logic without store dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::AppError;

#[test]
fn maps_validation() {
    let de = DomainError::validation("bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), "VALIDATION_ERROR");
    assert_eq!(app.detail(), "bad field");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Player, "no player");
    let app: AppError = nf.into();
    assert_eq!(app.code(), "PLAYER_NOT_FOUND");

    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code(), "GAME_NOT_FOUND");

    let nf = DomainError::not_found(NotFoundKind::Other("wallet".into()), "no wallet");
    let app: AppError = nf.into();
    assert_eq!(app.code(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code(), "STORE_TIMEOUT");
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::StoreUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code(), "STORE_UNAVAILABLE");

    let bad = DomainError::infra(InfraErrorKind::MalformedDocument, "bad shape");
    let app: AppError = bad.into();
    assert_eq!(app.code(), "STORE_ERROR");

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code(), "INTERNAL");
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation("invalid input");
    assert!(matches!(validation, DomainError::Validation(_)));

    let not_found = DomainError::not_found(NotFoundKind::Player, "player missing");
    assert!(matches!(
        not_found,
        DomainError::NotFound(NotFoundKind::Player, _)
    ));

    let infra = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    assert!(matches!(
        infra,
        DomainError::Infra(InfraErrorKind::Timeout, _)
    ));
}
