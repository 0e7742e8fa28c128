// Unit tests for error mapping - pure domain logic without storage dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds() {
    let app: AppError = DomainError::validation(ValidationKind::InvalidThrow, "code 99").into();
    assert_eq!(app.code(), ErrorCode::InvalidThrow);
    assert!(matches!(app, AppError::Validation { .. }));

    let app: AppError = DomainError::validation(ValidationKind::OutOfTurn, "not yours").into();
    assert_eq!(app.code().as_str(), "OUT_OF_TURN");

    let app: AppError =
        DomainError::validation(ValidationKind::Other("X".into()), "something").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert!(!app.is_retryable());
}

#[test]
fn maps_not_found_to_match_not_active() {
    let app: AppError = DomainError::not_found(NotFoundKind::Match, "no active match").into();
    assert_eq!(app.code().as_str(), "MATCH_NOT_ACTIVE");
    assert_eq!(app.detail(), "no active match");

    let app: AppError = DomainError::not_found(NotFoundKind::MatchPlayer, "missing").into();
    assert_eq!(app.code(), ErrorCode::MatchPlayerNotFound);

    let app: AppError = DomainError::not_found(NotFoundKind::UnknownMatch, "no such match").into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::OptimisticLock, "v1 != v2").into();
    assert_eq!(app.code(), ErrorCode::OptimisticLock);
    assert!(app.is_retryable());

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("dup".into()), "generic conflict").into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert!(!app.is_retryable());
}

#[test]
fn maps_infra_to_persistence() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "STORE_TIMEOUT");
    assert!(matches!(app, AppError::Persistence { .. }));
    assert!(app.is_retryable());

    let app: AppError = DomainError::infra(InfraErrorKind::StoreUnavailable, "down").into();
    assert_eq!(app.code(), ErrorCode::PersistenceFailure);
    assert!(app.is_retryable());

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert!(matches!(app, AppError::Persistence { .. }));
    assert!(!app.is_retryable());
}
