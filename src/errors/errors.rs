//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 운전자(conductor) 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 유스케이스가 반환한
//! 타입 있는 에러를 HTTP 상태 코드와 JSON 본문으로 변환합니다.
//!
//! HTTP 응답으로의 변환은 [`AppError::error_response`] 한 곳에서만 일어나며,
//! 메시지 문자열이 아닌 변형(variant) 매칭으로 상태 코드를 결정합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | Body |
//! |----------|-------------|------|
//! | `Validation` | 400 Bad Request | `{error, field}` |
//! | `DuplicateLicense` | 400 Bad Request | `{error}` |
//! | `DriverNotFound` | 404 Not Found | `{error}` |
//! | `DriverUpdate` | 400 Bad Request | `{error}` |
//! | `DriverDelete` | 400 Bad Request | `{error}` |
//! | `Database` | 400 Bad Request | `{error}` |
//! | `Internal` | 500 Internal Server Error | 고정 메시지 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn get(repo: &dyn DriverRepository, id: &str) -> AppResult<Driver> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::driver_not_found(id))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

/// 500 응답에 사용되는 고정 메시지 (내부 정보는 노출하지 않음)
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// 애플리케이션 전역 에러 타입
///
/// 도메인 검증, 비즈니스 규칙 위반, 저장소 오류를 모두 포괄합니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 엔티티 필드 검증 실패 (400 Bad Request)
    #[error("{message}")]
    Validation { field: String, message: String },

    /// 동일한 라이선스를 가진 운전자가 이미 존재함 (400 Bad Request)
    #[error("Ya existe un conductor con la licencia: {license}")]
    DuplicateLicense { license: String },

    /// 운전자를 찾을 수 없음 (404 Not Found)
    #[error("Conductor con ID {id} no encontrado")]
    DriverNotFound { id: String },

    /// 존재 확인 이후 업데이트가 반영되지 않음 (400 Bad Request)
    #[error("Error al actualizar el conductor con ID {id}{}", reason_suffix(.reason))]
    DriverUpdate { id: String, reason: Option<String> },

    /// 존재 확인 이후 삭제가 반영되지 않음 (400 Bad Request)
    #[error("Error al eliminar el conductor con ID {id}{}", reason_suffix(.reason))]
    DriverDelete { id: String, reason: Option<String> },

    /// 저장소(MongoDB) 관련 에러 (400 Bad Request)
    #[error("{0}")]
    Database(String),

    /// 분류되지 않은 내부 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    Internal(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(": {}", r))
        .unwrap_or_default()
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_license(license: impl Into<String>) -> Self {
        AppError::DuplicateLicense {
            license: license.into(),
        }
    }

    pub fn driver_not_found(id: impl Into<String>) -> Self {
        AppError::DriverNotFound { id: id.into() }
    }

    pub fn driver_update(id: impl Into<String>, reason: Option<String>) -> Self {
        AppError::DriverUpdate {
            id: id.into(),
            reason,
        }
    }

    pub fn driver_delete(id: impl Into<String>, reason: Option<String>) -> Self {
        AppError::DriverDelete {
            id: id.into(),
            reason,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DriverNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation { .. }
            | AppError::DuplicateLicense { .. }
            | AppError::DriverUpdate { .. }
            | AppError::DriverDelete { .. }
            | AppError::Database(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 문제가 된 필드명을 함께 전달하고,
    /// 내부 에러는 상세 내용을 로그에만 남기고 고정 메시지로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::Validation { field, message } => json!({
                "error": message,
                "field": field,
            }),
            AppError::Internal(detail) => {
                log::error!("❌ 처리되지 않은 내부 에러: {}", detail);
                json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
            other => json!({ "error": other.to_string() }),
        };

        HttpResponse::build(status).json(body)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Internal(format!("{}: {}", msg, e)))
    }
}
