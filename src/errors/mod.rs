//! 에러 타입 모듈
//!
//! [`AppError`]와 [`AppResult`]를 재노출합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext, INTERNAL_ERROR_MESSAGE};
