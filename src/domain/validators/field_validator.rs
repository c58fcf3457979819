//! # 필드 검증 유틸리티
//!
//! 엔티티 생성 시 사용하는 필수 필드 검증 함수들입니다.

use crate::errors::AppError;

/// 필수 문자열 필드 검증
///
/// 빈 문자열이나 공백만 있는 경우 `field` 이름과 `message`를 담은
/// `AppError::Validation`을 반환합니다. 값 자체는 변경하지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// require_non_blank(&nombre, "nombre", "El nombre es requerido")?;
/// ```
pub fn require_non_blank(value: &str, field: &str, message: &str) -> Result<(), AppError> {
    if is_blank(value) {
        return Err(AppError::validation(field, message));
    }
    Ok(())
}

/// 문자열이 비어 있거나 공백만으로 구성되었는지 확인
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
