//! 이메일 형식 검증기
//!
//! `local@domain.tld` 형태의 기본적인 이메일 형식을 검사하는 순수 함수입니다.
//! RFC 5322 전체를 검사하지 않으며, 공백과 `@`가 없는 세 부분으로 구성되었는지만 확인합니다.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

/// 이메일 형식이 유효한지 확인합니다.
///
/// 빈 문자열이나 공백만 있는 문자열은 항상 `false`입니다. 패닉하지 않습니다.
///
/// # 예제
///
/// ```rust
/// use driver_service_backend::domain::validators::is_valid_email;
///
/// assert!(is_valid_email("juan.perez@example.com"));
/// assert!(!is_valid_email("invalid-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}
