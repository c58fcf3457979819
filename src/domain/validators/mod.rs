//! 도메인 검증기 모듈
//!
//! 엔티티가 스스로를 검증할 때 사용하는 순수 함수들을 제공합니다.

pub mod email_validator;
pub mod field_validator;

pub use email_validator::is_valid_email;
pub use field_validator::{is_blank, require_non_blank};
