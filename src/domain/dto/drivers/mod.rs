//! 운전자 API 계약 (요청/응답 DTO)
//!
//! JSON 키는 공개 API 그대로 스페인어(`nombre`, `licencia`, ...)를 사용하고,
//! Rust 필드명은 영어로 둡니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
