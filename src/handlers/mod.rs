//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 DTO를 도메인 입력으로 변환하고, 유스케이스를 호출한 뒤
//! 결과를 응답 DTO로 직렬화하는 일만 담당합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 유스케이스                          ← Application Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Infrastructure Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 유스케이스 묶음([`DriverUseCases`](crate::core::DriverUseCases))은
//! `web::Data`로 주입되며, 에러는 `AppError`가 HTTP 응답으로 변환합니다.

pub mod drivers;
