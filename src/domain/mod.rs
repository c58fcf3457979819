//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 규칙과 데이터 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities      - Driver 엔티티 (자기 검증, 불변)
//! ├── validators    - 순수 검증 함수 (이메일, 필수 문자열)
//! ├── repositories  - 저장소 trait (영속성 추상화)
//! └── dto           - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Application Layer (services: 유스케이스)
//!      │
//!      ▼
//! Infrastructure Layer (repositories 구현체, db, handlers)
//! ```

pub mod entities;
pub mod validators;
pub mod repositories;
pub mod dto;
