//! 운전자 관리 서비스 백엔드
//!
//! 운송 회사의 운전자(conductor) 레코드를 관리하는 REST 서비스입니다.
//! 운전자 등록, 조회, 부분 수정, 삭제를 제공하며 MongoDB에 저장합니다.
//!
//! # Features
//!
//! - **운전자 관리**: 등록, 단건/전체 조회, 부분 수정, 삭제
//! - **도메인 검증**: 필수 필드, 이메일 형식, 라이선스 유일성
//! - **명시적 DI**: 저장소 핸들을 생성 시점에 주입 (`web::Data`)
//! - **MongoDB**: 운전자 데이터 영구 저장, `licencia` 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (routes)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 DTO 변환 (handlers)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Use Cases     │ ← 비즈니스 규칙 (services)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← DriverRepository 구현 (repositories)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소 (db)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use driver_service_backend::core::DriverUseCases;
//! use driver_service_backend::repositories::drivers::InMemoryDriverRepository;
//!
//! let use_cases = DriverUseCases::new(Arc::new(InMemoryDriverRepository::new()));
//! let driver = use_cases.create.execute(profile).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
