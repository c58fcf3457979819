//! # Core Module
//!
//! 애플리케이션 조립을 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`container`] - 의존성 조립
//! - **DriverUseCases**: 저장소 핸들을 받아 모든 운전자 유스케이스를 생성
//! - **명시적 주입**: 전역 싱글톤 대신 `web::Data`로 핸들러에 전달
//!
//! 에러 타입은 [`crate::errors`]에 정의되어 있습니다.

pub mod container;

pub use container::DriverUseCases;
