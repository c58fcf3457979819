//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! 엔티티는 저장소 형식(BSON 문서)과 분리되어 있으며, 문서 매핑은
//! 리포지토리 구현체가 담당합니다. 엔티티는 생성 시점에 스스로를 검증하므로
//! 존재하는 모든 `Driver` 값은 불변식을 만족합니다.

pub mod drivers;
