//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의하며,
//! 아직 엔티티로 검증되지 않은 입력의 형태를 표현합니다.
//!
//! | 구분 | 모듈 | 역할 |
//! |------|------|------|
//! | 요청 | `drivers::request` | HTTP 요청 본문 매핑, 필수값 검증, 날짜 변환 |
//! | 응답 | `drivers::response` | 엔티티 → JSON 직렬화 형태 |

pub mod drivers;

pub use drivers::*;
