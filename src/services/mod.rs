//! # 애플리케이션 서비스 계층
//!
//! HTTP나 저장소 세부사항과 무관한 비즈니스 규칙을 유스케이스로 구현합니다.
//!
//! ```text
//! handlers ──▶ services (use cases) ──▶ domain::repositories (trait)
//!                                              ▲
//!                                   repositories (MongoDB / in-memory)
//! ```

pub mod drivers;
