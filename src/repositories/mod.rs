//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 도메인의 저장소 trait을 구현하며, 엔티티와 저장 문서 간 매핑을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::drivers::MongoDriverRepository;
//!
//! let driver_repo = MongoDriverRepository::new(Arc::clone(&database));
//! let driver = driver_repo.find_by_license("ABC123456").await?;
//! ```

pub mod drivers;
