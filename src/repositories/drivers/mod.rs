//! 운전자 데이터 액세스 계층
//!
//! [`DriverRepository`](crate::domain::repositories::DriverRepository)의 구현체들입니다.
//!
//! - [`MongoDriverRepository`] - 운영용 MongoDB 구현
//! - [`InMemoryDriverRepository`] - 테스트용 프로세스 내부 구현

pub mod memory_driver_repo;
pub mod mongo_driver_repo;

pub use memory_driver_repo::InMemoryDriverRepository;
pub use mongo_driver_repo::{DriverDocument, MongoDriverRepository};
