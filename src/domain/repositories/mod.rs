//! 도메인 저장소 인터페이스

pub mod driver_repository;

pub use driver_repository::DriverRepository;
