//! Drivers Entity Module
//!
//! 운전자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::drivers::{Driver, DriverProfile, DriverChanges};
//!
//! let driver = Driver::create(profile, None)?;
//! let renamed = driver.update(DriverChanges {
//!     first_name: Some("Juan Carlos".to_string()),
//!     ..Default::default()
//! })?;
//! ```

pub mod driver;

pub use driver::{Driver, DriverChanges, DriverProfile, DriverRecord};
