//! # 운전자 유스케이스
//!
//! 운전자 관리 기능을 연산 단위의 유스케이스로 제공합니다.
//! 각 유스케이스는 `Arc<dyn DriverRepository>`만 의존하며, 생성 시점에 주입받습니다.
//!
//! | 유스케이스 | 실패 |
//! |------------|------|
//! | [`CreateDriverUseCase`] | `DuplicateLicense`, `Validation` |
//! | [`GetDriverUseCase`] | `DriverNotFound` |
//! | [`GetAllDriversUseCase`] | - |
//! | [`UpdateDriverUseCase`] | `DriverNotFound`, `DuplicateLicense`, `Validation`, `DriverUpdate` |
//! | [`DeleteDriverUseCase`] | `DriverNotFound`, `DriverDelete` |
//!
//! 모든 유스케이스는 저장소 실패 시 `AppError::Database`를 그대로 전파합니다.

pub mod create_driver;
pub mod delete_driver;
pub mod get_all_drivers;
pub mod get_driver;
pub mod update_driver;

pub use create_driver::CreateDriverUseCase;
pub use delete_driver::DeleteDriverUseCase;
pub use get_all_drivers::GetAllDriversUseCase;
pub use get_driver::GetDriverUseCase;
pub use update_driver::UpdateDriverUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::domain::entities::drivers::{Driver, DriverProfile};
    use crate::domain::repositories::DriverRepository;
    use crate::errors::AppResult;
    use crate::repositories::drivers::InMemoryDriverRepository;

    pub fn profile(license: &str) -> DriverProfile {
        DriverProfile {
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            license: license.into(),
            phone: "+34612345678".into(),
            email: "juan.perez@example.com".into(),
            birth_date: Utc.with_ymd_and_hms(1985, 5, 15, 0, 0, 0).unwrap(),
        }
    }

    pub async fn saved_driver(repo: &InMemoryDriverRepository, license: &str) -> Driver {
        repo.save(Driver::create(profile(license), None).unwrap())
            .await
            .unwrap()
    }

    /// 조회는 성공하지만 쓰기 시점에는 문서가 사라진 것처럼 동작하는 저장소
    pub struct VanishingDriverRepository {
        pub driver: Driver,
    }

    impl VanishingDriverRepository {
        pub fn with_driver(license: &str) -> Self {
            Self {
                driver: Driver::create(profile(license), None).unwrap(),
            }
        }
    }

    #[async_trait]
    impl DriverRepository for VanishingDriverRepository {
        async fn save(&self, driver: Driver) -> AppResult<Driver> {
            Ok(driver)
        }

        async fn find_by_id(&self, id: &str) -> AppResult<Option<Driver>> {
            Ok(Some(self.driver.clone()).filter(|d| d.id() == id))
        }

        async fn find_all(&self) -> AppResult<Vec<Driver>> {
            Ok(vec![self.driver.clone()])
        }

        async fn update(&self, _id: &str, _driver: Driver) -> AppResult<Option<Driver>> {
            Ok(None)
        }

        async fn delete(&self, _id: &str) -> AppResult<bool> {
            Ok(false)
        }

        async fn find_by_license(&self, license: &str) -> AppResult<Option<Driver>> {
            Ok(Some(self.driver.clone()).filter(|d| d.license() == license))
        }
    }
}
