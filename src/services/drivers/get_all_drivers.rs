//! 전체 운전자 목록 조회 유스케이스
//!
//! 필터링이나 페이지네이션 없이 저장소의 자연 순서 그대로 반환합니다.

use std::sync::Arc;

use crate::domain::entities::drivers::Driver;
use crate::domain::repositories::DriverRepository;
use crate::errors::AppResult;

pub struct GetAllDriversUseCase {
    driver_repo: Arc<dyn DriverRepository>,
}

impl GetAllDriversUseCase {
    pub fn new(driver_repo: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repo }
    }

    pub async fn execute(&self) -> AppResult<Vec<Driver>> {
        let drivers = self.driver_repo.find_all().await?;
        log::debug!("운전자 목록 조회: {}명", drivers.len());
        Ok(drivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::drivers::InMemoryDriverRepository;
    use crate::services::drivers::test_support::saved_driver;

    #[actix_web::test]
    async fn test_get_all_drivers() {
        let repo = Arc::new(InMemoryDriverRepository::new());
        let use_case = GetAllDriversUseCase::new(repo.clone());

        assert!(use_case.execute().await.unwrap().is_empty());

        let first = saved_driver(&repo, "A1").await;
        let second = saved_driver(&repo, "B2").await;

        assert_eq!(use_case.execute().await.unwrap(), vec![first, second]);
    }
}
