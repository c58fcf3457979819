//! 단일 운전자 조회 유스케이스

use std::sync::Arc;

use crate::domain::entities::drivers::Driver;
use crate::domain::repositories::DriverRepository;
use crate::errors::{AppError, AppResult};

pub struct GetDriverUseCase {
    driver_repo: Arc<dyn DriverRepository>,
}

impl GetDriverUseCase {
    pub fn new(driver_repo: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repo }
    }

    /// 식별자로 운전자를 조회합니다. 없으면 `DriverNotFound`를 반환합니다.
    pub async fn execute(&self, id: &str) -> AppResult<Driver> {
        self.driver_repo.find_by_id(id).await?.ok_or_else(|| {
            log::debug!("운전자 조회 실패 - 존재하지 않음: {}", id);
            AppError::driver_not_found(id)
        })
    }
}
