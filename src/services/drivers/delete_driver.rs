//! 운전자 삭제 유스케이스
//!
//! 존재 여부를 먼저 확인하므로 없는 운전자는 `DriverNotFound`,
//! 확인 이후 저장소가 아무것도 지우지 못한 경우는 `DriverDelete`가 됩니다.

use std::sync::Arc;

use crate::domain::repositories::DriverRepository;
use crate::errors::{AppError, AppResult};

pub struct DeleteDriverUseCase {
    driver_repo: Arc<dyn DriverRepository>,
}

impl DeleteDriverUseCase {
    pub fn new(driver_repo: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repo }
    }

    pub async fn execute(&self, id: &str) -> AppResult<()> {
        if self.driver_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::driver_not_found(id));
        }

        if !self.driver_repo.delete(id).await? {
            log::warn!("운전자 삭제 실패 - 삭제된 문서 없음: {}", id);
            return Err(AppError::driver_delete(id, None));
        }

        log::info!("운전자 삭제 완료: {}", id);
        Ok(())
    }
}
