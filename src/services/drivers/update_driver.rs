//! # 운전자 수정 유스케이스
//!
//! 부분 수정을 기존 운전자에 적용하고 결과 전체를 재검증한 뒤 저장합니다.
//!
//! ## 규칙
//!
//! - 존재하지 않는 운전자 → `DriverNotFound`
//! - 새 라이선스가 현재 값과 다르고 다른 운전자가 사용 중 → `DuplicateLicense`
//! - 빈 라이선스 문자열은 중복 검사를 건너뛰며, 이후 엔티티 검증에서 거부됨
//! - 조회와 저장 사이에 문서가 사라지면 → `DriverUpdate`

use std::sync::Arc;

use crate::domain::entities::drivers::{Driver, DriverChanges};
use crate::domain::repositories::DriverRepository;
use crate::errors::{AppError, AppResult};

pub struct UpdateDriverUseCase {
    driver_repo: Arc<dyn DriverRepository>,
}

impl UpdateDriverUseCase {
    pub fn new(driver_repo: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repo }
    }

    pub async fn execute(&self, id: &str, changes: DriverChanges) -> AppResult<Driver> {
        let existing = self
            .driver_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::driver_not_found(id))?;

        if let Some(license) = changes.license.as_deref() {
            if !license.is_empty() && license != existing.license() {
                if let Some(holder) = self.driver_repo.find_by_license(license).await? {
                    if holder.id() != existing.id() {
                        log::warn!(
                            "운전자 수정 거부 - 라이선스 중복: {} (요청 ID: {})",
                            license,
                            id
                        );
                        return Err(AppError::duplicate_license(license));
                    }
                }
            }
        }

        let updated = existing.update(changes)?;

        let saved = self
            .driver_repo
            .update(id, updated)
            .await?
            .ok_or_else(|| AppError::driver_update(id, None))?;

        log::info!("운전자 수정 완료: {}", saved.id());
        Ok(saved)
    }
}
