//! # 운전자 등록 유스케이스
//!
//! 라이선스 중복을 확인한 뒤 새 운전자 엔티티를 만들어 저장합니다.
//!
//! ## 처리 과정
//!
//! 1. **중복 검사**: 같은 라이선스를 가진 운전자가 있으면 `DuplicateLicense`
//! 2. **엔티티 생성**: `Driver::create`로 식별자, 타임스탬프, 활성 상태 설정 및 검증
//! 3. **영구 저장**: 리포지토리에 저장 후 저장된 엔티티 반환
//!
//! 1번과 3번 사이의 동시 요청은 저장소의 `licencia` 유니크 인덱스가 차단합니다.

use std::sync::Arc;

use crate::domain::entities::drivers::{Driver, DriverProfile};
use crate::domain::repositories::DriverRepository;
use crate::errors::{AppError, AppResult};

pub struct CreateDriverUseCase {
    driver_repo: Arc<dyn DriverRepository>,
}

impl CreateDriverUseCase {
    pub fn new(driver_repo: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repo }
    }

    /// 새 운전자를 등록합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Driver)` - 저장된 운전자
    /// * `Err(AppError::DuplicateLicense)` - 라이선스 중복
    /// * `Err(AppError::Validation)` - 필드 검증 실패
    /// * `Err(AppError::Database)` - 저장소 실패
    pub async fn execute(&self, profile: DriverProfile) -> AppResult<Driver> {
        if self
            .driver_repo
            .find_by_license(&profile.license)
            .await?
            .is_some()
        {
            log::warn!("운전자 등록 거부 - 라이선스 중복: {}", profile.license);
            return Err(AppError::duplicate_license(&profile.license));
        }

        let driver = Driver::create(profile, None)?;
        let saved = self.driver_repo.save(driver).await?;

        log::info!("운전자 등록 완료: {} ({})", saved.id(), saved.license());
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::drivers::InMemoryDriverRepository;
    use crate::services::drivers::test_support::profile;

    #[actix_web::test]
    async fn test_create_driver_persists_active_driver() {
        let repo = Arc::new(InMemoryDriverRepository::new());
        let use_case = CreateDriverUseCase::new(repo.clone());

        let driver = use_case.execute(profile("ABC123456")).await.unwrap();

        assert!(driver.is_active());
        assert_eq!(driver.created_at(), driver.updated_at());
        assert_eq!(repo.find_by_id(driver.id()).await.unwrap(), Some(driver));
    }

    #[actix_web::test]
    async fn test_create_driver_rejects_duplicate_license() {
        let repo = Arc::new(InMemoryDriverRepository::new());
        let use_case = CreateDriverUseCase::new(repo.clone());

        use_case.execute(profile("ABC123456")).await.unwrap();
        let err = use_case.execute(profile("ABC123456")).await.unwrap_err();

        assert_eq!(err, AppError::duplicate_license("ABC123456"));
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_create_driver_rejects_invalid_email_without_saving() {
        let repo = Arc::new(InMemoryDriverRepository::new());
        let use_case = CreateDriverUseCase::new(repo.clone());

        let err = use_case
            .execute(DriverProfile {
                email: "invalid-email".into(),
                ..profile("ABC123456")
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "email"));
        assert!(repo.is_empty());
    }
}
