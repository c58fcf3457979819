//! # 유스케이스 컨테이너
//!
//! 저장소 구현체 하나를 받아 모든 운전자 유스케이스를 조립합니다.
//! 전역 레지스트리 없이 `main`(또는 테스트)이 직접 생성하고,
//! `web::Data<DriverUseCases>`로 핸들러에 전달합니다.
//!
//! ```rust,ignore
//! let repo: Arc<dyn DriverRepository> = Arc::new(MongoDriverRepository::new(database));
//! let use_cases = web::Data::new(DriverUseCases::new(repo));
//!
//! HttpServer::new(move || App::new().app_data(use_cases.clone()))
//! ```

use std::sync::Arc;

use crate::domain::repositories::DriverRepository;
use crate::services::drivers::{
    CreateDriverUseCase, DeleteDriverUseCase, GetAllDriversUseCase, GetDriverUseCase,
    UpdateDriverUseCase,
};

/// 핸들러가 사용하는 운전자 유스케이스 묶음
pub struct DriverUseCases {
    pub create: CreateDriverUseCase,
    pub get: GetDriverUseCase,
    pub get_all: GetAllDriversUseCase,
    pub update: UpdateDriverUseCase,
    pub delete: DeleteDriverUseCase,
}

impl DriverUseCases {
    pub fn new(driver_repo: Arc<dyn DriverRepository>) -> Self {
        Self {
            create: CreateDriverUseCase::new(Arc::clone(&driver_repo)),
            get: GetDriverUseCase::new(Arc::clone(&driver_repo)),
            get_all: GetAllDriversUseCase::new(Arc::clone(&driver_repo)),
            update: UpdateDriverUseCase::new(Arc::clone(&driver_repo)),
            delete: DeleteDriverUseCase::new(driver_repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::drivers::InMemoryDriverRepository;
    use crate::services::drivers::test_support::profile;

    #[actix_web::test]
    async fn test_use_cases_share_one_repository() {
        let use_cases = DriverUseCases::new(Arc::new(InMemoryDriverRepository::new()));

        let created = use_cases.create.execute(profile("A1")).await.unwrap();

        assert_eq!(use_cases.get.execute(created.id()).await.unwrap(), created);
        assert_eq!(use_cases.get_all.execute().await.unwrap().len(), 1);
        use_cases.delete.execute(created.id()).await.unwrap();
        assert!(use_cases.get_all.execute().await.unwrap().is_empty());
    }
}
