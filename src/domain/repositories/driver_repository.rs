//! 운전자 저장소 추상화
//!
//! 유스케이스는 이 trait에만 의존하며, 실제 저장 방식(MongoDB, 메모리)은
//! 인프라 계층의 구현체가 결정합니다.

use async_trait::async_trait;

use crate::domain::entities::drivers::Driver;
use crate::errors::AppResult;

/// 운전자 영속성 인터페이스
///
/// 모든 연산은 비동기이며 저장소 오류 시 `AppError::Database`로 실패할 수 있습니다.
/// 라이선스 중복 검사는 유스케이스가 수행합니다. 구현체가 유니크 제약을 가진 경우
/// 위반은 `AppError::DuplicateLicense`로 보고합니다.
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// 새 레코드를 저장하고 저장된 엔티티를 반환합니다.
    async fn save(&self, driver: Driver) -> AppResult<Driver>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Driver>>;

    /// 저장소의 자연 순서로 모든 레코드를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Driver>>;

    /// `id` 레코드의 필드를 교체합니다. 레코드가 없으면 `None`.
    async fn update(&self, id: &str, driver: Driver) -> AppResult<Option<Driver>>;

    /// 삭제된 레코드가 있으면 `true`.
    async fn delete(&self, id: &str) -> AppResult<bool>;

    async fn find_by_license(&self, license: &str) -> AppResult<Option<Driver>>;
}
