//! # 메모리 운전자 리포지토리
//!
//! 프로세스 내부 `Vec`에 운전자를 보관하는 [`DriverRepository`] 구현체입니다.
//! 통합 테스트에서 MongoDB 대신 사용하며, 삽입 순서를 자연 순서로 유지합니다.
//! MongoDB 컬렉션의 `id`/`licencia` 유니크 인덱스와 동일한 제약을 흉내냅니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::drivers::Driver;
use crate::domain::repositories::DriverRepository;
use crate::errors::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryDriverRepository {
    drivers: RwLock<Vec<Driver>>,
}

impl InMemoryDriverRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 운전자 수
    pub fn len(&self) -> usize {
        self.read().map(|drivers| drivers.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Driver>>> {
        self.drivers
            .read()
            .map_err(|_| AppError::Internal("driver store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Driver>>> {
        self.drivers
            .write()
            .map_err(|_| AppError::Internal("driver store lock poisoned".to_string()))
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn save(&self, driver: Driver) -> AppResult<Driver> {
        let mut drivers = self.write()?;

        if drivers.iter().any(|d| d.id() == driver.id()) {
            return Err(AppError::Database(format!(
                "E11000 duplicate key error: id {}",
                driver.id()
            )));
        }
        if drivers.iter().any(|d| d.license() == driver.license()) {
            return Err(AppError::duplicate_license(driver.license()));
        }

        drivers.push(driver.clone());
        Ok(driver)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Driver>> {
        Ok(self.read()?.iter().find(|d| d.id() == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Driver>> {
        Ok(self.read()?.clone())
    }

    async fn update(&self, id: &str, driver: Driver) -> AppResult<Option<Driver>> {
        let mut drivers = self.write()?;

        let Some(position) = drivers.iter().position(|d| d.id() == id) else {
            return Ok(None);
        };

        if drivers
            .iter()
            .any(|d| d.id() != id && d.license() == driver.license())
        {
            return Err(AppError::duplicate_license(driver.license()));
        }

        drivers[position] = driver.clone();
        Ok(Some(driver))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut drivers = self.write()?;
        let before = drivers.len();
        drivers.retain(|d| d.id() != id);
        Ok(drivers.len() < before)
    }

    async fn find_by_license(&self, license: &str) -> AppResult<Option<Driver>> {
        Ok(self.read()?.iter().find(|d| d.license() == license).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::drivers::{DriverChanges, DriverProfile};
    use chrono::Utc;

    fn driver(license: &str) -> Driver {
        Driver::create(
            DriverProfile {
                first_name: "Juan".into(),
                last_name: "Pérez".into(),
                license: license.into(),
                phone: "+34612345678".into(),
                email: "juan.perez@example.com".into(),
                birth_date: Utc::now(),
            },
            None,
        )
        .unwrap()
    }

    #[actix_web::test]
    async fn test_save_and_find() {
        let repo = InMemoryDriverRepository::new();
        let saved = repo.save(driver("A1")).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id()).await.unwrap(), Some(saved.clone()));
        assert_eq!(repo.find_by_license("A1").await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryDriverRepository::new();
        let first = repo.save(driver("A1")).await.unwrap();
        let second = repo.save(driver("B2")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[actix_web::test]
    async fn test_license_constraint() {
        let repo = InMemoryDriverRepository::new();
        repo.save(driver("A1")).await.unwrap();

        let err = repo.save(driver("A1")).await.unwrap_err();
        assert_eq!(err, AppError::duplicate_license("A1"));
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_update_and_delete_report_absence() {
        let repo = InMemoryDriverRepository::new();
        let saved = repo.save(driver("A1")).await.unwrap();

        let changed = saved
            .update(DriverChanges {
                phone: Some("+34000000000".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(repo.update("missing", changed.clone()).await.unwrap(), None);
        assert_eq!(
            repo.update(saved.id(), changed.clone()).await.unwrap(),
            Some(changed)
        );

        assert!(repo.delete(saved.id()).await.unwrap());
        assert!(!repo.delete(saved.id()).await.unwrap());
        assert!(repo.is_empty());
    }

    #[actix_web::test]
    async fn test_update_missing_id_ignores_license_holder() {
        let repo = InMemoryDriverRepository::new();
        let holder = repo.save(driver("A1")).await.unwrap();

        assert_eq!(repo.update("missing", holder.clone()).await.unwrap(), None);
        assert_eq!(repo.find_all().await.unwrap(), vec![holder]);
    }

    #[actix_web::test]
    async fn test_update_to_license_of_other_driver() {
        let repo = InMemoryDriverRepository::new();
        repo.save(driver("A1")).await.unwrap();
        let second = repo.save(driver("B2")).await.unwrap();

        let changed = second
            .update(DriverChanges {
                license: Some("A1".into()),
                ..Default::default()
            })
            .unwrap();

        let err = repo.update(second.id(), changed).await.unwrap_err();
        assert_eq!(err, AppError::duplicate_license("A1"));
        assert_eq!(repo.find_by_id(second.id()).await.unwrap(), Some(second));
    }
}
