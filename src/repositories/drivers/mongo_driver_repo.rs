//! # MongoDB 운전자 리포지토리 구현
//!
//! [`DriverRepository`]를 MongoDB `conductores` 컬렉션 위에 구현합니다.
//! 엔티티와 저장 문서 사이의 매핑도 이 모듈이 담당합니다.
//!
//! ## 컬렉션 구조
//!
//! - **컬렉션명**: `conductores`
//! - **식별자**: 애플리케이션이 발급한 `id` 필드 (UUID v7 문자열). MongoDB `_id`는 사용하지 않음
//! - **인덱스**: `id`(unique), `licencia`(unique)
//!
//! ## 에러 처리
//!
//! - 드라이버 에러는 `AppError::Database`로 변환됩니다.
//! - `licencia` 유니크 인덱스 위반(E11000)은 `AppError::DuplicateLicense`로 변환됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::bson::{self, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::domain::entities::drivers::{Driver, DriverRecord};
use crate::domain::repositories::DriverRepository;
use crate::errors::{AppError, AppResult, ErrorContext};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

const ID_INDEX: &str = "id_unique";
const LICENSE_INDEX: &str = "licencia_unique";

/// `conductores` 컬렉션에 저장되는 문서 형태
///
/// 필드명은 기존 컬렉션과 호환되도록 스페인어 키를 사용합니다.
/// 문서의 `_id`는 역직렬화 시 무시됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverDocument {
    pub id: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "licencia")]
    pub license: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: bson::DateTime,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "fechaCreacion")]
    pub created_at: bson::DateTime,
    #[serde(rename = "fechaActualizacion")]
    pub updated_at: bson::DateTime,
}

impl From<&Driver> for DriverDocument {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id().to_string(),
            first_name: driver.first_name().to_string(),
            last_name: driver.last_name().to_string(),
            license: driver.license().to_string(),
            phone: driver.phone().to_string(),
            email: driver.email().to_string(),
            birth_date: to_bson_date(driver.birth_date()),
            active: driver.is_active(),
            created_at: to_bson_date(driver.created_at()),
            updated_at: to_bson_date(driver.updated_at()),
        }
    }
}

impl TryFrom<DriverDocument> for Driver {
    type Error = AppError;

    fn try_from(document: DriverDocument) -> AppResult<Self> {
        Driver::restore(DriverRecord {
            birth_date: from_bson_date(document.birth_date)?,
            created_at: from_bson_date(document.created_at)?,
            updated_at: from_bson_date(document.updated_at)?,
            id: document.id,
            first_name: document.first_name,
            last_name: document.last_name,
            license: document.license,
            phone: document.phone,
            email: document.email,
            active: document.active,
        })
    }
}

fn to_bson_date(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

fn from_bson_date(value: bson::DateTime) -> AppResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).ok_or_else(|| {
        AppError::Database(format!(
            "Fecha fuera de rango en documento: {}",
            value.timestamp_millis()
        ))
    })
}

/// 중복 키(E11000) 에러의 서버 메시지. 다른 에러는 `None`.
fn duplicate_key_message(error: &mongodb::error::Error) -> Option<&str> {
    match &*error.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(&write_error.message)
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            Some(&command_error.message)
        }
        _ => None,
    }
}

/// E11000 메시지가 `licencia` 유니크 인덱스 위반인지 확인합니다.
///
/// 서버 메시지 형식: `E11000 duplicate key error collection: db.conductores index: licencia_unique dup key: ...`
fn violates_license_index(message: &str) -> bool {
    message.contains(&format!("index: {}", LICENSE_INDEX))
}

/// 쓰기 에러를 변환합니다. `licencia` 인덱스 위반만 도메인 에러로 승격됩니다.
fn map_write_error(error: mongodb::error::Error, license: &str) -> AppError {
    let license_conflict =
        duplicate_key_message(&error).is_some_and(violates_license_index);

    if license_conflict {
        warn!("⚠️ 저장소 유니크 인덱스가 라이선스 중복을 차단: {}", license);
        AppError::duplicate_license(license)
    } else {
        AppError::from(error)
    }
}

/// 운전자 데이터 액세스 리포지토리 (MongoDB)
///
/// 데이터베이스 핸들은 생성 시점에 명시적으로 주입됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoDriverRepository::new(Arc::clone(&database));
/// repo.create_indexes().await?;
///
/// let saved = repo.save(driver).await?;
/// let found = repo.find_by_license("ABC123456").await?;
/// ```
pub struct MongoDriverRepository {
    db: Arc<Database>,
}

impl MongoDriverRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<DriverDocument> {
        self.db
            .get_database()
            .collection::<DriverDocument>(DatabaseConfig::DRIVERS_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **id 유니크 인덱스** - 식별자 조회 최적화
    /// 2. **licencia 유니크 인덱스** - 동시 생성 시 중복 라이선스 차단
    ///
    /// 기존 데이터에 중복이 있으면 생성이 실패하며 `AppError::Database`를 반환합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(ID_INDEX.to_string())
                    .build(),
            )
            .build();

        let license_index = IndexModel::builder()
            .keys(doc! { "licencia": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(LICENSE_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([id_index, license_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl DriverRepository for MongoDriverRepository {
    async fn save(&self, driver: Driver) -> AppResult<Driver> {
        let document = DriverDocument::from(&driver);

        self.collection()
            .insert_one(&document)
            .await
            .map_err(|e| map_write_error(e, driver.license()))?;

        debug!("운전자 저장 완료: {}", driver.id());
        Ok(driver)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Driver>> {
        self.collection()
            .find_one(doc! { "id": id })
            .await?
            .map(Driver::try_from)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Driver>> {
        let documents: Vec<DriverDocument> = self
            .collection()
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Driver::try_from).collect()
    }

    async fn update(&self, id: &str, driver: Driver) -> AppResult<Option<Driver>> {
        let changes = bson::to_document(&DriverDocument::from(&driver))
            .context("운전자 문서 직렬화 실패")?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "id": id }, doc! { "$set": changes })
            .with_options(options)
            .await
            .map_err(|e| map_write_error(e, driver.license()))?
            .map(Driver::try_from)
            .transpose()
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection().delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn find_by_license(&self, license: &str) -> AppResult<Option<Driver>> {
        self.collection()
            .find_one(doc! { "licencia": license })
            .await?
            .map(Driver::try_from)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::drivers::DriverProfile;
    use chrono::TimeZone;

    fn driver() -> Driver {
        Driver::create(
            DriverProfile {
                first_name: "Juan".into(),
                last_name: "Pérez".into(),
                license: "ABC123456".into(),
                phone: "+34612345678".into(),
                email: "juan.perez@example.com".into(),
                birth_date: Utc.with_ymd_and_hms(1985, 5, 15, 0, 0, 0).unwrap(),
            },
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_document_uses_spanish_keys() {
        let document = bson::to_document(&DriverDocument::from(&driver())).unwrap();

        for key in [
            "id",
            "nombre",
            "apellido",
            "licencia",
            "telefono",
            "email",
            "fechaNacimiento",
            "activo",
            "fechaCreacion",
            "fechaActualizacion",
        ] {
            assert!(document.contains_key(key), "missing key {}", key);
        }
        assert!(!document.contains_key("_id"));
        assert!(document.get_datetime("fechaNacimiento").is_ok());
    }

    #[test]
    fn test_document_maps_back_to_same_entity() {
        let original = driver();

        let mut stored = bson::to_document(&DriverDocument::from(&original)).unwrap();
        stored.insert("_id", bson::oid::ObjectId::new());

        let document: DriverDocument = bson::from_document(stored).unwrap();
        let restored = Driver::try_from(document).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn test_only_license_index_violation_is_duplicate_license() {
        assert!(violates_license_index(
            "E11000 duplicate key error collection: transport-db.conductores \
             index: licencia_unique dup key: { licencia: \"ABC123456\" }"
        ));
        assert!(!violates_license_index(
            "E11000 duplicate key error collection: transport-db.conductores \
             index: id_unique dup key: { id: \"driver-1\" }"
        ));
    }

    #[test]
    fn test_invalid_stored_document_is_rejected() {
        let mut document = DriverDocument::from(&driver());
        document.email = "broken".into();

        assert!(matches!(
            Driver::try_from(document),
            Err(AppError::Validation { .. })
        ));
    }
}
