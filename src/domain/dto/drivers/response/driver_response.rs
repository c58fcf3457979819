use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::drivers::Driver;

/// 운전자 응답 DTO
///
/// 날짜는 밀리초 정밀도의 ISO-8601 문자열(`Z` 접미사)로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverResponse {
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
    pub birth_date: String,

    #[serde(rename = "activo")]
    pub active: bool,

    #[serde(rename = "fechaCreacion")]
    pub created_at: String,

    #[serde(rename = "fechaActualizacion")]
    pub updated_at: String,
}

fn iso_8601(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&Driver> for DriverResponse {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id().to_string(),
            first_name: driver.first_name().to_string(),
            last_name: driver.last_name().to_string(),
            license: driver.license().to_string(),
            phone: driver.phone().to_string(),
            email: driver.email().to_string(),
            birth_date: iso_8601(driver.birth_date()),
            active: driver.is_active(),
            created_at: iso_8601(driver.created_at()),
            updated_at: iso_8601(driver.updated_at()),
        }
    }
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        DriverResponse::from(&driver)
    }
}
