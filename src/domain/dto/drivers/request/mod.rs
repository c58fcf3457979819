//! 운전자 요청 DTO 모듈

pub mod create_driver_request;
pub mod update_driver_request;

pub use create_driver_request::{CreateDriverRequest, REQUIRED_FIELDS};
pub use update_driver_request::UpdateDriverRequest;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{AppError, AppResult};

/// 생년월일 입력 문자열을 UTC 시각으로 변환합니다.
///
/// 허용 형식:
/// - RFC 3339 (`1985-05-15T10:00:00+02:00`)
/// - 시간대 없는 날짜시간 (`1985-05-15T10:00:00`, UTC로 간주)
/// - 날짜만 (`1985-05-15`, UTC 자정)
pub fn parse_birth_date(raw: &str) -> AppResult<DateTime<Utc>> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(AppError::validation(
            "fechaNacimiento",
            "La fecha de nacimiento es requerida",
        ));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            AppError::validation("fechaNacimiento", "La fecha de nacimiento no es válida")
        })
}
