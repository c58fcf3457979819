//! 운전자 생성 요청 DTO
//!
//! `POST /api/conductores` 본문을 표현합니다. 모든 필드가 필수이며,
//! 하나라도 빠지면 핸들러가 필수 필드 목록과 함께 400을 응답합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::parse_birth_date;
use crate::domain::entities::drivers::DriverProfile;
use crate::errors::AppResult;

/// 생성 요청에서 반드시 제공되어야 하는 필드 이름 (응답 본문의 `campos`)
pub const REQUIRED_FIELDS: [&str; 6] = [
    "nombre",
    "apellido",
    "licencia",
    "telefono",
    "email",
    "fechaNacimiento",
];

/// 새 운전자 등록 요청
///
/// 필드는 모두 `Option`으로 받아서 누락을 JSON 파싱 에러가 아닌
/// 검증 단계에서 판단합니다. 빈 문자열도 누락으로 취급합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[serde(rename = "nombre")]
    #[validate(required, length(min = 1))]
    pub first_name: Option<String>,

    #[serde(rename = "apellido")]
    #[validate(required, length(min = 1))]
    pub last_name: Option<String>,

    #[serde(rename = "licencia")]
    #[validate(required, length(min = 1))]
    pub license: Option<String>,

    #[serde(rename = "telefono")]
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    /// `YYYY-MM-DD` 또는 RFC 3339 문자열
    #[serde(rename = "fechaNacimiento")]
    #[validate(required, length(min = 1))]
    pub birth_date: Option<String>,
}

impl CreateDriverRequest {
    /// 검증을 통과한 요청을 엔티티 생성 입력으로 변환합니다.
    ///
    /// 생년월일 문자열을 날짜 값으로 변환하며, 형식이 잘못된 경우
    /// `fechaNacimiento` 필드의 검증 에러를 반환합니다.
    pub fn into_profile(self) -> AppResult<DriverProfile> {
        let birth_date = parse_birth_date(self.birth_date.as_deref().unwrap_or_default())?;

        Ok(DriverProfile {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            license: self.license.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            birth_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use serde_json::json;

    fn full_request() -> CreateDriverRequest {
        serde_json::from_value(json!({
            "nombre": "Juan",
            "apellido": "Pérez",
            "licencia": "ABC123456",
            "telefono": "+34612345678",
            "email": "juan.perez@example.com",
            "fechaNacimiento": "1985-05-15"
        }))
        .unwrap()
    }

    #[test]
    fn test_complete_request_is_valid() {
        let request = full_request();
        assert!(request.validate().is_ok());

        let profile = request.into_profile().unwrap();
        assert_eq!(profile.first_name, "Juan");
        assert_eq!(profile.birth_date.to_rfc3339(), "1985-05-15T00:00:00+00:00");
    }

    #[test]
    fn test_missing_and_empty_fields_fail_validation() {
        let partial: CreateDriverRequest =
            serde_json::from_value(json!({ "nombre": "Juan", "apellido": "Pérez" })).unwrap();
        assert!(partial.validate().is_err());

        let empty = CreateDriverRequest {
            license: Some(String::new()),
            ..full_request()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_unparseable_birth_date() {
        let request = CreateDriverRequest {
            birth_date: Some("15/05/1985".to_string()),
            ..full_request()
        };

        let err = request.into_profile().unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "fechaNacimiento"));
    }
}
