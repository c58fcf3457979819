//! 운전자 수정 요청 DTO
//!
//! `PUT /api/conductores/{id}` 본문입니다. 생성 필드의 임의 부분집합과
//! `activo` 플래그를 받을 수 있으며, 생략되거나 `null`인 필드는 기존 값을 유지합니다.

use serde::{Deserialize, Serialize};

use super::parse_birth_date;
use crate::domain::entities::drivers::DriverChanges;
use crate::errors::AppResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDriverRequest {
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,

    #[serde(rename = "apellido")]
    pub last_name: Option<String>,

    #[serde(rename = "licencia")]
    pub license: Option<String>,

    #[serde(rename = "telefono")]
    pub phone: Option<String>,

    pub email: Option<String>,

    #[serde(rename = "fechaNacimiento")]
    pub birth_date: Option<String>,

    #[serde(rename = "activo")]
    pub active: Option<bool>,
}

impl UpdateDriverRequest {
    /// 요청을 엔티티 부분 수정 내용으로 변환합니다.
    ///
    /// 생략되거나 `null`인 생년월일만 "변경 없음"입니다.
    /// 빈 문자열은 `fechaNacimiento` 검증 에러가 됩니다.
    pub fn into_changes(self) -> AppResult<DriverChanges> {
        let birth_date = self.birth_date.as_deref().map(parse_birth_date).transpose()?;

        Ok(DriverChanges {
            first_name: self.first_name,
            last_name: self.last_name,
            license: self.license,
            phone: self.phone,
            email: self.email,
            birth_date,
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_body() {
        let request: UpdateDriverRequest =
            serde_json::from_value(json!({ "telefono": "+34600000000", "activo": false })).unwrap();

        let changes = request.into_changes().unwrap();
        assert_eq!(changes.phone.as_deref(), Some("+34600000000"));
        assert_eq!(changes.active, Some(false));
        assert!(changes.license.is_none());
        assert!(changes.birth_date.is_none());
    }

    #[test]
    fn test_birth_date_is_parsed() {
        let request: UpdateDriverRequest =
            serde_json::from_value(json!({ "fechaNacimiento": "1990-08-20T10:30:00Z" })).unwrap();

        let changes = request.into_changes().unwrap();
        assert_eq!(
            changes.birth_date.unwrap().to_rfc3339(),
            "1990-08-20T10:30:00+00:00"
        );
    }

    #[test]
    fn test_empty_birth_date_is_rejected() {
        let request: UpdateDriverRequest =
            serde_json::from_value(json!({ "fechaNacimiento": "" })).unwrap();

        assert_eq!(
            request.into_changes().unwrap_err(),
            crate::errors::AppError::validation(
                "fechaNacimiento",
                "La fecha de nacimiento es requerida"
            )
        );
    }
}
