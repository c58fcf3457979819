//! # Driver HTTP Handlers
//!
//! 운전자 관리 REST 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 경로는 `/api/conductores` 스코프 아래에 등록됩니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 상태 코드 |
//! |--------|------|------|----------------|
//! | `POST` | `/api/conductores` | 운전자 등록 | 201 Created |
//! | `GET` | `/api/conductores` | 전체 목록 조회 | 200 OK |
//! | `GET` | `/api/conductores/{id}` | 단일 운전자 조회 | 200 OK |
//! | `PUT` | `/api/conductores/{id}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/api/conductores/{id}` | 삭제 | 204 No Content |
//!
//! 실패 응답은 모두 `AppError`의 `ResponseError` 구현을 통해 생성됩니다.
//!
//! ```json
//! { "error": "Conductor con ID 123 no encontrado" }
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::core::DriverUseCases;
use crate::domain::dto::drivers::request::{
    CreateDriverRequest, UpdateDriverRequest, REQUIRED_FIELDS,
};
use crate::domain::dto::drivers::response::DriverResponse;
use crate::errors::AppError;

/// 필수 필드 누락 시 응답 메시지
pub const MISSING_FIELDS_MESSAGE: &str = "Todos los campos son requeridos";

/// 운전자 등록 핸들러
///
/// 필수 필드가 하나라도 없거나 비어 있으면 필드 목록과 함께 400을 응답합니다.
///
/// ```json
/// {
///   "error": "Todos los campos son requeridos",
///   "campos": ["nombre", "apellido", "licencia", "telefono", "email", "fechaNacimiento"]
/// }
/// ```
///
/// # 에러
///
/// * `400` - 필드 누락, 필드 검증 실패, 라이선스 중복, 저장소 실패
#[post("")]
pub async fn create_driver(
    use_cases: web::Data<DriverUseCases>,
    payload: web::Json<CreateDriverRequest>,
) -> Result<HttpResponse, AppError> {
    if payload.validate().is_err() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": MISSING_FIELDS_MESSAGE,
            "campos": REQUIRED_FIELDS,
        })));
    }

    let profile = payload.into_inner().into_profile()?;
    let driver = use_cases.create.execute(profile).await?;

    Ok(HttpResponse::Created().json(DriverResponse::from(driver)))
}

/// 전체 운전자 목록 조회 핸들러
#[get("")]
pub async fn get_all_drivers(
    use_cases: web::Data<DriverUseCases>,
) -> Result<HttpResponse, AppError> {
    let drivers = use_cases.get_all.execute().await?;
    let body: Vec<DriverResponse> = drivers.iter().map(DriverResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

#[get("/{id}")]
pub async fn get_driver(
    use_cases: web::Data<DriverUseCases>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let driver = use_cases.get.execute(&id).await?;
    Ok(HttpResponse::Ok().json(DriverResponse::from(driver)))
}

/// 운전자 부분 수정 핸들러
///
/// 본문에 포함된 필드만 변경되며, 빈 객체는 `fechaActualizacion`만 갱신합니다.
///
/// # 에러
///
/// * `404` - 운전자 없음
/// * `400` - 라이선스 중복, 필드 검증 실패, 수정 실패
#[put("/{id}")]
pub async fn update_driver(
    use_cases: web::Data<DriverUseCases>,
    id: web::Path<String>,
    payload: web::Json<UpdateDriverRequest>,
) -> Result<HttpResponse, AppError> {
    let changes = payload.into_inner().into_changes()?;
    let driver = use_cases.update.execute(&id, changes).await?;

    Ok(HttpResponse::Ok().json(DriverResponse::from(driver)))
}

#[delete("/{id}")]
pub async fn delete_driver(
    use_cases: web::Data<DriverUseCases>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    use_cases.delete.execute(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::repositories::drivers::InMemoryDriverRepository;

    fn use_cases() -> web::Data<DriverUseCases> {
        web::Data::new(DriverUseCases::new(Arc::new(InMemoryDriverRepository::new())))
    }

    fn body() -> Value {
        json!({
            "nombre": "Juan",
            "apellido": "Pérez",
            "licencia": "ABC123456",
            "telefono": "+34612345678",
            "email": "juan.perez@example.com",
            "fechaNacimiento": "1985-05-15"
        })
    }

    #[actix_web::test]
    async fn test_create_driver_missing_fields() {
        let app = test::init_service(
            App::new()
                .app_data(use_cases())
                .service(web::scope("/api/conductores").service(create_driver)),
        )
        .await;

        let mut partial = body();
        partial.as_object_mut().unwrap().remove("telefono");

        let req = test::TestRequest::post()
            .uri("/api/conductores")
            .set_json(&partial)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], MISSING_FIELDS_MESSAGE);
        assert_eq!(json["campos"].as_array().unwrap().len(), 6);
    }

    #[actix_web::test]
    async fn test_create_then_get_driver() {
        let app = test::init_service(
            App::new().app_data(use_cases()).service(
                web::scope("/api/conductores")
                    .service(create_driver)
                    .service(get_driver),
            ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/conductores")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["activo"], true);
        assert_eq!(created["fechaNacimiento"], "1985-05-15T00:00:00.000Z");

        let req = test::TestRequest::get()
            .uri(&format!("/api/conductores/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let fetched: Value = test::read_body_json(resp).await;
        assert_eq!(fetched, created);
    }
}
