//! API 라우트 설정 모듈
//!
//! 운전자 REST 엔드포인트와 헬스체크를 애플리케이션에 등록합니다.
//! `main.rs`와 통합 테스트가 같은 [`configure_all_routes`]를 사용하므로
//! 테스트는 실제 서버와 동일한 라우팅, JSON 에러 처리, 404 응답을 검증합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST|GET /api/conductores`
//! - `GET|PUT|DELETE /api/conductores/{id}`
//! - 그 외 모든 경로 - `404 {"error": "Ruta no encontrada"}`
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(DriverUseCases::new(repo)))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::handlers;

/// 등록되지 않은 경로에 대한 응답 메시지
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Ruta no encontrada";

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_driver_routes(cfg);

    cfg.default_service(web::to(route_not_found));
}

/// 운전자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:3000/api/conductores \
///   -H "Content-Type: application/json" \
///   -d '{"nombre":"Juan","apellido":"Pérez","licencia":"ABC123456",
///        "telefono":"+34612345678","email":"juan.perez@example.com",
///        "fechaNacimiento":"1985-05-15"}'
///
/// curl http://localhost:3000/api/conductores
/// ```
fn configure_driver_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/conductores")
            .service(handlers::drivers::create_driver)
            .service(handlers::drivers::get_all_drivers)
            .service(handlers::drivers::get_driver)
            .service(handlers::drivers::update_driver)
            .service(handlers::drivers::delete_driver),
    );
}

/// 잘못된 JSON 본문을 `400 {"error": ...}`로 변환합니다.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);

    let response = HttpResponse::BadRequest().json(json!({
        "error": format!("Cuerpo de la solicitud inválido: {}", err)
    }));
    error::InternalError::from_response(err, response).into()
}

async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": ROUTE_NOT_FOUND_MESSAGE }))
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "API de Transporte funcionando correctamente"
    }))
}
