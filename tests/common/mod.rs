//! 통합 테스트 공용 헬퍼

use serde_json::{json, Value};

/// 메모리 저장소와 실제 라우트 설정으로 애플리케이션을 초기화합니다.
macro_rules! init_app {
    () => {{
        let use_cases = actix_web::web::Data::new(
            driver_service_backend::core::DriverUseCases::new(std::sync::Arc::new(
                driver_service_backend::repositories::drivers::InMemoryDriverRepository::new(),
            )),
        );

        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(use_cases)
                .wrap(actix_web::middleware::NormalizePath::trim())
                .configure(driver_service_backend::routes::configure_all_routes),
        )
        .await
    }};
}

pub fn driver_body(license: &str) -> Value {
    json!({
        "nombre": "Juan",
        "apellido": "Pérez",
        "licencia": license,
        "telefono": "+34612345678",
        "email": "juan.perez@example.com",
        "fechaNacimiento": "1985-05-15"
    })
}
