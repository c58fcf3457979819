//! 운전자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결을 설정하고 운전자(conductor) CRUD REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use driver_service_backend::config::{DatabaseConfig, Environment, ServerConfig};
use driver_service_backend::core::DriverUseCases;
use driver_service_backend::db::Database;
use driver_service_backend::domain::repositories::DriverRepository;
use driver_service_backend::repositories::drivers::MongoDriverRepository;
use driver_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let profile = load_env_file();
    init_logging();

    info!("🚀 운전자 관리 서비스 시작중... (profile: {})", profile);

    let database = connect_database().await?;

    let repository = MongoDriverRepository::new(Arc::clone(&database));
    if let Err(e) = repository.create_indexes().await {
        warn!("⚠️ 인덱스 생성 실패, 인덱스 없이 계속 진행합니다: {}", e);
    }

    let repository: Arc<dyn DriverRepository> = Arc::new(repository);
    let use_cases = web::Data::new(DriverUseCases::new(repository));

    let result = start_http_server(use_cases).await;

    // 서버 종료 후 연결 정리
    database.close().await;
    info!("👋 운전자 관리 서비스 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// SIGINT/SIGTERM 수신 시 actix가 진행 중인 요청을 마무리한 뒤 반환합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(use_cases: web::Data<DriverUseCases>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/conductores", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(use_cases.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?;

    if let Some(workers) = ServerConfig::workers() {
        server = server.workers(workers);
    }

    server.run().await
}

/// 환경별 설정 파일을 로드하고 사용된 프로파일을 반환합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 실패하지 않습니다. 로거 초기화 전이므로 결과는 stderr로 출력합니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

    let filename = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    match filename {
        Some(name) => {
            if let Err(e) = dotenv::from_filename(name) {
                eprintln!("{} 파일 로드 실패: {}", name, e);
            }
        }
        None => {
            dotenv().ok();
        }
    }

    profile
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=driver_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

/// MongoDB 연결을 초기화합니다
///
/// 연결 실패는 `io::Error`로 변환되어 프로세스가 에러 코드로 종료됩니다.
async fn connect_database() -> io::Result<Arc<Database>> {
    let config = DatabaseConfig::from_env();

    info!("📡 데이터베이스 연결 중... ({})", config.database_name);

    match Database::connect(&config).await {
        Ok(database) => Ok(Arc::new(database)),
        Err(e) => {
            error!("❌ MongoDB 연결 실패: {}", e);
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 모든 Origin을 허용하며, API가 사용하는 메서드와 JSON 헤더만 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
