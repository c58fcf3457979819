//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 설정되지 않은 경우 개발용 기본값을 사용합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Development`를 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::resolve(env::var("ENVIRONMENT").ok().as_deref())
    }

    fn resolve(raw: Option<&str>) -> Self {
        raw.map(Self::from_name).unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경에 맞는 기본 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => "debug,actix_web=info,mongodb=info",
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 3000, 파싱 실패 시에도 기본값)
    pub fn port() -> u16 {
        Self::parse_port(env::var("PORT").ok().as_deref())
    }

    fn parse_port(raw: Option<&str>) -> u16 {
        raw.and_then(|p| p.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_PORT)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 수. `WORKERS`가 없거나 잘못된 경우 actix 기본값(CPU 수)을 사용합니다.
    pub fn workers() -> Option<usize> {
        env::var("WORKERS")
            .ok()
            .and_then(|w| w.parse::<usize>().ok())
            .filter(|w| *w > 0)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_DATABASE: &'static str = "transport-db";

    /// 운전자 문서를 저장하는 컬렉션 이름
    pub const DRIVERS_COLLECTION: &'static str = "conductores";

    /// 환경 변수에서 연결 설정을 읽습니다.
    ///
    /// - `MONGODB_URI` (기본값: `mongodb://localhost:27017`)
    /// - `DATABASE_NAME` (기본값: `transport-db`)
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string()),
        }
    }
}
