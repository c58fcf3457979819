//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! 연결 핸들은 프로세스 시작 시 한 번 생성되어 `Arc<Database>`로 리포지토리에
//! 명시적으로 전달됩니다. 전역 싱글톤은 사용하지 않습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::connect(&DatabaseConfig::from_env()).await?);
//! let repository = MongoDriverRepository::new(Arc::clone(&database));
//! // ... 서버 종료 후
//! database.close().await;
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::errors::AppResult;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `mongodb::Client`는 내부적으로 커넥션 풀을 공유하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// URI를 파싱해 클라이언트를 만들고 `ping` 명령으로 연결 상태를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Database` - URI 파싱 실패 또는 서버 응답 없음
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (서버 측 모니터링에 표시됨)
        client_options.app_name = Some("driver_service".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let drivers = database.get_database().collection::<DriverDocument>("conductores");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 연결을 정상 종료합니다.
    ///
    /// 진행 중인 작업이 끝나기를 기다린 뒤 커넥션 풀을 닫습니다.
    /// 종료 이후의 리포지토리 호출은 저장소 에러로 실패합니다.
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("✅ MongoDB 연결 종료: {}", self.database_name);
    }
}
