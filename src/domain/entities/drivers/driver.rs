//! Driver Entity Implementation
//!
//! 운전자(conductor) 엔티티의 핵심 구현체입니다.
//! 엔티티는 불변이며, 생성과 수정은 항상 검증을 통과한 새 인스턴스를 반환합니다.
//!
//! # 불변식
//!
//! - 이름, 성, 라이선스, 전화번호는 공백 제거 후 비어 있지 않아야 함
//! - 이메일은 `local@domain.tld` 형식이어야 함
//! - 생년월일은 항상 존재 (타입으로 보장)
//! - 수정 시 `id`와 `created_at`은 유지되고 `updated_at`만 갱신됨

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::domain::validators::{is_valid_email, require_non_blank};
use crate::errors::{AppError, AppResult};

/// 운전자 엔티티
///
/// 필드는 외부에서 직접 변경할 수 없으며, [`Driver::create`], [`Driver::update`],
/// [`Driver::restore`]를 통해서만 인스턴스가 만들어집니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    id: String,
    first_name: String,
    last_name: String,
    license: String,
    phone: String,
    email: String,
    birth_date: DateTime<Utc>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// 신규 운전자 생성에 필요한 필드
#[derive(Debug, Clone)]
pub struct DriverProfile {
    pub first_name: String,
    pub last_name: String,
    pub license: String,
    pub phone: String,
    pub email: String,
    pub birth_date: DateTime<Utc>,
}

/// 부분 수정 내용
///
/// `None`인 필드는 기존 값을 그대로 유지합니다.
#[derive(Debug, Clone, Default)]
pub struct DriverChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub active: Option<bool>,
}

/// 저장소에서 읽어온 전체 레코드
///
/// 저장소 구현체가 문서를 엔티티로 복원할 때 사용합니다.
#[derive(Debug, Clone)]
pub struct DriverRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub license: String,
    pub phone: String,
    pub email: String,
    pub birth_date: DateTime<Utc>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    /// 새 운전자 생성
    ///
    /// `id`가 없거나 빈 문자열이면 UUID v7을 발급합니다.
    /// 생성 시각과 수정 시각은 동일한 값으로 설정되고, `active`는 `true`로 시작합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Validation` - 필드 검증 실패 (필드명 포함)
    pub fn create(profile: DriverProfile, id: Option<String>) -> AppResult<Self> {
        let now = current_timestamp();
        let id = id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_id);

        Self::restore(DriverRecord {
            id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            license: profile.license,
            phone: profile.phone,
            email: profile.email,
            birth_date: profile.birth_date,
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// 부분 수정을 적용한 새 인스턴스를 반환합니다.
    ///
    /// 변경된 필드만이 아니라 결과 레코드 전체를 다시 검증합니다.
    pub fn update(&self, changes: DriverChanges) -> AppResult<Self> {
        Self::restore(DriverRecord {
            id: self.id.clone(),
            first_name: changes.first_name.unwrap_or_else(|| self.first_name.clone()),
            last_name: changes.last_name.unwrap_or_else(|| self.last_name.clone()),
            license: changes.license.unwrap_or_else(|| self.license.clone()),
            phone: changes.phone.unwrap_or_else(|| self.phone.clone()),
            email: changes.email.unwrap_or_else(|| self.email.clone()),
            birth_date: changes.birth_date.unwrap_or(self.birth_date),
            active: changes.active.unwrap_or(self.active),
            created_at: self.created_at,
            updated_at: current_timestamp().max(self.created_at),
        })
    }

    /// 저장된 레코드로부터 엔티티를 복원합니다.
    pub fn restore(record: DriverRecord) -> AppResult<Self> {
        let driver = Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            license: record.license,
            phone: record.phone,
            email: record.email,
            birth_date: record.birth_date,
            active: record.active,
            created_at: record.created_at,
            updated_at: record.updated_at,
        };
        driver.validate()?;
        Ok(driver)
    }

    fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.first_name, "nombre", "El nombre es requerido")?;
        require_non_blank(&self.last_name, "apellido", "El apellido es requerido")?;
        require_non_blank(&self.license, "licencia", "La licencia es requerida")?;
        if !is_valid_email(&self.email) {
            return Err(AppError::validation("email", "El email no es válido"));
        }
        require_non_blank(&self.phone, "telefono", "El teléfono es requerido")?;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// 밀리초 단위로 자른 현재 시각 (BSON DateTime 정밀도와 일치)
fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
