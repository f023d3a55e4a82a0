//! 설정 로딩 과정에서 사용하는 에러 시스템
//!
//! 설정 레코드 자체는 실패하지 않습니다. 이 모듈의 에러는 레코드 주변의
//! 보조 기능(환경 변수 오버라이드, 검증, JSON 변환, 전역 인스턴스 등록)에서만
//! 발생합니다. `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use coffee_shop_env::config::Environment;
//! use coffee_shop_env::errors::ConfigResult;
//!
//! fn resolve() -> ConfigResult<Environment> {
//!     let env = Environment::from_env()?;
//!     env.ensure_valid()?;
//!     Ok(env)
//! }
//! ```

use thiserror::Error;

/// 설정 관련 에러 타입
///
/// 보조 기능에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 필드 검증 실패 (빈 문자열, 잘못된 URL 형식)
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// 환경 변수 값을 해석할 수 없음
    #[error("Invalid value for {name}: '{value}'")]
    InvalidVariable { name: String, value: String },

    /// JSON 직렬화/역직렬화 실패
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 전역 설정 인스턴스가 이미 등록됨
    #[error("Environment has already been installed")]
    AlreadyInstalled,

    /// 그 외 내부 에러
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 외부 라이브러리 에러를 ConfigError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> ConfigResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> ConfigResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> ConfigResult<T> {
        self.map_err(|e| ConfigError::Internal(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ConfigResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ConfigError::Internal(format!("{}: {}", f(), e)))
    }
}
