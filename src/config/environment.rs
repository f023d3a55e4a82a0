//! # Environment Configuration Module
//!
//! 프론트엔드 애플리케이션이 시작 시 읽는 배포별 설정 레코드입니다.
//! API 서버 주소와 Auth0 인증 프로바이더 정보를 하나의 읽기 전용 구조체로 제공합니다.
//!
//! 레코드 자체는 검증을 수행하지 않습니다. 필드 값이 올바른지 확인하는 것은
//! 소비자의 책임이며, 필요한 경우 [`Environment::ensure_valid`]를 호출할 수 있습니다.
//!
//! ## JSON 형식
//!
//! 직렬화 시 필드 이름은 프론트엔드가 사용하는 이름을 그대로 따릅니다.
//!
//! ```text
//! {
//!   "production": false,
//!   "apiServerUrl": "http://127.0.0.1:5000",
//!   "auth0": {
//!     "url": "dahnee.us",
//!     "audience": "coffe",
//!     "clientId": "7W9s2lZonVSCEPm2Z4fy3UvP7bqgWH3A",
//!     "callbackURL": "http://localhost:8100"
//!   }
//! }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use coffee_shop_env::config::Environment;
//!
//! let config = Environment::current();
//! println!("API server: {}", config.api_server_url);
//! println!("Auth0 client: {}", config.auth0.client_id);
//! ```

use log::{info, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::overrides::{self, ProcessEnv};
use crate::config::profile::DeploymentProfile;
use crate::errors::{ConfigError, ConfigResult};

/// 개발 배포의 Flask API 서버 주소
pub const DEFAULT_API_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Auth0 도메인 접두사
pub const DEFAULT_AUTH0_URL: &str = "dahnee.us";
/// Auth0 앱에 설정된 audience
pub const DEFAULT_AUTH0_AUDIENCE: &str = "coffe";
/// Auth0 앱에서 발급한 client id
pub const DEFAULT_AUTH0_CLIENT_ID: &str = "7W9s2lZonVSCEPm2Z4fy3UvP7bqgWH3A";
/// 실행 중인 Ionic 애플리케이션의 기본 URL
pub const DEFAULT_AUTH0_CALLBACK_URL: &str = "http://localhost:8100";

static CURRENT: OnceCell<Environment> = OnceCell::new();

/// Auth0 인증 프로바이더 설정
///
/// 프론트엔드는 이 값들로 Auth0 로그인 페이지를 구성합니다.
/// 모든 값은 클라이언트 사이드에 공개되어도 안전한 정보입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Auth0Config {
    /// Auth0 도메인 접두사
    #[validate(length(min = 1, message = "Auth0 도메인이 필요합니다"))]
    pub url: String,

    /// Auth0 앱에 설정된 audience
    #[validate(length(min = 1, message = "Auth0 audience가 필요합니다"))]
    pub audience: String,

    /// Auth0 앱의 client id
    #[validate(length(min = 1, message = "Auth0 client id가 필요합니다"))]
    pub client_id: String,

    /// 인증 완료 후 리디렉션될 URL
    #[serde(rename = "callbackURL")]
    #[validate(url(message = "callback URL 형식이 올바르지 않습니다"))]
    pub callback_url: String,
}

/// 배포 환경 설정 레코드
///
/// 프로세스 로드 시 한 번 만들어지고 종료까지 변경되지 않습니다.
/// 소비자는 필드를 직접 읽습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Environment {
    /// 프로덕션 빌드 여부
    pub production: bool,

    /// 백엔드 API 서버의 기본 URL
    #[validate(url(message = "API 서버 URL 형식이 올바르지 않습니다"))]
    pub api_server_url: String,

    #[validate(nested)]
    pub auth0: Auth0Config,
}

impl Environment {
    /// 개발 배포용 리터럴 설정을 반환합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = Environment::development();
    /// assert_eq!(config.auth0.client_id, "7W9s2lZonVSCEPm2Z4fy3UvP7bqgWH3A");
    /// ```
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: DEFAULT_API_SERVER_URL.to_string(),
            auth0: Auth0Config {
                url: DEFAULT_AUTH0_URL.to_string(),
                audience: DEFAULT_AUTH0_AUDIENCE.to_string(),
                client_id: DEFAULT_AUTH0_CLIENT_ID.to_string(),
                callback_url: DEFAULT_AUTH0_CALLBACK_URL.to_string(),
            },
        }
    }

    /// 프로세스 환경 변수를 반영한 설정을 만듭니다.
    ///
    /// 리터럴 설정에서 시작하여 값이 있는 변수만 덮어씁니다.
    /// `PRODUCTION`이 없으면 현재 [`DeploymentProfile`]이 플래그를 결정합니다.
    /// 검증은 수행하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::InvalidVariable` - `PRODUCTION` 값을 해석할 수 없는 경우
    pub fn from_env() -> ConfigResult<Self> {
        overrides::resolve(&ProcessEnv, DeploymentProfile::current())
    }

    /// 프로세스 전역 설정을 등록합니다.
    ///
    /// 한 번만 등록할 수 있으며, 등록된 레코드는 종료 시까지 유지됩니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::AlreadyInstalled` - 이미 등록되었거나 `current()`가 먼저 호출된 경우
    pub fn install(environment: Environment) -> ConfigResult<&'static Environment> {
        install_into(&CURRENT, environment)
    }

    /// 프로세스 전역 설정을 반환합니다.
    ///
    /// 등록된 레코드가 없으면 리터럴 개발 설정으로 초기화됩니다.
    /// 여러 스레드에서 동시에 호출해도 항상 같은 인스턴스를 돌려줍니다.
    pub fn current() -> &'static Environment {
        current_in(&CURRENT)
    }

    /// 필드 불변 조건을 검증하고 실패 시 `ConfigError`로 변환합니다.
    ///
    /// - 모든 문자열 필드는 비어 있지 않아야 합니다
    /// - `api_server_url`, `auth0.callback_url`은 올바른 URL 이어야 합니다
    pub fn ensure_valid(&self) -> ConfigResult<()> {
        self.validate()?;
        Ok(())
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 프론트엔드 형식의 JSON에서 설정을 읽습니다.
    ///
    /// 여섯 개 필드 모두 필수이며, 알 수 없는 필드가 있으면 실패합니다.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn install_into(cell: &OnceCell<Environment>, environment: Environment) -> ConfigResult<&Environment> {
    cell.set(environment)
        .map_err(|_| ConfigError::AlreadyInstalled)?;

    let installed = current_in(cell);
    info!(
        "Environment 등록됨 (production: {}, api: {})",
        installed.production, installed.api_server_url
    );
    Ok(installed)
}

fn current_in(cell: &OnceCell<Environment>) -> &Environment {
    cell.get_or_init(|| {
        warn!("등록된 Environment가 없어 개발 설정을 사용합니다");
        Environment::development()
    })
}

impl Default for Environment {
    fn default() -> Self {
        Self::development()
    }
}
