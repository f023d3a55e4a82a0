//! 환경 변수 기반 설정 오버라이드
//!
//! 리터럴 개발 설정 위에 배포별 값을 덮어씁니다.
//! 값의 출처는 [`VarSource`] trait으로 추상화되어 있어,
//! 테스트에서는 프로세스 환경 대신 `HashMap`을 사용할 수 있습니다.
//!
//! ## 지원하는 환경 변수
//!
//! ```bash
//! export PRODUCTION="true"
//! export API_SERVER_URL="https://api.example.com"
//! export AUTH0_URL="coffee-shop"
//! export AUTH0_AUDIENCE="coffee"
//! export AUTH0_CLIENT_ID="your-auth0-client-id"
//! export AUTH0_CALLBACK_URL="https://shop.example.com"
//! ```

use std::collections::HashMap;
use std::env;

use log::debug;

use crate::config::environment::Environment;
use crate::config::profile::DeploymentProfile;
use crate::errors::{ConfigError, ConfigResult};

pub const PRODUCTION_VAR: &str = "PRODUCTION";
pub const API_SERVER_URL_VAR: &str = "API_SERVER_URL";
pub const AUTH0_URL_VAR: &str = "AUTH0_URL";
pub const AUTH0_AUDIENCE_VAR: &str = "AUTH0_AUDIENCE";
pub const AUTH0_CLIENT_ID_VAR: &str = "AUTH0_CLIENT_ID";
pub const AUTH0_CALLBACK_URL_VAR: &str = "AUTH0_CALLBACK_URL";

/// 설정 값의 출처
pub trait VarSource {
    /// 변수 값을 반환합니다. 설정되지 않은 경우 `None`.
    fn var(&self, name: &str) -> Option<String>;
}

/// 프로세스 환경 변수
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl VarSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// 빈 문자열은 설정되지 않은 것으로 취급
fn non_empty(source: &impl VarSource, name: &str) -> Option<String> {
    source
        .var(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `PRODUCTION` 값을 불리언으로 해석합니다.
///
/// `true/false/1/0/yes/no`를 대소문자 구분 없이 허용합니다.
pub fn parse_flag(name: &str, value: &str) -> ConfigResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidVariable {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// 리터럴 설정에 오버라이드를 적용한 새 레코드를 만듭니다.
///
/// # Arguments
///
/// * `source` - 변수 출처
/// * `profile` - `PRODUCTION`이 없을 때 플래그 기본값을 결정하는 프로파일
///
/// # Errors
///
/// * `ConfigError::InvalidVariable` - `PRODUCTION` 값을 해석할 수 없는 경우
pub fn resolve(source: &impl VarSource, profile: DeploymentProfile) -> ConfigResult<Environment> {
    let mut environment = Environment::development();

    environment.production = match non_empty(source, PRODUCTION_VAR) {
        Some(value) => parse_flag(PRODUCTION_VAR, &value)?,
        None => profile.is_production(),
    };

    let string_overrides: [(&str, &mut String); 5] = [
        (API_SERVER_URL_VAR, &mut environment.api_server_url),
        (AUTH0_URL_VAR, &mut environment.auth0.url),
        (AUTH0_AUDIENCE_VAR, &mut environment.auth0.audience),
        (AUTH0_CLIENT_ID_VAR, &mut environment.auth0.client_id),
        (AUTH0_CALLBACK_URL_VAR, &mut environment.auth0.callback_url),
    ];

    for (name, field) in string_overrides {
        if let Some(value) = non_empty(source, name) {
            debug!("{} 오버라이드 적용", name);
            *field = value;
        }
    }

    Ok(environment)
}
