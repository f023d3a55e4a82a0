//! 배포 프로파일 선택 및 `.env` 파일 로딩
//!
//! `PROFILE` 환경 변수에 따라 어떤 배포 변형(개발/운영)을 사용할지 결정하고,
//! 해당 프로파일의 `.env` 파일을 프로세스 환경에 로드합니다.
//! 프로파일 해석은 [`DeploymentProfile::parse`] 한 곳에서만 이루어지므로,
//! `production` 플래그의 기본값과 로드되는 파일이 항상 일치합니다.

use std::env;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::errors::{ConfigError, ConfigResult, ErrorContext};

/// 프로파일을 선택하는 환경 변수 이름
pub const PROFILE_VAR: &str = "PROFILE";

/// 알 수 없는 프로파일일 때 로드하는 파일
pub const DEFAULT_ENV_FILE: &str = ".env";

/// 배포 프로파일
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentProfile {
    /// 개발 환경 - 로컬 API 서버와 로컬 Ionic 앱
    Development,
    /// 운영 환경 - 프로덕션 빌드
    Production,
}

impl DeploymentProfile {
    /// 현재 프로파일을 감지합니다.
    ///
    /// `PROFILE` 환경 변수를 확인하며, 설정되지 않았거나 알 수 없는 값이면
    /// `Development`를 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&profile_name())
    }

    /// 프로파일 이름을 해석합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 프로파일 이름 (대소문자 무관, 앞뒤 공백 무시)
    ///
    /// # Returns
    ///
    /// * `Some(DeploymentProfile)` - `dev`, `development`, `prod`, `production`
    /// * `None` - 그 외의 값
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Some(DeploymentProfile::Development),
            "prod" | "production" => Some(DeploymentProfile::Production),
            _ => None,
        }
    }

    /// 문자열에서 DeploymentProfile을 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Development`를 반환합니다.
    pub fn from_str(s: &str) -> Self {
        Self::parse(s).unwrap_or(DeploymentProfile::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, DeploymentProfile::Production)
    }

    /// 프로파일에 대응하는 `.env` 파일 이름
    pub fn env_file(&self) -> &'static str {
        match self {
            DeploymentProfile::Development => ".env.dev",
            DeploymentProfile::Production => ".env.prod",
        }
    }
}

fn profile_name() -> String {
    env::var(PROFILE_VAR).unwrap_or_else(|_| "dev".to_string())
}

/// `.env` 파일 로드 결과
///
/// 로거가 초기화되기 전에 로드가 일어나므로, 결과를 보관했다가
/// [`EnvFileLoad::log`]로 나중에 출력합니다.
#[derive(Debug)]
pub struct EnvFileLoad {
    /// `PROFILE`에 설정된 원래 값
    pub profile_name: String,
    /// 해석된 프로파일. 알 수 없는 이름이면 `None`
    pub profile: Option<DeploymentProfile>,
    /// 로드를 시도한 파일 경로
    pub path: PathBuf,
    /// 로드 실패 원인
    pub error: Option<ConfigError>,
}

impl EnvFileLoad {
    pub fn is_loaded(&self) -> bool {
        self.error.is_none()
    }

    /// 로드 결과를 로그로 출력합니다.
    ///
    /// 파일이 없는 것은 치명적인 오류가 아니므로 로그만 남깁니다.
    pub fn log(&self) {
        info!("Current profile: {}", self.profile_name);

        match &self.error {
            None => info!("{} 파일 로드 됨", self.path.display()),
            Some(e) => error!("{}", e),
        }
    }
}

/// 현재 작업 디렉터리에서 프로파일별 `.env` 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` / `development` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` / `production` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
pub fn load_env_file() -> EnvFileLoad {
    let dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_env_file_in(&dir)
}

/// 지정한 디렉터리에서 프로파일별 `.env` 파일을 로드합니다
///
/// 이미 설정된 프로세스 환경 변수는 덮어쓰지 않습니다.
pub fn load_env_file_in(dir: &Path) -> EnvFileLoad {
    let profile_name = profile_name();
    let profile = DeploymentProfile::parse(&profile_name);

    let file = profile.map_or(DEFAULT_ENV_FILE, |p| p.env_file());
    let path = dir.join(file);

    let error = load_path(&path).err();

    EnvFileLoad {
        profile_name,
        profile,
        path,
        error,
    }
}

fn load_path(path: &Path) -> ConfigResult<()> {
    dotenv::from_path(path).with_context(|| format!("{} 파일 로드 실패", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    const MARK_VAR: &str = "COFFEE_SHOP_ENV_FILE_MARK";

    fn with_profile<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(PROFILE_VAR).ok();
        match value {
            Some(v) => unsafe { env::set_var(PROFILE_VAR, v) },
            None => unsafe { env::remove_var(PROFILE_VAR) },
        }

        f();

        match saved {
            Some(v) => unsafe { env::set_var(PROFILE_VAR, v) },
            None => unsafe { env::remove_var(PROFILE_VAR) },
        }
    }

    /// 각 프로파일 파일에 서로 다른 표식을 가진 디렉터리
    fn profile_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env.prod"), format!("{}=prod\n", MARK_VAR)).unwrap();
        fs::write(dir.path().join(".env.dev"), format!("{}=dev\n", MARK_VAR)).unwrap();
        fs::write(dir.path().join(".env"), format!("{}=default\n", MARK_VAR)).unwrap();
        dir
    }

    fn loaded_mark(dir: &Path) -> (EnvFileLoad, Option<String>) {
        unsafe { env::remove_var(MARK_VAR) };
        let load = load_env_file_in(dir);
        let mark = env::var(MARK_VAR).ok();
        unsafe { env::remove_var(MARK_VAR) };
        (load, mark)
    }

    #[test]
    fn test_profile_from_string() {
        assert_eq!(DeploymentProfile::from_str("dev"), DeploymentProfile::Development);
        assert_eq!(
            DeploymentProfile::from_str("development"),
            DeploymentProfile::Development
        );
        assert_eq!(DeploymentProfile::from_str("prod"), DeploymentProfile::Production);
        assert_eq!(DeploymentProfile::from_str("PRODUCTION"), DeploymentProfile::Production);
        assert_eq!(DeploymentProfile::from_str("staging"), DeploymentProfile::Development);
    }

    #[test]
    fn test_parse_unknown_profile_is_none() {
        assert_eq!(DeploymentProfile::parse(" Prod "), Some(DeploymentProfile::Production));
        assert_eq!(DeploymentProfile::parse("staging"), None);
        assert_eq!(DeploymentProfile::parse(""), None);
    }

    #[test]
    fn test_env_file_for_each_profile() {
        assert_eq!(DeploymentProfile::Development.env_file(), ".env.dev");
        assert_eq!(DeploymentProfile::Production.env_file(), ".env.prod");
    }

    #[test]
    fn test_is_production() {
        assert!(DeploymentProfile::Production.is_production());
        assert!(!DeploymentProfile::Development.is_production());
    }

    #[test]
    #[serial]
    fn test_current_profile_defaults_to_development() {
        with_profile(None, || {
            assert_eq!(DeploymentProfile::current(), DeploymentProfile::Development);
        });
        with_profile(Some("prod"), || {
            assert_eq!(DeploymentProfile::current(), DeploymentProfile::Production);
        });
    }

    #[test]
    #[serial]
    fn test_production_aliases_load_prod_file() {
        let dir = profile_dir();

        for name in ["production", "PROD", "prod"] {
            with_profile(Some(name), || {
                let (load, mark) = loaded_mark(dir.path());

                assert!(load.is_loaded());
                assert_eq!(load.profile, Some(DeploymentProfile::Production));
                assert_eq!(load.path, dir.path().join(".env.prod"));
                assert_eq!(mark.as_deref(), Some("prod"));
                assert!(DeploymentProfile::current().is_production());
            });
        }
    }

    #[test]
    #[serial]
    fn test_development_aliases_load_dev_file() {
        let dir = profile_dir();

        for name in ["Development", "dev"] {
            with_profile(Some(name), || {
                let (_, mark) = loaded_mark(dir.path());
                assert_eq!(mark.as_deref(), Some("dev"));
            });
        }

        with_profile(None, || {
            let (load, mark) = loaded_mark(dir.path());
            assert_eq!(load.profile, Some(DeploymentProfile::Development));
            assert_eq!(mark.as_deref(), Some("dev"));
        });
    }

    #[test]
    #[serial]
    fn test_unknown_profile_loads_default_file() {
        let dir = profile_dir();

        with_profile(Some("staging"), || {
            let (load, mark) = loaded_mark(dir.path());

            assert_eq!(load.profile, None);
            assert_eq!(load.path, dir.path().join(".env"));
            assert_eq!(mark.as_deref(), Some("default"));
        });
    }

    #[test]
    #[serial]
    fn test_missing_profile_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();

        with_profile(Some("prod"), || {
            let load = load_env_file_in(dir.path());

            assert!(!load.is_loaded());
            match &load.error {
                Some(ConfigError::Internal(msg)) => assert!(msg.contains(".env.prod")),
                other => panic!("Expected Internal, got {:?}", other),
            }
            load.log();
        });
    }
}
