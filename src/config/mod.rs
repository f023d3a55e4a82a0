//! # Configuration Module
//!
//! 프론트엔드가 읽는 배포 설정을 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`environment`] - 설정 레코드와 프로세스 전역 인스턴스
//! - [`profile`] - 배포 프로파일 선택과 `.env` 파일 로딩
//! - [`overrides`] - 환경 변수 오버라이드
//!
//! ## 배포 변형 선택
//!
//! 배포별 값은 런타임에 결정됩니다.
//!
//! 1. `PROFILE`에 맞는 `.env` 파일 로드 (`.env.dev`, `.env.prod`)
//! 2. 리터럴 개발 설정에서 시작
//! 3. 값이 있는 환경 변수로 필드 덮어쓰기
//!
//! ```bash
//! PROFILE=prod AUTH0_CLIENT_ID="prod-client" coffee_shop_env
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use coffee_shop_env::config::Environment;
//!
//! let resolved = Environment::from_env()?;
//! resolved.ensure_valid()?;
//! let config = Environment::install(resolved)?;
//! println!("Callback: {}", config.auth0.callback_url);
//! ```

pub mod environment;
pub mod overrides;
pub mod profile;

pub use environment::*;
pub use profile::{DeploymentProfile, EnvFileLoad, load_env_file};
