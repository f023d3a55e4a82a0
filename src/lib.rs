//! 커피숍 프론트엔드 배포 설정
//!
//! 프론트엔드 애플리케이션이 시작 시 읽는 배포별 상수
//! (API 서버 주소, Auth0 도메인/audience/client id/callback URL)를
//! 하나의 읽기 전용 레코드로 제공합니다.
//!
//! # Features
//!
//! - **설정 레코드**: 필드를 직접 읽는 불변 구조체
//! - **프로파일**: `PROFILE`에 따른 `.env.dev` / `.env.prod` 로딩
//! - **오버라이드**: 환경 변수로 배포별 값 교체
//! - **검증**: `validator` 기반 선택적 검증
//! - **JSON**: 프론트엔드 필드 이름 그대로 직렬화
//!
//! # Examples
//!
//! ```rust,ignore
//! use coffee_shop_env::config::Environment;
//!
//! let config = Environment::current();
//! assert_eq!(config.auth0.client_id, "7W9s2lZonVSCEPm2Z4fy3UvP7bqgWH3A");
//! ```

pub mod config;
pub mod errors;
pub mod utils;
